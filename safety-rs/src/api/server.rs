//! API Server - HTTP server for the scoring endpoint

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::config::{CorsConfig, SafetyConfig};
use crate::error::{Result, SafetyError};
use crate::scoring::SafetyScorer;

/// Safety scoring server
pub struct SafetyServer {
    config: SafetyConfig,
    state: Arc<AppState>,
}

impl SafetyServer {
    /// Create a new server
    pub fn new(config: SafetyConfig) -> Result<Self> {
        config.validate()?;

        let state = Arc::new(AppState {
            scorer: SafetyScorer::new(),
        });

        Ok(Self { config, state })
    }

    /// Build the Axum router
    pub fn router(&self) -> Result<Router> {
        let router = Router::new()
            .route("/", get(handlers::index))
            .route("/health", get(handlers::health))
            .route("/check_email", post(handlers::check_email))
            .layer(DefaultBodyLimit::disable())
            .with_state(self.state.clone());

        let router = if self.config.cors.enabled {
            router.layer(cors_layer(&self.config.cors)?)
        } else {
            router
        };

        Ok(router.layer(TraceLayer::new_for_http()))
    }

    /// Run the server until the listener fails
    pub async fn run(&self) -> Result<()> {
        let router = self.router()?;
        let addr = &self.config.server.listen_addr;

        info!("Starting safety server on {}", addr);
        if !self.config.cors.enabled {
            info!("CORS: disabled");
        } else if self.config.cors.allowed_origins.is_empty() {
            info!("CORS: any origin");
        } else {
            info!("CORS: {}", self.config.cors.allowed_origins.join(", "));
        }

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

/// CORS layer; an empty origin list allows any origin
fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allowed_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                SafetyError::Config(format!("Invalid CORS origin '{}': {}", origin, e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(origins))
}
