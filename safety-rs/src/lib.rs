//! safety-rs: Email phishing safety scorer
//!
//! Scores email content with fixed heuristics and returns an advisory
//! message for the resulting score band.
//!
//! # Features
//!
//! - Suspicious phrase, urgency, link and sensitive-request detection
//! - Sender domain check against known company domains
//! - JSON endpoint at `POST /check_email`
//! - Permissive CORS by default, request tracing
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! listen_addr = "127.0.0.1:5000"
//!
//! [cors]
//! enabled = true
//! allowed_origins = ["https://mail.example.com"]
//!
//! [logging]
//! level = "safety_rs=debug,tower_http=info"
//! format = "json"
//! ```
//!
//! # Example
//!
//! ```
//! use safety_rs::SafetyScorer;
//!
//! let scorer = SafetyScorer::new();
//! let result = scorer.score("hello from support@microsoft.com");
//! assert_eq!(result.safety_score, 100);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod scoring;

pub use api::SafetyServer;
pub use config::SafetyConfig;
pub use error::{Result, SafetyError};
pub use scoring::{Assessment, SafetyBand, SafetyScorer, ScoreResult};
