//! HTTP API module for safety-rs
//!
//! Thin adapter between JSON requests and the scorer.

pub mod handlers;
pub mod server;

pub use server::SafetyServer;
