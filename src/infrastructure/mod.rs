//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - reqwest client for the backend REST API
//! - Tokio runtime bridge for async operations

pub mod api;
pub mod runtime;

pub use api::{ApiError, BackendApi, BackendConfig, HttpBackend};
pub use runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
