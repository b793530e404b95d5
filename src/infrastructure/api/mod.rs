//! Backend API access - reqwest client behind the `BackendApi` seam

mod client;
mod error;

pub use client::{normalize_base_url, BackendApi, BackendConfig, HttpBackend};
pub use error::ApiError;
