//! HTTP client for the analysis backend
//!
//! Two endpoints are consumed as-is:
//! - `GET {base}/transactions?limit=N` -> `{ success, transactions }`
//! - `GET {base}/analysis` -> `{ success, result }`

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{AnalysisResponse, AnalysisResult, Transaction, TransactionsResponse};
use crate::infrastructure::api::ApiError;

/// Where and how to reach the backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub transactions_limit: usize,
    /// `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl BackendConfig {
    pub fn transactions_url(&self) -> String {
        format!(
            "{}/transactions?limit={}",
            self.base_url, self.transactions_limit
        )
    }

    pub fn analysis_url(&self) -> String {
        format!("{}/analysis", self.base_url)
    }
}

/// Read-only access to the backend
#[async_trait::async_trait]
pub trait BackendApi: Send + Sync + 'static {
    /// Latest transactions, in backend order
    async fn transactions(&self) -> Result<Vec<Transaction>, ApiError>;

    /// The most recent analysis workflow output
    async fn analysis(&self) -> Result<AnalysisResult, ApiError>;
}

/// reqwest-backed [`BackendApi`]
pub struct HttpBackend {
    http: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    async fn get_envelope<T: DeserializeOwned>(&self, url: &str) -> Result<(u16, T), ApiError> {
        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(url, status, bytes = body.len(), "backend response");
        let envelope = serde_json::from_slice::<T>(&body)
            .map_err(|source| ApiError::Decode { status, source })?;
        Ok((status, envelope))
    }
}

#[async_trait::async_trait]
impl BackendApi for HttpBackend {
    async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let url = self.config.transactions_url();
        let (status, envelope) = self.get_envelope::<TransactionsResponse>(&url).await?;
        if !envelope.success {
            return Err(ApiError::Unsuccessful {
                status,
                message: None,
            });
        }
        Ok(envelope.transactions)
    }

    async fn analysis(&self) -> Result<AnalysisResult, ApiError> {
        let url = self.config.analysis_url();
        let (status, envelope) = self.get_envelope::<AnalysisResponse>(&url).await?;
        match (envelope.success, envelope.result) {
            (true, Some(result)) => Ok(result),
            (_, _) => Err(ApiError::Unsuccessful {
                status,
                message: envelope.message,
            }),
        }
    }
}

/// Accept `host:port` as well as full URLs; drop trailing slashes.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}
