//! Client for the remote employee directory provider.
//!
//! One request per page session: a fixed batch of [`BATCH_SIZE`] records
//! restricted to [`NATIONALITIES`]. Failures are reported, never retried.

use entity::{Employee, ResultsEnvelope};
use reqwest::{StatusCode, Url};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";
pub const BATCH_SIZE: usize = 12;
pub const NATIONALITIES: &[&str] = &["us", "es", "fr", "gb"];

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid provider endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{detail}")]
    Status { status: StatusCode, detail: String },
    #[error("malformed provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Boundary classification of a [`FetchError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Parse,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Parse(_) => FetchErrorKind::Parse,
            FetchError::InvalidEndpoint { .. }
            | FetchError::Transport(_)
            | FetchError::Status { .. } => FetchErrorKind::Network,
        }
    }

    fn from_status(status: StatusCode) -> Self {
        let detail = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        FetchError::Status { status, detail }
    }
}

#[derive(Clone, Debug)]
pub struct ProviderClient {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for ProviderClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl ProviderClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Endpoint with the batch size and nationality filter appended.
    pub fn request_url(&self) -> FetchResult<Url> {
        let batch = BATCH_SIZE.to_string();
        let nationalities = NATIONALITIES.join(",");
        Url::parse_with_params(
            &self.endpoint,
            &[("results", batch.as_str()), ("nat", nationalities.as_str())],
        )
        .map_err(|err| FetchError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: err.to_string(),
        })
    }

    /// Fetch the batch, in provider order.
    pub async fn fetch_employees(&self) -> FetchResult<Vec<Employee>> {
        let url = self.request_url()?;
        debug!(%url, "requesting employee batch");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "provider rejected employee request");
            return Err(FetchError::from_status(status));
        }

        let body = response.text().await?;
        let envelope = parse_envelope(&body)?;
        info!(count = envelope.results.len(), "employee batch received");
        Ok(envelope.results)
    }
}

/// Decode a provider body; a body without `results` counts as malformed.
pub fn parse_envelope(body: &str) -> FetchResult<ResultsEnvelope> {
    serde_json::from_str(body).map_err(FetchError::from)
}
