//! HTTP client for the Docsum summarization backend.
//!
//! Provides a minimal client with generic POST helpers (multipart and JSON)
//! and typed endpoint methods in [`api`]. No auth is attached to any
//! request; the backend is public. The client is built **without** a
//! request timeout on purpose: the shipped product never configured one,
//! and a hung request observably hangs rather than spontaneously failing.

pub mod api;

use docsum_core::constants::TRANSPORT_ERROR_MESSAGE;
use docsum_core::{ClientConfig, WorkflowError};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// HTTP client for the Docsum backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Raw outcome of one request: HTTP status plus the decoded JSON body.
/// Endpoint methods interpret the envelope; anything that fails to decode
/// as JSON never gets this far.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, WorkflowError> {
        let client = Client::builder()
            .build()
            .map_err(|e| WorkflowError::Transport(format!("Failed to create HTTP client: {e}")))?;

        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the environment: DOCSUM_API_URL (or API_URL),
    /// falling back to the production base URL.
    pub fn from_env() -> Result<Self, WorkflowError> {
        Self::from_config(&ClientConfig::from_env())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, WorkflowError> {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a multipart form. The transport computes the boundary and
    /// Content-Type header; the caller never sets one.
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<RawResponse, WorkflowError> {
        let url = self.build_url(path);
        let request = self.client.post(&url).multipart(form);
        self.execute(request).await
    }

    /// POST a JSON body.
    pub(crate) async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse, WorkflowError> {
        let url = self.build_url(path);
        let request = self.client.post(&url).json(body);
        self.execute(request).await
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<RawResponse, WorkflowError> {
        let response = request.send().await.map_err(|e| {
            tracing::debug!(error = %e, "request failed to send");
            WorkflowError::Transport(TRANSPORT_ERROR_MESSAGE.to_string())
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::debug!(error = %e, "failed to read response body");
            WorkflowError::Transport(TRANSPORT_ERROR_MESSAGE.to_string())
        })?;

        // A body that is not JSON is a transport-level failure, even on a
        // non-2xx status: there is no server message to surface.
        let body: Value = serde_json::from_str(&text).map_err(|e| {
            tracing::debug!(error = %e, %status, "response body was not JSON");
            WorkflowError::Transport(TRANSPORT_ERROR_MESSAGE.to_string())
        })?;

        Ok(RawResponse { status, body })
    }

    /// Liveness probe: GET the summarize endpoint. Any 2xx means reachable;
    /// transport failures and error statuses both report unreachable.
    pub async fn check_health(&self) -> bool {
        let url = self.build_url("/summarize/");
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

// Re-export the endpoint types for convenience.
pub use api::ExtractedDocument;
