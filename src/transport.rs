//! Transport boundary between the search service and the network.
//!
//! [`Transport`] is the injected capability the service talks through:
//! building the outbound request and executing it are both here, so the
//! service itself never touches a socket and can be tested against a
//! scripted substitute. [`HttpTransport`] is the default implementation over
//! `reqwest`.
//!
//! `execute` decodes straight into a caller-supplied [`SearchResponse`] slot
//! rather than returning a fresh value, so one response instance serves the
//! whole call without an intermediate copy. Retry, cancellation, and
//! timeouts all live on this side of the boundary — the service owns none of
//! them.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, Request, StatusCode, Url};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::models::{SearchRequest, SearchResponse};

/// Transport-level facts about a completed (or failed-after-contact) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportMetadata {
    /// HTTP status of the exchange.
    pub status_code: StatusCode,
}

/// Capability for building and executing search requests.
///
/// Implementations must be shareable across concurrent callers.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Build the outbound request for `path` with `body` as JSON.
    fn build_request(
        &self,
        path: &str,
        method: Method,
        body: &SearchRequest,
    ) -> Result<Request, Error>;

    /// Execute `request`, decoding a success body into `out`.
    ///
    /// On a non-success status or network failure, `out` is left untouched
    /// and the returned error carries the status code when one exists.
    async fn execute(
        &self,
        request: Request,
        out: &mut SearchResponse,
    ) -> Result<TransportMetadata, Error>;
}

/// Default transport over a shared `reqwest` client.
///
/// Joins paths onto the configured base URL, attaches the bearer token when
/// one is configured, and applies the configured per-request timeout. Does
/// not retry; every call is a single exchange.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl HttpTransport {
    /// Build a transport from `config`.
    ///
    /// # Errors
    ///
    /// Fails when the base URL does not parse or the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url).map_err(|e| Error::RequestConstruction {
            message: format!("invalid base URL {:?}: {}", config.base_url, e),
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::RequestConstruction {
                message: e.to_string(),
            })?;

        Ok(HttpTransport {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn build_request(
        &self,
        path: &str,
        method: Method,
        body: &SearchRequest,
    ) -> Result<Request, Error> {
        let url = self.base_url.join(path).map_err(|e| Error::RequestConstruction {
            message: format!("invalid path {:?}: {}", path, e),
        })?;

        let mut builder = self.client.request(method, url).json(body);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        builder.build().map_err(|e| Error::RequestConstruction {
            message: e.to_string(),
        })
    }

    async fn execute(
        &self,
        request: Request,
        out: &mut SearchResponse,
    ) -> Result<TransportMetadata, Error> {
        debug!(url = %request.url(), "executing search request");

        let response =
            self.client
                .execute(request)
                .await
                .map_err(|e| Error::TransportExecution {
                    status: e.status(),
                    message: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = if body_text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                body_text
            };
            return Err(Error::TransportExecution {
                status: Some(status),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::TransportExecution {
                status: Some(status),
                message: e.to_string(),
            })?;

        // A decode failure leaves `out` at its prior (default) state.
        *out = serde_json::from_slice(&bytes).map_err(|source| Error::Decode { status, source })?;

        debug!(status = %status, found = out.found, "search response decoded");
        Ok(TransportMetadata {
            status_code: status,
        })
    }
}
