//! Error types for the search client.
//!
//! Every fallible operation in this crate returns [`Error`]. The variants map
//! one-to-one onto the failure points of a search call:
//!
//! - [`Error::RequestConstruction`] — the transport could not build the
//!   outbound request. Nothing was sent; no status code exists.
//! - [`Error::TransportExecution`] — the network call failed or the server
//!   answered with a non-success status. The status code is attached when the
//!   transport produced one, so callers can distinguish 4xx from 5xx.
//! - [`Error::Decode`] — the server answered 2xx but the body did not match
//!   the expected response schema. The status code of the successful exchange
//!   is still attached since the failure is local to decoding.
//! - [`Error::InvalidTimeFormat`] — a timestamp value was null, empty, or
//!   neither epoch seconds nor RFC3339. Inside a full response decode this
//!   surfaces as [`Error::Decode`]; it appears directly when parsing a single
//!   value via [`FlexibleTimestamp::parse`](crate::timestamp::FlexibleTimestamp::parse).

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the search client.
#[derive(Debug, Error)]
pub enum Error {
    /// Building the outbound HTTP request failed before anything was sent.
    #[error("failed to build search request: {message}")]
    RequestConstruction {
        /// Description of the build failure (bad base URL, bad path, ...).
        message: String,
    },

    /// The network call failed, or the server returned a non-success status.
    #[error("search request failed{}: {message}", fmt_status(.status))]
    TransportExecution {
        /// HTTP status, when the exchange got far enough to produce one.
        status: Option<StatusCode>,
        /// Transport-level error description or the server's error body.
        message: String,
    },

    /// A 2xx response body could not be decoded into the response schema.
    #[error("failed to decode search response (status {status}): {source}")]
    Decode {
        /// Status of the HTTP exchange that produced the undecodable body.
        status: StatusCode,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A timestamp value was not in any accepted wire format.
    #[error("invalid time format: {value:?}")]
    InvalidTimeFormat {
        /// The offending wire literal, rendered as text.
        value: String,
    },
}

impl Error {
    /// The HTTP status code associated with this error, if the exchange
    /// produced one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::TransportExecution { status, .. } => *status,
            Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn fmt_status(status: &Option<StatusCode>) -> String {
    match status {
        Some(s) => format!(" (status {})", s),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_with_status() {
        let err = Error::TransportExecution {
            status: Some(StatusCode::BAD_GATEWAY),
            message: "upstream unavailable".to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        let text = err.to_string();
        assert!(text.contains("502"));
        assert!(text.contains("upstream unavailable"));
    }

    #[test]
    fn test_transport_error_without_status() {
        let err = Error::TransportExecution {
            status: None,
            message: "connection refused".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(!err.to_string().contains("status"));
    }

    #[test]
    fn test_invalid_time_format_names_literal() {
        let err = Error::InvalidTimeFormat {
            value: "not-a-date".to_string(),
        };
        assert!(err.to_string().contains("not-a-date"));
        assert_eq!(err.status(), None);
    }
}
