//! Error types for the remote API client.

use thiserror::Error;

/// Errors that can occur while talking to the EatGo services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The URL for an endpoint could not be built
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport failure: connect, timeout, TLS, reading the body
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// Response body was not the JSON we expected
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// True when the failure happened before any response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Request { .. })
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_exposed() {
        let err = ApiError::Status {
            url: "http://localhost/regions".to_string(),
            status: 404,
        };
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_transport());
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn invalid_url_has_no_status() {
        let err = ApiError::InvalidUrl {
            url: "::".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(err.status(), None);
    }
}
