//! # Client Error Types
//!
//! Error types for remote API operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Request        │  │  Status (non-2xx)       │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │  Decode (bad JSON)      │ │
//! │  │  ConfigLoad     │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are retried. Screens log them or turn them into alerts.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Every way a call to the storefront backend can fail.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid client configuration.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Base URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request never produced a response.
    #[error("Request to {endpoint} failed: {reason}")]
    Request { endpoint: String, reason: String },

    /// The request timed out.
    #[error("Request to {endpoint} timed out")]
    Timeout { endpoint: String },

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// Non-success HTTP status.
    #[error("{endpoint} responded with HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// Response body was not the expected JSON.
    #[error("Could not decode response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

impl ClientError {
    /// Maps a reqwest failure for the given endpoint.
    pub fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        let endpoint = endpoint.to_string();
        if err.is_timeout() {
            ClientError::Timeout { endpoint }
        } else if err.is_decode() {
            ClientError::Decode {
                endpoint,
                reason: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            ClientError::Status {
                endpoint,
                status: status.as_u16(),
            }
        } else {
            ClientError::Request {
                endpoint,
                reason: err.to_string(),
            }
        }
    }

    /// Returns true if the server answered but refused the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidConfig(_)
                | ClientError::InvalidUrl(_)
                | ClientError::ConfigLoadFailed(_)
        )
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}
