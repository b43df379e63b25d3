//! # API Error Type
//!
//! Unified error type for screen commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Screen                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  update_cart_item(id, 0)                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── CoreError::Validation ──────┐             │  │
//! │  │         │                                          ▼             │  │
//! │  │  Unknown Thing? ────── CoreError::ThingNotFound ─ ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Network failures never get here: the catalog logs them and the        │
//! │  gallery turns them into alerts.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Screens receive both a machine-readable `code` and a human-readable
//! `message`.

use serde::Serialize;
use storefront_api::ClientError;
use storefront_core::CoreError;
use thiserror::Error;

/// API error returned from screen commands.
///
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "quantity must be between 1 and 999"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Backend unreachable, slow, or answered garbage
    NetworkError,

    /// Backend refused the request
    Rejected,

    /// Misconfiguration or other internal fault
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ThingNotFound(id) => ApiError::not_found("Thing", &id),
            CoreError::QuantityTooLarge { requested, max } => ApiError::new(
                ErrorCode::CartError,
                format!("Quantity {} exceeds maximum allowed ({})", requested, max),
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts client errors to API errors.
impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        if err.is_config_error() {
            tracing::error!("Client misconfigured: {}", err);
            return ApiError::internal("Storefront backend is misconfigured");
        }

        match err {
            ClientError::Status { status, .. } => ApiError::new(
                ErrorCode::Rejected,
                format!("Server responded with status {}", status),
            ),
            other => {
                tracing::error!("Backend request failed: {}", other);
                ApiError::new(ErrorCode::NetworkError, other.to_string())
            }
        }
    }
}
