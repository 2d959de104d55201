/// Unified error types for the did:cndid driver
use crate::api::envelope::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Main error type for the driver
///
/// Every variant is terminal for the request it occurs in. The `Display`
/// text is for logs; callers only ever see [`DriverError::message`].
#[derive(Error, Debug)]
pub enum DriverError {
    /// Empty identifier
    #[error("ID is required")]
    MissingId,

    /// Identifier is not a canonical hex address
    #[error("Invalid DID Address: {0}")]
    InvalidAddress(String),

    /// Backend could not be reached (connect, timeout, ...)
    #[error("Backend request failed: {0}")]
    BackendUnavailable(String),

    /// Backend answered 404
    #[error("DID document not found")]
    NotFound,

    /// Backend answered with another non-200 status
    #[error("Backend returned status {0}")]
    BackendStatus(u16),

    /// Backend body could not be read
    #[error("Failed to read response body: {0}")]
    ReadBody(String),

    /// Backend body is not a response envelope
    #[error("Failed to parse response body: {0}")]
    ParseBody(String),

    /// Backend envelope reported a failure
    #[error("Backend rejected resolution: status={status}, message={message}")]
    Rejected { status: i64, message: String },

    /// Envelope data is not a DID resolution record
    #[error("Failed to parse data field: {0}")]
    DecodeData(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DriverError {
    /// Status reported in the response envelope
    pub fn status(&self) -> i64 {
        match self {
            DriverError::MissingId => 400,
            DriverError::InvalidAddress(_) => 451,
            DriverError::NotFound => 404,
            DriverError::BackendStatus(code) => i64::from(*code),
            DriverError::Rejected { status, .. } => *status,
            _ => 500,
        }
    }

    /// Short caller-facing message (no internal detail)
    pub fn message(&self) -> String {
        match self {
            DriverError::MissingId => "ID is required".to_string(),
            DriverError::InvalidAddress(_) => "Invalid DID Address".to_string(),
            DriverError::BackendUnavailable(_) | DriverError::BackendStatus(_) => {
                "Failed to resolve DID".to_string()
            }
            DriverError::NotFound => "Failed to resolve DID, not exist".to_string(),
            DriverError::ReadBody(_) => "Failed to read response body".to_string(),
            DriverError::ParseBody(_) => "Failed to parse response body".to_string(),
            DriverError::Rejected { message, .. } => message.clone(),
            DriverError::DecodeData(_) => "Failed to parse data field".to_string(),
            DriverError::Config(_) | DriverError::Internal(_) => {
                "Internal server error".to_string() // Don't leak details
            }
        }
    }

    /// HTTP status line for the envelope status
    ///
    /// Upstream envelopes may carry values that are not HTTP codes; those
    /// are answered with 502 while the body keeps the upstream value.
    pub fn http_status(&self) -> StatusCode {
        u16::try_from(self.status())
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::BAD_GATEWAY)
    }
}

/// Convert DriverError to HTTP response
impl IntoResponse for DriverError {
    fn into_response(self) -> Response {
        let body = Json(Envelope::failure(self.status(), self.message()));
        (self.http_status(), body).into_response()
    }
}

/// Result type alias for driver operations
pub type DriverResult<T> = Result<T, DriverError>;
