//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to the fixed wire shapes returned to callers:
/// - [`ServiceError::MissingFile`] → `400 {"error":"no_file"}`
/// - [`ServiceError::DecodeFailed`] → `400 {"error":"decode_failed"}`
/// - [`ServiceError::Persistence`] → `500 {"error":"db_error"}`
///
/// A malformed `shift` or an unrecognized `method` is deliberately *not* an
/// error anywhere in this taxonomy: both fall back to documented defaults.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The upload had no `file` field.
    #[error("no file field present in upload")]
    MissingFile,

    /// Base64 decode input was malformed; no partial output is produced.
    #[error("decode failed: {0}")]
    DecodeFailed(String),

    /// The payment store write failed after a successful encode.
    #[error("payment store failure: {0}")]
    Persistence(String),
}

impl ServiceError {
    /// Returns the stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::MissingFile => "no_file",
            ServiceError::DecodeFailed(_) => "decode_failed",
            ServiceError::Persistence(_) => "db_error",
        }
    }

    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::MissingFile => 400,
            ServiceError::DecodeFailed(_) => 400,
            ServiceError::Persistence(_) => 500,
        }
    }
}
