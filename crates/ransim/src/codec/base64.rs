//! Base64 transcoding of UTF-8 text (RFC 4648 standard alphabet, `=` padding).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

/// Errors produced when reversing a Base64 payload.
///
/// Decode fails closed: on any malformed input the whole operation errors
/// and no partial output is ever returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input contained an invalid character or incorrect padding.
    #[error("input is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The decoded bytes were not valid UTF-8.
    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Encode `text` (as its UTF-8 bytes) to standard Base64.
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode standard Base64 back to a UTF-8 string.
///
/// # Errors
///
/// Returns [`DecodeError`] if `b64` is not valid Base64 or the decoded
/// bytes are not valid UTF-8.
pub fn decode_base64(b64: &str) -> Result<String, DecodeError> {
    let bytes = STANDARD.decode(b64)?;
    Ok(String::from_utf8(bytes)?)
}
