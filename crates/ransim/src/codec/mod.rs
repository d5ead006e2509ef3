//! Reversible text transforms: Base64 and Caesar-cipher encode/decode.
//!
//! This module is intentionally free of HTTP and storage dependencies.
//! Every function here is pure and reentrant; the Caesar family is total
//! over all strings and shifts, the Base64 family fails closed on malformed
//! input (see [`DecodeError`]).
//!
//! Method and shift selection follow deliberate leniency rules preserved
//! from the original protocol: an unrecognized `method` falls back to
//! Base64, and an unparseable `shift` falls back to [`DEFAULT_SHIFT`].
//! Neither is a validation error.

pub mod base64;
pub mod caesar;

pub use self::base64::{decode_base64, encode_base64, DecodeError};
pub use self::caesar::{decode_caesar, encode_caesar, DEFAULT_SHIFT};

/// Codec family selected by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// RFC 4648 standard Base64 with `=` padding.
    Base64,
    /// Per-case alphabetic rotation, non-letters passed through.
    Caesar,
}

impl Method {
    /// Resolve a raw `method` value to a codec.
    ///
    /// Only `"caesar"` (case-insensitive) selects the Caesar codec; absent
    /// or unrecognized strings silently select Base64. Existing callers
    /// depend on the silent fallback, so it is a named rule rather than an
    /// error path.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("caesar") => Method::Caesar,
            _ => Method::Base64,
        }
    }

    /// Canonical wire name of this codec.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Base64 => "base64",
            Method::Caesar => "caesar",
        }
    }
}

/// Resolve a raw `shift` value to an integer, falling back to
/// [`DEFAULT_SHIFT`] when absent or unparseable.
pub fn parse_shift_or_default(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_SHIFT)
}
