//! Request and response types exchanged over the public HTTP API.
//!
//! These shapes are part of the wire contract consumed by the dashboard and
//! victim-portal frontends; field names must not change.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Encrypt endpoint
// ---------------------------------------------------------------------------

/// The simulated ransom demand attached to every successful encode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RansomNote {
    /// Identifier of the payment record created for this encode.
    pub payment_id: Uuid,
    /// Demanded amount, four-decimal precision, in the configured demo range.
    pub amount: f64,
    /// Deterministic placeholder "wallet" derived from `payment_id`.
    /// Not a real address of any kind.
    pub address: String,
}

/// Successful response body for `POST /encrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptResponse {
    /// Codec that was actually applied (`"base64"` or `"caesar"`).
    pub method: String,
    /// The transformed text.
    pub encoded: String,
    /// The ransom record created as a side effect of this request.
    pub ransom: RansomNote,
}

/// Failure body for `POST /encrypt` when the payment write fails *after* a
/// successful encode. The encoded text is still reported so callers can
/// distinguish "encoded but unrecorded" from "nothing happened".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistFailureResponse {
    /// Always `"db_error"`.
    pub error: String,
    /// The already-computed encoded text.
    pub encoded: String,
}

// ---------------------------------------------------------------------------
// Decrypt endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptRequest {
    /// Codec selection; absent or unrecognized values fall back to Base64.
    #[serde(default)]
    pub method: Option<String>,
    /// The encoded text to reverse.
    pub content: String,
    /// Caesar shift; accepted as a JSON number or string. Absent or
    /// unparseable values fall back to the default shift of 3.
    #[serde(default)]
    pub shift: Option<serde_json::Value>,
}

/// Successful response body for `POST /decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptResponse {
    /// The recovered text.
    pub decoded: String,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"no_file"`).
    pub error: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a stable error code.
    pub fn new(code: impl Into<String>) -> Self {
        Self { error: code.into() }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status; this service has no async readiness
    /// dependencies, so the value is always `"ok"`.
    pub status: String,
    /// Number of ransom records currently held by the payment store.
    pub payments_recorded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encrypt_response_serialises_expected_fields() {
        let resp = EncryptResponse {
            method: "caesar".into(),
            encoded: "Dwwdfn".into(),
            ransom: RansomNote {
                payment_id: Uuid::nil(),
                amount: 0.0421,
                address: "1SiMdeadbeef".into(),
            },
        };
        let v: serde_json::Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["method"], "caesar");
        assert_eq!(v["encoded"], "Dwwdfn");
        assert_eq!(v["ransom"]["amount"], 0.0421);
        assert!(v["ransom"]["payment_id"].is_string());
    }

    #[test]
    fn decrypt_request_shift_accepts_number_or_string() {
        let from_number: DecryptRequest =
            serde_json::from_value(json!({"method":"caesar","content":"x","shift":3})).unwrap();
        assert_eq!(from_number.shift, Some(json!(3)));

        let from_string: DecryptRequest =
            serde_json::from_value(json!({"method":"caesar","content":"x","shift":"3"})).unwrap();
        assert_eq!(from_string.shift, Some(json!("3")));
    }

    #[test]
    fn decrypt_request_method_and_shift_are_optional() {
        let req: DecryptRequest = serde_json::from_value(json!({"content":"aGVsbG8="})).unwrap();
        assert!(req.method.is_none());
        assert!(req.shift.is_none());
    }

    #[test]
    fn error_response_new() {
        let e = ErrorResponse::new("no_file");
        assert_eq!(serde_json::to_value(&e).unwrap(), json!({"error":"no_file"}));
    }
}
