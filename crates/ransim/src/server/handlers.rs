//! Axum request handlers for all service endpoints.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{
    DecryptRequest, DecryptResponse, EncryptResponse, ErrorResponse, HealthResponse,
    PersistFailureResponse, RansomNote,
};
use common::ServiceError;
use tracing::warn;

use crate::codec::{
    decode_base64, decode_caesar, encode_base64, encode_caesar, parse_shift_or_default, Method,
    DEFAULT_SHIFT,
};
use crate::payments::{ransom_amount, wallet_address};
use super::state::AppState;

/// `POST /encrypt` — encode an uploaded text payload.
///
/// Multipart fields: `file` (required), `method`, `shift`, `victim`.
/// On success one ransom record is created through the payment store and
/// the response carries the encoded text plus the simulated demand. A store
/// failure after a successful encode still reports the encoded text,
/// alongside the `db_error` code.
pub async fn encrypt(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut file_text: Option<String> = None;
    let mut method_raw: Option<String> = None;
    let mut shift_raw: Option<String> = None;
    let mut victim_raw: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            // End of stream, or a truncated body; whatever parsed so far stands.
            Ok(None) | Err(_) => break,
        };
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                // Uploads are interpreted as UTF-8 text; invalid sequences
                // are replaced rather than rejected.
                if let Ok(bytes) = field.bytes().await {
                    file_text = Some(String::from_utf8_lossy(&bytes).into_owned());
                }
            }
            Some("method") => method_raw = field.text().await.ok(),
            Some("shift") => shift_raw = field.text().await.ok(),
            Some("victim") => victim_raw = field.text().await.ok(),
            _ => {}
        }
    }

    let Some(text) = file_text else {
        state.audit.record("encrypt_rejected", "upload missing file field");
        return error_response(&ServiceError::MissingFile);
    };

    let method = Method::parse_or_default(method_raw.as_deref());
    let shift = parse_shift_or_default(shift_raw.as_deref());
    let encoded = match method {
        Method::Base64 => encode_base64(&text),
        Method::Caesar => encode_caesar(&text, shift),
    };

    let victim = victim_raw
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| state.victim_placeholder.as_ref().clone());
    let amount = ransom_amount(state.ransom_range.0, state.ransom_range.1);

    match state.payments.create_payment(&victim, amount) {
        Ok(payment_id) => {
            state.audit.record(
                "encrypt",
                &format!("encoded {} chars via {}", text.chars().count(), method.as_str()),
            );
            let ransom = RansomNote {
                payment_id,
                amount,
                address: wallet_address(&payment_id),
            };
            let body = EncryptResponse {
                method: method.as_str().into(),
                encoded,
                ransom,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            let err = ServiceError::Persistence(e.to_string());
            warn!(error = %err, "ransom record insert failed after successful encode");
            state
                .audit
                .record("encrypt_unrecorded", "encode succeeded but payment insert failed");
            let body = PersistFailureResponse {
                error: err.error_code().into(),
                encoded,
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// `POST /decrypt` — reverse a previously encoded payload.
///
/// No side effects: the payment store is never touched here. A malformed
/// Base64 `content` yields `400 {"error":"decode_failed"}` with no partial
/// output; Caesar decode is total and cannot fail.
pub async fn decrypt(State(state): State<AppState>, Json(req): Json<DecryptRequest>) -> Response {
    let method = Method::parse_or_default(req.method.as_deref());
    let shift = shift_from_json(req.shift.as_ref());

    let decoded = match method {
        Method::Caesar => decode_caesar(&req.content, shift),
        Method::Base64 => match decode_base64(&req.content) {
            Ok(text) => text,
            Err(e) => {
                let err = ServiceError::DecodeFailed(e.to_string());
                warn!(error = %err, "base64 decode rejected");
                state.audit.record("decrypt_rejected", "malformed base64 input");
                return error_response(&err);
            }
        },
    };

    state.audit.record(
        "decrypt",
        &format!("decoded {} chars via {}", decoded.chars().count(), method.as_str()),
    );
    (StatusCode::OK, Json(DecryptResponse { decoded })).into_response()
}

/// `GET /payments` — all ransom records, in insertion order.
pub async fn list_payments(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.payments.list())).into_response()
}

/// `GET /health` — liveness check plus the current record count.
pub async fn health(State(state): State<AppState>) -> Response {
    let body = HealthResponse {
        status: "ok".into(),
        payments_recorded: state.payments.len(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("not_found")))
}

/// Translate a [`ServiceError`] into its fixed wire shape.
fn error_response(err: &ServiceError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.error_code()))).into_response()
}

/// Resolve a JSON `shift` value (number or string) to an integer, falling
/// back to [`DEFAULT_SHIFT`] for anything else.
fn shift_from_json(value: Option<&serde_json::Value>) -> i64 {
    match value {
        Some(serde_json::Value::Number(n)) => n.as_i64().unwrap_or(DEFAULT_SHIFT),
        Some(serde_json::Value::String(s)) => parse_shift_or_default(Some(s)),
        _ => DEFAULT_SHIFT,
    }
}
