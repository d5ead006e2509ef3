//! Ransom-record creation: the one side effect of a successful encode.
//!
//! # Lifecycle
//!
//! 1. `POST /encrypt` computes the encoded text, then creates exactly one
//!    [`RansomRecord`] through the injected [`PaymentStore`] handle.
//! 2. A store failure is reported as its own error kind and never withholds
//!    the already-computed encoded text from the response.
//! 3. Nothing in this service mutates a record after creation; the dashboard
//!    reads them back via `GET /payments`.
//!
//! The store is an injected handle on `AppState`, never an ambient global,
//! so handler logic stays independently testable against a mock.

pub mod store;

pub use store::{InMemoryPaymentStore, PaymentError, PaymentId, PaymentStore, RansomRecord};

#[cfg(test)]
pub use store::MockPaymentStore;

use rand::Rng;
use sha2::{Digest, Sha256};

/// Draw a demo ransom amount from `[min, max]`, rounded to four decimals.
pub fn ransom_amount(min: f64, max: f64) -> f64 {
    let raw = rand::thread_rng().gen_range(min..=max);
    (raw * 10_000.0).round() / 10_000.0
}

/// Derive the placeholder "wallet" string for a payment.
///
/// Deterministic in the payment id so the same record always renders the
/// same address; the SHA-256 truncation only makes it look the part.
/// This is not a real wallet address of any kind.
pub fn wallet_address(payment_id: &PaymentId) -> String {
    let digest = Sha256::digest(payment_id.as_bytes());
    format!("1SiM{}", &hex::encode(digest)[..28])
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn amount_stays_in_range_with_four_decimals() {
        for _ in 0..200 {
            let amount = ransom_amount(0.01, 0.06);
            assert!((0.01..=0.06).contains(&amount), "out of range: {amount}");
            let scaled = amount * 10_000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "not 4dp: {amount}");
        }
    }

    #[test]
    fn address_is_deterministic_per_payment() {
        let id = Uuid::new_v4();
        assert_eq!(wallet_address(&id), wallet_address(&id));
        assert_ne!(wallet_address(&id), wallet_address(&Uuid::new_v4()));
    }

    #[test]
    fn address_has_wallet_shape() {
        let addr = wallet_address(&Uuid::nil());
        assert!(addr.starts_with("1SiM"));
        assert_eq!(addr.len(), 4 + 28);
    }
}
