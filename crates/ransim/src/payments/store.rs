//! [`PaymentStore`]: the collaborator contract for ransom-record inserts,
//! plus the in-memory implementation shipped with the service.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Identifier of a single ransom record.
pub type PaymentId = Uuid;

/// Errors produced by a payment store.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The single-row insert could not be completed.
    #[error("payment store write failed: {0}")]
    WriteFailed(String),
}

/// A simulated payment-demand row. Carries no real monetary meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RansomRecord {
    /// Record identity, also the handle the victim portal quotes back.
    pub id: PaymentId,
    /// Opaque victim identifier supplied by the caller (or a placeholder).
    pub victim: String,
    /// Demanded amount in the configured demo range.
    pub amount: f64,
    /// Whether the simulated ransom was "paid". Always false at creation;
    /// nothing in this service flips it.
    pub paid: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Contract for the payment collaborator.
///
/// Injected into handlers as an `Arc<dyn PaymentStore>`; the store provides
/// its own atomicity for a single-record insert.
#[cfg_attr(test, mockall::automock)]
pub trait PaymentStore: Send + Sync {
    /// Insert one new unpaid record and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::WriteFailed`] if the insert cannot complete.
    fn create_payment(&self, victim: &str, amount: f64) -> Result<PaymentId, PaymentError>;

    /// All records, in insertion order.
    fn list(&self) -> Vec<RansomRecord>;

    /// Number of records currently held.
    fn len(&self) -> usize;
}

/// In-memory [`PaymentStore`] backed by a lock-guarded vector.
///
/// Cheaply cloneable; clones share the same underlying records. Inserts take
/// a short write lock, dashboard reads take a read lock.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPaymentStore {
    inner: Arc<RwLock<Vec<RansomRecord>>>,
}

impl InMemoryPaymentStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentStore for InMemoryPaymentStore {
    fn create_payment(&self, victim: &str, amount: f64) -> Result<PaymentId, PaymentError> {
        let record = RansomRecord {
            id: Uuid::new_v4(),
            victim: victim.to_owned(),
            amount,
            paid: false,
            created_at: Utc::now(),
        };
        let id = record.id;
        let mut rows = self
            .inner
            .write()
            .map_err(|_| PaymentError::WriteFailed("store lock poisoned".into()))?;
        rows.push(record);
        Ok(id)
    }

    fn list(&self) -> Vec<RansomRecord> {
        self.inner.read().map(|rows| rows.clone()).unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.inner.read().map(|rows| rows.len()).unwrap_or(0)
    }
}
