//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::audit::{LogSink, TracingLogSink};
use crate::payments::{InMemoryPaymentStore, PaymentStore};

/// Application state shared across all request handlers.
///
/// Collaborators are held as trait objects so handler logic can be tested
/// against mocks; all fields are cheaply cloneable for per-request cloning.
#[derive(Clone)]
pub struct AppState {
    /// Payment collaborator that records one ransom row per encode.
    pub payments: Arc<dyn PaymentStore>,
    /// Fire-and-forget audit trail.
    pub audit: Arc<dyn LogSink>,
    /// Victim identifier used when an upload supplies none.
    pub victim_placeholder: Arc<String>,
    /// Inclusive `(min, max)` bounds of the demo ransom amount.
    pub ransom_range: (f64, f64),
}

impl AppState {
    /// Create a new [`AppState`] with the provided collaborators.
    pub fn new(
        payments: Arc<dyn PaymentStore>,
        audit: Arc<dyn LogSink>,
        victim_placeholder: String,
        ransom_range: (f64, f64),
    ) -> Self {
        Self {
            payments,
            audit,
            victim_placeholder: Arc::new(victim_placeholder),
            ransom_range,
        }
    }
}

impl Default for AppState {
    /// Creates a default [`AppState`] with an empty in-memory store,
    /// suitable for tests.
    fn default() -> Self {
        Self::new(
            Arc::new(InMemoryPaymentStore::new()),
            Arc::new(TracingLogSink),
            "unidentified-victim".into(),
            (0.01, 0.06),
        )
    }
}
