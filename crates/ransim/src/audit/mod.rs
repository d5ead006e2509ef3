//! [`LogSink`]: fire-and-forget audit trail collaborator.
//!
//! Both handlers append one line per request outcome. A sink is never
//! allowed to fail a request, so the contract is infallible from the
//! caller's perspective; implementations swallow their own errors.

use tracing::info;

/// Contract for the audit collaborator. Injected into handlers as an
/// `Arc<dyn LogSink>`.
pub trait LogSink: Send + Sync {
    /// Append one audit line. Must not fail or block the request path.
    fn record(&self, event_type: &str, message: &str);
}

/// [`LogSink`] that emits structured `tracing` events under the `audit`
/// target, picked up by the JSON subscriber configured at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn record(&self, event_type: &str, message: &str) {
        info!(target: "audit", event = event_type, "{message}");
    }
}

/// Test sink that retains every recorded line in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    events: std::sync::Mutex<Vec<(String, String)>>,
}

#[cfg(test)]
impl MemoryLogSink {
    pub fn events(&self) -> Vec<(String, String)> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl LogSink for MemoryLogSink {
    fn record(&self, event_type: &str, message: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push((event_type.to_owned(), message.to_owned()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_retains_lines_in_order() {
        let sink = MemoryLogSink::default();
        sink.record("encrypt", "encoded 15 chars");
        sink.record("decrypt", "decoded 6 chars");
        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "encrypt");
        assert_eq!(events[1].0, "decrypt");
    }

    #[test]
    fn tracing_sink_record_is_infallible() {
        // No subscriber installed; the event is simply dropped.
        TracingLogSink.record("encrypt", "no subscriber");
    }
}
