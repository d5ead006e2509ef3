//! `ransim-svc` — service binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise the tracing subscriber.
//! 3. Construct the collaborators: payment store and audit sink.
//! 4. Build the Axum router and start the HTTP server.

mod audit;
mod codec;
mod config;
mod payments;
mod server;
mod telemetry;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use audit::{LogSink, TracingLogSink};
use config::Config;
use payments::{InMemoryPaymentStore, PaymentStore};
use server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init_telemetry(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        listen_port = cfg.listen_port,
        "ransim-svc starting"
    );

    // -----------------------------------------------------------------------
    // 3. Collaborators
    // -----------------------------------------------------------------------
    let payments: Arc<dyn PaymentStore> = Arc::new(InMemoryPaymentStore::new());
    let audit: Arc<dyn LogSink> = Arc::new(TracingLogSink);

    // -----------------------------------------------------------------------
    // 4. HTTP server
    // -----------------------------------------------------------------------
    let state = AppState::new(
        payments,
        audit,
        cfg.victim_placeholder.clone(),
        (cfg.ransom_min, cfg.ransom_max),
    );
    let router = server::router::build(state);

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.listen_port).into();
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
