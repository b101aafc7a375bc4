//! Metrics collection and exposition.
//!
//! # Metrics
//! - `footer_menu_fetch_total` (counter): menu fetches by outcome
//! - `footer_menu_fetch_duration_seconds` (histogram): fetch latency
//! - `footer_renders_total` (counter): completed renders
//!
//! Recording is a no-op until a recorder is installed, so tests and the
//! `render` command pay nothing.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one menu fetch. `outcome` is "ok" or a [`crate::commerce::MenuError::kind`].
pub fn record_menu_fetch(outcome: &'static str, start: Instant) {
    metrics::counter!("footer_menu_fetch_total", "outcome" => outcome).increment(1);
    metrics::histogram!("footer_menu_fetch_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_render() {
    metrics::counter!("footer_renders_total").increment(1);
}
