use std::sync::OnceLock;

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus exporter and register all application metrics.
/// Idempotent: only one recorder can exist per process, so repeated calls
/// (tests build several apps) return the same handle.
pub fn init_metrics() -> PrometheusHandle {
    HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder");

            // Pre-register counters so they appear before the first increment.
            counter!("pnl_requests_total").absolute(0);
            counter!("trades_aggregated_total").absolute(0);
            counter!("trades_skipped_unknown_market").absolute(0);
            counter!("csv_exports_total").absolute(0);

            handle
        })
        .clone()
}
