pub mod api;
pub mod config;
pub mod errors;
pub mod export;
pub mod flash;
pub mod markets;
pub mod metrics;
pub mod models;
pub mod oracle;
pub mod pnl;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::flash::TradeSource;
use crate::markets::MarketRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub registry: Arc<MarketRegistry>,
    pub history: Arc<dyn TradeSource>,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
