use std::env;

use crate::flash::DEFAULT_BASE_URL;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    /// Base URL of the trading-history service.
    pub history_base_url: String,
    /// Outbound HTTP timeout. Upstream calls are the only suspension
    /// point per request, so this bounds request latency.
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            history_base_url: env::var("TRADE_HISTORY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_HTTP_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }
}
