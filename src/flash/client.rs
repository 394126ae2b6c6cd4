use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::TradeSource;
use crate::models::Trade;

pub const DEFAULT_BASE_URL: &str = "https://api.prod.flash.trade";

/// Event types the leaderboard window cares about. The upstream filter
/// endpoint takes these as repeated `eventTypes` query parameters.
const EVENT_TYPES: &[&str] = &[
    "TAKE_PROFIT",
    "CLOSE_POSITION",
    "STOP_LOSS",
    "LIQUIDATE",
    "OPEN_POSITION",
    "INCREASE_SIZE",
];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// REST client for the trading-history service.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    http: Client,
    base_url: String,
}

impl HistoryClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TradeSource for HistoryClient {
    async fn fetch_window(&self, from: i64, to: i64) -> Result<Vec<Trade>, FetchError> {
        let url = format!("{}/trading-history/filter", self.base_url);
        let mut request = self
            .http
            .get(&url)
            .query(&[("from", from.to_string()), ("to", to.to_string())]);
        for event_type in EVENT_TYPES {
            request = request.query(&[("eventTypes", event_type)]);
        }

        let resp = request.send().await?.error_for_status()?;
        let trades: Vec<Trade> = resp.json().await?;

        tracing::debug!(from, to, count = trades.len(), "fetched trade window");
        Ok(trades)
    }

    async fn fetch_user_history(&self, owner: &str) -> Result<Vec<Trade>, FetchError> {
        let url = format!(
            "{}/trading-history/find-all-by-user-v2/{}",
            self.base_url, owner
        );
        let resp = self.http.get(&url).send().await?.error_for_status()?;
        let trades: Vec<Trade> = resp.json().await?;

        tracing::debug!(owner, count = trades.len(), "fetched user history");
        Ok(trades)
    }
}
