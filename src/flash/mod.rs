pub mod client;

pub use client::{FetchError, HistoryClient, DEFAULT_BASE_URL};

use async_trait::async_trait;

use crate::models::Trade;

/// Source of raw trade events. The aggregator treats this as an opaque
/// provider; tests substitute a canned implementation for the live
/// HTTP client.
#[async_trait]
pub trait TradeSource: Send + Sync {
    /// All trades in the closed window `[from, to]` (Unix seconds),
    /// restricted to the venue's position lifecycle events.
    async fn fetch_window(&self, from: i64, to: i64) -> Result<Vec<Trade>, FetchError>;

    /// One trader's complete history, unfiltered by any window.
    async fn fetch_user_history(&self, owner: &str) -> Result<Vec<Trade>, FetchError>;
}
