use std::sync::Arc;

use async_trait::async_trait;

use beastboard::api::router::create_router;
use beastboard::config::AppConfig;
use beastboard::flash::{FetchError, TradeSource};
use beastboard::markets::MarketRegistry;
use beastboard::models::{Side, Trade, TradeType};
use beastboard::{metrics, AppState};

pub const SOL_SHORT: &str = "9tvuK63WUV2mgWt7AvWUm7kRUpFKsRX1jewyJ21VTWsM";

/// Canned trade source standing in for the live trading-history API.
#[derive(Default)]
pub struct FixtureSource {
    pub window: Vec<Trade>,
    pub user_history: Vec<Trade>,
    pub fail: bool,
}

#[async_trait]
impl TradeSource for FixtureSource {
    async fn fetch_window(&self, _from: i64, _to: i64) -> Result<Vec<Trade>, FetchError> {
        if self.fail {
            return Err(FetchError::Unexpected("fixture failure".into()));
        }
        Ok(self.window.clone())
    }

    async fn fetch_user_history(&self, _owner: &str) -> Result<Vec<Trade>, FetchError> {
        if self.fail {
            return Err(FetchError::Unexpected("fixture failure".into()));
        }
        Ok(self.user_history.clone())
    }
}

#[allow(dead_code)]
pub fn build_test_app(source: FixtureSource) -> axum::Router {
    let config = AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        history_base_url: "http://localhost:0".into(),
        http_timeout_secs: 1,
    };

    let state = AppState {
        config,
        registry: Arc::new(MarketRegistry::builtin()),
        history: Arc::new(source),
        metrics_handle: metrics::init_metrics(),
    };

    create_router(state)
}

/// Trade fixture on the SOL short market (USDC collateral, 6 decimals).
#[allow(dead_code)]
pub fn trade(
    owner: &str,
    trade_type: TradeType,
    pnl_usd: Option<&str>,
    fee_amount: &str,
) -> Trade {
    Trade {
        tx_id: format!("tx-{owner}"),
        event_index: 0,
        timestamp: 1_700_000_000,
        position_address: "position".into(),
        owner: owner.into(),
        market: SOL_SHORT.into(),
        side: Side::Short,
        trade_type,
        price: None,
        size_usd: "1000000".into(),
        size_amount: "1000000".into(),
        collateral_usd: "500000".into(),
        collateral_price: None,
        collateral_amount: "500000".into(),
        pnl_usd: pnl_usd.map(Into::into),
        liquidation_price: None,
        fee_amount: fee_amount.into(),
        id: 1,
        oracle_price: "1".into(),
        oracle_price_exponent: 0,
    }
}
