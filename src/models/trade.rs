use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Long,
    Short,
    /// Anything the feed sends that we don't recognize. Treated as
    /// USD-collateralized (same as short) by the fee math.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Long => write!(f, "long"),
            Side::Short => write!(f, "short"),
            Side::Unknown => write!(f, "unknown"),
        }
    }
}

// ---------------------------------------------------------------------------
// TradeType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    OpenPosition,
    IncreaseSize,
    DecreaseSize,
    ClosePosition,
    TakeProfit,
    StopLoss,
    Liquidate,
    #[serde(other)]
    Unknown,
}

impl TradeType {
    /// Opening-fee context: the position is created or sized up.
    pub fn is_open(&self) -> bool {
        matches!(self, TradeType::OpenPosition | TradeType::IncreaseSize)
    }

    /// Closing-fee context: the position is reduced or exited.
    /// Liquidations are excluded; they carry their fee through the
    /// realized-pnl path instead.
    pub fn is_close(&self) -> bool {
        matches!(
            self,
            TradeType::DecreaseSize
                | TradeType::ClosePosition
                | TradeType::TakeProfit
                | TradeType::StopLoss
        )
    }
}

// ---------------------------------------------------------------------------
// Trade — one event from the trading-history feed
// ---------------------------------------------------------------------------

/// Wire shape of a trading-history event. Numeric fields arrive as
/// fixed-point decimal strings and stay that way here; parsing into
/// `Decimal` happens in the aggregator, which treats malformed values
/// as zero contribution rather than failing the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub tx_id: String,
    pub event_index: i64,
    pub timestamp: i64,
    pub position_address: String,
    pub owner: String,
    pub market: String,
    pub side: Side,
    pub trade_type: TradeType,
    #[serde(default)]
    pub price: Option<String>,
    /// USD size, fixed-point 6-decimal string.
    pub size_usd: String,
    pub size_amount: String,
    pub collateral_usd: String,
    #[serde(default)]
    pub collateral_price: Option<Decimal>,
    pub collateral_amount: String,
    /// Realized PnL in micro-USD; null on pure opens.
    #[serde(default)]
    pub pnl_usd: Option<String>,
    #[serde(default)]
    pub liquidation_price: Option<Decimal>,
    /// Fee in native collateral units, unscaled integer string.
    pub fee_amount: String,
    pub id: i64,
    pub oracle_price: String,
    pub oracle_price_exponent: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_deserializes_from_feed_shape() {
        let json = r#"{
            "txId": "5gW...sig",
            "eventIndex": 1,
            "timestamp": 1700000000,
            "positionAddress": "posAddr",
            "owner": "ownerAddr",
            "market": "9tvuK63WUV2mgWt7AvWUm7kRUpFKsRX1jewyJ21VTWsM",
            "side": "short",
            "tradeType": "CLOSE_POSITION",
            "price": null,
            "sizeUsd": "2500000",
            "sizeAmount": "17182",
            "collateralUsd": "1000000",
            "collateralPrice": 1.0,
            "collateralAmount": "1000000",
            "pnlUsd": "1500000",
            "liquidationPrice": null,
            "feeAmount": "1000",
            "id": 42,
            "oraclePrice": "1",
            "oraclePriceExponent": 0
        }"#;

        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.side, Side::Short);
        assert_eq!(trade.trade_type, TradeType::ClosePosition);
        assert_eq!(trade.pnl_usd.as_deref(), Some("1500000"));
        assert!(trade.price.is_none());
    }

    #[test]
    fn unknown_side_and_trade_type_tolerated() {
        let side: Side = serde_json::from_str(r#""sideways""#).unwrap();
        assert_eq!(side, Side::Unknown);

        let trade_type: TradeType = serde_json::from_str(r#""SETTLE_FUNDING""#).unwrap();
        assert_eq!(trade_type, TradeType::Unknown);
        assert!(!trade_type.is_open());
        assert!(!trade_type.is_close());
    }

    #[test]
    fn trade_type_contexts() {
        assert!(TradeType::OpenPosition.is_open());
        assert!(TradeType::IncreaseSize.is_open());
        assert!(TradeType::ClosePosition.is_close());
        assert!(TradeType::DecreaseSize.is_close());
        assert!(TradeType::TakeProfit.is_close());
        assert!(TradeType::StopLoss.is_close());
        assert!(!TradeType::Liquidate.is_open());
        assert!(!TradeType::Liquidate.is_close());
    }
}
