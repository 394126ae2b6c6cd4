//! Per-trader trade-history CSV export.
//!
//! Applies unit conversion only: USD fixed-point fields scaled by 10^-6,
//! the native fee amount scaled by the collateral token's decimals, and
//! the market id replaced with its display pair when the registry knows
//! it. The aggregator's oracle-price fee math is deliberately not reused
//! here.

use std::str::FromStr;

use anyhow::Context;
use rust_decimal::Decimal;

use crate::markets::MarketRegistry;
use crate::models::Trade;

const HEADERS: &[&str] = &[
    "txId",
    "eventIndex",
    "timestamp",
    "positionAddress",
    "owner",
    "market",
    "side",
    "tradeType",
    "price",
    "sizeUsd",
    "sizeAmount",
    "collateralUsd",
    "collateralPrice",
    "collateralAmount",
    "pnlUsd",
    "liquidationPrice",
    "feeAmount",
    "id",
    "oraclePrice",
    "oraclePriceExponent",
    "feesUsd",
];

/// Serialize a trader's raw history into CSV bytes.
pub fn trades_to_csv(trades: &[Trade], registry: &MarketRegistry) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(HEADERS).context("writing CSV header")?;

        for trade in trades {
            let info = registry.get(&trade.market);
            let market_label = info
                .map(|i| i.token_pair.to_string())
                .unwrap_or_else(|| trade.market.clone());

            let trade_type = serde_plain_string(&trade.trade_type)?;
            let fees_usd = fee_native_to_usd_units(
                &trade.fee_amount,
                info.map(|i| i.collateral_decimals).unwrap_or(0),
            );

            writer
                .write_record(&[
                    trade.tx_id.clone(),
                    trade.event_index.to_string(),
                    trade.timestamp.to_string(),
                    trade.position_address.clone(),
                    trade.owner.clone(),
                    market_label,
                    trade.side.to_string(),
                    trade_type,
                    trade.price.clone().unwrap_or_default(),
                    scale_usd(&trade.size_usd),
                    trade.size_amount.clone(),
                    scale_usd(&trade.collateral_usd),
                    trade
                        .collateral_price
                        .map(|p| p.to_string())
                        .unwrap_or_default(),
                    trade.collateral_amount.clone(),
                    trade
                        .pnl_usd
                        .as_deref()
                        .map(scale_usd)
                        .unwrap_or_default(),
                    trade
                        .liquidation_price
                        .map(|p| p.to_string())
                        .unwrap_or_default(),
                    trade.fee_amount.clone(),
                    trade.id.to_string(),
                    trade.oracle_price.clone(),
                    trade.oracle_price_exponent.to_string(),
                    fees_usd,
                ])
                .context("writing CSV record")?;
        }

        writer.flush().context("flushing CSV writer")?;
    }
    Ok(buf)
}

/// Fixed-point 6-decimal USD string to a plain decimal string; malformed
/// values pass through untouched.
fn scale_usd(raw: &str) -> String {
    match Decimal::from_str(raw.trim()) {
        Ok(value) => (value * Decimal::new(1, 6)).normalize().to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Native fee amount divided by the collateral token's decimals. Unknown
/// markets carry zero decimals, leaving the raw amount in place.
fn fee_native_to_usd_units(raw: &str, decimals: u32) -> String {
    match Decimal::from_str(raw.trim()) {
        Ok(value) if decimals <= 28 => (value * Decimal::new(1, decimals)).normalize().to_string(),
        _ => raw.to_string(),
    }
}

/// Render a serde-renamed enum the way it appears on the wire
/// (e.g. `ClosePosition` → `CLOSE_POSITION`).
fn serde_plain_string<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    let json = serde_json::to_value(value).context("serializing enum")?;
    json.as_str()
        .map(str::to_owned)
        .ok_or_else(|| anyhow::anyhow!("expected string-serialized enum"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Side, TradeType};

    fn sample_trade() -> Trade {
        Trade {
            tx_id: "txABC".into(),
            event_index: 2,
            timestamp: 1_700_000_000,
            position_address: "position1".into(),
            owner: "alice".into(),
            market: "9tvuK63WUV2mgWt7AvWUm7kRUpFKsRX1jewyJ21VTWsM".into(),
            side: Side::Short,
            trade_type: TradeType::ClosePosition,
            price: Some("145000000".into()),
            size_usd: "2500000".into(),
            size_amount: "17182".into(),
            collateral_usd: "1000000".into(),
            collateral_price: None,
            collateral_amount: "1000000".into(),
            pnl_usd: Some("1500000".into()),
            liquidation_price: None,
            fee_amount: "1000".into(),
            id: 42,
            oracle_price: "1".into(),
            oracle_price_exponent: 0,
        }
    }

    #[test]
    fn csv_has_header_and_scaled_fields() {
        let registry = MarketRegistry::builtin();
        let bytes = trades_to_csv(&[sample_trade()], &registry).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("txId,eventIndex,timestamp"));
        assert!(header.ends_with("feesUsd"));

        let row = lines.next().unwrap();
        // Market id resolved to display pair, USD fields scaled, fee
        // converted from native units (1000 * 10^-6 = 0.001).
        assert!(row.contains("SOL/USDC"));
        assert!(row.contains("CLOSE_POSITION"));
        assert!(row.contains(",2.5,"));
        assert!(row.contains(",1.5,"));
        assert!(row.ends_with(",0.001"));
    }

    #[test]
    fn unknown_market_keeps_raw_id_and_fee() {
        let registry = MarketRegistry::builtin();
        let mut trade = sample_trade();
        trade.market = "SomethingNew111".into();

        let bytes = trades_to_csv(&[trade], &registry).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let row = text.lines().nth(1).unwrap();

        assert!(row.contains("SomethingNew111"));
        // Zero known decimals: fee amount passes through unscaled.
        assert!(row.ends_with(",1000"));
    }

    #[test]
    fn empty_history_is_header_only() {
        let registry = MarketRegistry::builtin();
        let bytes = trades_to_csv(&[], &registry).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
