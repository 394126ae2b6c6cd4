//! PnL aggregation over a window of raw trade events.
//!
//! Single pass, order-insensitive, request-scoped. Each trade's fee is
//! valued in USD through the collateral-price cascade, bucketed as an
//! opening or closing fee, and folded into the owner's accumulator. A
//! finalization pass scales the micro-USD pnl and derives the net/gross
//! figures. Bad records degrade precision, never the batch.

use std::collections::HashMap;
use std::str::FromStr;

use metrics::counter;
use rust_decimal::Decimal;

use crate::markets::MarketRegistry;
use crate::models::{Profit, Side, Trade};

/// USD amounts on the feed are fixed-point with 6 decimals.
const USD_SCALE: i32 = 6;

/// Leaderboard ordering metric. Sorting is a presentation concern and can
/// be re-derived from the unsorted aggregation output at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMetric {
    NetProfit,
    GrossProfit,
}

impl FromStr for SortMetric {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "net" => Ok(SortMetric::NetProfit),
            "gross" => Ok(SortMetric::GrossProfit),
            _ => Err(()),
        }
    }
}

/// Aggregate a trade window into per-owner profit records.
///
/// Trades whose market id is not in the registry are skipped with a
/// warning; a single unknown market must not abort an otherwise valid
/// report. Summation is commutative, so the input order never changes
/// the totals.
pub fn aggregate(trades: &[Trade], registry: &MarketRegistry) -> HashMap<String, Profit> {
    let mut by_owner: HashMap<String, Profit> = HashMap::new();

    for trade in trades {
        let Some(info) = registry.get(&trade.market) else {
            tracing::warn!(
                market = %trade.market,
                tx = %trade.tx_id,
                "unknown market id, trade skipped"
            );
            counter!("trades_skipped_unknown_market").increment(1);
            continue;
        };

        let fee_usd = fee_usd(trade, info.collateral_decimals);
        let profit = by_owner.entry(trade.owner.clone()).or_default();

        match &trade.pnl_usd {
            // Realized pnl accumulates in micro-USD until finalization.
            // A malformed pnl string contributes zero but the trade's fee
            // still lands in the closing-fee context.
            Some(raw) => {
                profit.net += parse_decimal(raw).unwrap_or(Decimal::ZERO);
                profit.gross += fee_usd;
                profit.total_fees += fee_usd;
            }
            // Pnl-less opens contribute only fee drag.
            None if trade.trade_type.is_open() => {
                profit.open_fee += fee_usd;
                profit.total_fees += fee_usd;
            }
            None => {}
        }

        counter!("trades_aggregated_total").increment(1);
    }

    // Finalization order is load-bearing: gross folds in the pnl total
    // before the open-fee subtotal is subtracted from net.
    for profit in by_owner.values_mut() {
        profit.net *= pow10(-USD_SCALE);
        profit.gross += profit.net;
        profit.net -= profit.open_fee;
    }

    by_owner
}

/// Order the aggregation output descending by the chosen metric.
/// Ties break on owner address so the ordering is deterministic.
pub fn sort_leaderboard(
    by_owner: HashMap<String, Profit>,
    metric: SortMetric,
) -> Vec<(String, Profit)> {
    let mut entries: Vec<(String, Profit)> = by_owner.into_iter().collect();
    entries.sort_by(|(owner_a, a), (owner_b, b)| {
        let (a, b) = match metric {
            SortMetric::NetProfit => (a.net, b.net),
            SortMetric::GrossProfit => (a.gross, b.gross),
        };
        b.cmp(&a).then_with(|| owner_a.cmp(owner_b))
    });
    entries
}

/// Fee in USD: native fee amount scaled by the collateral token's decimals,
/// valued at the collateral price.
fn fee_usd(trade: &Trade, collateral_decimals: u32) -> Decimal {
    let fee_amount = parse_decimal(&trade.fee_amount).unwrap_or(Decimal::ZERO);
    fee_amount * pow10(-(collateral_decimals as i32)) * collateral_price_usd(trade)
}

/// USD price of one unit of the position's collateral token.
///
/// Longs are collateralized in the base token, so the price cascades:
/// oracle price (scaled by its exponent), then the trade's raw 6-decimal
/// price, then unity. Shorts are USDC-collateralized and always 1.0.
fn collateral_price_usd(trade: &Trade) -> Decimal {
    if trade.side != Side::Long {
        return Decimal::ONE;
    }
    if let Some(oracle) = parse_decimal(&trade.oracle_price) {
        return oracle * pow10(trade.oracle_price_exponent);
    }
    if let Some(price) = trade.price.as_deref().and_then(parse_decimal) {
        return price * pow10(-USD_SCALE);
    }
    Decimal::ONE
}

/// Lenient decimal parse: malformed fields become `None` and the caller
/// substitutes zero contribution for that field only.
fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Exact power of ten within `Decimal` range; exponents beyond what a
/// 96-bit mantissa can hold collapse to zero contribution.
fn pow10(exp: i32) -> Decimal {
    match exp {
        0 => Decimal::ONE,
        e @ 1..=28 => Decimal::from_i128_with_scale(10i128.pow(e as u32), 0),
        e @ -28..=-1 => Decimal::new(1, (-e) as u32),
        _ => Decimal::ZERO,
    }
}
