use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-owner profit accumulator, all values in USD.
///
/// During aggregation `net` holds raw micro-USD pnl; the finalization
/// pass scales it and folds the fee buckets in. After finalization:
/// `gross == net + open_fee`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profit {
    /// Realized profit after entry and exit fees.
    pub net: Decimal,
    /// Profit before entry fees (exit fees already deducted upstream).
    pub gross: Decimal,
    /// All fees attributed to this owner in the window.
    pub total_fees: Decimal,
    /// Opening-fee subtotal (OPEN_POSITION / INCREASE_SIZE without pnl).
    pub open_fee: Decimal,
}
