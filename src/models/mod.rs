pub mod profit;
pub mod trade;

pub use profit::Profit;
pub use trade::{Side, Trade, TradeType};
