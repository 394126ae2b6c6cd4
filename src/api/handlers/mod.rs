pub mod export;
pub mod health;
pub mod metrics;
pub mod oracle;
pub mod pnl;
