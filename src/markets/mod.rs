use std::collections::HashMap;

use serde::Serialize;

use crate::models::Side;

/// Static descriptor for one market of the venue.
///
/// `collateral_decimals` is the decimal count of the token the position is
/// collateralized in: the base token for longs, USDC for shorts. Fee
/// amounts on the feed are denominated in that token's native units.
#[derive(Debug, Clone, Serialize)]
pub struct MarketInfo {
    pub token_pair: &'static str,
    pub side: Side,
    pub pool: &'static str,
    pub collateral_symbol: &'static str,
    pub collateral_decimals: u32,
    pub entry_fee_bps: u32,
}

/// Immutable market-id → metadata lookup, built once at startup and shared
/// by reference. Absence of a market is a normal outcome (new or unlisted
/// markets); callers degrade gracefully.
#[derive(Debug, Clone)]
pub struct MarketRegistry {
    markets: HashMap<&'static str, MarketInfo>,
}

impl MarketRegistry {
    pub fn get(&self, market_id: &str) -> Option<&MarketInfo> {
        self.markets.get(market_id)
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }

    /// The venue's known markets across the Crypto.1, Virtual.1,
    /// Governance.1 and Community.1 pools. Long markets are collateralized
    /// in the base token, short markets in USDC.
    pub fn builtin() -> Self {
        let mut markets = HashMap::new();

        let mut add = |id: &'static str,
                       token_pair: &'static str,
                       side: Side,
                       pool: &'static str,
                       collateral_symbol: &'static str,
                       collateral_decimals: u32,
                       entry_fee_bps: u32| {
            markets.insert(
                id,
                MarketInfo {
                    token_pair,
                    side,
                    pool,
                    collateral_symbol,
                    collateral_decimals,
                    entry_fee_bps,
                },
            );
        };

        // Crypto.1
        add("3vHoXbUvGhEHFsLUmxyC6VWsbYDreb1zMn9TAp5ijN5K", "SOL/SOL", Side::Long, "Crypto.1", "SOL", 9, 8);
        add("9tvuK63WUV2mgWt7AvWUm7kRUpFKsRX1jewyJ21VTWsM", "SOL/USDC", Side::Short, "Crypto.1", "USDC", 6, 8);
        add("GGV4VHTAEyWGyGubXTiQZiPajCEtGv2Ed2G2BHmY3zNZ", "BTC/BTC", Side::Long, "Crypto.1", "BTC", 8, 8);
        add("AAHFmCVd4JXXrLFmGBataeCJ6CwrYs4cYMiebXmBFvPE", "BTC/USDC", Side::Short, "Crypto.1", "USDC", 6, 8);
        add("8r5MBC3oULSWdm69yn2q3gBLp6h1AL4Wo11LBzcCZGWJ", "ETH/ETH", Side::Long, "Crypto.1", "ETH", 8, 8);
        add("GxkxRPheec7f9ZbamzeWdiHiMbrgyoUV7MFPxXW1387q", "ETH/USDC", Side::Short, "Crypto.1", "USDC", 6, 8);

        // Virtual.1
        add("88zawd3Rw6tknWvgEm8QBgBuf5Y2GTeA18S788qUrSnM", "XAU/USDC", Side::Long, "Virtual.1", "USDC", 6, 10);
        add("G2rj5artQzevbsQtCJ1rkDt3Pd5b6ZYAf8e9AjZPipui", "XAU/USDC", Side::Short, "Virtual.1", "USDC", 6, 10);
        add("Caqzhuj2Hj5MUwQigdtLNokLZbuqs6NrcmwWbMsSqwqH", "XAG/USDC", Side::Short, "Virtual.1", "USDC", 6, 10);
        add("7JwSejqoicRSzks3mKwk9TPp5rUNhUttKx2yzgU8UGtc", "XAG/USDC", Side::Short, "Virtual.1", "USDC", 6, 10);
        add("DXbQZYeT1LfyJvr86wnaMhwkPaFHazmHJkuyb1XzCmo3", "EUR/USDC", Side::Long, "Virtual.1", "USDC", 6, 8);
        add("2CvUh7whei331D2djP4W2QwV7UUiMbpKgfJNSDojcjne", "EUR/USDC", Side::Short, "Virtual.1", "USDC", 6, 8);
        add("8p5imag5r4JBZoxb7Wq8ysgu9LpkPix7n4i9z6TJZDt7", "GBP/USDC", Side::Long, "Virtual.1", "USDC", 6, 8);
        add("6pKnzQwmrSCz6HK4C4qXUscysGpQj381ksmNwmVHSdJ4", "GBP/USDC", Side::Short, "Virtual.1", "USDC", 6, 8);
        add("CxC8u5SBCtu9a53x7jSZtaAuJoKYA2ukXLuMuB9NtqoQ", "AUD/USDC", Side::Long, "Virtual.1", "USDC", 6, 8);
        add("JCwYots22PTcPn2XQz9un15kMj6tqEYjUKgQaay5sMY1", "AUD/USDC", Side::Short, "Virtual.1", "USDC", 6, 8);

        // Governance.1
        add("5QQstJ2LpeHESWqGTWBw5aid8h4cdVUjXU61R84Pj2jr", "JUP/JUP", Side::Long, "Governance.1", "JUP", 6, 15);
        add("Hi8kSmbtzucZpEYxvcq2H1QuyUCRuY3m7WGmTF2RhkVw", "JUP/USDC", Side::Short, "Governance.1", "USDC", 6, 15);
        add("7gnDo7scDFYmEnXW2JrGRzCrynmbakoCMqaEo7d2fydG", "JTO/JTO", Side::Long, "Governance.1", "JTO", 9, 15);
        add("G7RdCWx4eNfLdagGp4H2tKwhTi9JihBozVLGMVduF1Xe", "JTO/USDC", Side::Short, "Governance.1", "USDC", 6, 15);
        add("9V9eYLhVV13VoSfi3McfMcN7ie4WNkRdTbHggkaT8QCQ", "PYTH/PYTH", Side::Long, "Governance.1", "PYTH", 6, 15);
        add("2By2fgwfZQetZ56414KBDMZwNBstg3GAJtEePQtf3Aty", "PYTH/USDC", Side::Short, "Governance.1", "USDC", 6, 15);
        add("Dk2P1xDyewb9nxsMacw6gfuhTb3DqPZM1Sm97K66CTQK", "W/W", Side::Long, "Governance.1", "W", 6, 15);
        add("9mMAN4hFvw5AGB6eNay1WvNsGoyK9xcBafZ5tVbHcHQq", "W/USDC", Side::Short, "Governance.1", "USDC", 6, 15);

        // Community.1
        add("DvvnSEZueicT9UN9WMvfYP3B4NQDgiNjjtbKLenLakxv", "BONK/BONK", Side::Long, "Community.1", "BONK", 5, 15);
        add("3EYDn8VkY19QBStG4QtvLAdPScReLS7kuchhterF7ADP", "BONK/USDC", Side::Short, "Community.1", "USDC", 6, 15);

        Self { markets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_resolves_known_market() {
        let registry = MarketRegistry::builtin();
        let info = registry
            .get("3vHoXbUvGhEHFsLUmxyC6VWsbYDreb1zMn9TAp5ijN5K")
            .expect("SOL long market should exist");
        assert_eq!(info.token_pair, "SOL/SOL");
        assert_eq!(info.side, Side::Long);
        assert_eq!(info.collateral_decimals, 9);
    }

    #[test]
    fn unknown_market_is_none() {
        let registry = MarketRegistry::builtin();
        assert!(registry.get("NotARealMarketId").is_none());
    }

    #[test]
    fn short_markets_are_usdc_collateralized() {
        let registry = MarketRegistry::builtin();
        let info = registry
            .get("9tvuK63WUV2mgWt7AvWUm7kRUpFKsRX1jewyJ21VTWsM")
            .unwrap();
        assert_eq!(info.collateral_symbol, "USDC");
        assert_eq!(info.collateral_decimals, 6);
    }
}
