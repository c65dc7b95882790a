use crate::value_objects::{Amount, BASE_DECIMALS, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Snapshot of one liquidity pool as reported by the indexing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    /// Layer-1 asset tag keying the pool, e.g. `BTC.BTC`.
    pub asset: String,
    /// Asset side depth in the asset's base units.
    pub asset_depth: Amount,
    /// RUNE side depth in 1e8 base units.
    pub rune_depth: Amount,
    /// Indexer-supplied USD price for one unit of the asset, if any.
    pub usd_price: Option<Decimal>,
}

impl PoolState {
    /// Builds a pool from integer-as-string depths with the default precision.
    ///
    /// Depths that fail to parse are treated as zero.
    pub fn new(asset: impl Into<String>, asset_depth: &str, rune_depth: &str) -> Self {
        let asset = asset.into();
        let parse_depth = |digits: &str| {
            Amount::parse(digits, BASE_DECIMALS).unwrap_or_else(|| {
                debug!(pool = %asset, depth = digits, "Unparseable pool depth, using zero");
                Amount::zero(BASE_DECIMALS)
            })
        };
        let asset_depth = parse_depth(asset_depth);
        let rune_depth = parse_depth(rune_depth);
        Self {
            asset,
            asset_depth,
            rune_depth,
            usd_price: None,
        }
    }

    /// Sets the decimal precision of the asset side.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.asset_depth.decimals = decimals;
        self
    }

    /// Sets the indexer-supplied USD price.
    #[must_use]
    pub fn with_usd_price(mut self, usd_price: Decimal) -> Self {
        self.usd_price = Some(usd_price);
        self
    }

    pub fn decimals(&self) -> u8 {
        self.asset_depth.decimals
    }

    /// Asset depth scaled by `10^decimals`.
    pub fn asset_depth_scaled(&self) -> Decimal {
        self.asset_depth.to_decimal()
    }

    /// RUNE depth scaled by `1e8`.
    pub fn rune_depth_scaled(&self) -> Decimal {
        self.rune_depth.to_decimal()
    }

    /// RUNE per unit of asset, `None` when either side is empty.
    pub fn price_in_rune(&self) -> Option<Price> {
        let rune = self.rune_depth_scaled();
        if rune.is_zero() {
            return None;
        }
        Price::from_ratio(rune, self.asset_depth_scaled())
    }
}
