use crate::value_objects::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// In-flight streaming swap counters from the indexing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingSwapRecord {
    pub tx_id: String,
    /// Legs executed so far.
    pub count: u64,
    /// Total legs; at least 1.
    pub quantity: u64,
    /// Blocks between legs.
    pub interval_blocks: u64,
    pub source_asset: String,
    pub target_asset: String,
    /// Deposited amount in 1e8 base units.
    pub deposit: u128,
    /// Minimum output the swap must reach, in 1e8 base units.
    pub trade_target: Option<u128>,
}

impl StreamingSwapRecord {
    pub fn new(
        tx_id: impl Into<String>,
        count: u64,
        quantity: u64,
        interval_blocks: u64,
        source_asset: impl Into<String>,
        target_asset: impl Into<String>,
        deposit: u128,
    ) -> Self {
        Self {
            tx_id: tx_id.into(),
            count,
            quantity,
            interval_blocks,
            source_asset: source_asset.into(),
            target_asset: target_asset.into(),
            deposit,
            trade_target: None,
        }
    }

    #[must_use]
    pub fn with_trade_target(mut self, trade_target: u128) -> Self {
        self.trade_target = Some(trade_target);
        self
    }
}

/// One side of a swap: an asset tag and a human-scale amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapLeg {
    pub asset: String,
    pub amount: Decimal,
}

impl SwapLeg {
    /// Leg from an amount in 1e8 base units.
    pub fn from_base_units(asset: impl Into<String>, units: u128) -> Self {
        Self {
            asset: asset.into(),
            amount: Amount::from_base_units(units).to_decimal(),
        }
    }
}
