use crate::entities::{AssetId, PoolState, StreamingSwapRecord, SwapLeg};
use crate::math::projection::{StreamingSwapProjector, SwapProjection};
use crate::math::valuation::PoolValuationEngine;
use crate::memo::SwapMemo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A streaming swap joined with its projection and valuation, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapProgressView {
    pub record: StreamingSwapRecord,
    pub projection: SwapProjection,
    /// Source asset and deposit.
    pub input: SwapLeg,
    /// First coin of the first outbound transaction, once one exists.
    pub output: Option<SwapLeg>,
    /// USD value of the deposit.
    pub deposit_usd: Decimal,
    /// Swap memo of the inbound transaction, when it decoded as one.
    pub memo: Option<SwapMemo>,
}

impl SwapProgressView {
    pub fn build(
        record: StreamingSwapRecord,
        output: Option<SwapLeg>,
        projector: &StreamingSwapProjector,
        valuation: &PoolValuationEngine,
        pools: &[PoolState],
    ) -> Self {
        let projection = projector.project(&record);
        let input = SwapLeg::from_base_units(record.source_asset.clone(), record.deposit);
        let deposit_usd = AssetId::from_any_notation(&record.source_asset)
            .map(|id| valuation.amount_to_usd(&id, record.deposit, pools))
            .unwrap_or(Decimal::ZERO);
        Self {
            record,
            projection,
            input,
            output,
            deposit_usd,
            memo: None,
        }
    }

    #[must_use]
    pub fn with_memo(mut self, memo: Option<SwapMemo>) -> Self {
        self.memo = memo;
        self
    }

    /// Whether the inbound memo agrees with the swap's streaming state,
    /// `None` without a swap memo.
    pub fn memo_agrees(&self) -> Option<bool> {
        self.memo.as_ref().map(|memo| memo.agrees_with(&self.record))
    }
}
