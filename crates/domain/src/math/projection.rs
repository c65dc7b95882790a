//! Progress and ETA for streaming swaps.

use crate::entities::StreamingSwapRecord;
use crate::value_objects::{Eta, Percentage};
use serde::{Deserialize, Serialize};

/// Assumed seconds per block; not read from chain state.
pub const DEFAULT_BLOCK_TIME_SECS: u64 = 6;

/// Configuration for [`StreamingSwapProjector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Seconds per block. Defaults to [`DEFAULT_BLOCK_TIME_SECS`].
    pub block_time_secs: u64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            block_time_secs: DEFAULT_BLOCK_TIME_SECS,
        }
    }
}

/// Progress of one streaming swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapProjection {
    pub remaining_swaps: u64,
    pub completion_percent: Percentage,
    pub eta: Eta,
}

/// Derives [`SwapProjection`]s from swap counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamingSwapProjector {
    config: ProjectionConfig,
}

impl StreamingSwapProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Remaining legs, completion percent and ETA.
    ///
    /// `quantity` is read as at least 1 and `count` is clamped to it, so the
    /// remaining legs never go negative and completion never passes 100%.
    pub fn project(&self, record: &StreamingSwapRecord) -> SwapProjection {
        let quantity = record.quantity.max(1);
        let count = record.count.min(quantity);
        let remaining_swaps = quantity - count;
        let remaining_intervals = record.interval_blocks.saturating_mul(remaining_swaps);

        SwapProjection {
            remaining_swaps,
            completion_percent: Percentage::from_ratio(count, quantity),
            eta: Eta::from_blocks(remaining_intervals, self.config.block_time_secs),
        }
    }
}

/// [`StreamingSwapProjector::project`] with the default block time.
pub fn project(record: &StreamingSwapRecord) -> SwapProjection {
    StreamingSwapProjector::default().project(record)
}
