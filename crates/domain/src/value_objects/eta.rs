use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Estimated time to completion, rendered as `"2h 20m"` or `"10m"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Eta {
    pub seconds: u64,
}

impl Eta {
    pub fn from_blocks(blocks: u64, block_time_secs: u64) -> Self {
        Self {
            seconds: blocks.saturating_mul(block_time_secs),
        }
    }

    pub fn hours(&self) -> u64 {
        self.seconds / SECONDS_PER_HOUR
    }

    /// Whole minutes past the last full hour.
    pub fn minutes(&self) -> u64 {
        (self.seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.hours();
        if hours > 0 {
            write!(f, "{}h {}m", hours, self.minutes())
        } else {
            write!(f, "{}m", self.minutes())
        }
    }
}
