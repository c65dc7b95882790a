use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A percentage in points, `40` meaning 40%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Percentage(pub Decimal);

impl Percentage {
    /// `part / whole * 100`; zero when `whole` is zero.
    pub fn from_ratio(part: u64, whole: u64) -> Self {
        if whole == 0 {
            return Self(Decimal::ZERO);
        }
        Self(Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0.round_dp(1))
    }
}
