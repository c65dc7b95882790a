use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A unit price of one asset quoted in another (RUNE or USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    pub value: Decimal,
}

impl Price {
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Ratio of two quantities, `None` when the denominator is zero.
    pub fn from_ratio(numerator: Decimal, denominator: Decimal) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        numerator.checked_div(denominator).map(Self::new)
    }

    /// Value of `quantity` units at this price, `None` on overflow.
    pub fn quote(&self, quantity: Decimal) -> Option<Decimal> {
        quantity.checked_mul(self.value)
    }
}
