use primitive_types::U256;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

/// Decimal precision of RUNE and of every THORNode-normalised amount.
pub const BASE_DECIMALS: u8 = 8;

/// An on-chain quantity in base units together with its decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount {
    pub raw: U256,
    pub decimals: u8,
}

impl Amount {
    pub fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    pub fn zero(decimals: u8) -> Self {
        Self::new(U256::zero(), decimals)
    }

    /// Amount in 1e8 base units, the scale used for RUNE and swap deposits.
    pub fn from_base_units(units: u128) -> Self {
        Self::new(U256::from(units), BASE_DECIMALS)
    }

    /// Parses an integer-as-string such as `"12500000000"`.
    ///
    /// Returns `None` for anything that is not a non-negative decimal integer.
    pub fn parse(digits: &str, decimals: u8) -> Option<Self> {
        let digits = digits.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        U256::from_dec_str(digits)
            .ok()
            .map(|raw| Self::new(raw, decimals))
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Scales the raw value down by `10^decimals`.
    ///
    /// Values outside the `Decimal` range scale to zero.
    pub fn to_decimal(&self) -> Decimal {
        if self.raw > U256::from(u128::MAX) {
            return Decimal::ZERO;
        }
        let Some(mut d) = Decimal::from_u128(self.raw.as_u128()) else {
            return Decimal::ZERO;
        };
        if d.set_scale(u32::from(self.decimals)).is_err() {
            return Decimal::ZERO;
        }
        d.normalize()
    }
}
