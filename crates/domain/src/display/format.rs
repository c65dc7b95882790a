use crate::value_objects::Amount;
use rust_decimal::Decimal;

/// Compact USD label: `$1.2B`, `$3.4M`, `$5.6K` or `$7.89`.
pub fn format_usd_compact(value: Decimal) -> String {
    let billion = Decimal::from(1_000_000_000u64);
    let million = Decimal::from(1_000_000u64);
    let thousand = Decimal::from(1_000u64);

    if value >= billion {
        format!("${:.1}B", (value / billion).round_dp(1))
    } else if value >= million {
        format!("${:.1}M", (value / million).round_dp(1))
    } else if value >= thousand {
        format!("${:.1}K", (value / thousand).round_dp(1))
    } else {
        format!("${:.2}", value.round_dp(2))
    }
}

/// Keeps the first and last `keep` characters, `bc1qxy...7kv8f3`.
///
/// Addresses of at most `2 * keep` characters are returned unchanged.
pub fn shorten_address(address: &str, keep: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= keep * 2 {
        return address.to_string();
    }
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{head}...{tail}")
}

/// 1e8 base units as a 4-place decimal, `-` for zero.
pub fn format_base_amount(units: u128) -> String {
    if units == 0 {
        return "-".to_string();
    }
    format!("{:.4}", Amount::from_base_units(units).to_decimal().round_dp(4))
}
