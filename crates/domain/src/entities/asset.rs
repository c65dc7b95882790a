use crate::errors::AssetError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Chain of the native settlement asset.
pub const NATIVE_CHAIN: &str = "THOR";
/// Symbol of the native settlement asset.
pub const NATIVE_SYMBOL: &str = "RUNE";

/// Layer-1 separator, `BTC.BTC`.
const LAYER1_SEPARATOR: char = '.';
/// Synth separator used in swap telemetry, `BTC/BTC`.
const SYNTH_SEPARATOR: char = '/';
/// Trade-asset separator used in swap telemetry, `BTC~BTC`.
const TRADE_SEPARATOR: char = '~';

/// A parsed `<chain>.<symbol>[-<id>]` asset tag.
///
/// Values only come out of the parsers below, so `chain` and `symbol` always
/// stem from a tag with exactly two segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AssetId {
    chain: String,
    symbol: String,
    ticker: String,
    is_synth: bool,
    is_trade_asset: bool,
}

impl AssetId {
    fn from_parts(chain: &str, symbol: &str) -> Self {
        let ticker = symbol.split('-').next().unwrap_or_default();
        Self {
            chain: chain.to_string(),
            symbol: symbol.to_string(),
            ticker: ticker.to_string(),
            is_synth: false,
            is_trade_asset: false,
        }
    }

    fn split_exact(tag: &str, separator: char) -> Result<(&str, &str), AssetError> {
        if tag.is_empty() {
            return Err(AssetError::Empty);
        }
        let parts: Vec<&str> = tag.split(separator).collect();
        match parts.as_slice() {
            [chain, symbol] => Ok((chain, symbol)),
            _ => Err(AssetError::SegmentCount {
                tag: tag.to_string(),
                found: parts.len(),
            }),
        }
    }

    /// Parses a layer-1 tag such as `ETH.USDC-0XA0B8...`.
    ///
    /// Returns `None` unless splitting on `.` yields exactly two segments.
    pub fn parse(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }

    /// Parses a tag written in any of the layer-1 (`.`), synth (`/`) or
    /// trade-asset (`~`) notations, recording the notation in the flags.
    pub fn from_any_notation(tag: &str) -> Option<Self> {
        let (separator, is_synth, is_trade_asset) = if tag.contains(TRADE_SEPARATOR) {
            (TRADE_SEPARATOR, false, true)
        } else if tag.contains(SYNTH_SEPARATOR) {
            (SYNTH_SEPARATOR, true, false)
        } else {
            (LAYER1_SEPARATOR, false, false)
        };

        let (chain, symbol) = Self::split_exact(tag, separator).ok()?;
        let mut id = Self::from_parts(chain, symbol);
        id.is_synth = is_synth;
        id.is_trade_asset = is_trade_asset;
        Some(id)
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Symbol up to its first `-`, e.g. `USDC` for `USDC-0XA0B8...`.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn is_synth(&self) -> bool {
        self.is_synth
    }

    pub fn is_trade_asset(&self) -> bool {
        self.is_trade_asset
    }

    /// Whether this is the native settlement asset, `THOR.RUNE`.
    pub fn is_native_rune(&self) -> bool {
        self.chain == NATIVE_CHAIN && self.symbol == NATIVE_SYMBOL
    }

    /// Canonical `<chain>.<symbol>` form. The ticker is not part of it.
    pub fn format(&self) -> String {
        format!("{}{}{}", self.chain, LAYER1_SEPARATOR, self.symbol)
    }

    /// Copy with the synth and trade-asset flags cleared.
    ///
    /// Pools are always keyed by the underlying layer-1 asset.
    #[must_use]
    pub fn normalize_for_pool_lookup(&self) -> Self {
        Self {
            is_synth: false,
            is_trade_asset: false,
            ..self.clone()
        }
    }
}

impl FromStr for AssetId {
    type Err = AssetError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let (chain, symbol) = Self::split_exact(tag, LAYER1_SEPARATOR)?;
        Ok(Self::from_parts(chain, symbol))
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_round_trip() {
        for tag in [
            "BTC.BTC",
            "ETH.USDC-0XA0B86991C6218B36C1D19D4A2E9EB0CE3606EB48",
            "BNB.BUSD-BD1",
            "THOR.RUNE",
        ] {
            let id = AssetId::parse(tag).unwrap();
            assert_eq!(id.format(), tag);
            assert_eq!(id.to_string(), tag);
        }
    }

    #[test]
    fn test_ticker_is_symbol_prefix() {
        let id = AssetId::parse("ETH.USDT-0XDAC17F958D2EE523A2206206994597C13D831EC7").unwrap();
        assert_eq!(id.chain(), "ETH");
        assert_eq!(id.ticker(), "USDT");

        let plain = AssetId::parse("DOGE.DOGE").unwrap();
        assert_eq!(plain.ticker(), "DOGE");
    }

    #[test]
    fn test_parse_rejects_wrong_segment_count() {
        assert!(AssetId::parse("malformed").is_none());
        assert!(AssetId::parse("").is_none());
        assert!(AssetId::parse("A.B.C").is_none());

        let err = "A.B.C".parse::<AssetId>().unwrap_err();
        assert_eq!(
            err,
            AssetError::SegmentCount {
                tag: "A.B.C".to_string(),
                found: 3
            }
        );
        assert_eq!("".parse::<AssetId>().unwrap_err(), AssetError::Empty);
    }

    #[test]
    fn test_parse_is_strict_about_separator() {
        // Synth notation is not a layer-1 tag.
        assert!(AssetId::parse("BTC/BTC").is_none());
        let parsed = AssetId::parse("BTC.BTC").unwrap();
        assert!(!parsed.is_synth());
        assert!(!parsed.is_trade_asset());
    }

    #[test]
    fn test_any_notation_sets_flags() {
        let synth = AssetId::from_any_notation("BTC/BTC").unwrap();
        assert!(synth.is_synth());
        assert_eq!(synth.format(), "BTC.BTC");

        let trade = AssetId::from_any_notation("ETH~ETH").unwrap();
        assert!(trade.is_trade_asset());
        assert!(!trade.is_synth());

        let l1 = AssetId::from_any_notation("GAIA.ATOM").unwrap();
        assert!(!l1.is_synth() && !l1.is_trade_asset());

        assert!(AssetId::from_any_notation("BTC/BTC/BTC").is_none());
    }

    #[test]
    fn test_normalize_clears_flags() {
        let synth = AssetId::from_any_notation("AVAX/AVAX").unwrap();
        let normalized = synth.normalize_for_pool_lookup();
        assert!(!normalized.is_synth());
        assert!(!normalized.is_trade_asset());
        assert_eq!(normalized, AssetId::parse("AVAX.AVAX").unwrap());
        // Original is untouched.
        assert!(synth.is_synth());
    }

    #[test]
    fn test_native_rune() {
        assert!(AssetId::parse("THOR.RUNE").unwrap().is_native_rune());
        assert!(AssetId::from_any_notation("THOR~RUNE").unwrap().is_native_rune());
        assert!(!AssetId::parse("BTC.BTC").unwrap().is_native_rune());
    }
}
