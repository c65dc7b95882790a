//! USD valuation from pool depths.
//!
//! RUNE is priced in USD from a fixed set of stablecoin anchor pools. Every
//! other asset is priced in RUNE from its own pool and converted through that
//! rate.

use crate::entities::{AssetId, PoolState, StreamingSwapRecord};
use crate::value_objects::{Amount, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stablecoin pools used to impute the USD price of RUNE.
pub const DEFAULT_ANCHOR_POOLS: [&str; 4] = [
    "ETH.USDC-0XA0B86991C6218B36C1D19D4A2E9EB0CE3606EB48",
    "ETH.USDT-0XDAC17F958D2EE523A2206206994597C13D831EC7",
    "AVAX.USDC-0XB97EF9EF8734C71904D8002F8B6BC66DD9C48A6E",
    "BNB.BUSD-BD1",
];

/// Where the per-asset USD price comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceSource {
    /// `runeDepth / assetDepth * usdPerRune`.
    #[default]
    DepthRatio,
    /// The indexer's precomputed per-pool USD price.
    PoolUsdPrice,
}

/// Configuration for [`PoolValuationEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Pool tags whose depths price RUNE. Defaults to [`DEFAULT_ANCHOR_POOLS`].
    pub anchor_pools: Vec<String>,
    /// Per-asset price source. Defaults to [`PriceSource::DepthRatio`].
    pub price_source: PriceSource,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            anchor_pools: DEFAULT_ANCHOR_POOLS.iter().map(|s| s.to_string()).collect(),
            price_source: PriceSource::DepthRatio,
        }
    }
}

/// Asset argument accepted by [`PoolValuationEngine::amount_to_usd`].
#[derive(Debug, Clone, Copy)]
pub enum AssetRef<'a> {
    Tag(&'a str),
    Id(&'a AssetId),
}

impl<'a> From<&'a str> for AssetRef<'a> {
    fn from(tag: &'a str) -> Self {
        Self::Tag(tag)
    }
}

impl<'a> From<&'a String> for AssetRef<'a> {
    fn from(tag: &'a String) -> Self {
        Self::Tag(tag.as_str())
    }
}

impl<'a> From<&'a AssetId> for AssetRef<'a> {
    fn from(id: &'a AssetId) -> Self {
        Self::Id(id)
    }
}

impl AssetRef<'_> {
    fn resolve(self) -> Option<AssetId> {
        match self {
            Self::Tag(tag) => AssetId::parse(tag),
            Self::Id(id) => Some(id.clone()),
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Self::Tag(tag) if tag.is_empty())
    }
}

/// Stateless USD valuation over a pool snapshot.
#[derive(Debug, Clone, Default)]
pub struct PoolValuationEngine {
    config: ValuationConfig,
}

impl PoolValuationEngine {
    pub fn new(config: ValuationConfig) -> Self {
        Self { config }
    }

    fn is_anchor(&self, asset: &str) -> bool {
        self.config.anchor_pools.iter().any(|a| a == asset)
    }

    /// Depth-weighted USD price of one RUNE across the anchor pools.
    ///
    /// Sums scaled asset depth and scaled RUNE depth over every anchor pool
    /// and divides the totals. Zero when no anchor RUNE depth is present.
    pub fn usd_per_rune(&self, pools: &[PoolState]) -> Decimal {
        let totals = pools
            .iter()
            .filter(|p| self.is_anchor(&p.asset))
            .try_fold((Decimal::ZERO, Decimal::ZERO), |(asset, rune), p| {
                Some((
                    asset.checked_add(p.asset_depth_scaled())?,
                    rune.checked_add(p.rune_depth_scaled())?,
                ))
            });
        let Some((asset_total, rune_total)) = totals else {
            debug!(pools = pools.len(), "Anchor depth total overflowed, USD per RUNE is zero");
            return Decimal::ZERO;
        };

        match Price::from_ratio(asset_total, rune_total) {
            Some(price) => price.value,
            None => {
                debug!(pools = pools.len(), "No anchor RUNE depth, USD per RUNE is zero");
                Decimal::ZERO
            }
        }
    }

    /// USD value of `amount` base units (1e8 scale) of `asset`.
    ///
    /// Returns zero for empty input, an unparseable tag, a missing pool or an
    /// empty pool. Synth and trade-asset notations are valued at their
    /// layer-1 pool.
    pub fn amount_to_usd<'a>(
        &self,
        asset: impl Into<AssetRef<'a>>,
        amount: u128,
        pools: &[PoolState],
    ) -> Decimal {
        let asset = asset.into();
        if asset.is_empty() || amount == 0 || pools.is_empty() {
            debug!(?asset, amount, pools = pools.len(), "Invalid valuation input");
            return Decimal::ZERO;
        }
        let Some(id) = asset.resolve() else {
            debug!(?asset, "Unparseable asset tag, valuation is zero");
            return Decimal::ZERO;
        };
        let id = id.normalize_for_pool_lookup();
        let quantity = Amount::from_base_units(amount).to_decimal();

        if id.is_native_rune() {
            return Price::new(self.usd_per_rune(pools))
                .quote(quantity)
                .unwrap_or_else(|| {
                    debug!(%quantity, "RUNE valuation overflowed");
                    Decimal::ZERO
                });
        }

        let tag = id.format();
        let Some(pool) = pools.iter().find(|p| p.asset == tag) else {
            debug!(asset = %tag, "No pool found for asset");
            return Decimal::ZERO;
        };

        match self.config.price_source {
            PriceSource::DepthRatio => {
                let Some(price_in_rune) = pool.price_in_rune() else {
                    debug!(
                        asset = %tag,
                        asset_depth = %pool.asset_depth_scaled(),
                        rune_depth = %pool.rune_depth_scaled(),
                        "Invalid pool depths"
                    );
                    return Decimal::ZERO;
                };
                let usd_value = price_in_rune
                    .quote(quantity)
                    .and_then(|rune| rune.checked_mul(self.usd_per_rune(pools)));
                let Some(usd_value) = usd_value else {
                    debug!(asset = %tag, %quantity, price_in_rune = %price_in_rune.value, "Valuation overflowed");
                    return Decimal::ZERO;
                };
                debug!(asset = %tag, %quantity, price_in_rune = %price_in_rune.value, %usd_value, "Valued amount");
                usd_value
            }
            PriceSource::PoolUsdPrice => match pool.usd_price {
                Some(price) => Price::new(price).quote(quantity).unwrap_or_else(|| {
                    debug!(asset = %tag, %quantity, "Valuation overflowed");
                    Decimal::ZERO
                }),
                None => {
                    debug!(asset = %tag, "Pool carries no USD price");
                    Decimal::ZERO
                }
            },
        }
    }

    /// Total USD value of the deposits in a streaming swap snapshot.
    ///
    /// Swaps without a deposit or source asset are skipped. Source assets may
    /// be in synth or trade-asset notation.
    pub fn total_deposit_usd(&self, swaps: &[StreamingSwapRecord], pools: &[PoolState]) -> Decimal {
        if pools.is_empty() {
            debug!("No pools available for deposit valuation");
            return Decimal::ZERO;
        }
        swaps
            .iter()
            .filter(|s| s.deposit > 0 && !s.source_asset.is_empty())
            .filter_map(|s| {
                let id = AssetId::from_any_notation(&s.source_asset);
                if id.is_none() {
                    debug!(tx_id = %s.tx_id, source = %s.source_asset, "Skipping swap with malformed source asset");
                }
                id.map(|id| self.amount_to_usd(&id, s.deposit, pools))
            })
            .try_fold(Decimal::ZERO, |total, usd| total.checked_add(usd))
            .unwrap_or_else(|| {
                debug!(swaps = swaps.len(), "Deposit total overflowed");
                Decimal::ZERO
            })
    }
}

/// [`PoolValuationEngine::usd_per_rune`] with the default anchors.
pub fn usd_per_rune(pools: &[PoolState]) -> Decimal {
    PoolValuationEngine::default().usd_per_rune(pools)
}

/// [`PoolValuationEngine::amount_to_usd`] with the default configuration.
pub fn amount_to_usd<'a>(asset: impl Into<AssetRef<'a>>, amount: u128, pools: &[PoolState]) -> Decimal {
    PoolValuationEngine::default().amount_to_usd(asset, amount, pools)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const USDC: &str = "ETH.USDC-0XA0B86991C6218B36C1D19D4A2E9EB0CE3606EB48";
    const USDT: &str = "ETH.USDT-0XDAC17F958D2EE523A2206206994597C13D831EC7";

    fn anchors() -> Vec<PoolState> {
        vec![
            // 2000 USDC / 1000 RUNE
            PoolState::new(USDC, "200000000000", "100000000000"),
            // 6000 USDT (6 decimals) / 3000 RUNE
            PoolState::new(USDT, "6000000000", "300000000000").with_decimals(6),
        ]
    }

    fn snapshot() -> Vec<PoolState> {
        let mut pools = anchors();
        // 10 BTC / 50000 RUNE
        pools.push(PoolState::new("BTC.BTC", "1000000000", "5000000000000").with_usd_price(dec!(95000)));
        pools
    }

    #[test]
    fn test_usd_per_rune_equal_ratios() {
        assert_eq!(usd_per_rune(&anchors()), dec!(2));
    }

    #[test]
    fn test_usd_per_rune_is_depth_weighted() {
        let pools = vec![
            // 900 / 900 = 1.0
            PoolState::new(USDC, "90000000000", "90000000000"),
            // 300 / 100 = 3.0, thin pool
            PoolState::new(USDT, "30000000000", "10000000000"),
        ];
        // (900 + 300) / (900 + 100), not the mean of 1.0 and 3.0
        assert_eq!(usd_per_rune(&pools), dec!(1.2));
    }

    #[test]
    fn test_usd_per_rune_ignores_non_anchor_pools() {
        let mut pools = anchors();
        pools.push(PoolState::new("BTC.BTC", "1", "99999999999999"));
        assert_eq!(usd_per_rune(&pools), dec!(2));
    }

    #[test]
    fn test_usd_per_rune_without_anchors_is_zero() {
        assert_eq!(usd_per_rune(&[]), Decimal::ZERO);
        let drained = vec![PoolState::new(USDC, "100", "0")];
        assert_eq!(usd_per_rune(&drained), Decimal::ZERO);
    }

    #[test]
    fn test_custom_anchor_list() {
        let engine = PoolValuationEngine::new(ValuationConfig {
            anchor_pools: vec![USDC.to_string()],
            ..Default::default()
        });
        let pools = vec![
            PoolState::new(USDC, "100000000000", "100000000000"),
            PoolState::new(USDT, "30000000000", "10000000000"),
        ];
        assert_eq!(engine.usd_per_rune(&pools), dec!(1));
    }

    #[test]
    fn test_native_rune_skips_pool_lookup() {
        let pools = anchors();
        let value = amount_to_usd("THOR.RUNE", 250_000_000, &pools);
        assert_eq!(value, dec!(2.5) * usd_per_rune(&pools));
        assert_eq!(value, dec!(5));
    }

    #[test]
    fn test_amount_to_usd_depth_ratio() {
        // 1 BTC = 5000 RUNE, 1 RUNE = 2 USD
        let value = amount_to_usd("BTC.BTC", 100_000_000, &snapshot());
        assert_eq!(value, dec!(10000));
    }

    #[test]
    fn test_amount_to_usd_accepts_parsed_id() {
        let synth = AssetId::from_any_notation("BTC/BTC").unwrap();
        let value = amount_to_usd(&synth, 50_000_000, &snapshot());
        assert_eq!(value, dec!(5000));
    }

    #[test]
    fn test_amount_to_usd_degrades_to_zero() {
        let pools = snapshot();
        assert_eq!(amount_to_usd("", 100, &pools), Decimal::ZERO);
        assert_eq!(amount_to_usd("BTC.BTC", 0, &pools), Decimal::ZERO);
        assert_eq!(amount_to_usd("BTC.BTC", 100, &[]), Decimal::ZERO);
        assert_eq!(amount_to_usd("malformed", 100, &pools), Decimal::ZERO);
        assert_eq!(amount_to_usd("DOGE.DOGE", 100, &pools), Decimal::ZERO);

        let mut empty_pool = anchors();
        empty_pool.push(PoolState::new("LTC.LTC", "0", "100000000"));
        assert_eq!(amount_to_usd("LTC.LTC", 100, &empty_pool), Decimal::ZERO);
    }

    #[test]
    fn test_overflow_degrades_to_zero() {
        let mut pools = anchors();
        // One base unit of BTC against 10^10 RUNE.
        pools.push(PoolState::new("BTC.BTC", "1", "1000000000000000000"));
        let huge = 100_000_000_000_000_000_000u128;
        assert_eq!(amount_to_usd("BTC.BTC", huge, &pools), Decimal::ZERO);

        let swaps = vec![
            StreamingSwapRecord::new("A", 1, 10, 1, "BTC.BTC", "THOR.RUNE", huge),
            StreamingSwapRecord::new("B", 1, 10, 1, "THOR.RUNE", "BTC.BTC", 100_000_000),
        ];
        let total = PoolValuationEngine::default().total_deposit_usd(&swaps, &pools);
        assert_eq!(total, dec!(2));
    }

    #[test]
    fn test_anchor_total_overflow_is_zero() {
        let max = "79228162514264337593543950335";
        let pools = vec![
            PoolState::new(USDC, max, "100000000").with_decimals(0),
            PoolState::new(USDT, max, "100000000").with_decimals(0),
        ];
        assert_eq!(usd_per_rune(&pools), Decimal::ZERO);
    }

    #[test]
    fn test_pool_usd_price_source() {
        let engine = PoolValuationEngine::new(ValuationConfig {
            price_source: PriceSource::PoolUsdPrice,
            ..Default::default()
        });
        let pools = snapshot();
        assert_eq!(engine.amount_to_usd("BTC.BTC", 200_000_000, &pools), dec!(190000));
        // No precomputed price on the anchor pool.
        assert_eq!(engine.amount_to_usd(USDC, 100_000_000, &pools), Decimal::ZERO);
        // RUNE still goes through the anchors.
        assert_eq!(engine.amount_to_usd("THOR.RUNE", 100_000_000, &pools), dec!(2));
    }

    #[test]
    fn test_total_deposit_usd() {
        let pools = snapshot();
        let swaps = vec![
            StreamingSwapRecord::new("A", 1, 10, 1, "BTC.BTC", "THOR.RUNE", 100_000_000),
            StreamingSwapRecord::new("B", 1, 10, 1, "BTC/BTC", "ETH.ETH", 50_000_000),
            StreamingSwapRecord::new("C", 1, 10, 1, "THOR.RUNE", "BTC.BTC", 1_000_000_000),
            StreamingSwapRecord::new("D", 1, 10, 1, "BTC.BTC", "THOR.RUNE", 0),
            StreamingSwapRecord::new("E", 1, 10, 1, "", "THOR.RUNE", 100),
            StreamingSwapRecord::new("F", 1, 10, 1, "DOGE.DOGE", "THOR.RUNE", 100),
        ];
        let total = PoolValuationEngine::default().total_deposit_usd(&swaps, &pools);
        assert_eq!(total, dec!(10000) + dec!(5000) + dec!(20));
        assert_eq!(
            PoolValuationEngine::default().total_deposit_usd(&swaps, &[]),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ValuationConfig = serde_json::from_str(r#"{"price_source":"PoolUsdPrice"}"#).unwrap();
        assert_eq!(config.price_source, PriceSource::PoolUsdPrice);
        assert_eq!(config.anchor_pools.len(), DEFAULT_ANCHOR_POOLS.len());
    }
}
