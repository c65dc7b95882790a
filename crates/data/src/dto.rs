//! Wire shapes of the THORNode REST endpoints.
//!
//! Counters arrive as JSON numbers and amounts as integer strings, but both
//! forms are accepted everywhere. Unparseable numbers read as absent.

use serde::{Deserialize, Deserializer};
use streamscope_domain::entities::{PoolState, StreamingSwapRecord, SwapLeg};
use streamscope_domain::memo::{ParsedMemo, parse_memo};
use streamscope_domain::value_objects::{Amount, BASE_DECIMALS};
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    Text(String),
    /// Negative, fractional or otherwise unusable values.
    Other(serde_json::Value),
}

fn lenient_u128<'de, D>(deserializer: D) -> Result<Option<u128>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrString::Number(n)) => Some(u128::from(n)),
        Some(NumberOrString::Text(s)) => s.trim().parse().ok(),
        Some(NumberOrString::Other(_)) | None => None,
    })
}

fn to_u64(value: Option<u128>) -> Option<u64> {
    value.and_then(|v| u64::try_from(v).ok())
}

/// Entry of `GET /pools`.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolDto {
    pub asset: String,
    #[serde(default)]
    pub balance_asset: String,
    #[serde(default)]
    pub balance_rune: String,
    #[serde(default)]
    pub decimals: Option<u8>,
    /// USD price of one unit of asset, in 1e8 units.
    #[serde(default)]
    pub asset_tor_price: Option<String>,
}

impl From<PoolDto> for PoolState {
    fn from(dto: PoolDto) -> Self {
        // Zero decimals is how the node reports "unknown".
        let decimals = dto.decimals.filter(|d| *d > 0).unwrap_or(BASE_DECIMALS);
        let mut pool =
            PoolState::new(dto.asset, &dto.balance_asset, &dto.balance_rune).with_decimals(decimals);
        if let Some(price) = dto
            .asset_tor_price
            .as_deref()
            .and_then(|p| Amount::parse(p, BASE_DECIMALS))
        {
            pool = pool.with_usd_price(price.to_decimal());
        }
        pool
    }
}

/// Entry of `GET /swaps/streaming`.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamingSwapDto {
    pub tx_id: String,
    #[serde(default, deserialize_with = "lenient_u128")]
    pub count: Option<u128>,
    #[serde(default, deserialize_with = "lenient_u128")]
    pub quantity: Option<u128>,
    #[serde(default, deserialize_with = "lenient_u128")]
    pub interval: Option<u128>,
    #[serde(default)]
    pub source_asset: String,
    #[serde(default)]
    pub target_asset: String,
    #[serde(default, deserialize_with = "lenient_u128")]
    pub deposit: Option<u128>,
    #[serde(default, deserialize_with = "lenient_u128")]
    pub trade_target: Option<u128>,
}

impl From<StreamingSwapDto> for StreamingSwapRecord {
    fn from(dto: StreamingSwapDto) -> Self {
        let quantity = to_u64(dto.quantity).filter(|q| *q > 0).unwrap_or(1);
        let record = StreamingSwapRecord::new(
            dto.tx_id,
            to_u64(dto.count).unwrap_or(0),
            quantity,
            to_u64(dto.interval).unwrap_or(0),
            dto.source_asset,
            dto.target_asset,
            dto.deposit.unwrap_or(0),
        );
        match dto.trade_target {
            Some(target) => record.with_trade_target(target),
            None => record,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinDto {
    pub asset: String,
    #[serde(default, deserialize_with = "lenient_u128")]
    pub amount: Option<u128>,
}

impl CoinDto {
    fn to_leg(&self) -> SwapLeg {
        SwapLeg::from_base_units(self.asset.clone(), self.amount.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TxDto {
    #[serde(default)]
    pub coins: Vec<CoinDto>,
    #[serde(default)]
    pub memo: Option<String>,
}

/// Body of `GET /tx/status/{hash}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TxStatusDto {
    #[serde(default)]
    pub tx: Option<TxDto>,
    #[serde(default)]
    pub out_txs: Option<Vec<TxDto>>,
}

/// The parts of a transaction status the swap board reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxDetail {
    /// Decoded memo of the inbound transaction.
    pub memo: Option<ParsedMemo>,
    /// First coin of the first outbound transaction.
    pub outbound: Option<SwapLeg>,
}

impl From<TxStatusDto> for TxDetail {
    fn from(dto: TxStatusDto) -> Self {
        let memo = dto
            .tx
            .as_ref()
            .and_then(|tx| tx.memo.as_deref())
            .map(parse_memo);
        let outbound = dto
            .out_txs
            .as_ref()
            .and_then(|txs| txs.first())
            .and_then(|tx| tx.coins.first())
            .map(CoinDto::to_leg);
        if outbound.is_none() {
            debug!("Transaction has no outbound coin yet");
        }
        Self { memo, outbound }
    }
}
