//! Decoder for colon-delimited transaction memos.
//!
//! ```text
//! SWAP:ASSET:DESTADDR:LIMIT/INTERVAL/QUANTITY:AFFILIATE:FEE
//! ```
//!
//! Decoding never fails. Missing or malformed segments come back as `None`.

use crate::entities::{AssetId, StreamingSwapRecord};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

const SEGMENT_SEPARATOR: char = ':';
const STREAMING_SEPARATOR: char = '/';
const SWAP_KIND: &str = "swap";

/// Fields of a `swap` memo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapMemo {
    pub destination_asset: Option<String>,
    pub destination_address: Option<String>,
    /// Minimum output, kept as written.
    pub price_limit: Option<String>,
    pub interval_blocks: Option<u64>,
    pub quantity: Option<u64>,
    pub affiliate_address: Option<String>,
    /// Affiliate fee, kept as written.
    pub affiliate_fee: Option<String>,
}

impl SwapMemo {
    pub fn destination_asset_id(&self) -> Option<AssetId> {
        self.destination_asset
            .as_deref()
            .and_then(AssetId::from_any_notation)
    }

    /// Whether the streaming parameters and target asset in this memo agree
    /// with a swap record. Fields absent from the memo are not compared.
    pub fn agrees_with(&self, record: &StreamingSwapRecord) -> bool {
        let interval_ok = self
            .interval_blocks
            .is_none_or(|i| i == record.interval_blocks);
        let quantity_ok = self.quantity.is_none_or(|q| q == record.quantity);
        let target_ok = match (
            self.destination_asset_id(),
            AssetId::from_any_notation(&record.target_asset),
        ) {
            (Some(memo), Some(swap)) => memo.format() == swap.format(),
            (None, _) => true,
            (Some(_), None) => false,
        };
        interval_ok && quantity_ok && target_ok
    }
}

/// A decoded memo, keyed by its lowercase type.
///
/// Serializes flat with the memo's own type under `"type"`, `null` when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedMemo {
    /// Empty memo.
    Empty,
    Swap(SwapMemo),
    /// Any memo type without a dedicated decoder (withdraw, bond, ...).
    Other { kind: String, asset: Option<String> },
}

impl ParsedMemo {
    /// Lowercase memo type, `None` for an empty memo.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Swap(_) => Some(SWAP_KIND),
            Self::Other { kind, .. } => Some(kind.as_str()),
        }
    }

    /// Asset named in segment 1.
    pub fn asset(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Swap(swap) => swap.destination_asset.as_deref(),
            Self::Other { asset, .. } => asset.as_deref(),
        }
    }

    pub fn as_swap(&self) -> Option<&SwapMemo> {
        match self {
            Self::Swap(swap) => Some(swap),
            _ => None,
        }
    }
}

impl Serialize for ParsedMemo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", &None::<&str>)?;
                map.end()
            }
            Self::Swap(swap) => {
                let mut map = serializer.serialize_map(Some(8))?;
                map.serialize_entry("type", SWAP_KIND)?;
                map.serialize_entry("destination_asset", &swap.destination_asset)?;
                map.serialize_entry("destination_address", &swap.destination_address)?;
                map.serialize_entry("price_limit", &swap.price_limit)?;
                map.serialize_entry("interval_blocks", &swap.interval_blocks)?;
                map.serialize_entry("quantity", &swap.quantity)?;
                map.serialize_entry("affiliate_address", &swap.affiliate_address)?;
                map.serialize_entry("affiliate_fee", &swap.affiliate_fee)?;
                map.end()
            }
            Self::Other { kind, asset } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", kind)?;
                map.serialize_entry("asset", asset)?;
                map.end()
            }
        }
    }
}

fn non_empty(segment: Option<&str>) -> Option<String> {
    segment.filter(|s| !s.is_empty()).map(str::to_string)
}

fn parse_count(segment: Option<&str>) -> Option<u64> {
    segment.and_then(|s| s.parse().ok())
}

/// Decodes a memo string.
pub fn parse_memo(memo: &str) -> ParsedMemo {
    if memo.is_empty() {
        return ParsedMemo::Empty;
    }

    let parts: Vec<&str> = memo.split(SEGMENT_SEPARATOR).collect();
    let segment = |i: usize| parts.get(i).copied();
    let kind = parts[0].to_lowercase();

    if kind != SWAP_KIND {
        return ParsedMemo::Other {
            kind,
            asset: non_empty(segment(1)),
        };
    }

    let streaming: Vec<&str> = segment(3)
        .filter(|s| !s.is_empty())
        .map(|s| s.split(STREAMING_SEPARATOR).collect())
        .unwrap_or_default();
    let field = |i: usize| streaming.get(i).copied();

    ParsedMemo::Swap(SwapMemo {
        destination_asset: non_empty(segment(1)),
        destination_address: non_empty(segment(2)),
        price_limit: non_empty(field(0)),
        interval_blocks: parse_count(field(1)),
        quantity: parse_count(field(2)),
        affiliate_address: non_empty(segment(4)),
        affiliate_fee: non_empty(segment(5)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_swap_memo() {
        let memo = parse_memo("SWAP:BTC.BTC:bc1qxyz:1000000/10/5:aff123:500000");
        assert_eq!(memo.kind(), Some("swap"));
        assert_eq!(
            memo,
            ParsedMemo::Swap(SwapMemo {
                destination_asset: Some("BTC.BTC".to_string()),
                destination_address: Some("bc1qxyz".to_string()),
                price_limit: Some("1000000".to_string()),
                interval_blocks: Some(10),
                quantity: Some(5),
                affiliate_address: Some("aff123".to_string()),
                affiliate_fee: Some("500000".to_string()),
            })
        );
    }

    #[test]
    fn test_parse_empty_memo() {
        let memo = parse_memo("");
        assert_eq!(memo, ParsedMemo::Empty);
        assert_eq!(memo.kind(), None);
    }

    #[test]
    fn test_parse_other_kind() {
        assert_eq!(
            parse_memo("NOOP"),
            ParsedMemo::Other {
                kind: "noop".to_string(),
                asset: None
            }
        );
        let withdraw = parse_memo("WITHDRAW:ETH.ETH:10000");
        assert_eq!(withdraw.kind(), Some("withdraw"));
        assert_eq!(withdraw.asset(), Some("ETH.ETH"));
    }

    #[test]
    fn test_swap_kind_is_case_insensitive() {
        let memo = parse_memo("swap:ETH.ETH:0xabc");
        let swap = memo.as_swap().unwrap();
        assert_eq!(swap.destination_address.as_deref(), Some("0xabc"));
        assert_eq!(swap.price_limit, None);
        assert_eq!(swap.interval_blocks, None);
        assert_eq!(swap.quantity, None);
        assert_eq!(swap.affiliate_address, None);
    }

    #[test]
    fn test_partial_streaming_segment() {
        let swap = parse_memo("SWAP:BTC.BTC:bc1q:500").as_swap().cloned().unwrap();
        assert_eq!(swap.price_limit.as_deref(), Some("500"));
        assert_eq!(swap.interval_blocks, None);

        let swap = parse_memo("SWAP:BTC.BTC:bc1q:/3").as_swap().cloned().unwrap();
        assert_eq!(swap.price_limit, None);
        assert_eq!(swap.interval_blocks, Some(3));
        assert_eq!(swap.quantity, None);
    }

    #[test]
    fn test_non_numeric_streaming_fields_are_none() {
        let swap = parse_memo("SWAP:BTC.BTC:bc1q:0/ten/x5:aff:25")
            .as_swap()
            .cloned()
            .unwrap();
        assert_eq!(swap.price_limit.as_deref(), Some("0"));
        assert_eq!(swap.interval_blocks, None);
        assert_eq!(swap.quantity, None);
        // Later segments still decode.
        assert_eq!(swap.affiliate_address.as_deref(), Some("aff"));
        assert_eq!(swap.affiliate_fee.as_deref(), Some("25"));
    }

    #[test]
    fn test_empty_segments_are_none() {
        let swap = parse_memo("SWAP::").as_swap().cloned().unwrap();
        assert_eq!(swap, SwapMemo::default());
    }

    #[test]
    fn test_serializes_keyed_by_memo_type() {
        use serde_json::json;

        assert_eq!(serde_json::to_value(parse_memo("")).unwrap(), json!({"type": null}));
        assert_eq!(
            serde_json::to_value(parse_memo("NOOP")).unwrap(),
            json!({"type": "noop", "asset": null})
        );
        assert_eq!(
            serde_json::to_value(parse_memo("WITHDRAW:ETH.ETH:10000")).unwrap(),
            json!({"type": "withdraw", "asset": "ETH.ETH"})
        );

        let swap = serde_json::to_value(parse_memo("SWAP:BTC.BTC:bc1qxyz:1000000/10/5")).unwrap();
        assert_eq!(swap["type"], "swap");
        assert_eq!(swap["destination_asset"], "BTC.BTC");
        assert_eq!(swap["interval_blocks"], 10);
        assert_eq!(swap["quantity"], 5);
        assert_eq!(swap["affiliate_fee"], serde_json::Value::Null);
    }

    #[test]
    fn test_agrees_with_record() {
        let record = StreamingSwapRecord::new("TX", 1, 5, 10, "ETH.ETH", "BTC.BTC", 100);
        let memo = parse_memo("SWAP:BTC.BTC:bc1qxyz:1000000/10/5");
        assert!(memo.as_swap().unwrap().agrees_with(&record));

        let wrong_quantity = parse_memo("SWAP:BTC.BTC:bc1qxyz:1000000/10/6");
        assert!(!wrong_quantity.as_swap().unwrap().agrees_with(&record));

        let synth_target = parse_memo("SWAP:BTC/BTC:thor1abc");
        assert!(synth_target.as_swap().unwrap().agrees_with(&record));

        let other_asset = parse_memo("SWAP:ETH.ETH:0xabc");
        assert!(!other_asset.as_swap().unwrap().agrees_with(&record));
    }
}
