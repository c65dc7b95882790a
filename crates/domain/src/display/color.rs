/// Palette for assets without a brand color.
pub const DEFAULT_PALETTE: [&str; 9] = [
    "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272", "#fc8452", "#9a60b4",
    "#ea7ccc",
];

fn brand_color(asset: &str) -> Option<&'static str> {
    let color = match asset {
        "BTC.BTC" => "#EF8F1C",
        "ETH.ETH" => "#627EEA",
        "LTC.LTC" => "#335E9D",
        "DOGE.DOGE" => "#BCA23E",
        "BNB.BNB" | "BSC.BNB" => "#F0BC18",
        "BCH.BCH" => "#4DCA48",
        "AVAX.AVAX" => "#E84142",
        "GAIA.ATOM" => "#303249",
        "ETH.USDC-0XA0B86991C6218B36C1D19D4A2E9EB0CE3606EB48"
        | "AVAX.USDC-0XB97EF9EF8734C71904D8002F8B6BC66DD9C48A6E" => "#2775ca",
        "BNB.BUSD-BD1" => "#ffc300",
        "ETH.USDT-0XDAC17F958D2EE523A2206206994597C13D831EC7" => "#26A17B",
        _ => return None,
    };
    Some(color)
}

/// 64-bit FNV-1a.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, b| (hash ^ u64::from(*b)).wrapping_mul(PRIME))
}

/// Chart color for an asset tag. Same tag, same color.
pub fn asset_color(asset: &str) -> &'static str {
    brand_color(asset).unwrap_or_else(|| {
        let index = fnv1a(asset.as_bytes()) % DEFAULT_PALETTE.len() as u64;
        DEFAULT_PALETTE[index as usize]
    })
}
