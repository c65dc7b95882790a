//! Command Line Interface for streamscope.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::sync::Arc;
use streamscope_data::{ProviderConfig, SnapshotProvider, SwapBoard, ThornodeProvider};
use streamscope_domain::display::{
    BoardStyle, asset_color, format_base_amount, format_usd_compact, shorten_address,
};
use streamscope_domain::prelude::*;
use tracing::info;

#[derive(Parser)]
#[command(name = "streamscope")]
#[command(about = "THORChain streaming swap progress and USD valuation", long_about = None)]
struct Cli {
    /// THORNode API root (overrides THORNODE_URL)
    #[arg(long, global = true)]
    node_url: Option<String>,

    /// Board style overrides as JSON (e.g., '{"colors":{"secondary_text":"#999"}}')
    #[arg(long, global = true)]
    style: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show in-flight streaming swaps with progress and ETA
    Swaps,
    /// Show the depth-weighted USD price of RUNE
    RunePrice,
    /// Value an asset amount in USD
    Value {
        /// Asset tag (e.g., BTC.BTC, BTC/BTC, THOR.RUNE)
        #[arg(short, long)]
        asset: String,

        /// Amount in 1e8 base units
        #[arg(long)]
        amount: u128,
    },
    /// Decode a transaction memo
    Memo {
        /// Memo string (e.g., SWAP:BTC.BTC:bc1q...:0/10/5)
        memo: String,
    },
    /// Project progress for streaming swap counters
    Eta {
        /// Total number of legs
        #[arg(long)]
        quantity: u64,

        /// Legs executed so far
        #[arg(long, default_value_t = 0)]
        count: u64,

        /// Blocks between legs
        #[arg(long)]
        interval: u64,
    },
}

fn thornode(node_url: Option<&str>) -> Result<ThornodeProvider> {
    let mut config = ProviderConfig::from_env();
    if let Some(url) = node_url {
        config = config.with_base_url(url);
    }
    info!(url = %config.base_url, "Using THORNode");
    ThornodeProvider::new(config)
}

/// `#rgb` or `#rrggbb` to channels; anything else (e.g. `inherit`) is `None`.
fn hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn paint(text: &str, color: &str) -> String {
    match hex_rgb(color) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m"),
        None => text.to_string(),
    }
}

fn print_board(board: &SwapBoard, style: &BoardStyle) {
    println!("{}", paint("Ongoing Streaming Swaps", &style.colors.primary_text));
    println!(
        "Amount: {} | Count: {} | RUNE: ${:.4}",
        if board.total_deposit_usd.is_zero() {
            "-".to_string()
        } else {
            format_usd_compact(board.total_deposit_usd)
        },
        board.swaps.len(),
        board.usd_per_rune.round_dp(4),
    );
    if board.dropped > 0 {
        println!("({} swaps without transaction detail omitted)", board.dropped);
    }
    println!("{}", "-".repeat(100));

    if board.swaps.is_empty() {
        println!("No active streaming swaps");
        return;
    }

    for view in &board.swaps {
        let output = view
            .output
            .as_ref()
            .map(|leg| {
                let asset = paint(&leg.asset, asset_color(&leg.asset));
                format!("{:.4} {}", leg.amount.round_dp(4), asset)
            })
            .unwrap_or_else(|| {
                let target = &view.record.target_asset;
                format!("... {}", paint(target, asset_color(target)))
            });
        println!(
            "{} {} -> {}",
            format_base_amount(view.record.deposit),
            paint(&view.input.asset, asset_color(&view.input.asset)),
            output
        );
        let detail = format!(
            "  {:>6} | TX: {} | {} Blocks/Swap | ETA: {} | Remaining: {} swaps | {}",
            view.projection.completion_percent.to_string(),
            shorten_address(&view.record.tx_id, 6),
            view.record.interval_blocks,
            view.projection.eta,
            view.projection.remaining_swaps,
            format_usd_compact(view.deposit_usd),
        );
        println!("{}", paint(&detail, &style.colors.secondary_text));
        if view.memo_agrees() == Some(false) {
            println!("  ! memo streaming parameters disagree with the swap state");
        }
    }
}

fn print_memo(memo: &ParsedMemo) {
    match memo {
        ParsedMemo::Empty => println!("Empty memo"),
        ParsedMemo::Swap(swap) => {
            let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
            let show_n = |v: Option<u64>| v.map_or_else(|| "-".to_string(), |n| n.to_string());
            println!("Type:        swap");
            println!("Asset:       {}", show(&swap.destination_asset));
            println!("Destination: {}", show(&swap.destination_address));
            println!("Limit:       {}", show(&swap.price_limit));
            println!("Interval:    {}", show_n(swap.interval_blocks));
            println!("Quantity:    {}", show_n(swap.quantity));
            println!("Affiliate:   {}", show(&swap.affiliate_address));
            println!("Fee:         {}", show(&swap.affiliate_fee));
        }
        ParsedMemo::Other { kind, asset } => {
            println!("Type:        {kind}");
            println!("Asset:       {}", asset.as_deref().unwrap_or("-"));
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let style = match &cli.style {
        Some(json) => BoardStyle::from_overrides(json).context("invalid --style JSON")?,
        None => BoardStyle::default(),
    };
    let valuation = PoolValuationEngine::default();
    let projector = StreamingSwapProjector::default();

    match &cli.command {
        Commands::Swaps => {
            let provider: Arc<dyn SnapshotProvider> = Arc::new(thornode(cli.node_url.as_deref())?);
            let board = SwapBoard::collect(provider, &valuation, &projector).await?;
            print_board(&board, &style);
        }
        Commands::RunePrice => {
            let pools = thornode(cli.node_url.as_deref())?.fetch_pools().await?;
            let price = valuation.usd_per_rune(&pools);
            println!("1 RUNE = ${:.4}", price.round_dp(4));
        }
        Commands::Value { asset, amount } => {
            let pools = thornode(cli.node_url.as_deref())?.fetch_pools().await?;
            let id = AssetId::from_any_notation(asset);
            let usd = match &id {
                Some(id) => valuation.amount_to_usd(id, *amount, &pools),
                None => {
                    println!("Unrecognised asset tag: {asset}");
                    return Ok(());
                }
            };
            println!(
                "{} {} = ${:.2}",
                format_base_amount(*amount),
                asset,
                usd.round_dp(2)
            );
        }
        Commands::Memo { memo } => {
            print_memo(&parse_memo(memo));
        }
        Commands::Eta {
            quantity,
            count,
            interval,
        } => {
            let record =
                StreamingSwapRecord::new("-", *count, *quantity, *interval, "", "", 0);
            let projection = projector.project(&record);
            println!("Completion: {}", projection.completion_percent);
            println!("Remaining:  {} swaps", projection.remaining_swaps);
            println!("ETA:        {}", projection.eta);
        }
    }

    Ok(())
}
