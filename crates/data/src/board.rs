//! Assembles the streaming swap board from one round of snapshots.

use crate::dto::TxDetail;
use crate::provider::SnapshotProvider;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::sync::Arc;
use streamscope_domain::math::projection::StreamingSwapProjector;
use streamscope_domain::math::valuation::PoolValuationEngine;
use streamscope_domain::memo::ParsedMemo;
use streamscope_domain::value_objects::SwapProgressView;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Everything a presentation layer needs to draw the board.
#[derive(Debug, Clone)]
pub struct SwapBoard {
    pub usd_per_rune: Decimal,
    /// USD value of all deposits in the snapshot, including dropped swaps.
    pub total_deposit_usd: Decimal,
    /// Swaps whose detail lookup succeeded, in snapshot order.
    pub swaps: Vec<SwapProgressView>,
    /// Swaps dropped because their detail lookup failed.
    pub dropped: usize,
}

impl SwapBoard {
    /// Fetches pools and streaming swaps, then looks up every swap's
    /// transaction detail concurrently.
    ///
    /// A failed detail lookup drops that swap; it is not retried.
    ///
    /// # Errors
    /// Returns an error if the pool or streaming swap snapshot cannot be fetched.
    pub async fn collect(
        provider: Arc<dyn SnapshotProvider>,
        valuation: &PoolValuationEngine,
        projector: &StreamingSwapProjector,
    ) -> Result<Self> {
        let pools = provider.fetch_pools().await.context("failed to fetch pools")?;
        let records = provider
            .fetch_streaming_swaps()
            .await
            .context("failed to fetch streaming swaps")?;

        let total = records.len();
        let usd_per_rune = valuation.usd_per_rune(&pools);
        let total_deposit_usd = valuation.total_deposit_usd(&records, &pools);

        let mut lookups = JoinSet::new();
        for (index, record) in records.iter().enumerate() {
            let provider = Arc::clone(&provider);
            let tx_id = record.tx_id.clone();
            lookups.spawn(async move {
                let detail = provider.fetch_tx_detail(&tx_id).await;
                (index, tx_id, detail)
            });
        }

        let mut details: Vec<Option<TxDetail>> = vec![None; total];
        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok((index, _, Ok(detail))) => details[index] = Some(detail),
                Ok((_, tx_id, Err(err))) => {
                    warn!(%tx_id, error = %err, "Dropping swap, detail lookup failed");
                }
                Err(err) => warn!(error = %err, "Detail lookup task failed"),
            }
        }

        let swaps: Vec<SwapProgressView> = records
            .into_iter()
            .zip(details)
            .filter_map(|(record, detail)| {
                detail.map(|d| {
                    let memo = d.memo.as_ref().and_then(ParsedMemo::as_swap).cloned();
                    SwapProgressView::build(record, d.outbound, projector, valuation, &pools)
                        .with_memo(memo)
                })
            })
            .collect();
        let dropped = total - swaps.len();

        info!(
            swaps = swaps.len(),
            dropped,
            %usd_per_rune,
            %total_deposit_usd,
            "Collected streaming swap board"
        );

        Ok(Self {
            usd_per_rune,
            total_deposit_usd,
            swaps,
            dropped,
        })
    }
}
