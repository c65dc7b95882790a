use crate::dto::TxDetail;
use anyhow::Result;
use async_trait::async_trait;
use streamscope_domain::entities::{PoolState, StreamingSwapRecord};

/// Source of pool and streaming swap snapshots.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Current pool depths.
    async fn fetch_pools(&self) -> Result<Vec<PoolState>>;

    /// Streaming swaps currently in flight.
    async fn fetch_streaming_swaps(&self) -> Result<Vec<StreamingSwapRecord>>;

    /// Inbound and outbound coins of one transaction.
    async fn fetch_tx_detail(&self, tx_id: &str) -> Result<TxDetail>;
}
