pub mod asset;
pub mod pool;
pub mod streaming_swap;

// Re-export for easier access
pub use asset::AssetId;
pub use pool::PoolState;
pub use streaming_swap::{StreamingSwapRecord, SwapLeg};
