//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use streamscope_domain::prelude::*;
//! ```

// Entities
pub use crate::entities::{AssetId, PoolState, StreamingSwapRecord, SwapLeg};

// Errors
pub use crate::errors::AssetError;

// Memo decoding
pub use crate::memo::{ParsedMemo, SwapMemo, parse_memo};

// Projection
pub use crate::math::projection::{
    ProjectionConfig, StreamingSwapProjector, SwapProjection, project,
};

// Valuation
pub use crate::math::valuation::{
    AssetRef, PoolValuationEngine, PriceSource, ValuationConfig, amount_to_usd, usd_per_rune,
};

// Value objects
pub use crate::value_objects::{Amount, Eta, Percentage, Price, SwapProgressView};
