//! Valuation and progress core for THORChain pool and streaming swap snapshots.
//!
//! Everything in this crate is a pure function of the snapshot it is given:
//! - [`entities::AssetId`] parses `<chain>.<symbol>[-<id>]` asset tags
//! - [`math::valuation`] prices RUNE from anchor pools and values any asset in USD
//! - [`math::projection`] turns swap counters into completion and ETA
//! - [`memo`] decodes colon-delimited transaction memos
//! - [`display`] formats the results for a presentation layer
//!
//! Malformed input degrades to zero valuations and `None` fields instead of
//! errors.

/// Prelude module for convenient imports.
pub mod prelude;

/// Presentation helpers.
pub mod display;
/// Asset, pool and swap snapshots.
pub mod entities;
/// Error types.
pub mod errors;
/// Valuation and projection math.
pub mod math;
/// Memo decoding.
pub mod memo;
/// Amounts, prices, percentages and ETAs.
pub mod value_objects;
