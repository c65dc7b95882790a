//! Snapshot ingestion from a THORChain indexing service.
//!
//! This crate provides:
//! - Wire DTOs for the THORNode pool, streaming swap and tx status endpoints
//! - The [`SnapshotProvider`] trait and its REST implementation
//! - [`SwapBoard`], one polling round joined with valuations and projections
//!
//! Scheduling is left to the caller; nothing here runs on a timer.

/// Streaming swap board assembly.
pub mod board;
/// THORNode wire shapes.
pub mod dto;
/// Snapshot provider trait.
pub mod provider;
/// THORNode REST provider.
pub mod thornode;

pub use board::SwapBoard;
pub use dto::TxDetail;
pub use provider::SnapshotProvider;
pub use thornode::{DEFAULT_THORNODE_URL, ProviderConfig, ThornodeProvider};
