//! Presentation helpers for the values the core produces.

pub mod color;
pub mod format;
pub mod style;

pub use color::asset_color;
pub use format::{format_base_amount, format_usd_compact, shorten_address};
pub use style::{BoardStyle, ColorStyle, FontStyle};
