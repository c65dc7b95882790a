use thiserror::Error;

/// Errors raised by the strict asset tag parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// The tag was empty.
    #[error("asset tag is empty")]
    Empty,
    /// The tag did not split into exactly `<chain>` and `<symbol>`.
    #[error("asset tag `{tag}` has {found} segments, expected 2")]
    SegmentCount { tag: String, found: usize },
}
