//! Errors raised while collecting scan results.

use jc_scanner::ScanError;

/// Why a collection failed.
///
/// Apart from [`Scan`](Self::Scan), every variant means the listener
/// callbacks arrived out of order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollectError {
    /// The scanner stopped on malformed input.
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("missing begin_comment() for comment ending at offset {offset} (line {line})")]
    MissingBegin { offset: u32, line: u32 },

    /// A comment's offsets do not delimit a slice of the source.
    #[error("comment range {start}..{end} is not within the source")]
    InvalidRange { start: u32, end: u32 },

    #[error("end of input with {count} comment(s) outside any block")]
    PendingComments { count: usize },
}
