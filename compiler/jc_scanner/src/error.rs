//! Fatal scan errors.
//!
//! Both kinds are terminal: the scanner reports the error once and emits
//! nothing afterwards. Unterminated string and template literals are not
//! errors; the scan simply ends inside them.

use crate::Position;

/// What stopped the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ScanErrorKind {
    /// A `/` in regex context does not begin a closed literal on its line.
    #[error("invalid regular expression")]
    InvalidRegex,
    /// End of input inside a `/* ... */` comment.
    #[error("missing */ at end of comment")]
    UnterminatedComment,
}

/// A fatal scan error and where it was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error(
    "{kind} at offset {} ({}:{})",
    .position.offset,
    .position.line,
    .position.column
)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub position: Position,
}
