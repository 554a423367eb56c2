//! The listener interface through which the scanner reports what it finds.

use crate::{Delimiter, Position, ScanError, TargetLine};

/// Receiver of scan events.
///
/// Each comment is assumed to document a portion of code, the first line of
/// which is its *target line*. Consecutive comments separated only by
/// whitespace share a target line and form a *comment block*; no two blocks
/// of one scan share a target line.
///
/// Comment and scope events are reported in source order. A block end may be
/// reported inside a different scope than the comments it closes.
pub trait CommentListener {
    /// A `{`, `(` or `` ` `` outside comments, quotes and template
    /// substitutions.
    fn open_scope(&mut self, _delimiter: Delimiter, _at: Position) {}

    /// The closer matching [`open_scope`](Self::open_scope).
    fn close_scope(&mut self, _delimiter: Delimiter, _at: Position) {}

    /// A comment starts. `at` is the position of its first `/`. The first
    /// comment of a block also opens the block.
    fn begin_comment(&mut self, at: Position);

    /// A comment ends. `next_offset` is the first byte after `*/`, or the
    /// line break (or end of text) terminating a `//` comment.
    fn end_comment(&mut self, next_offset: u32, line: u32);

    /// The block holding every comment since the previous block end is
    /// complete.
    fn end_comment_block(&mut self, target: TargetLine);

    /// The whole text was scanned. Not called after a fatal error.
    fn end_of_input(&mut self) {}

    /// The scan was aborted. No further events follow.
    fn fatal_error(&mut self, error: &ScanError);
}
