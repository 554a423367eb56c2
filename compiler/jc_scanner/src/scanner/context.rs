//! Mutable bookkeeping threaded through every state transition.

use crate::{Cursor, Position, ScanState, TargetLine};

/// Cursor, position counters and flags for one scan.
///
/// Created fresh by [`Scanner::run`](crate::Scanner::run) and dropped when it
/// returns; never shared between scans.
pub(crate) struct ScanContext<'a> {
    /// Next unconsumed byte.
    pub(crate) cursor: Cursor<'a>,
    /// Snapshot taken on the most recent code `/`, used to report comment
    /// starts and to look ahead for regex literals.
    pub(crate) slash: Cursor<'a>,
    pub(crate) state: ScanState,
    /// State to resume once a slash is resolved.
    pub(crate) prior_state: ScanState,
    pub(crate) line_num: u32,
    pub(crate) char_num: u32,
    pub(crate) line_start: u32,
    /// The previous character was an escaping backslash.
    pub(crate) escaped: bool,
    /// Quote byte of the open string literal.
    pub(crate) open_quote: Option<u8>,
    /// Unmatched `{` count per open `${...}` substitution, innermost last.
    /// Entries are never zero.
    pub(crate) template_braces: Vec<u32>,
    /// A `/` here would start a regex literal rather than divide.
    pub(crate) in_regex_context: bool,
    /// Most recent line holding a code character, and where it starts.
    pub(crate) last_code_line: u32,
    pub(crate) last_code_start: u32,
    pub(crate) in_comment_block: bool,
    pub(crate) block_start_line: u32,
    /// Candidate target line of the open block.
    pub(crate) target: TargetLine,
    pub(crate) aborted: bool,
}

impl<'a> ScanContext<'a> {
    pub(crate) fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            slash: cursor,
            state: ScanState::Expression,
            prior_state: ScanState::Expression,
            line_num: 1,
            char_num: 1,
            line_start: cursor.pos(),
            escaped: false,
            open_quote: None,
            template_braces: Vec::new(),
            in_regex_context: true,
            last_code_line: 0,
            last_code_start: 0,
            in_comment_block: false,
            block_start_line: 0,
            target: TargetLine::default(),
            aborted: false,
        }
    }

    /// Position of the byte under the cursor.
    pub(crate) fn position(&self) -> Position {
        Position {
            offset: self.cursor.pos(),
            line: self.line_num,
            column: self.char_num,
        }
    }

    /// A backslash escapes the next character unless it is itself escaped,
    /// so runs of backslashes pair off.
    #[inline]
    pub(crate) fn track_escape(&mut self, byte: u8) {
        self.escaped = !self.escaped && byte == b'\\';
    }

    /// Consume a line break ending at `next_offset` and start the next line.
    pub(crate) fn new_line(&mut self, next_offset: u32) {
        self.cursor.advance_n(next_offset - self.cursor.pos());
        self.line_start = next_offset;
        self.line_num += 1;
        self.char_num = 1;
        self.escaped = false;
    }

    /// The current line holds code.
    #[inline]
    pub(crate) fn mark_code_line(&mut self) {
        self.last_code_line = self.line_num;
        self.last_code_start = self.line_start;
    }

    /// Move the target candidate to the current line if that line has code.
    pub(crate) fn advance_target_line(&mut self) {
        if self.last_code_line == self.line_num {
            self.target = TargetLine {
                offset: self.line_start,
                line: self.line_num,
            };
        }
    }

    /// The target candidate has caught up with the open block.
    pub(crate) fn target_reached(&self) -> bool {
        self.target.line >= self.block_start_line
    }
}
