//! The comment scanner: driver loop and state transitions.
//!
//! # Design
//!
//! The driver peeks one character at a time. Line breaks (`\n`, `\r\n`, or
//! a lone `\r`) go to the active state's line-break handler; every other
//! character goes to its character handler. A handler that consumes more
//! than the current character (a regex literal) moves the cursor itself;
//! otherwise the driver steps past one UTF-8 character.
//!
//! States are a plain enum and each event kind has one dispatch function
//! matching on it. Handlers that fall back to another state's behaviour call
//! that state's handler directly.

mod context;

use tracing::{debug, trace, warn};

use crate::regex_literal;
use crate::state::{keeps_context, opens_regex_context};
use crate::{
    CommentListener, Delimiter, Position, ScanError, ScanErrorKind, ScanState, SourceBuffer,
    TargetLine,
};
use context::ScanContext;

/// Scan `source` once, reporting to `listener`.
///
/// Shorthand for `Scanner::new(source, listener).run()`.
pub fn scan<L>(source: &str, listener: &mut L) -> Result<(), ScanError>
where
    L: CommentListener + ?Sized,
{
    Scanner::new(source, listener).run()
}

/// A single pass over one source text.
///
/// [`run`](Self::run) consumes the scanner; scanning again means building a
/// new one.
pub struct Scanner<'src, 'l, L: CommentListener + ?Sized> {
    source: &'src str,
    listener: &'l mut L,
}

impl<'src, 'l, L: CommentListener + ?Sized> Scanner<'src, 'l, L> {
    pub fn new(source: &'src str, listener: &'l mut L) -> Self {
        Self { source, listener }
    }

    /// Scan the whole text.
    ///
    /// Ends with [`end_of_input`](CommentListener::end_of_input), or with
    /// [`fatal_error`](CommentListener::fatal_error) in which case the same
    /// error is returned.
    pub fn run(self) -> Result<(), ScanError> {
        let buffer = SourceBuffer::new(self.source);
        let mut pass = Pass {
            ctx: ScanContext::new(buffer.cursor()),
            listener: self.listener,
            error: None,
        };
        pass.drive();
        match pass.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Scan context paired with the listener it reports to.
struct Pass<'a, 'l, L: CommentListener + ?Sized> {
    ctx: ScanContext<'a>,
    listener: &'l mut L,
    error: Option<ScanError>,
}

impl<L: CommentListener + ?Sized> Pass<'_, '_, L> {
    fn drive(&mut self) {
        while !self.ctx.aborted && !self.ctx.cursor.is_eof() {
            let offset = self.ctx.cursor.pos();
            match self.ctx.cursor.current() {
                b'\r' => {
                    let width = if self.ctx.cursor.peek() == b'\n' { 2 } else { 1 };
                    self.line_break(offset + width);
                }
                b'\n' => self.line_break(offset + 1),
                byte => {
                    self.character(byte);
                    if self.ctx.cursor.pos() == offset {
                        self.ctx.cursor.advance_char();
                        self.ctx.char_num += 1;
                    }
                }
            }
        }
        if !self.ctx.aborted {
            self.end_of_input();
        }
    }

    // ─── Dispatch ──────────────────────────────────────────────────────

    fn character(&mut self, byte: u8) {
        match self.ctx.state {
            ScanState::Expression => self.expression_char(byte),
            ScanState::InitialSlash => self.initial_slash_char(byte),
            // No escapes inside a line comment.
            ScanState::SlashSlashComment => {}
            ScanState::SlashStarComment => self.slash_star_char(byte),
            ScanState::PotentialEndOfComment => self.potential_end_of_comment_char(byte),
            ScanState::StringLiteral => self.string_char(byte),
            ScanState::TemplateLiteral => self.template_char(byte),
            ScanState::PotentialTemplateExpression => self.potential_template_char(byte),
        }
    }

    fn line_break(&mut self, next_offset: u32) {
        match self.ctx.state {
            ScanState::Expression => self.expression_line_break(next_offset),
            ScanState::InitialSlash => {
                if self.resolve_trailing_slash() {
                    self.expression_line_break(next_offset);
                }
            }
            ScanState::SlashSlashComment => self.slash_slash_line_break(next_offset),
            // `*` newline `/` does not close a block comment.
            ScanState::PotentialEndOfComment => {
                self.ctx.state = ScanState::SlashStarComment;
                self.ctx.new_line(next_offset);
            }
            ScanState::PotentialTemplateExpression => {
                self.ctx.state = ScanState::TemplateLiteral;
                self.ctx.new_line(next_offset);
            }
            ScanState::SlashStarComment | ScanState::StringLiteral | ScanState::TemplateLiteral => {
                self.ctx.new_line(next_offset);
            }
        }
    }

    fn end_of_input(&mut self) {
        match self.ctx.state {
            ScanState::SlashStarComment | ScanState::PotentialEndOfComment => {
                self.fatal(ScanErrorKind::UnterminatedComment);
            }
            ScanState::SlashSlashComment => {
                self.listener
                    .end_comment(self.ctx.cursor.pos(), self.ctx.line_num);
                self.finish();
            }
            ScanState::InitialSlash => {
                if self.resolve_trailing_slash() {
                    self.finish();
                }
            }
            ScanState::Expression
            | ScanState::StringLiteral
            | ScanState::TemplateLiteral
            | ScanState::PotentialTemplateExpression => self.finish(),
        }
    }

    // ─── Expression ────────────────────────────────────────────────────

    fn expression_char(&mut self, byte: u8) {
        match byte {
            b'`' => {
                self.open_scope(Delimiter::Backtick);
                self.ctx.state = ScanState::TemplateLiteral;
            }
            b'"' | b'\'' => {
                self.ctx.open_quote = Some(byte);
                self.ctx.state = ScanState::StringLiteral;
            }
            b'{' => {
                self.open_scope(Delimiter::Brace);
                if let Some(open) = self.ctx.template_braces.last_mut() {
                    *open += 1;
                }
            }
            b'(' => self.open_scope(Delimiter::Paren),
            b'}' => {
                self.close_scope(Delimiter::Brace);
                if let Some(open) = self.ctx.template_braces.last_mut() {
                    *open -= 1;
                    if *open == 0 {
                        self.ctx.template_braces.pop();
                        self.ctx.state = ScanState::TemplateLiteral;
                    }
                }
            }
            b')' => self.close_scope(Delimiter::Paren),
            b'/' => {
                self.ctx.prior_state = self.ctx.state;
                self.ctx.slash = self.ctx.cursor;
                self.ctx.state = ScanState::InitialSlash;
            }
            _ => self.ctx.track_escape(byte),
        }

        if !keeps_context(byte) {
            // `!` keeps the context so that `y! / 2` stays a division.
            if byte != b'!' {
                self.ctx.in_regex_context = opens_regex_context(byte);
            }
            self.ctx.mark_code_line();
        }
    }

    fn expression_line_break(&mut self, next_offset: u32) {
        if self.ctx.in_comment_block {
            if !self.ctx.target_reached() {
                self.ctx.advance_target_line();
            }
            if self.ctx.target_reached() {
                self.end_comment_block();
            }
        }
        self.ctx.new_line(next_offset);
    }

    // ─── Slash ─────────────────────────────────────────────────────────

    fn initial_slash_char(&mut self, byte: u8) {
        match byte {
            b'*' => {
                self.begin_comment();
                self.ctx.state = ScanState::SlashStarComment;
            }
            b'/' => {
                self.begin_comment();
                self.ctx.state = ScanState::SlashSlashComment;
            }
            _ => {
                // The slash was code.
                self.ctx.mark_code_line();
                self.ctx.state = self.ctx.prior_state;
                if self.ctx.in_regex_context {
                    self.skip_regex_literal();
                } else {
                    // Division: the character after it is ordinary code.
                    self.character(byte);
                }
            }
        }
    }

    /// Resolve a code slash followed by a line break or end of input.
    ///
    /// Returns `false` if the slash had to open a regex, which cannot be
    /// empty or span lines, and the scan was aborted.
    fn resolve_trailing_slash(&mut self) -> bool {
        self.ctx.mark_code_line();
        self.ctx.state = self.ctx.prior_state;
        if self.ctx.in_regex_context {
            self.fatal(ScanErrorKind::InvalidRegex);
            return false;
        }
        true
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "literal lies within the source, whose length fits in u32"
    )]
    fn skip_regex_literal(&mut self) {
        let line = self.ctx.slash.rest_of_line();
        let Some(len) = regex_literal::literal_len(line) else {
            self.fatal(ScanErrorKind::InvalidRegex);
            return;
        };
        // The cursor sits one past the opening slash.
        let rest = &line[1..len];
        let chars = rest.iter().filter(|&&b| b & 0xC0 != 0x80).count();
        trace!(
            offset = self.ctx.slash.pos(),
            len,
            line = self.ctx.line_num,
            "regex literal"
        );
        self.ctx.cursor.advance_n(rest.len() as u32);
        self.ctx.char_num += chars as u32;
        // A regex literal is a value; a slash after it divides.
        self.ctx.in_regex_context = false;
    }

    // ─── Comments ──────────────────────────────────────────────────────

    fn begin_comment(&mut self) {
        if !self.ctx.in_comment_block {
            self.ctx.block_start_line = self.ctx.line_num;
            self.ctx.in_comment_block = true;
        }
        if !self.ctx.target_reached() {
            self.ctx.advance_target_line();
        }
        let at = Position {
            offset: self.ctx.slash.pos(),
            line: self.ctx.line_num,
            column: self.ctx.char_num - 1,
        };
        trace!(offset = at.offset, line = at.line, "begin comment");
        self.listener.begin_comment(at);
    }

    fn slash_slash_line_break(&mut self, next_offset: u32) {
        self.listener
            .end_comment(self.ctx.cursor.pos(), self.ctx.line_num);
        if self.ctx.target_reached() {
            self.end_comment_block();
        }
        self.ctx.new_line(next_offset);
        self.ctx.state = ScanState::Expression;
    }

    fn slash_star_char(&mut self, byte: u8) {
        if byte == b'*' {
            self.ctx.state = ScanState::PotentialEndOfComment;
        }
    }

    fn potential_end_of_comment_char(&mut self, byte: u8) {
        if byte == b'/' {
            self.listener
                .end_comment(self.ctx.cursor.pos() + 1, self.ctx.line_num);
            self.ctx.state = ScanState::Expression;
        } else {
            // Might be another `*`.
            self.ctx.state = ScanState::SlashStarComment;
            self.slash_star_char(byte);
        }
    }

    fn end_comment_block(&mut self) {
        debug!(
            target_line = self.ctx.target.line,
            target_offset = self.ctx.target.offset,
            block_start = self.ctx.block_start_line,
            "comment block resolved"
        );
        self.listener.end_comment_block(self.ctx.target);
        self.ctx.in_comment_block = false;
    }

    // ─── Strings & Templates ───────────────────────────────────────────

    fn string_char(&mut self, byte: u8) {
        if !self.ctx.escaped && self.ctx.open_quote == Some(byte) {
            self.ctx.open_quote = None;
            self.ctx.state = ScanState::Expression;
        }
        self.ctx.track_escape(byte);
    }

    fn template_char(&mut self, byte: u8) {
        if !self.ctx.escaped && byte == b'$' {
            self.ctx.state = ScanState::PotentialTemplateExpression;
        } else if !self.ctx.escaped && byte == b'`' {
            self.close_scope(Delimiter::Backtick);
            self.ctx.state = ScanState::Expression;
        } else {
            self.ctx.track_escape(byte);
        }
    }

    fn potential_template_char(&mut self, byte: u8) {
        if byte == b'{' {
            self.ctx.template_braces.push(1);
            self.ctx.state = ScanState::Expression;
            // The substitution is code expecting an expression.
            self.ctx.in_regex_context = true;
            self.ctx.mark_code_line();
        } else {
            // The `$` was template text.
            self.ctx.state = ScanState::TemplateLiteral;
            self.template_char(byte);
        }
    }

    // ─── Reporting ─────────────────────────────────────────────────────

    fn open_scope(&mut self, delimiter: Delimiter) {
        if self.ctx.template_braces.is_empty() {
            self.listener.open_scope(delimiter, self.ctx.position());
        }
    }

    fn close_scope(&mut self, delimiter: Delimiter) {
        if self.ctx.template_braces.is_empty() {
            self.listener.close_scope(delimiter, self.ctx.position());
        }
    }

    /// Flush any open block, then report the end of input.
    fn finish(&mut self) {
        if self.ctx.in_comment_block {
            if self.ctx.last_code_line < self.ctx.block_start_line {
                // No code after the block: target the line past the end.
                self.ctx.target = TargetLine {
                    offset: self.ctx.cursor.pos(),
                    line: self.ctx.line_num + 1,
                };
            } else if !self.ctx.target_reached() {
                // Code followed the block but no line break in code
                // resolved it (the text may end inside a literal).
                self.ctx.target = TargetLine {
                    offset: self.ctx.last_code_start,
                    line: self.ctx.last_code_line,
                };
            }
            self.end_comment_block();
        }
        self.listener.end_of_input();
    }

    fn fatal(&mut self, kind: ScanErrorKind) {
        let error = ScanError {
            kind,
            position: self.ctx.position(),
        };
        warn!(%error, "scan aborted");
        self.listener.fatal_error(&error);
        self.ctx.aborted = true;
        self.error = Some(error);
    }
}
