//! Recording the full event stream.

use jc_scanner::{CommentListener, Delimiter, Position, ScanError, TargetLine};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::comment::CommentTracker;
use crate::{CollectError, Comment};

/// A scope delimiter seen in code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeEvent {
    /// `true` for `open_scope`, `false` for `close_scope`.
    pub opening: bool,
    #[serde(rename = "char")]
    pub delimiter: char,
    pub offset: u32,
    #[serde(rename = "lineNum")]
    pub line: u32,
    #[serde(rename = "charNum")]
    pub column: u32,
}

impl ScopeEvent {
    fn new(opening: bool, delimiter: char, at: Position) -> Self {
        Self {
            opening,
            delimiter,
            offset: at.offset,
            line: at.line,
            column: at.column,
        }
    }
}

/// One listener callback, in emission order.
///
/// A comment is recorded once, when it ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScanEvent {
    Scope(ScopeEvent),
    Comment(Comment),
    #[serde(rename_all = "camelCase")]
    BlockEnd {
        target_line_offset: u32,
        target_line_num: u32,
    },
    FatalError {
        message: String,
        offset: u32,
        #[serde(rename = "lineNum")]
        line: u32,
        #[serde(rename = "charNum")]
        column: u32,
    },
    EndOfInput,
}

/// Listener that records every callback as a [`ScanEvent`].
#[derive(Debug)]
pub struct EventCollector<'src> {
    source: &'src str,
    tracker: CommentTracker,
    events: Vec<ScanEvent>,
    error: Option<CollectError>,
}

impl<'src> EventCollector<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tracker: CommentTracker::default(),
            events: Vec::new(),
            error: None,
        }
    }

    pub fn events(&self) -> &[ScanEvent] {
        &self.events
    }

    /// The recorded events, or the first protocol violation.
    ///
    /// A scan error is not a failure here: it is the final
    /// [`ScanEvent::FatalError`].
    pub fn into_events(self) -> Result<Vec<ScanEvent>, CollectError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.events),
        }
    }
}

impl CommentListener for EventCollector<'_> {
    fn open_scope(&mut self, delimiter: Delimiter, at: Position) {
        self.events
            .push(ScanEvent::Scope(ScopeEvent::new(true, delimiter.open_char(), at)));
    }

    fn close_scope(&mut self, delimiter: Delimiter, at: Position) {
        self.events
            .push(ScanEvent::Scope(ScopeEvent::new(false, delimiter.close_char(), at)));
    }

    fn begin_comment(&mut self, at: Position) {
        self.tracker.begin(at);
    }

    fn end_comment(&mut self, next_offset: u32, line: u32) {
        match self.tracker.end(self.source, next_offset, line) {
            Ok(comment) => self.events.push(ScanEvent::Comment(comment)),
            Err(error) => {
                debug!(%error, "event collection failed");
                self.error.get_or_insert(error);
            }
        }
    }

    fn end_comment_block(&mut self, target: TargetLine) {
        self.events.push(ScanEvent::BlockEnd {
            target_line_offset: target.offset,
            target_line_num: target.line,
        });
    }

    fn end_of_input(&mut self) {
        debug!(events = self.events.len(), "end of input");
        self.events.push(ScanEvent::EndOfInput);
    }

    fn fatal_error(&mut self, error: &ScanError) {
        self.events.push(ScanEvent::FatalError {
            message: error.kind.to_string(),
            offset: error.position.offset,
            line: error.position.line,
            column: error.position.column,
        });
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "tests use expect for brevity")]
mod tests;
