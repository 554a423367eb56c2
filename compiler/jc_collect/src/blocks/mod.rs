//! Gathering comments into blocks.

use jc_scanner::{CommentListener, Position, ScanError, TargetLine};
use tracing::debug;

use crate::comment::CommentTracker;
use crate::{CollectError, Comment, CommentBlock};

/// Listener that groups comments into [`CommentBlock`]s.
///
/// Callbacks cannot fail, so the first protocol violation (or scan error) is
/// kept and returned by [`into_blocks`](Self::into_blocks).
#[derive(Debug)]
pub struct BlockCollector<'src> {
    source: &'src str,
    tracker: CommentTracker,
    /// Comments of the block still open.
    series: Vec<Comment>,
    blocks: Vec<CommentBlock>,
    error: Option<CollectError>,
}

impl<'src> BlockCollector<'src> {
    /// `source` must be the text being scanned; comment text is sliced from it.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tracker: CommentTracker::default(),
            series: Vec::new(),
            blocks: Vec::new(),
            error: None,
        }
    }

    /// Blocks completed so far.
    pub fn blocks(&self) -> &[CommentBlock] {
        &self.blocks
    }

    /// The collected blocks, or the first error seen.
    pub fn into_blocks(self) -> Result<Vec<CommentBlock>, CollectError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.blocks),
        }
    }

    fn record(&mut self, error: CollectError) {
        debug!(%error, "block collection failed");
        self.error.get_or_insert(error);
    }
}

impl CommentListener for BlockCollector<'_> {
    fn begin_comment(&mut self, at: Position) {
        debug!(offset = at.offset, line = at.line, column = at.column, "begin comment");
        self.tracker.begin(at);
    }

    fn end_comment(&mut self, next_offset: u32, line: u32) {
        debug!(next_offset, line, "end comment");
        match self.tracker.end(self.source, next_offset, line) {
            Ok(comment) => self.series.push(comment),
            Err(error) => self.record(error),
        }
    }

    fn end_comment_block(&mut self, target: TargetLine) {
        debug!(
            target_offset = target.offset,
            target_line = target.line,
            comments = self.series.len(),
            "end comment block"
        );
        let comments = std::mem::take(&mut self.series);
        self.blocks.push(CommentBlock::new(target, comments));
    }

    fn end_of_input(&mut self) {
        debug!(blocks = self.blocks.len(), "end of input");
        if !self.series.is_empty() {
            let count = self.series.len();
            self.record(CollectError::PendingComments { count });
        }
    }

    fn fatal_error(&mut self, error: &ScanError) {
        self.record(CollectError::Scan(*error));
    }
}
