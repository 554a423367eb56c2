//! Comments and comment blocks as values.

use jc_scanner::{Position, TargetLine};
use serde::{Deserialize, Serialize};

use crate::CollectError;

/// One `//` or `/* */` comment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Byte offset of the opening `/`.
    pub start_offset: u32,
    pub start_line: u32,
    /// 1-based column of the opening `/`.
    pub start_char: u32,
    pub end_line: u32,
    /// The comment exactly as written, delimiters included.
    pub text: String,
}

/// Consecutive comments and the line of code they document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentBlock {
    /// Byte offset of the start of the target line.
    pub target_line_offset: u32,
    pub target_line_num: u32,
    pub comments: Vec<Comment>,
}

impl CommentBlock {
    pub(crate) fn new(target: TargetLine, comments: Vec<Comment>) -> Self {
        Self {
            target_line_offset: target.offset,
            target_line_num: target.line,
            comments,
        }
    }
}

/// Pairs `begin_comment` with `end_comment` and cuts the comment text out of
/// the source.
#[derive(Debug, Default)]
pub(crate) struct CommentTracker {
    open: Option<Position>,
}

impl CommentTracker {
    pub(crate) fn begin(&mut self, at: Position) {
        self.open = Some(at);
    }

    pub(crate) fn end(
        &mut self,
        source: &str,
        next_offset: u32,
        line: u32,
    ) -> Result<Comment, CollectError> {
        let Some(start) = self.open.take() else {
            return Err(CollectError::MissingBegin {
                offset: next_offset,
                line,
            });
        };
        let text = source
            .get(start.offset as usize..next_offset as usize)
            .ok_or(CollectError::InvalidRange {
                start: start.offset,
                end: next_offset,
            })?;
        Ok(Comment {
            start_offset: start.offset,
            start_line: start.line,
            start_char: start.column,
            end_line: line,
            text: text.to_owned(),
        })
    }
}
