//! Rendering one scanned file.

use std::fmt::Write as _;

use jc_collect::{collect_blocks, collect_events, CollectError, CommentBlock, ScanEvent};
use serde::Serialize;

use crate::Mode;

/// A JSON dump: `{"blocks": [...]}`, `{"fatalError": "..."}` or
/// `{"events": [...]}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum Dump {
    Blocks(Vec<CommentBlock>),
    FatalError(String),
    Events(Vec<ScanEvent>),
}

/// Render `source` in `mode`.
///
/// A scan error is part of the output, not a failure; only collection
/// protocol errors and serialisation failures are returned as `Err`.
pub(crate) fn render(source: &str, mode: Mode) -> anyhow::Result<String> {
    match mode {
        Mode::Blocks => Ok(serde_json::to_string_pretty(&blocks_dump(source)?)?),
        Mode::Events => {
            let dump = Dump::Events(collect_events(source)?);
            Ok(serde_json::to_string_pretty(&dump)?)
        }
        Mode::Text => match collect_blocks(source) {
            Ok(blocks) => Ok(render_text(source, &blocks)),
            Err(CollectError::Scan(error)) => Ok(format!("FATAL ERROR: {error}\n")),
            Err(error) => Err(error.into()),
        },
    }
}

pub(crate) fn blocks_dump(source: &str) -> Result<Dump, CollectError> {
    match collect_blocks(source) {
        Ok(blocks) => Ok(Dump::Blocks(blocks)),
        Err(CollectError::Scan(error)) => Ok(Dump::FatalError(error.to_string())),
        Err(error) => Err(error),
    }
}

/// Each comment, then the target line of its block.
pub(crate) fn render_text(source: &str, blocks: &[CommentBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        for comment in &block.comments {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "COMMENT (line {}):", comment.start_line);
            let _ = writeln!(out, "{}", comment.text);
        }
        let target = target_text(source, block.target_line_offset);
        let _ = writeln!(
            out,
            "** targets line {}: {}\n",
            block.target_line_num,
            target.unwrap_or("<end of file>")
        );
    }
    out
}

/// The line starting at `offset`, without its line break.
fn target_text(source: &str, offset: u32) -> Option<&str> {
    let rest = source.get(offset as usize..).filter(|rest| !rest.is_empty())?;
    let end = rest.find(|c: char| c == '\n' || c == '\r').unwrap_or(rest.len());
    Some(&rest[..end])
}
