//! Listeners that turn a comment scan into plain values.
//!
//! [`BlockCollector`] groups comments into [`CommentBlock`]s, each carrying
//! the line of code its comments document. [`EventCollector`] records every
//! listener callback as a [`ScanEvent`]. Both serialise with `serde`.
//!
//! ```
//! let blocks = jc_collect::collect_blocks("/** Adds. */\nfunction add(a, b) {}\n")?;
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].target_line_num, 2);
//! assert_eq!(blocks[0].comments[0].text, "/** Adds. */");
//! # Ok::<(), jc_collect::CollectError>(())
//! ```

mod blocks;
mod comment;
mod error;
mod events;

pub use blocks::BlockCollector;
pub use comment::{Comment, CommentBlock};
pub use error::CollectError;
pub use events::{EventCollector, ScanEvent, ScopeEvent};

use tracing::debug;

/// Scan `source` and return its comment blocks in source order.
pub fn collect_blocks(source: &str) -> Result<Vec<CommentBlock>, CollectError> {
    let mut collector = BlockCollector::new(source);
    jc_scanner::scan(source, &mut collector)?;
    collector.into_blocks()
}

/// Scan `source` and return every event in emission order.
///
/// A scan error ends the list as [`ScanEvent::FatalError`] rather than
/// failing the call.
pub fn collect_events(source: &str) -> Result<Vec<ScanEvent>, CollectError> {
    let mut collector = EventCollector::new(source);
    if let Err(error) = jc_scanner::scan(source, &mut collector) {
        debug!(%error, "scan aborted");
    }
    collector.into_events()
}
