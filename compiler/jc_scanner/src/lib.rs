//! Comment scanner for JavaScript and TypeScript.
//!
//! A single left-to-right pass over source text that finds every comment and
//! decides which line of code each run of comments documents. It is not a
//! parser: it tracks just enough lexical context (code, strings, template
//! literals, regex literals, comments) to find comment boundaries and to
//! tell a regex-opening `/` from a division.
//!
//! Results are reported through a [`CommentListener`]; the scanner itself
//! stores nothing and performs no I/O.
//!
//! ```
//! use jc_scanner::{scan, CommentListener, Position, ScanError, TargetLine};
//!
//! #[derive(Default)]
//! struct Targets(Vec<u32>);
//!
//! impl CommentListener for Targets {
//!     fn begin_comment(&mut self, _at: Position) {}
//!     fn end_comment(&mut self, _next_offset: u32, _line: u32) {}
//!     fn end_comment_block(&mut self, target: TargetLine) {
//!         self.0.push(target.line);
//!     }
//!     fn fatal_error(&mut self, _error: &ScanError) {}
//! }
//!
//! let mut targets = Targets::default();
//! scan("// hello\nfoo();\n", &mut targets).unwrap();
//! assert_eq!(targets.0, vec![2]);
//! ```

mod cursor;
mod error;
mod listener;
mod position;
mod regex_literal;
mod scanner;
mod source_buffer;
mod state;

pub(crate) use cursor::Cursor;
pub use error::{ScanError, ScanErrorKind};
pub use listener::CommentListener;
pub use position::{Delimiter, Position, TargetLine};
pub use scanner::{scan, Scanner};
pub(crate) use source_buffer::SourceBuffer;
pub use state::ScanState;
