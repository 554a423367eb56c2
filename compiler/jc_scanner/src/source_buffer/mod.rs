//! Owned, zero-padded copy of the text being scanned.
//!
//! The copy ends in a `0x00` sentinel followed by zero padding up to a
//! 64-byte multiple. The scanner looks at the current byte and the one after
//! it, and both reads stay inside the allocation even on the last character,
//! so neither needs a length check.
//!
//! Files saved with a UTF-8 byte order mark get a cursor that starts after
//! the mark. Reported offsets still count the mark's three bytes.

use crate::Cursor;

const PAD_TO: usize = 64;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Text bytes, then a zero sentinel, then zero padding.
///
/// ```text
/// | text (len bytes) | 0x00 | 0x00 ... | <- total is a multiple of 64
/// ```
#[derive(Clone, Debug)]
pub(crate) struct SourceBuffer {
    bytes: Vec<u8>,
    len: u32,
    bom_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded buffer.
    ///
    /// Text beyond `u32::MAX` bytes is not scanned.
    pub(crate) fn new(source: &str) -> Self {
        let text = source.as_bytes();
        let total = (text.len() / PAD_TO + 1) * PAD_TO;
        let mut bytes = vec![0u8; total];
        bytes[..text.len()].copy_from_slice(text);

        Self {
            bytes,
            len: u32::try_from(text.len()).unwrap_or(u32::MAX),
            bom_len: if text.starts_with(UTF8_BOM) { 3 } else { 0 },
        }
    }

    /// A cursor on the first byte after any byte order mark.
    pub(crate) fn cursor(&self) -> Cursor<'_> {
        let mut cursor = Cursor::new(&self.bytes, self.len);
        cursor.advance_n(self.bom_len);
        cursor
    }
}
