//! Read position over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! End of input is decided by position alone: a NUL byte inside the text is
//! an ordinary character, and only the bytes from `source_len` onward are
//! sentinel and padding.

/// Byte position in a padded source buffer.
///
/// Obtained from [`SourceBuffer::cursor`](crate::SourceBuffer::cursor).
/// Copying a cursor is how the scanner remembers a position (the start of a
/// possible regex literal, say) while it keeps reading.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    /// Text followed by at least one zero byte.
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!((source_len as usize) < buf.len(), "no room for sentinel");
        debug_assert_eq!(buf[source_len as usize], 0, "sentinel must be zero");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// The byte under the cursor; `0` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// The byte after the current one; the sentinel when the cursor is on
    /// the last byte of text.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    #[inline]
    pub(crate) fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Byte offset into the text.
    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Encoded length of the scalar whose first byte is `lead`.
    ///
    /// Continuation and invalid lead bytes count as 1 so that scanning
    /// always makes progress.
    #[inline]
    fn utf8_char_width(lead: u8) -> u32 {
        match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Step over one whole scalar value, stopping at end of input.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        let next = self.pos + Self::utf8_char_width(self.current());
        self.pos = next.min(self.source_len);
    }

    /// The bytes from here to the next `\n` or `\r`, or to end of input.
    ///
    /// A regex literal has to close before this slice ends.
    pub(crate) fn rest_of_line(&self) -> &'a [u8] {
        let start = (self.pos as usize).min(self.source_len as usize);
        let line = &self.buf[start..self.source_len as usize];
        let end = memchr::memchr2(b'\n', b'\r', line).unwrap_or(line.len());
        &line[..end]
    }
}
