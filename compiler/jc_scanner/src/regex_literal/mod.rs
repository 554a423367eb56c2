//! Length of a regular-expression literal.
//!
//! Grammar, matched from the opening slash:
//!
//! ```text
//! literal := '/' element+ '/' flag*
//! element := class | '\' any | any-but('/' | '\' | '[')
//! class   := '[' ( '\' any | any-but(']' | '\') )* ']'
//! flag    := 'a'..='z' | 'A'..='Z'
//! ```
//!
//! Inside a class an unescaped `/` is ordinary, so `/[/*]/` is one literal.
//! The input is a single line; running off its end means the literal is not
//! closed.

/// Returns the byte length of the literal at the start of `line`, flags
/// included, or `None` when `line` does not begin with a closed literal.
pub(crate) fn literal_len(line: &[u8]) -> Option<usize> {
    if line.first() != Some(&b'/') {
        return None;
    }
    let mut i = 1;
    loop {
        match *line.get(i)? {
            b'/' if i == 1 => return None,
            b'/' => {
                i += 1;
                break;
            }
            b'\\' => i = escape_end(line, i)?,
            b'[' => i = class_end(line, i + 1)?,
            _ => i += 1,
        }
    }
    while line.get(i).is_some_and(u8::is_ascii_alphabetic) {
        i += 1;
    }
    Some(i)
}

/// Index just past the character class whose body starts at `i`.
fn class_end(line: &[u8], mut i: usize) -> Option<usize> {
    loop {
        match *line.get(i)? {
            b']' => return Some(i + 1),
            b'\\' => i = escape_end(line, i)?,
            _ => i += 1,
        }
    }
}

/// Index just past the escape sequence whose backslash is at `i`.
///
/// Only the lead byte of a multi-byte escaped character is consumed; its
/// continuation bytes are never delimiters, so they scan as plain elements.
fn escape_end(line: &[u8], i: usize) -> Option<usize> {
    line.get(i + 1)?;
    Some(i + 2)
}
