//! Source positions and scope delimiters reported to listeners.

/// A point in the source text.
///
/// `offset` is a byte offset; `line` and `column` are 1-based, with columns
/// counted in Unicode scalar values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

/// The line of code a comment block documents.
///
/// `offset` is the start of the line, which need not be code: the line may
/// begin with whitespace or even with another comment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TargetLine {
    pub offset: u32,
    pub line: u32,
}

/// A character that opens or closes a reported scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `{` ... `}`
    Brace,
    /// `(` ... `)`
    Paren,
    /// `` ` `` ... `` ` `` (template literal)
    Backtick,
}

impl Delimiter {
    pub const fn open_char(self) -> char {
        match self {
            Delimiter::Brace => '{',
            Delimiter::Paren => '(',
            Delimiter::Backtick => '`',
        }
    }

    pub const fn close_char(self) -> char {
        match self {
            Delimiter::Brace => '}',
            Delimiter::Paren => ')',
            Delimiter::Backtick => '`',
        }
    }
}
