//! Lexical modes of the scanner.

/// The mode that decides how the next character or line break is handled.
///
/// Exactly one state is active at a time. States carry no data; everything
/// they need lives in the scan context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Ordinary code, including the code inside `${...}` substitutions.
    Expression,
    /// Just after a `/` in code: comment opener, regex, or division.
    InitialSlash,
    /// Inside `// ...`.
    SlashSlashComment,
    /// Inside `/* ... */`.
    SlashStarComment,
    /// Inside `/* ... */`, just after a `*`.
    PotentialEndOfComment,
    /// Inside a `'...'` or `"..."` string.
    StringLiteral,
    /// Inside the text of a template literal.
    TemplateLiteral,
    /// Inside template text, just after an unescaped `$`.
    PotentialTemplateExpression,
}

/// After one of these, a `/` is eligible to open a regex literal rather than
/// being a division operator.
#[inline]
pub(crate) fn opens_regex_context(byte: u8) -> bool {
    matches!(
        byte,
        b'&' | b':' | b',' | b'=' | b'{' | b'[' | b'(' | b'?' | b';' | b'|'
    )
}

/// Characters that change neither the regex context nor whether the current
/// line counts as code. `/` is included so that the context survives into
/// the character after a slash.
#[inline]
pub(crate) fn keeps_context(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n' | b' ' | b'\t' | b'/')
}
