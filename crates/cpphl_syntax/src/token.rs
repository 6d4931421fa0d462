//! Token definitions.
//!
//! A token is the raw output of one scanner rule: a lexical kind plus the span it
//! consumed. Presentation categories are derived from tokens by a `CategoryScheme`.
use crate::Span;

/// Lexical kind of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Maximal run of whitespace.
    Whitespace,
    /// `[[ ... ]]`, nesting-aware.
    Attribute,
    /// `// ...` up to (not including) the newline.
    LineComment,
    /// `/* ... */`.
    BlockComment,
    /// `#...` at the start of a logical line, including `\` continuations.
    Preprocessor,
    /// `R"delim( ... )delim"`.
    RawString,
    /// `"..."` with optional `L`, `u`, `U`, `u8` prefix.
    String,
    /// `'...'` with optional `L`, `u`, `U`, `u8` prefix.
    Char,
    /// Integer or floating literal.
    Number,
    /// Reserved word.
    Keyword,
    /// Identifier that is not a reserved word.
    Ident,
    /// Any other single character.
    Other,
}

/// Token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}
