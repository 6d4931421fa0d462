//! Lexer implementation.
//!
//! Walks the buffer once. At every position the rules in `RULES` are tried in order
//! and the first one that matches decides the token; if none does, a single
//! character is emitted as `Other`. Constructs that never close run to end of buffer
//! and leave a warning behind.
//!
//! Related: `rules`, `cpphl_syntax::Token`.
use cpphl_syntax::{Diagnostic, Span, Token};
use tracing::debug;

use crate::cursor::Cursor;
use crate::rules::{self, Match, RULES};

/// Lexing result.
pub struct LexResult {
    /// Tokens covering the whole input, in order, without gaps.
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

/// C/C++ lexer.
pub struct Lexer<'a> {
    input: &'a str,
    cursor: Cursor<'a>,
    attributes: bool,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer with attribute scanning enabled.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: Cursor::new(input),
            attributes: true,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Turn the `[[ ... ]]` rule on or off. When off, `[` is ordinary text.
    pub fn attributes(mut self, enabled: bool) -> Self {
        self.attributes = enabled;
        self
    }

    /// Run the lexer and return tokens + diagnostics.
    pub fn lex(mut self) -> LexResult {
        let approx = self.input.len().saturating_div(4).max(32);
        self.tokens.reserve(approx);
        while !self.cursor.is_eof() {
            let start = self.cursor.pos();
            let m = self.next_match();
            debug_assert!(m.len > 0, "rule {:?} consumed nothing", m.kind);
            self.cursor.bump(m.len);
            let span = Span::from_range(start, self.cursor.pos());
            if !m.terminated {
                debug!(kind = ?m.kind, start, end = self.cursor.pos(), "unterminated construct");
                self.diagnostics.push(Diagnostic::unterminated(m.kind, span));
            }
            self.tokens.push(Token { kind: m.kind, span });
        }
        LexResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn next_match(&self) -> Match {
        RULES
            .iter()
            .filter(|rule| self.attributes || !rule.attribute)
            .find_map(|rule| {
                let m = (rule.scan)(&self.cursor)?;
                tracing::trace!(rule = rule.name, len = m.len, "matched");
                Some(m)
            })
            .unwrap_or_else(|| rules::fallback(&self.cursor))
    }
}

#[cfg(test)]
mod tests {
    use cpphl_syntax::TokenKind;

    use super::Lexer;

    fn kinds(src: &str) -> Vec<(TokenKind, &str)> {
        Lexer::new(src)
            .lex()
            .tokens
            .iter()
            .map(|t| (t.kind, &src[t.span.range()]))
            .collect()
    }

    #[test]
    fn hash_after_code_is_not_a_directive() {
        assert_eq!(
            kinds("a #b"),
            vec![
                (TokenKind::Ident, "a"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Other, "#"),
                (TokenKind::Ident, "b"),
            ]
        );
    }

    #[test]
    fn hash_after_indent_is_a_directive() {
        assert_eq!(
            kinds("x;\n \t#pragma once"),
            vec![
                (TokenKind::Ident, "x"),
                (TokenKind::Other, ";"),
                (TokenKind::Whitespace, "\n \t"),
                (TokenKind::Preprocessor, "#pragma once"),
            ]
        );
    }

    #[test]
    fn hash_after_comment_on_same_line_is_not_a_directive() {
        let toks = kinds("/* c */ #x");
        assert_eq!(toks[2], (TokenKind::Other, "#"));
    }

    #[test]
    fn carriage_return_breaks_line_start() {
        let toks = kinds("\n\r#x");
        assert_eq!(toks[1], (TokenKind::Other, "#"));
    }

    #[test]
    fn attribute_rule_can_be_disabled() {
        let src = "[[nodiscard]]";
        let toks = Lexer::new(src).attributes(false).lex().tokens;
        assert_eq!(toks.len(), 5);
        assert_eq!(toks[0].kind, TokenKind::Other);
        assert_eq!(toks[2].kind, TokenKind::Ident);
    }

    #[test]
    fn non_ascii_falls_back_per_char() {
        assert_eq!(
            kinds("é€"),
            vec![(TokenKind::Other, "é"), (TokenKind::Other, "€")]
        );
    }
}
