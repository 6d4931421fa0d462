//! Scanner diagnostics.
//!
//! The scanner never fails; diagnostics only describe constructs that ran to the end
//! of the buffer without their terminator.

use crate::{Span, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub code: Option<&'static str>,
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            code: None,
            span,
        }
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    /// Warning for a construct of `kind` that consumed to end of buffer.
    pub fn unterminated(kind: TokenKind, span: Span) -> Self {
        let (code, what) = match kind {
            TokenKind::BlockComment => (codes::UNTERMINATED_COMMENT, "block comment"),
            TokenKind::RawString => (codes::UNTERMINATED_RAW_STRING, "raw string literal"),
            TokenKind::String => (codes::UNTERMINATED_STRING, "string literal"),
            TokenKind::Char => (codes::UNTERMINATED_CHAR, "character literal"),
            TokenKind::Attribute => (codes::UNTERMINATED_ATTRIBUTE, "attribute"),
            _ => (codes::UNTERMINATED_OTHER, "construct"),
        };
        Self::warning(format!("Unterminated {what}"), Some(span)).with_code(code)
    }
}

pub mod codes {
    pub const UNTERMINATED_COMMENT: &str = "W0001";
    pub const UNTERMINATED_STRING: &str = "W0002";
    pub const UNTERMINATED_CHAR: &str = "W0003";
    pub const UNTERMINATED_RAW_STRING: &str = "W0004";
    pub const UNTERMINATED_ATTRIBUTE: &str = "W0005";
    pub const UNTERMINATED_OTHER: &str = "W0099";
}
