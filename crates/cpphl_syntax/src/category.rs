//! Presentation categories and the schemes that map tokens onto them.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Span, TokenKind};

/// Presentation tag attached to a fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    Literal,
    String,
    Number,
    Preprocessor,
    Comment,
    Attribute,
    /// Unclassified text; rendered escaped with no wrapper.
    Plain,
}

impl Category {
    /// CSS class suffix, or `None` for plain text.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Category::Keyword => Some("keyword"),
            Category::Literal => Some("literal"),
            Category::String => Some("string"),
            Category::Number => Some("number"),
            Category::Preprocessor => Some("preprocessor"),
            Category::Comment => Some("comment"),
            Category::Attribute => Some("attribute"),
            Category::Plain => None,
        }
    }

    pub fn is_plain(self) -> bool {
        matches!(self, Category::Plain)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name().unwrap_or("plain"))
    }
}

/// Category granularity.
///
/// Two published variants of the highlighter disagree here: one merges every literal
/// into `literal` and knows about attributes, the other tags only strings. `Split` is
/// the fully separated form of the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryScheme {
    /// Strings, chars and numbers are `Literal`; attributes are recognized.
    #[default]
    Literal,
    /// Strings and chars are `String`, numbers are `Number`; attributes are recognized.
    Split,
    /// Strings and chars are `String`; numbers stay plain; no attribute rule.
    StringOnly,
}

impl CategoryScheme {
    pub const ALL: [CategoryScheme; 3] = [
        CategoryScheme::Literal,
        CategoryScheme::Split,
        CategoryScheme::StringOnly,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CategoryScheme::Literal => "literal",
            CategoryScheme::Split => "split",
            CategoryScheme::StringOnly => "string-only",
        }
    }

    /// Whether the `[[ ... ]]` rule takes part in scanning.
    pub fn attributes(self) -> bool {
        !matches!(self, CategoryScheme::StringOnly)
    }

    pub fn categorize(self, kind: TokenKind) -> Category {
        match kind {
            TokenKind::Keyword => Category::Keyword,
            TokenKind::LineComment | TokenKind::BlockComment => Category::Comment,
            TokenKind::Preprocessor => Category::Preprocessor,
            TokenKind::Attribute => Category::Attribute,
            TokenKind::RawString | TokenKind::String | TokenKind::Char => match self {
                CategoryScheme::Literal => Category::Literal,
                CategoryScheme::Split | CategoryScheme::StringOnly => Category::String,
            },
            TokenKind::Number => match self {
                CategoryScheme::Literal => Category::Literal,
                CategoryScheme::Split => Category::Number,
                CategoryScheme::StringOnly => Category::Plain,
            },
            TokenKind::Whitespace | TokenKind::Ident | TokenKind::Other => Category::Plain,
        }
    }
}

impl fmt::Display for CategoryScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CategoryScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| format!("Unknown scheme: {s} (expected literal, split or string-only)"))
    }
}

/// A classified slice of the source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub category: Category,
    pub span: Span,
    pub text: &'a str,
}

impl<'a> Fragment<'a> {
    pub fn new(category: Category, span: Span, text: &'a str) -> Self {
        Self {
            category,
            span,
            text,
        }
    }
}
