//! cpphl_lexer: C/C++ scanner and highlighter.
//!
//! Splits source text into classified fragments in one forward pass and renders them
//! as markup. Entry points: `highlight`, `highlight_with`, `classify`, and
//! `Lexer::new(input).lex()` for the raw token stream.
mod cursor;
mod highlight;
mod keywords;
mod lexer;
mod number;
mod rules;

pub use highlight::{Classified, classify, highlight, highlight_with};
pub use keywords::{is_keyword, keywords};
pub use lexer::{LexResult, Lexer};
