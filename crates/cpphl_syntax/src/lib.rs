//! cpphl_syntax: shared vocabulary for the C/C++ highlighter.
//!
//! Spans, tokens, presentation categories, rendering configuration, markup
//! rendering and diagnostics.
mod category;
mod config;
mod diagnostic;
mod markup;
mod render;
mod source;
mod span;
mod token;
mod util;

pub use category::{Category, CategoryScheme, Fragment};
pub use config::{DEFAULT_CLASS_PREFIX, DEFAULT_ELEMENT, HighlightConfig};
pub use diagnostic::{Diagnostic, Severity, codes};
pub use markup::{escape_html, escape_html_into, render_fragment, render_fragments};
pub use render::render_diagnostic;
pub use source::{SourceFile, SourceText};
pub use span::{ByteIndex, Span};
pub use token::{Token, TokenKind};
pub use util::{is_blank, is_ident_continue, is_ident_start, is_space};
