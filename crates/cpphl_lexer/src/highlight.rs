use cpphl_syntax::{
    Category, CategoryScheme, Diagnostic, Fragment, HighlightConfig, Span, render_fragments,
};
use tracing::trace_span;

use crate::Lexer;

/// Classified view of a buffer.
#[derive(Clone, Debug)]
pub struct Classified<'a> {
    /// Fragments partitioning the input. Adjacent plain text is merged, so no two
    /// consecutive fragments are both `Plain`.
    pub fragments: Vec<Fragment<'a>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan `text` and tag every token according to `scheme`.
pub fn classify(text: &str, scheme: CategoryScheme) -> Classified<'_> {
    let lexed = Lexer::new(text).attributes(scheme.attributes()).lex();
    let mut fragments: Vec<Fragment<'_>> = Vec::with_capacity(lexed.tokens.len());
    for token in &lexed.tokens {
        let category = scheme.categorize(token.kind);
        if category.is_plain() {
            if let Some(last) = fragments.last_mut().filter(|f| f.category.is_plain()) {
                last.span = Span::new(last.span.start.0, token.span.end.0);
                last.text = &text[last.span.range()];
                continue;
            }
        }
        fragments.push(Fragment::new(category, token.span, &text[token.span.range()]));
    }
    Classified {
        fragments,
        diagnostics: lexed.diagnostics,
    }
}

/// Highlight with the default configuration: merged `literal` category,
/// attributes on, `<span class="cpp-...">` wrappers.
pub fn highlight(text: &str) -> String {
    highlight_with(text, &HighlightConfig::default())
}

pub fn highlight_with(text: &str, config: &HighlightConfig) -> String {
    let span = trace_span!("highlight", len = text.len(), scheme = %config.scheme);
    let _guard = span.enter();
    let classified = classify(text, config.scheme);
    tracing::trace!(
        fragments = classified.fragments.len(),
        classified = classified
            .fragments
            .iter()
            .filter(|f| f.category != Category::Plain)
            .count(),
        "scanned"
    );
    render_fragments(&classified.fragments, config)
}
