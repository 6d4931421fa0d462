//! Fragment rendering and output assembly.
use crate::{Fragment, HighlightConfig};

/// Appends `text` to `out` with `&`, `<` and `>` replaced by entities.
pub fn escape_html_into(out: &mut String, text: &str) {
    let mut last = 0;
    for (i, b) in text.bytes().enumerate() {
        let entity = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            _ => continue,
        };
        out.push_str(&text[last..i]);
        out.push_str(entity);
        last = i + 1;
    }
    out.push_str(&text[last..]);
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(&mut out, text);
    out
}

/// Renders one fragment: wrapped when classified, bare escaped text otherwise.
pub fn render_fragment(out: &mut String, fragment: &Fragment<'_>, config: &HighlightConfig) {
    let Some(class) = fragment.category.class_name() else {
        escape_html_into(out, fragment.text);
        return;
    };
    out.push('<');
    out.push_str(&config.element);
    out.push_str(" class=\"");
    out.push_str(&config.class_prefix);
    out.push_str(class);
    out.push_str("\">");
    escape_html_into(out, fragment.text);
    out.push_str("</");
    out.push_str(&config.element);
    out.push('>');
}

/// Concatenates rendered fragments in order, with nothing in between.
pub fn render_fragments(fragments: &[Fragment<'_>], config: &HighlightConfig) -> String {
    let text_len: usize = fragments.iter().map(|f| f.text.len()).sum();
    let wrapped = fragments.iter().filter(|f| !f.category.is_plain()).count();
    let per_wrapper = 2 * config.element.len() + config.class_prefix.len() + 32;
    let mut out = String::with_capacity(text_len + wrapped * per_wrapper);
    for fragment in fragments {
        render_fragment(&mut out, fragment, config);
    }
    out
}
