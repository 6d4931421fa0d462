use crate::{Diagnostic, SourceFile};

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    idx = idx.min(text.len());
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Formats a diagnostic as `Severity [code]:line:col: name: message` followed by the
/// offending line and a caret under the start of the span.
pub fn render_diagnostic(source: &SourceFile, diag: &Diagnostic) -> String {
    let code_str = diag.code.map(|c| format!(" [{c}]")).unwrap_or_default();
    let Some(span) = diag.span else {
        return format!(
            "{:?}{}: {}: {}",
            diag.severity, code_str, source.name, diag.message
        );
    };
    let start = floor_char_boundary(source.text.as_str(), span.start.0 as usize) as u32;
    let (line, col) = source.text.line_col(start);

    let mut out = format!(
        "{:?}{}:{}:{}: {}: {}",
        diag.severity,
        code_str,
        line + 1,
        col + 1,
        source.name,
        diag.message
    );
    out.push('\n');
    out.push_str("  | ");
    out.push_str(source.text.line_text(start));
    out.push('\n');
    out.push_str("  | ");
    out.extend(std::iter::repeat_n(' ', col as usize));
    out.push('^');
    out
}
