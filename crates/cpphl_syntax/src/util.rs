/// Identifier start: ASCII letter or underscore.
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whitespace as understood by the scanner; includes the byte-order mark.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Horizontal blank allowed before a preprocessor `#`.
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}
