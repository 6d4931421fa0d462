//! Scanner rules, in precedence order.
//!
//! Each rule inspects the cursor and either declines or reports how many bytes it
//! consumes. Rules never look behind the cursor except for the two context checks
//! (`#` at line start, no letter before a number).
use cpphl_syntax::{TokenKind, is_ident_continue, is_ident_start, is_space};

use crate::cursor::Cursor;
use crate::keywords::is_keyword;
use crate::number::match_number;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Match {
    pub kind: TokenKind,
    pub len: usize,
    /// False when the construct ran to end of buffer without its terminator.
    pub terminated: bool,
}

impl Match {
    fn new(kind: TokenKind, len: usize) -> Self {
        Self {
            kind,
            len,
            terminated: true,
        }
    }

    fn unterminated(kind: TokenKind, len: usize) -> Self {
        Self {
            kind,
            len,
            terminated: false,
        }
    }
}

pub(crate) struct Rule {
    pub name: &'static str,
    /// Only active when attribute scanning is enabled.
    pub attribute: bool,
    pub scan: fn(&Cursor<'_>) -> Option<Match>,
}

const fn rule(name: &'static str, scan: fn(&Cursor<'_>) -> Option<Match>) -> Rule {
    Rule {
        name,
        attribute: false,
        scan,
    }
}

pub(crate) static RULES: [Rule; 10] = [
    rule("whitespace", whitespace),
    Rule {
        name: "attribute",
        attribute: true,
        scan: attribute,
    },
    rule("line-comment", line_comment),
    rule("block-comment", block_comment),
    rule("preprocessor", preprocessor),
    rule("raw-string", raw_string),
    rule("string", string),
    rule("char", char_literal),
    rule("number", number),
    rule("identifier", identifier),
];

fn whitespace(cur: &Cursor<'_>) -> Option<Match> {
    let rest = cur.rest();
    let len = rest
        .char_indices()
        .find(|&(_, c)| !is_space(c))
        .map_or(rest.len(), |(i, _)| i);
    (len > 0).then(|| Match::new(TokenKind::Whitespace, len))
}

fn attribute(cur: &Cursor<'_>) -> Option<Match> {
    let bytes = cur.rest().as_bytes();
    if !bytes.starts_with(b"[[") {
        return None;
    }
    let mut i = 2;
    let mut depth = 1u32;
    while i < bytes.len() && depth > 0 {
        if bytes[i..].starts_with(b"[[") {
            depth += 1;
            i += 2;
        } else if bytes[i..].starts_with(b"]]") {
            depth -= 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    Some(if depth == 0 {
        Match::new(TokenKind::Attribute, i)
    } else {
        Match::unterminated(TokenKind::Attribute, bytes.len())
    })
}

fn line_comment(cur: &Cursor<'_>) -> Option<Match> {
    let rest = cur.rest();
    if !rest.starts_with("//") {
        return None;
    }
    let len = rest.find('\n').unwrap_or(rest.len());
    Some(Match::new(TokenKind::LineComment, len))
}

fn block_comment(cur: &Cursor<'_>) -> Option<Match> {
    let rest = cur.rest();
    if !rest.starts_with("/*") {
        return None;
    }
    Some(match rest[2..].find("*/") {
        Some(close) => Match::new(TokenKind::BlockComment, close + 4),
        None => Match::unterminated(TokenKind::BlockComment, rest.len()),
    })
}

fn preprocessor(cur: &Cursor<'_>) -> Option<Match> {
    let rest = cur.rest();
    if !rest.starts_with('#') || !cur.at_line_start() {
        return None;
    }
    let bytes = rest.as_bytes();
    let mut end = 1;
    loop {
        let Some(off) = rest[end..].find('\n') else {
            end = rest.len();
            break;
        };
        let nl = end + off;
        if bytes[nl - 1] == b'\\' {
            end = nl + 1;
        } else {
            end = nl;
            break;
        }
    }
    Some(Match::new(TokenKind::Preprocessor, end))
}

fn raw_string(cur: &Cursor<'_>) -> Option<Match> {
    let rest = cur.rest();
    if !rest.starts_with("R\"") {
        return None;
    }
    let Some(open) = rest[2..].find('(') else {
        return Some(Match::unterminated(TokenKind::RawString, rest.len()));
    };
    let delimiter = &rest[2..2 + open];
    let body = 2 + open + 1;
    let terminator = format!("){delimiter}\"");
    Some(match rest[body..].find(&terminator) {
        Some(at) => Match::new(TokenKind::RawString, body + at + terminator.len()),
        None => Match::unterminated(TokenKind::RawString, rest.len()),
    })
}

/// Bytes taken by an encoding prefix directly followed by `quote`.
fn literal_prefix(bytes: &[u8], quote: u8) -> Option<usize> {
    match bytes {
        [q, ..] if *q == quote => Some(0),
        [b'u', b'8', q, ..] if *q == quote => Some(2),
        [b'L' | b'u' | b'U', q, ..] if *q == quote => Some(1),
        _ => None,
    }
}

fn quoted(cur: &Cursor<'_>, quote: u8, kind: TokenKind) -> Option<Match> {
    let bytes = cur.rest().as_bytes();
    let mut i = literal_prefix(bytes, quote)? + 1;
    // Escapes skip a single byte; a multi-byte char after `\` leaves only
    // continuation bytes, which can never match `quote` or `\`.
    while i < bytes.len() {
        match bytes[i] {
            b if b == quote => return Some(Match::new(kind, i + 1)),
            b'\\' => i = (i + 2).min(bytes.len()),
            _ => i += 1,
        }
    }
    Some(Match::unterminated(kind, bytes.len()))
}

fn string(cur: &Cursor<'_>) -> Option<Match> {
    quoted(cur, b'"', TokenKind::String)
}

fn char_literal(cur: &Cursor<'_>) -> Option<Match> {
    quoted(cur, b'\'', TokenKind::Char)
}

fn number(cur: &Cursor<'_>) -> Option<Match> {
    if cur.prev_char().is_some_and(is_ident_start) {
        return None;
    }
    match_number(cur.rest()).map(|len| Match::new(TokenKind::Number, len))
}

fn identifier(cur: &Cursor<'_>) -> Option<Match> {
    let rest = cur.rest();
    if !rest.chars().next().is_some_and(is_ident_start) {
        return None;
    }
    let len = rest
        .char_indices()
        .skip(1)
        .find(|&(_, c)| !is_ident_continue(c))
        .map_or(rest.len(), |(i, _)| i);
    let kind = if is_keyword(&rest[..len]) {
        TokenKind::Keyword
    } else {
        TokenKind::Ident
    };
    Some(Match::new(kind, len))
}

/// Last resort: one character as plain text. Always consumes, so the scan loop
/// makes progress on every iteration.
pub(crate) fn fallback(cur: &Cursor<'_>) -> Match {
    let len = cur.peek_char().map_or(1, char::len_utf8);
    Match::new(TokenKind::Other, len)
}
