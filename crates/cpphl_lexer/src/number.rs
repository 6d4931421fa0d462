//! Numeric literal recognition.
use std::sync::LazyLock;

use regex::Regex;

/// Hex, binary, octal (any leading `0`), then decimal with optional fraction and
/// exponent; `'` separators allowed in the digit runs; trailing `uUlLfF` suffixes.
/// Alternatives are tried in order, so `0.5` only matches `0`.
const NUMBER_PATTERN: &str = r"^(?:0[xX][0-9a-fA-F']+|0[bB][01']+|0[0-7']*|[1-9][0-9']*(?:\.[0-9']*)?(?:[eE][+-]?[0-9]+)?)[uUlLfF]*";

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMBER_PATTERN).expect("number pattern compiles"));

/// Length in bytes of the numeric literal at the start of `rest`, if any.
pub(crate) fn match_number(rest: &str) -> Option<usize> {
    if !rest.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        return None;
    }
    NUMBER.find(rest).map(|m| m.end()).filter(|&len| len > 0)
}
