use cpphl_syntax::is_blank;

/// Read position in the source buffer plus the start-of-line state the
/// preprocessor rule needs.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    /// Only spaces and tabs since the last `\n` (or buffer start).
    line_blank: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line_blank: true,
        }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub(crate) fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn prev_char(&self) -> Option<char> {
        self.input[..self.pos].chars().next_back()
    }

    pub(crate) fn at_line_start(&self) -> bool {
        self.line_blank
    }

    /// Advances over `len` bytes, which must end on a char boundary.
    pub(crate) fn bump(&mut self, len: usize) {
        let start = self.pos;
        let end = (start + len).min(self.input.len());
        let consumed = &self.input[start..end];
        self.line_blank = match consumed.rfind('\n') {
            Some(nl) => consumed[nl + 1..].chars().all(is_blank),
            None => self.line_blank && consumed.chars().all(is_blank),
        };
        self.pos = end;
    }
}
