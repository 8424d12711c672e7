use core::fmt;

/// A location in the source text.
///
/// `offset` is a byte offset; `line` and `column` are 1-based, with columns
/// counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Advances past `ch`, which is `len` bytes long in UTF-8.
    #[inline]
    pub(crate) fn bump(&mut self, ch: char, len: usize) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += len;
    }

    /// The position just past the end of `text`.
    pub(crate) fn after(text: &str) -> Position {
        let mut position = Position::START;
        for ch in text.chars() {
            position.bump(ch, ch.len_utf8());
        }
        position
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
