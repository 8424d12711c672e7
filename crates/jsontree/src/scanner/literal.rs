use super::TokenValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Null,
    True,
    False,
}

impl Keyword {
    const fn text(self) -> &'static str {
        match self {
            Keyword::Null => "null",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }

    const fn token(self) -> TokenValue<'static> {
        match self {
            Keyword::Null => TokenValue::Null,
            Keyword::True => TokenValue::Boolean(true),
            Keyword::False => TokenValue::Boolean(false),
        }
    }
}

/// What happened after feeding one more character into the matcher?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Character matched, but the keyword is not finished yet.
    NeedMore,
    /// Character matched *and* it was the last byte of the keyword.
    Done(TokenValue<'static>),
    /// Character did **not** match the expected byte.
    Reject,
}

/// Matches `true`, `false` or `null` one character at a time.
///
/// Holds the bytes still expected; there is no backtracking, so the first
/// mismatch is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LiteralMatcher {
    remaining: &'static [u8],
    keyword: Keyword,
}

impl LiteralMatcher {
    /// Starts matching after the *first* character (`n`, `t`, or `f`).
    pub(crate) fn new(first: char) -> Option<Self> {
        let keyword = match first {
            'n' => Keyword::Null,
            't' => Keyword::True,
            'f' => Keyword::False,
            _ => return None,
        };
        Some(Self {
            remaining: &keyword.text().as_bytes()[1..],
            keyword,
        })
    }

    /// The full keyword being matched, for diagnostics.
    pub(crate) fn expected(&self) -> &'static str {
        self.keyword.text()
    }

    /// Feeds the next input character.
    pub(crate) fn step(&mut self, c: char) -> Step {
        match self.remaining.split_first() {
            Some((&expected, rest)) if expected as char == c => {
                self.remaining = rest;
                if rest.is_empty() {
                    Step::Done(self.keyword.token())
                } else {
                    Step::NeedMore
                }
            }
            _ => Step::Reject,
        }
    }
}
