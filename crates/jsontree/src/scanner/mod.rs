//! Scanner: turns JSON text into a lazy stream of positioned tokens.
//!
//! What it does
//! - Walks the input left to right, skipping the four JSON whitespace
//!   characters and emitting one [`Token`] per punctuator, string, number or
//!   keyword.
//! - Tracks `offset/line/column` for every token so later stages can report
//!   where a problem starts.
//!
//! Borrowing
//! - String payloads keep their escape sequences unresolved, so a string
//!   token is always a contiguous slice of the input. Numbers are kept as
//!   their literal text. Both are therefore returned as `&'src str` borrows;
//!   the tree builder copies them into owned storage.
//!
//! Scope
//! - The scanner does not check structure. `}}}` scans fine; rejecting it is
//!   the tree builder's job.
//!
//! Invariants
//! - After yielding an error, the iterator is exhausted.
//! - Every token position points at the token's first character.

mod literal;

use core::{fmt, iter::FusedIterator};

use literal::{LiteralMatcher, Step};

use crate::{
    error::{LexicalError, ParseError},
    numbers::{is_numeric_char, is_strict_number},
    options::ParserOptions,
    position::Position,
};

/// The payload of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenValue<'src> {
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
    Colon,
    Comma,
    /// Raw string contents between the quotes, escapes unresolved.
    String(&'src str),
    /// Literal numeric text; parsing is deferred to typed access.
    Number(&'src str),
    Boolean(bool),
    Null,
}

impl TokenValue<'_> {
    pub(crate) fn kind(&self) -> TokenKind {
        match self {
            TokenValue::BeginObject => TokenKind::BeginObject,
            TokenValue::EndObject => TokenKind::EndObject,
            TokenValue::BeginArray => TokenKind::BeginArray,
            TokenValue::EndArray => TokenKind::EndArray,
            TokenValue::Colon => TokenKind::Colon,
            TokenValue::Comma => TokenKind::Comma,
            TokenValue::String(_) => TokenKind::String,
            TokenValue::Number(_) => TokenKind::Number,
            TokenValue::Boolean(_) => TokenKind::Boolean,
            TokenValue::Null => TokenKind::Null,
        }
    }
}

/// A scanned token and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'src> {
    pub position: Position,
    pub value: TokenValue<'src>,
}

impl Token<'_> {
    #[inline]
    pub(crate) fn kind(&self) -> TokenKind {
        self.value.kind()
    }
}

/// The kind of a token, as reported in structural errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    BeginObject,
    /// `}`
    EndObject,
    /// `[`
    BeginArray,
    /// `]`
    EndArray,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A string literal.
    String,
    /// A numeric literal.
    Number,
    /// `true` or `false`.
    Boolean,
    /// `null`.
    Null,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::BeginObject => "`{`",
            TokenKind::EndObject => "`}`",
            TokenKind::BeginArray => "`[`",
            TokenKind::EndArray => "`]`",
            TokenKind::Colon => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::Null => "null",
        })
    }
}

/// A single-pass tokenizer over borrowed input.
///
/// Restarting means constructing a new scanner; the intended use is to
/// collect the whole stream before building the tree.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'src> {
    text: &'src str,
    position: Position,
    options: ParserOptions,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(text: &'src str, options: ParserOptions) -> Self {
        Self {
            text,
            position: Position::START,
            options,
            finished: false,
        }
    }

    /// Decodes but does not consume the next character.
    #[inline]
    fn peek(&self) -> Option<char> {
        let rest = self.text.as_bytes().get(self.position.offset..)?;
        let (ch, len) = bstr::decode_utf8(rest);
        if len == 0 {
            return None;
        }
        ch
    }

    /// Consumes one character.
    #[inline]
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position.bump(ch, ch.len_utf8());
        Some(ch)
    }

    fn next_token(&mut self) -> Result<Option<Token<'src>>, ParseError> {
        loop {
            let start = self.position;
            let Some(c) = self.peek() else {
                return Ok(None);
            };

            let value = match c {
                ' ' | '\t' | '\n' | '\r' => {
                    self.advance();
                    continue;
                }
                '{' => self.punctuator(TokenValue::BeginObject),
                '}' => self.punctuator(TokenValue::EndObject),
                '[' => self.punctuator(TokenValue::BeginArray),
                ']' => self.punctuator(TokenValue::EndArray),
                ':' => self.punctuator(TokenValue::Colon),
                ',' => self.punctuator(TokenValue::Comma),
                '"' => self.scan_string(start)?,
                '-' | '0'..='9' => self.scan_number(start)?,
                't' | 'f' | 'n' => self.scan_literal(c)?,
                other => {
                    return Err(ParseError::lexical(LexicalError::UnsupportedCharacter(other), start));
                }
            };

            return Ok(Some(Token {
                position: start,
                value,
            }));
        }
    }

    fn punctuator(&mut self, value: TokenValue<'src>) -> TokenValue<'src> {
        self.advance();
        value
    }

    /// Reads a string literal verbatim. A backslash and the character after
    /// it are copied through without interpretation, so an escaped quote
    /// never terminates the literal.
    fn scan_string(&mut self, start: Position) -> Result<TokenValue<'src>, ParseError> {
        self.advance(); // opening quote
        let content_start = self.position.offset;

        loop {
            match self.advance() {
                None => return Err(ParseError::lexical(LexicalError::UnterminatedString, start)),
                Some('"') => break,
                Some('\\') => {
                    if self.advance().is_none() {
                        return Err(ParseError::lexical(LexicalError::UnterminatedString, start));
                    }
                }
                Some(_) => {}
            }
        }

        // The closing quote is one byte.
        let content_end = self.position.offset - 1;
        Ok(TokenValue::String(&self.text[content_start..content_end]))
    }

    /// Reads a maximal run of numeric characters.
    fn scan_number(&mut self, start: Position) -> Result<TokenValue<'src>, ParseError> {
        loop {
            match self.peek() {
                Some(c) if is_numeric_char(c) => {
                    self.advance();
                }
                Some(_) => break,
                // A number can never end the document; the root is a container.
                None => {
                    return Err(ParseError::lexical(LexicalError::UnexpectedEndOfInput, self.position));
                }
            }
        }

        let literal = &self.text[start.offset..self.position.offset];
        let malformed = literal.is_empty()
            || literal.ends_with('.')
            || (self.options.strict_numbers && !is_strict_number(literal));
        if malformed {
            return Err(ParseError::lexical(LexicalError::InvalidNumber(literal.into()), start));
        }
        Ok(TokenValue::Number(literal))
    }

    /// Matches `true`, `false` or `null` exactly.
    fn scan_literal(&mut self, first: char) -> Result<TokenValue<'src>, ParseError> {
        let Some(mut matcher) = LiteralMatcher::new(first) else {
            return Err(ParseError::lexical(LexicalError::UnsupportedCharacter(first), self.position));
        };
        self.advance();

        loop {
            let Some(c) = self.peek() else {
                return Err(ParseError::lexical(LexicalError::UnexpectedEndOfInput, self.position));
            };
            match matcher.step(c) {
                Step::NeedMore => {
                    self.advance();
                }
                Step::Done(value) => {
                    self.advance();
                    return Ok(value);
                }
                Step::Reject => {
                    let expected = matcher.expected();
                    return Err(ParseError::lexical(LexicalError::InvalidLiteral { expected }, self.position));
                }
            }
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token<'src>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Scanner<'_> {}
