use alloc::string::String;

use thiserror::Error;

use crate::{node::Kind, position::Position, scanner::TokenKind};

/// A failed parse, positioned at the offending character or token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {position}")]
pub struct ParseError {
    #[source]
    pub(crate) kind: ParseErrorKind,
    pub(crate) position: Position,
}

impl ParseError {
    pub(crate) fn lexical(err: LexicalError, position: Position) -> Self {
        Self {
            kind: ParseErrorKind::Lexical(err),
            position,
        }
    }

    pub(crate) fn structural(err: StructuralError, position: Position) -> Self {
        Self {
            kind: ParseErrorKind::Structural(err),
            position,
        }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Where it went wrong.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns `true` if the scanner rejected the input.
    #[must_use]
    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Lexical(_))
    }

    /// Returns `true` if the tree builder rejected the token stream.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Structural(_))
    }
}

/// The stage that rejected the input, and why.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The scanner could not turn the text into tokens.
    #[error("lexical error: {0}")]
    Lexical(#[from] LexicalError),
    /// The tokens do not form a valid document.
    #[error("structural error: {0}")]
    Structural(#[from] StructuralError),
}

/// Errors raised while scanning text into tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    /// A character that cannot start any token.
    #[error("unsupported character {0:?}")]
    UnsupportedCharacter(char),
    /// Input ended inside a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Input ended inside a numeric literal or keyword.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A keyword starting with `t`, `f` or `n` did not spell `true`,
    /// `false` or `null`.
    #[error("invalid literal, expected `{expected}`")]
    InvalidLiteral {
        /// The keyword that was being matched.
        expected: &'static str,
    },
    /// A numeric literal that ends in `.`, or that breaks the strict number
    /// grammar when [`ParserOptions::strict_numbers`](crate::ParserOptions::strict_numbers)
    /// is set.
    #[error("invalid numeric literal `{0}`")]
    InvalidNumber(String),
    /// The input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8")]
    InvalidUtf8,
}

/// Errors raised while building the tree from tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// The input holds no tokens.
    #[error("document is empty")]
    EmptyDocument,
    /// The first token is not `{` or `[`.
    #[error("document must start with `{{` or `[`, found {found}")]
    InvalidRoot {
        /// The token that was found instead.
        found: TokenKind,
    },
    /// An object member does not start with a string key.
    #[error("expected a string key, found {found}")]
    ExpectedKey {
        /// The token that was found instead.
        found: TokenKind,
    },
    /// A key is not followed by `:`.
    #[error("expected `:`, found {found}")]
    ExpectedColon {
        /// The token that was found instead.
        found: TokenKind,
    },
    /// A value position holds punctuation.
    #[error("expected a value, found {found}")]
    ExpectedValue {
        /// The token that was found instead.
        found: TokenKind,
    },
    /// A value is followed by something other than `,` or the closing
    /// delimiter.
    #[error("expected `,` or closing delimiter, found {found}")]
    ExpectedCommaOrClose {
        /// The token that was found instead.
        found: TokenKind,
    },
    /// An array opens with `,`.
    #[error("array cannot start with `,`")]
    LeadingComma,
    /// An opening delimiter has no matching close.
    #[error("unmatched delimiter")]
    UnmatchedDelimiter,
    /// Tokens follow the root container's closing delimiter.
    #[error("unexpected {found} after the end of the document")]
    TrailingTokens {
        /// The first token after the root.
        found: TokenKind,
    },
    /// A key repeats within one object while
    /// [`ParserOptions::reject_duplicate_keys`](crate::ParserOptions::reject_duplicate_keys)
    /// is set.
    #[error("duplicate key {0:?}")]
    DuplicateKey(String),
    /// Nesting exceeds [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("nesting exceeds the maximum depth of {0}")]
    DepthLimitExceeded(usize),
}

/// Errors raised when reading a built tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The node's kind cannot produce the requested type.
    #[error("cannot read {found} node as {expected}")]
    TypeMismatch {
        /// The requested Rust type.
        expected: &'static str,
        /// The node's kind.
        found: Kind,
    },
    /// A numeric literal does not parse as the requested type.
    #[error("numeric literal `{literal}` is not a valid {target}")]
    InvalidNumber {
        /// The literal text as written in the source.
        literal: String,
        /// The requested Rust type.
        target: &'static str,
    },
    /// A string holds a malformed escape sequence.
    #[error("invalid escape sequence at byte {offset} of string")]
    InvalidEscape {
        /// Byte offset of the backslash within the raw string.
        offset: usize,
    },
    /// No member of the object has the key.
    #[error("no member with key {0:?}")]
    KeyNotFound(String),
    /// The index is past the last child.
    #[error("index {index} out of range for {len} children")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of children.
        len: usize,
    },
    /// Keyed access on a node that is not an object.
    #[error("keyed access requires an object node, found {0}")]
    NotAnObject(Kind),
    /// Positional access on a node that is neither an array nor an object.
    #[error("positional access requires an array or object node, found {0}")]
    NotAContainer(Kind),
}

/// Any error this crate produces.
///
/// Lets callers chain parsing and access with `?`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Reading the tree failed.
    #[error(transparent)]
    Access(#[from] AccessError),
}
