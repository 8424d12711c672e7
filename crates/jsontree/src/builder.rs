//! Tree builder: recursive descent over a materialized token list.
//!
//! Each container's extent is found up front with a depth-balance scan: from
//! the opening delimiter, count nested opens and closes of the same pair
//! until the count returns to zero. The container's members are then parsed
//! strictly inside that extent, and nested scans are bounded by it, so no
//! scan can run past the end of the token list.
//!
//! The cursor is threaded through return values (`(Node, next_index)`);
//! the builder itself only holds the tokens, the options and the current
//! depth.
//!
//! The first violation aborts the parse. There is no recovery and no
//! partial tree.
use alloc::{collections::BTreeSet, string::String, vec::Vec};

use crate::{
    error::{ParseError, StructuralError},
    node::{Node, Payload},
    options::ParserOptions,
    position::Position,
    scanner::{Token, TokenKind, TokenValue},
};

pub(crate) struct TreeBuilder<'t, 'src> {
    tokens: &'t [Token<'src>],
    options: ParserOptions,
    depth: usize,
}

fn structural(err: StructuralError, token: &Token<'_>) -> ParseError {
    ParseError::structural(err, token.position)
}

impl<'t, 'src> TreeBuilder<'t, 'src> {
    pub(crate) fn new(tokens: &'t [Token<'src>], options: ParserOptions) -> Self {
        Self {
            tokens,
            options,
            depth: 0,
        }
    }

    /// Builds the root container. The document must be exactly one object
    /// or array.
    pub(crate) fn build(mut self) -> Result<Node, ParseError> {
        let Some(first) = self.tokens.first() else {
            return Err(ParseError::structural(
                StructuralError::EmptyDocument,
                Position::START,
            ));
        };
        if !matches!(first.value, TokenValue::BeginObject | TokenValue::BeginArray) {
            return Err(structural(
                StructuralError::InvalidRoot {
                    found: first.kind(),
                },
                first,
            ));
        }

        let last = self.tokens.len() - 1;
        let (root, next) = self.parse_container(0, last, None)?;
        if let Some(extra) = self.tokens.get(next) {
            return Err(structural(
                StructuralError::TrailingTokens {
                    found: extra.kind(),
                },
                extra,
            ));
        }
        Ok(root)
    }

    /// Depth-balance scan: the index of the delimiter closing the one at
    /// `open`, searching no further than `limit`.
    fn matching_close(&self, open: usize, limit: usize) -> Result<usize, ParseError> {
        let open_token = &self.tokens[open];
        let (opener, closer) = match open_token.value {
            TokenValue::BeginObject => (TokenKind::BeginObject, TokenKind::EndObject),
            _ => (TokenKind::BeginArray, TokenKind::EndArray),
        };

        let mut depth = 1usize;
        for (index, token) in self.tokens.iter().enumerate().take(limit + 1).skip(open + 1) {
            let kind = token.kind();
            if kind == opener {
                depth += 1;
            } else if kind == closer {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            }
        }
        Err(structural(StructuralError::UnmatchedDelimiter, open_token))
    }

    /// Parses the object or array opening at `open`, whose closing delimiter
    /// must lie at or before `limit`. Returns the node and the index just
    /// past its closing delimiter.
    fn parse_container(
        &mut self,
        open: usize,
        limit: usize,
        key: Option<String>,
    ) -> Result<(Node, usize), ParseError> {
        let close = self.matching_close(open, limit)?;

        self.depth += 1;
        if let Some(max_depth) = self.options.max_depth {
            if self.depth > max_depth {
                return Err(structural(
                    StructuralError::DepthLimitExceeded(max_depth),
                    &self.tokens[open],
                ));
            }
        }

        let payload = match self.tokens[open].value {
            TokenValue::BeginObject => Payload::Object(self.parse_members(open, close)?),
            _ => Payload::Array(self.parse_elements(open, close)?),
        };
        self.depth -= 1;

        Ok((Node::new(key, payload), close + 1))
    }

    /// Parses the value at `cursor`, which must lie before `close`.
    fn parse_value(
        &mut self,
        cursor: usize,
        close: usize,
        key: Option<String>,
    ) -> Result<(Node, usize), ParseError> {
        let token = &self.tokens[cursor];
        let payload = match token.value {
            TokenValue::BeginObject | TokenValue::BeginArray => {
                return self.parse_container(cursor, close, key);
            }
            TokenValue::String(raw) => Payload::String(raw.into()),
            TokenValue::Number(literal) => Payload::Numeric(literal.into()),
            TokenValue::Boolean(value) => Payload::Boolean(value),
            TokenValue::Null => Payload::Null,
            TokenValue::EndObject
            | TokenValue::EndArray
            | TokenValue::Colon
            | TokenValue::Comma => {
                return Err(structural(
                    StructuralError::ExpectedValue {
                        found: token.kind(),
                    },
                    token,
                ));
            }
        };
        Ok((Node::new(key, payload), cursor + 1))
    }

    /// Parses `"key": value` members between `open` and `close`.
    fn parse_members(&mut self, open: usize, close: usize) -> Result<Vec<Node>, ParseError> {
        let mut members = Vec::new();
        let mut cursor = open + 1;
        if cursor == close {
            return Ok(members);
        }

        let mut seen = BTreeSet::new();
        loop {
            let key_token = &self.tokens[cursor];
            let TokenValue::String(key) = key_token.value else {
                return Err(structural(
                    StructuralError::ExpectedKey {
                        found: key_token.kind(),
                    },
                    key_token,
                ));
            };
            if self.options.reject_duplicate_keys && !seen.insert(key) {
                return Err(structural(
                    StructuralError::DuplicateKey(key.into()),
                    key_token,
                ));
            }
            cursor += 1;

            let colon = &self.tokens[cursor];
            if colon.value != TokenValue::Colon {
                return Err(structural(
                    StructuralError::ExpectedColon {
                        found: colon.kind(),
                    },
                    colon,
                ));
            }
            cursor += 1;

            let (member, next) = self.parse_value(cursor, close, Some(key.into()))?;
            members.push(member);
            cursor = next;

            let separator = &self.tokens[cursor];
            match separator.value {
                TokenValue::EndObject if cursor == close => return Ok(members),
                TokenValue::Comma => cursor += 1,
                _ => {
                    return Err(structural(
                        StructuralError::ExpectedCommaOrClose {
                            found: separator.kind(),
                        },
                        separator,
                    ));
                }
            }
        }
    }

    /// Parses comma-separated elements between `open` and `close`.
    fn parse_elements(&mut self, open: usize, close: usize) -> Result<Vec<Node>, ParseError> {
        let mut elements = Vec::new();
        let mut cursor = open + 1;
        if cursor == close {
            return Ok(elements);
        }
        if self.tokens[cursor].value == TokenValue::Comma {
            return Err(structural(
                StructuralError::LeadingComma,
                &self.tokens[cursor],
            ));
        }

        loop {
            let (element, next) = self.parse_value(cursor, close, None)?;
            elements.push(element);
            cursor = next;

            let separator = &self.tokens[cursor];
            match separator.value {
                TokenValue::EndArray if cursor == close => return Ok(elements),
                TokenValue::Comma => cursor += 1,
                _ => {
                    return Err(structural(
                        StructuralError::ExpectedCommaOrClose {
                            found: separator.kind(),
                        },
                        separator,
                    ));
                }
            }
        }
    }
}
