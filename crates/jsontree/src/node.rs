//! The document tree returned by [`deserialize`](crate::deserialize).
//!
//! A [`Node`] is a closed tagged value: its [`Kind`] decides whether it holds
//! a scalar or an ordered list of children, and the type system keeps the
//! two apart. Objects are stored as an ordered member list rather than a map,
//! so source order survives and duplicate keys remain visible.
use alloc::{borrow::Cow, string::String, vec::Vec};
use core::{fmt, slice};

use crate::{access::FromNode, error::AccessError, escape};

/// The kind of a [`Node`], fixed when the node is built.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A numeric literal, stored as text until read.
    Numeric,
    /// A string, stored with its escape sequences unresolved.
    String,
    /// `true` or `false`.
    Boolean,
    /// An ordered list of unkeyed children.
    Array,
    /// An ordered list of keyed children.
    Object,
    /// `null`.
    Null,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Numeric => "numeric",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Null => "null",
        })
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Payload {
    Numeric(String),
    String(String),
    Boolean(bool),
    Array(Vec<Node>),
    Object(Vec<Node>),
    Null,
}

/// A node in a parsed JSON document.
///
/// Nodes are immutable: a tree is built in full by one call to
/// [`deserialize`](crate::deserialize) and only read afterwards, so it can be
/// shared between threads freely.
///
/// # Examples
///
/// ```
/// use jsontree::{Kind, deserialize};
///
/// let doc = deserialize(r#"{"name": "tree", "sizes": [1, 2.5]}"#)?;
/// assert_eq!(doc.kind(), Kind::Object);
/// assert_eq!(doc.get_keyed("name")?.get::<&str>()?, "tree");
///
/// let sizes = doc.get_keyed("sizes")?;
/// assert_eq!(sizes.get_indexed(0)?.get::<u8>()?, 1);
/// assert_eq!(sizes.get_indexed(1)?.get::<f64>()?, 2.5);
/// assert_eq!(sizes.iter().count(), 2);
/// # Ok::<(), jsontree::Error>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    key: Option<String>,
    payload: Payload,
}

impl Node {
    pub(crate) fn new(key: Option<String>, payload: Payload) -> Self {
        Self { key, payload }
    }

    pub(crate) fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The node's kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self.payload {
            Payload::Numeric(_) => Kind::Numeric,
            Payload::String(_) => Kind::String,
            Payload::Boolean(_) => Kind::Boolean,
            Payload::Array(_) => Kind::Array,
            Payload::Object(_) => Kind::Object,
            Payload::Null => Kind::Null,
        }
    }

    /// The member key, present only for children of an object.
    ///
    /// Keys are raw string contents, escapes unresolved.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Reads the node's scalar value as `T`.
    ///
    /// Numeric nodes parse their literal text with `T`'s standard `FromStr`
    /// conversion, so `3.14` reads as `f64` but not as `i32`. String and
    /// Boolean nodes return their stored value and only convert to their own
    /// type.
    ///
    /// # Errors
    ///
    /// [`AccessError::InvalidNumber`] if the literal is not valid for `T`;
    /// [`AccessError::TypeMismatch`] if the node's kind cannot produce `T`,
    /// which includes every Array, Object and Null node.
    pub fn get<'a, T: FromNode<'a>>(&'a self) -> Result<T, AccessError> {
        T::from_node(self)
    }

    /// The unparsed text of a Numeric node.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match &self.payload {
            Payload::Numeric(literal) => Some(literal.as_str()),
            _ => None,
        }
    }

    /// Decodes the escape sequences of a String node.
    ///
    /// Borrows when the string holds no backslash.
    ///
    /// # Errors
    ///
    /// [`AccessError::TypeMismatch`] on a non-string node and
    /// [`AccessError::InvalidEscape`] on a malformed escape.
    pub fn unescaped(&self) -> Result<Cow<'_, str>, AccessError> {
        match &self.payload {
            Payload::String(raw) => escape::unescape(raw),
            _ => Err(AccessError::TypeMismatch {
                expected: "string",
                found: self.kind(),
            }),
        }
    }

    /// Returns the first child whose key equals `key`.
    ///
    /// # Errors
    ///
    /// [`AccessError::NotAnObject`] unless the node is an object, and
    /// [`AccessError::KeyNotFound`] if no member has the key.
    pub fn get_keyed(&self, key: &str) -> Result<&Node, AccessError> {
        match &self.payload {
            Payload::Object(members) => members
                .iter()
                .find(|member| member.key() == Some(key))
                .ok_or_else(|| AccessError::KeyNotFound(key.into())),
            _ => Err(AccessError::NotAnObject(self.kind())),
        }
    }

    /// Like [`get_keyed`](Self::get_keyed), but `None` on any miss.
    #[must_use]
    pub fn try_get_keyed(&self, key: &str) -> Option<&Node> {
        self.get_keyed(key).ok()
    }

    /// Returns `true` if this is an object with a member named `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.try_get_keyed(key).is_some()
    }

    /// The member keys of an object in source order, duplicates included.
    /// Empty for every other kind.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children().iter().filter_map(Node::key)
    }

    /// Returns the child at `index`. Objects support ordinal access to
    /// their members too.
    ///
    /// # Errors
    ///
    /// [`AccessError::NotAContainer`] on scalar and Null nodes, and
    /// [`AccessError::IndexOutOfRange`] past the last child.
    pub fn get_indexed(&self, index: usize) -> Result<&Node, AccessError> {
        match &self.payload {
            Payload::Array(children) | Payload::Object(children) => {
                children.get(index).ok_or(AccessError::IndexOutOfRange {
                    index,
                    len: children.len(),
                })
            }
            _ => Err(AccessError::NotAContainer(self.kind())),
        }
    }

    /// The children in storage order; empty for scalar and Null nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match &self.payload {
            Payload::Array(children) | Payload::Object(children) => children.as_slice(),
            _ => &[],
        }
    }

    /// Iterates over the children. Each call starts over from the first
    /// child; scalar and Null nodes yield nothing.
    pub fn iter(&self) -> slice::Iter<'_, Node> {
        self.children().iter()
    }

    /// The number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children().len()
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children().is_empty()
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec, vec::Vec};

    use super::*;

    fn number(key: Option<&str>, literal: &str) -> Node {
        Node::new(key.map(Into::into), Payload::Numeric(literal.to_string()))
    }

    fn object(members: Vec<Node>) -> Node {
        Node::new(None, Payload::Object(members))
    }

    #[test]
    fn kind_follows_payload() {
        assert_eq!(number(None, "1").kind(), Kind::Numeric);
        assert_eq!(Node::new(None, Payload::Null).kind(), Kind::Null);
        assert_eq!(object(vec![]).kind(), Kind::Object);
        assert_eq!(Node::new(None, Payload::Array(vec![])).kind(), Kind::Array);
    }

    #[test]
    fn keyed_access_returns_first_match() {
        let node = object(vec![
            number(Some("a"), "1"),
            number(Some("b"), "2"),
            number(Some("a"), "3"),
        ]);
        assert_eq!(node.get_keyed("a").unwrap().as_literal(), Some("1"));
        assert_eq!(node.keys().collect::<Vec<_>>(), ["a", "b", "a"]);
        assert!(node.contains_key("b"));
        assert!(!node.contains_key("c"));
        assert_eq!(
            node.get_keyed("c"),
            Err(AccessError::KeyNotFound("c".to_string()))
        );
    }

    #[test]
    fn keyed_access_on_array_is_usage_error() {
        let node = Node::new(None, Payload::Array(vec![number(None, "1")]));
        assert_eq!(node.get_keyed("a"), Err(AccessError::NotAnObject(Kind::Array)));
        assert_eq!(node.try_get_keyed("a"), None);
    }

    #[test]
    fn indexed_access_bounds() {
        let node = object(vec![number(Some("a"), "1"), number(Some("b"), "2")]);
        assert_eq!(node.get_indexed(1).unwrap().key(), Some("b"));
        assert_eq!(
            node.get_indexed(2),
            Err(AccessError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            number(None, "1").get_indexed(0),
            Err(AccessError::NotAContainer(Kind::Numeric))
        );
    }

    #[test]
    fn scalars_iterate_as_empty() {
        let node = number(None, "1");
        assert_eq!(node.iter().count(), 0);
        assert!(node.is_empty());
        assert_eq!(node.keys().count(), 0);
    }

    #[test]
    fn iteration_is_restartable() {
        let node = object(vec![number(Some("a"), "1"), number(Some("b"), "2")]);
        let first: Vec<_> = node.iter().filter_map(Node::key).collect();
        let second: Vec<_> = (&node).into_iter().filter_map(Node::key).collect();
        assert_eq!(first, second);
        assert_eq!(node.len(), 2);
    }

    #[test]
    fn unescaped_requires_string() {
        assert_eq!(
            number(None, "1").unescaped(),
            Err(AccessError::TypeMismatch {
                expected: "string",
                found: Kind::Numeric
            })
        );
    }
}
