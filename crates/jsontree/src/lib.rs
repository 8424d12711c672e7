//! A small JSON document parser that builds an immutable tree.
//!
//! Parsing runs in two passes. The scanner turns the text into positioned
//! tokens; the tree builder then walks the complete token list and produces
//! a [`Node`] tree whose root is always an object or an array.
//!
//! Values keep their source form. Numbers are stored as literal text and
//! only parsed when read with [`Node::get`], so the same node can be read as
//! `u8`, `i64` or `f64` depending on what the caller needs. Strings keep
//! their escape sequences; [`Node::unescaped`] decodes them on demand.
//!
//! ```rust
//! let doc = jsontree::deserialize(r#"{"id": 7, "tags": ["a", "b"]}"#)?;
//! assert_eq!(doc.get_keyed("id")?.get::<u32>()?, 7);
//! assert_eq!(doc.get_keyed("tags")?.len(), 2);
//! # Ok::<(), jsontree::Error>(())
//! ```
//!
//! Every failure is reported through [`ParseError`], which carries the
//! [`Position`] of the offending character or token.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod access;
mod builder;
mod error;
mod escape;
mod node;
mod numbers;
mod options;
mod position;
mod scanner;

#[cfg(test)]
mod tests;

use alloc::vec::Vec;

use bstr::ByteSlice;

pub use access::FromNode;
pub use error::{AccessError, Error, LexicalError, ParseError, ParseErrorKind, StructuralError};
pub use escape::unescape;
pub use node::{Kind, Node};
pub use options::ParserOptions;
pub use position::Position;
pub use scanner::TokenKind;

use builder::TreeBuilder;
use scanner::Scanner;

/// Parses a JSON document with the default [`ParserOptions`].
///
/// Nesting depth is unbounded here. For untrusted input use
/// [`deserialize_with`] and set [`ParserOptions::max_depth`], since very deep
/// documents can otherwise overflow the stack.
///
/// # Errors
///
/// Returns a [`ParseError`] on the first lexical or structural problem.
/// No partial tree is produced.
pub fn deserialize(text: &str) -> Result<Node, ParseError> {
    deserialize_with(text, ParserOptions::default())
}

/// Parses a JSON document.
///
/// The whole input is tokenized before the tree is built, so a lexical
/// error anywhere in the text wins over a structural error earlier on.
///
/// # Errors
///
/// Returns a [`ParseError`] on the first lexical or structural problem.
pub fn deserialize_with(text: &str, options: ParserOptions) -> Result<Node, ParseError> {
    let tokens = Scanner::new(text, options).collect::<Result<Vec<_>, _>>()?;
    TreeBuilder::new(&tokens, options).build()
}

/// Parses a JSON document from bytes with the default [`ParserOptions`].
///
/// # Errors
///
/// See [`deserialize_slice_with`].
pub fn deserialize_slice(bytes: &[u8]) -> Result<Node, ParseError> {
    deserialize_slice_with(bytes, ParserOptions::default())
}

/// Parses a JSON document from bytes.
///
/// # Errors
///
/// [`LexicalError::InvalidUtf8`] positioned at the first invalid byte if the
/// input is not UTF-8, otherwise as [`deserialize_with`].
pub fn deserialize_slice_with(bytes: &[u8], options: ParserOptions) -> Result<Node, ParseError> {
    match bytes.to_str() {
        Ok(text) => deserialize_with(text, options),
        Err(err) => {
            let valid = &bytes[..err.valid_up_to()];
            Err(ParseError::lexical(
                LexicalError::InvalidUtf8,
                Position::after(&valid.to_str_lossy()),
            ))
        }
    }
}
