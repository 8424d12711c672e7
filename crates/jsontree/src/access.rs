//! Typed scalar access for [`Node::get`].
use alloc::string::String;

use crate::{
    error::AccessError,
    node::{Node, Payload},
};

/// Types that can be read out of a scalar [`Node`].
///
/// Implemented for every primitive integer type, `f32`, `f64`, `bool`,
/// `String` and `&str`.
pub trait FromNode<'a>: Sized {
    /// Reads `node` as `Self`.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the node cannot produce `Self`.
    fn from_node(node: &'a Node) -> Result<Self, AccessError>;
}

fn numeric_literal<'a>(node: &'a Node, target: &'static str) -> Result<&'a str, AccessError> {
    match node.payload() {
        Payload::Numeric(literal) => Ok(literal.as_str()),
        _ => Err(AccessError::TypeMismatch {
            expected: target,
            found: node.kind(),
        }),
    }
}

fn invalid_number(literal: &str, target: &'static str) -> AccessError {
    AccessError::InvalidNumber {
        literal: literal.into(),
        target,
    }
}

macro_rules! from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> FromNode<'a> for $ty {
                fn from_node(node: &'a Node) -> Result<Self, AccessError> {
                    let literal = numeric_literal(node, stringify!($ty))?;
                    literal
                        .parse::<$ty>()
                        .map_err(|_| invalid_number(literal, stringify!($ty)))
                }
            }
        )*
    };
}

// Overflowing floats parse to infinity; treat that as out of range.
macro_rules! from_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> FromNode<'a> for $ty {
                fn from_node(node: &'a Node) -> Result<Self, AccessError> {
                    let literal = numeric_literal(node, stringify!($ty))?;
                    match literal.parse::<$ty>() {
                        Ok(value) if value.is_finite() => Ok(value),
                        _ => Err(invalid_number(literal, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
from_float!(f32, f64);

impl<'a> FromNode<'a> for bool {
    fn from_node(node: &'a Node) -> Result<Self, AccessError> {
        match node.payload() {
            Payload::Boolean(value) => Ok(*value),
            _ => Err(AccessError::TypeMismatch {
                expected: "bool",
                found: node.kind(),
            }),
        }
    }
}

impl<'a> FromNode<'a> for &'a str {
    fn from_node(node: &'a Node) -> Result<Self, AccessError> {
        match node.payload() {
            Payload::String(value) => Ok(value.as_str()),
            _ => Err(AccessError::TypeMismatch {
                expected: "&str",
                found: node.kind(),
            }),
        }
    }
}

impl<'a> FromNode<'a> for String {
    fn from_node(node: &'a Node) -> Result<Self, AccessError> {
        match node.payload() {
            Payload::String(value) => Ok(value.clone()),
            _ => Err(AccessError::TypeMismatch {
                expected: "String",
                found: node.kind(),
            }),
        }
    }
}
