/// Configuration options for [`deserialize_with`](crate::deserialize_with).
///
/// The defaults are lenient: numeric literals are any run of
/// `0-9 . - + e E`, duplicate object keys are kept in source order, and
/// nesting is unbounded.
///
/// # Examples
///
/// ```rust
/// use jsontree::{ParserOptions, deserialize_with};
///
/// let options = ParserOptions {
///     strict_numbers: true,
///     ..Default::default()
/// };
/// assert!(deserialize_with("[1-2]", options).is_err());
/// assert!(deserialize_with("[1e-2]", options).is_ok());
/// ```
///
/// # Default
///
/// All flags default to `false` and `max_depth` to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether numeric literals must follow the RFC 8259 number grammar.
    ///
    /// By default the scanner accepts any maximal run of the characters
    /// `0-9`, `.`, `-`, `+`, `e` and `E` that does not end in `.`, so a
    /// literal such as `1-2` is tokenized and only fails when it is read
    /// through [`Node::get`](crate::Node::get). With this option enabled,
    /// such literals are rejected while scanning.
    ///
    /// # Default
    ///
    /// `false`
    pub strict_numbers: bool,

    /// Whether a key may appear more than once in the same object.
    ///
    /// By default duplicates are kept in source order and keyed lookup
    /// returns the first match. When `true`, the second occurrence of a key
    /// fails the parse with
    /// [`StructuralError::DuplicateKey`](crate::StructuralError::DuplicateKey).
    ///
    /// # Default
    ///
    /// `false`
    pub reject_duplicate_keys: bool,

    /// Maximum nesting depth of arrays and objects.
    ///
    /// The root container is at depth 1. Deeper documents fail with
    /// [`StructuralError::DepthLimitExceeded`](crate::StructuralError::DepthLimitExceeded).
    ///
    /// The tree builder recurses once per nesting level, so with no limit a
    /// deeply nested document (a few thousand levels on a typical thread
    /// stack) can exhaust the stack and abort the process. Set a limit
    /// whenever the input is untrusted.
    ///
    /// # Default
    ///
    /// `None` (unbounded)
    pub max_depth: Option<usize>,
}
