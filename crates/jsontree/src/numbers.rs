//! Numeric literal rules shared by the scanner.

/// Characters that may appear in a numeric literal.
///
/// The set admits exponent notation (`1e-10`) and, as a consequence, some
/// runs no number grammar would accept (`1-2`, `1e`). Those are tokenized
/// as-is and only fail when read as a number, unless strict numbers are
/// enabled.
#[inline]
pub(crate) const fn is_numeric_char(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | '-' | '+' | 'e' | 'E')
}

/// Returns `true` if `literal` matches the RFC 8259 number grammar:
///
/// ```text
/// -?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?
/// ```
pub(crate) fn is_strict_number(literal: &str) -> bool {
    let bytes = literal.as_bytes();
    let mut i = 0;

    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }

    // Integer part: a lone zero, or a non-zero digit followed by digits.
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i += digits(&bytes[i..]),
        _ => return false,
    }

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let n = digits(&bytes[i..]);
        if n == 0 {
            return false;
        }
        i += n;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let n = digits(&bytes[i..]);
        if n == 0 {
            return false;
        }
        i += n;
    }

    i == bytes.len()
}

fn digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
