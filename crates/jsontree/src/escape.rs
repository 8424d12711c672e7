//! Opt-in decoding of JSON string escapes.
//!
//! The scanner stores strings exactly as written, backslashes included.
//! [`unescape`] resolves `\" \\ \/ \b \f \n \r \t` and `\uXXXX` (surrogate
//! pairs combine into one scalar) for callers that want the decoded text.
use alloc::{borrow::Cow, string::String};
use core::str::CharIndices;

use crate::error::AccessError;

/// Decodes the escape sequences in a raw string payload.
///
/// Returns the input unchanged, borrowed, when it contains no backslash.
///
/// # Errors
///
/// [`AccessError::InvalidEscape`] if a backslash is followed by anything but
/// a valid escape, if a `\u` escape has fewer than four hex digits, or if a
/// surrogate is unpaired.
///
/// # Examples
///
/// ```
/// assert_eq!(jsontree::unescape(r#"a\"b"#).unwrap(), "a\"b");
/// assert_eq!(jsontree::unescape(r"\uD83D\uDE00").unwrap(), "😀");
/// assert!(jsontree::unescape(r"\x").is_err());
/// ```
pub fn unescape(raw: &str) -> Result<Cow<'_, str>, AccessError> {
    if !raw.contains('\\') {
        return Ok(Cow::Borrowed(raw));
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();
    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let invalid = AccessError::InvalidEscape { offset };
        let decoded = match chars.next().map(|(_, c)| c) {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => decode_unicode(&mut chars).ok_or(invalid)?,
            _ => return Err(invalid),
        };
        out.push(decoded);
    }
    Ok(Cow::Owned(out))
}

/// Decodes the digits after `\u`, consuming a trailing `\uXXXX` low
/// surrogate when the first escape is a high surrogate.
fn decode_unicode(chars: &mut CharIndices<'_>) -> Option<char> {
    let unit = read_hex4(chars)?;
    match unit {
        0xD800..=0xDBFF => {
            if chars.next()?.1 != '\\' || chars.next()?.1 != 'u' {
                return None;
            }
            let low = read_hex4(chars)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return None;
            }
            char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
        }
        0xDC00..=0xDFFF => None,
        _ => char::from_u32(unit),
    }
}

fn read_hex4(chars: &mut CharIndices<'_>) -> Option<u32> {
    let mut code = 0;
    for _ in 0..4 {
        let (_, c) = chars.next()?;
        code = code * 16 + c.to_digit(16)?;
    }
    Some(code)
}
