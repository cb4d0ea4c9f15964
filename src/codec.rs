//! Form-style percent encoding for flash cookie values.
//!
//! The text of a flash message is encoded the way HTML forms encode field
//! values (`application/x-www-form-urlencoded`): ASCII letters, digits and
//! `. - * _` pass through, a space becomes `+`, and every other byte of the
//! UTF-8 representation becomes `%XX` with upper-case hex. In particular
//! `/`, `;`, `,`, `+` and `%` are always escaped, so the encoded text never
//! collides with the `/` separator or with cookie delimiters.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, ErrorKind};
use crate::Severity;

/// Separator between the encoded text and the severity name.
pub const SEPARATOR: char = '/';

/// Bytes escaped by the form encoding (spaces are handled separately).
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'*')
    .remove(b'_');

/// Percent-encodes `text` using form conventions.
///
/// ```
/// use flash_core::codec::encode_text;
///
/// assert_eq!(encode_text("can't save your post, sorry"), "can%27t+save+your+post%2C+sorry");
/// assert_eq!(encode_text("a/b"), "a%2Fb");
/// assert_eq!(encode_text("café"), "caf%C3%A9");
/// ```
pub fn encode_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, part) in text.split(' ').enumerate() {
        if i > 0 {
            out.push('+');
        }
        out.extend(utf8_percent_encode(part, FORM));
    }
    out
}

/// Reverses [`encode_text`].
///
/// `+` decodes to a space. Any `%` must be followed by two hex digits and
/// the decoded bytes must be valid UTF-8.
///
/// # Errors
///
/// Returns [`ErrorKind::MalformedCookie`] for a truncated or non-hex escape
/// or for bytes that are not UTF-8.
pub fn decode_text(encoded: &str) -> Result<String, Error> {
    check_escapes(encoded)?;
    let spaced: Cow<'_, str> = if encoded.contains('+') {
        Cow::Owned(encoded.replace('+', " "))
    } else {
        Cow::Borrowed(encoded)
    };
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| Error::malformed(format!("text is not UTF-8: {}", e)))
}

/// Builds the cookie value `<encoded text>/<severity name>`.
///
/// # Errors
///
/// - [`ErrorKind::InvalidSeverity`] if `severity` is a hand-built
///   [`Severity::Custom`] whose name is invalid or shadows a standard level
/// - [`ErrorKind::EncodingUnavailable`] if the result would contain a byte
///   that is not allowed in a cookie value. Valid [`Severity`] names and
///   [`encode_text`] output never do, so a failure here means the encoding
///   setup itself is broken.
pub fn encode_value(text: &str, severity: &Severity) -> Result<String, Error> {
    severity.check()?;
    let value = format!("{}{}{}", encode_text(text), SEPARATOR, severity.name());
    if !is_cookie_value(&value) {
        return Err(Error::new(
            ErrorKind::EncodingUnavailable,
            "encoded flash value contains bytes outside the cookie-octet range",
        ));
    }
    Ok(value)
}

/// Splits a cookie value on the first `/` and decodes both halves.
///
/// ```
/// use flash_core::codec::decode_value;
/// use flash_core::Severity;
///
/// let (text, severity) = decode_value("a%2Fb+c/SEVERE").unwrap();
/// assert_eq!(text, "a/b c");
/// assert_eq!(severity, Severity::Severe);
/// ```
///
/// # Errors
///
/// Returns [`ErrorKind::MalformedCookie`] when the separator is missing,
/// the text cannot be decoded, or the severity name is invalid.
pub fn decode_value(value: &str) -> Result<(String, Severity), Error> {
    let (encoded, name) = value
        .split_once(SEPARATOR)
        .ok_or_else(|| Error::malformed("missing '/' separator"))?;
    let text = decode_text(encoded)?;
    let severity = Severity::from_name(name)
        .map_err(|e| Error::malformed(format!("bad severity: {}", e.message)))?;
    Ok((text, severity))
}

/// Returns `true` if every byte of `value` is an RFC 6265 `cookie-octet`.
pub fn is_cookie_value(value: &str) -> bool {
    value.bytes().all(|b| {
        matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
    })
}

/// Returns `true` if `name` is a non-empty RFC 7230 token.
pub fn is_cookie_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_graphic()
                && !matches!(
                    b,
                    b'(' | b')'
                        | b'<'
                        | b'>'
                        | b'@'
                        | b','
                        | b';'
                        | b':'
                        | b'\\'
                        | b'"'
                        | b'/'
                        | b'['
                        | b']'
                        | b'?'
                        | b'='
                        | b'{'
                        | b'}'
                )
        })
}

fn check_escapes(encoded: &str) -> Result<(), Error> {
    let bytes = encoded.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(Error::malformed(format!(
                    "invalid percent escape at offset {}",
                    i
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
