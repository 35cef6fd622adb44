//! Percent-encoding for cookie names and values.
//!
//! Names are restricted to the HTTP `token` grammar (RFC 7230 §3.2.6) minus
//! `%`, values to the RFC 6265 `cookie-octet` set minus `%`. Every other
//! byte, including every byte of a non-ASCII UTF-8 sequence, is written as
//! `%XX` with uppercase hex.

use percent_encoding::{
    percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC,
};

/// Bytes escaped in a cookie name: everything except alphanumerics and the
/// token punctuation ``! # $ & ' * + - . ^ _ ` | ~``.
pub const NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'*')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// Bytes escaped in a cookie value: controls, whitespace, `"`, `%`, `,`,
/// `;` and `\`.
pub const VALUE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b',')
    .add(b';')
    .add(b'\\');

pub fn encode_name(name: &str) -> String {
    utf8_percent_encode(name, NAME_ENCODE_SET).to_string()
}

pub fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, VALUE_ENCODE_SET).to_string()
}

/// Decode a percent-encoded name or value.
///
/// Never fails: malformed escapes are kept verbatim and byte sequences that
/// are not valid UTF-8 after decoding become U+FFFD.
pub fn decode(encoded: &str) -> String {
    percent_decode_str(encoded).decode_utf8_lossy().into_owned()
}
