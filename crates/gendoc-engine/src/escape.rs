//! Conversion of raw bytes into a C string literal.
//!
//! Used to embed template files into generated C sources. The literal is also
//! safe to pass as a `printf`-style format string, which is why `%` is doubled.

use std::borrow::Cow;

/// Escaped form of a single byte.
pub fn escape_byte(byte: u8) -> Cow<'static, str> {
    match byte {
        b'\t' => Cow::Borrowed(r"\t"),
        b'\n' => Cow::Borrowed(r"\n"),
        b'\r' => Cow::Borrowed(r"\r"),
        b'\\' => Cow::Borrowed(r"\\"),
        b'"' => Cow::Borrowed(r#"\""#),
        b'%' => Cow::Borrowed("%%"),
        0x20..=0x7e => Cow::Owned(char::from(byte).to_string()),
        _ => Cow::Owned(format!("\\x{byte:02x}")),
    }
}

/// Quote and escape `bytes` as a C string literal.
pub fn to_c_literal(bytes: &[u8]) -> String {
    let mut literal = String::with_capacity(bytes.len() + 2);
    literal.push('"');
    for &byte in bytes {
        literal.push_str(&escape_byte(byte));
    }
    literal.push('"');
    literal
}
