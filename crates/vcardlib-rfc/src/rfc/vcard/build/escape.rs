//! Value escaping and quoted-printable encoding.

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Escapes a 3.0 text value.
///
/// Backslash, comma, semicolon and LF are escaped. CR has no escape, so text
/// containing one must be written base64.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }

    result
}

/// Escapes a plain 2.1 value, where only `;` has an escape.
#[must_use]
pub fn escape_semicolons(s: &str) -> String {
    s.replace(';', "\\;")
}

/// Returns whether a 2.1 value must be written quoted-printable.
#[must_use]
pub fn needs_quoted_printable(s: &str) -> bool {
    s.chars()
        .any(|c| !c.is_ascii() || c.is_ascii_control() || c == '\\')
}

/// Encodes UTF-8 text as quoted-printable, without line wrapping.
///
/// `=`, `;` and `\` are always encoded so the result can be joined into a
/// structured value. A trailing space or tab is encoded.
#[must_use]
pub fn encode_quoted_printable(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut result = String::with_capacity(bytes.len());

    for (i, &b) in bytes.iter().enumerate() {
        let is_last = i + 1 == bytes.len();
        let literal = match b {
            b'=' | b';' | b'\\' => false,
            b' ' => !is_last,
            33..=126 => true,
            _ => false,
        };

        if literal {
            result.push(char::from(b));
        } else {
            result.push('=');
            result.push(char::from(HEX_DIGITS[usize::from(b >> 4)]));
            result.push(char::from(HEX_DIGITS[usize::from(b & 0x0F)]));
        }
    }

    result
}
