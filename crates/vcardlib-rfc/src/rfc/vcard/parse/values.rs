//! vCard value decoders.
//!
//! Error sources are discarded in favor of line-numbered parse errors.
#![expect(
    clippy::map_err_ignore,
    reason = "Value decoders report position and input instead of the source error"
)]

use std::borrow::Cow;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use encoding_rs::Encoding;

use super::error::{ParseError, ParseErrorKind, ParseResult};

/// Text escaping convention of a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEscaping {
    /// 2.1: only `\;` is an escape, other backslashes are literal.
    Semicolon,
    /// 3.0: `\\`, `\,`, `\;` and `\n` are escapes.
    Backslash,
}

/// Unescapes a text value.
#[must_use]
pub fn unescape_text(s: &str, escaping: TextEscaping) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match (escaping, chars.peek()) {
            (_, Some(';')) => {
                chars.next();
                result.push(';');
            }
            (TextEscaping::Backslash, Some('n' | 'N')) => {
                chars.next();
                result.push('\n');
            }
            (TextEscaping::Backslash, Some(',')) => {
                chars.next();
                result.push(',');
            }
            (TextEscaping::Backslash, Some('\\')) => {
                chars.next();
                result.push('\\');
            }
            _ => result.push(c),
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
///
/// Components are returned still escaped.
#[must_use]
pub fn split_structured(s: &str, escaping: TextEscaping) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut chars = s.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => match (escaping, chars.peek()) {
                (TextEscaping::Backslash, Some(_)) | (TextEscaping::Semicolon, Some((_, ';'))) => {
                    chars.next();
                }
                _ => {}
            },
            ';' => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Decodes a quoted-printable value into raw octets.
///
/// Soft line breaks have already been joined by the lexer; a stray trailing
/// `=` is ignored.
///
/// ## Errors
/// Returns `EncodingError` if an `=` is followed by anything other than two
/// hex digits.
pub fn decode_quoted_printable(s: &str, line_num: usize) -> ParseResult<Vec<u8>> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'=' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        let rest = &bytes[i + 1..];
        if rest.is_empty() {
            break;
        }

        let (Some(hi), Some(lo)) = (
            rest.first().and_then(|b| hex_digit(*b)),
            rest.get(1).and_then(|b| hex_digit(*b)),
        ) else {
            return Err(ParseError::new(
                ParseErrorKind::EncodingError,
                line_num,
                format!("invalid quoted-printable escape in: {s}"),
            ));
        };

        out.push((hi << 4) | lo);
        i += 3;
    }

    Ok(out)
}

const fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decodes octets using the declared `CHARSET` (UTF-8 when absent).
///
/// Labels are resolved the way browsers resolve them, so `ISO-8859-1` and
/// `US-ASCII` both decode as Windows-1252.
///
/// ## Errors
/// Returns `InvalidValue` for an unknown charset label and `EncodingError`
/// for octets that are malformed in the declared charset.
pub fn decode_charset(
    bytes: &[u8],
    charset: Option<&str>,
    line_num: usize,
) -> ParseResult<String> {
    let label = charset.unwrap_or("UTF-8");
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ParseError::unknown_token(line_num, "CHARSET", label))?;

    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
        .ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::EncodingError,
                line_num,
                format!("value is not valid {}", encoding.name()),
            )
        })
}

/// Decodes a base64 payload, ignoring embedded whitespace.
///
/// ## Errors
/// Returns `EncodingError` if the payload is not valid base64.
pub fn decode_base64(s: &str, line_num: usize) -> ParseResult<Vec<u8>> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD.decode(compact.as_bytes()).map_err(|_| {
        ParseError::new(
            ParseErrorKind::EncodingError,
            line_num,
            "invalid base64 payload",
        )
    })
}

/// Parses a calendar date in basic (`YYYYMMDD`) or extended (`YYYY-MM-DD`)
/// form. A trailing time part (`T...`) is ignored.
///
/// ## Errors
/// Returns `InvalidDateTime` if the value is not a valid date.
pub fn parse_date(value: &str, line_num: usize) -> ParseResult<NaiveDate> {
    let invalid = || {
        ParseError::new(
            ParseErrorKind::InvalidDateTime,
            line_num,
            format!("invalid date: {value}"),
        )
    };

    let s = value.trim();
    let date_part = s.split(['T', 't']).next().unwrap_or_default();

    let (year, month, day) = if date_part.contains('-') {
        let mut parts = date_part.split('-');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d), None) if y.len() == 4 && m.len() == 2 && d.len() == 2 => {
                (y, m, d)
            }
            _ => return Err(invalid()),
        }
    } else if date_part.len() == 8 && date_part.is_ascii() {
        (&date_part[..4], &date_part[4..6], &date_part[6..])
    } else {
        return Err(invalid());
    };

    if ![year, month, day]
        .iter()
        .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_backslash_convention() {
        assert_eq!(
            unescape_text(r"a\,b\;c\\d\ne\Nf", TextEscaping::Backslash),
            "a,b;c\\d\ne\nf"
        );
        assert_eq!(unescape_text(r"C:\x", TextEscaping::Backslash), r"C:\x");
    }

    #[test]
    fn unescape_semicolon_convention() {
        assert_eq!(
            unescape_text(r"a\;b\,c\nd", TextEscaping::Semicolon),
            r"a;b\,c\nd"
        );
    }

    #[test]
    fn split_structured_backslash() {
        assert_eq!(
            split_structured(r"Gump;Forrest\;Jr;;", TextEscaping::Backslash),
            vec!["Gump", r"Forrest\;Jr", "", ""]
        );
        assert_eq!(
            split_structured(r"a\\;b", TextEscaping::Backslash),
            vec![r"a\\", "b"]
        );
    }

    #[test]
    fn split_structured_semicolon() {
        assert_eq!(
            split_structured(r"a\b;c\;d", TextEscaping::Semicolon),
            vec![r"a\b", r"c\;d"]
        );
    }

    #[test]
    fn quoted_printable_decodes_octets() {
        let bytes = decode_quoted_printable("J=C3=B6rg=3D=0D=0A", 1).unwrap();
        assert_eq!(bytes, "Jörg=\r\n".as_bytes());
    }

    #[test]
    fn quoted_printable_rejects_bad_escape() {
        let err = decode_quoted_printable("abc=ZZ", 9).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EncodingError);
        assert_eq!(err.line, 9);
    }

    #[test]
    fn charsets() {
        assert_eq!(
            decode_charset(&[0x4A, 0xF6], Some("iso-8859-1"), 1).unwrap(),
            "Jö"
        );
        assert_eq!(decode_charset(&[0x80], Some("windows-1252"), 1).unwrap(), "€");
        assert_eq!(decode_charset(&[0xB9, 0xE8], Some("ISO-8859-2"), 1).unwrap(), "šč");
        assert_eq!(
            decode_charset(&[0x93, 0xFA, 0x96, 0x7B], Some("Shift_JIS"), 1).unwrap(),
            "日本"
        );
        assert_eq!(decode_charset(b"plain", None, 1).unwrap(), "plain");
    }

    #[test]
    fn charset_failures() {
        let err = decode_charset(&[0xFF], None, 4).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EncodingError);
        assert_eq!(err.line, 4);

        let err = decode_charset(&[0x82], Some("Shift_JIS"), 4).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EncodingError);

        let err = decode_charset(b"x", Some("EBCDIC"), 4).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidValue);
        assert!(err.message.contains("EBCDIC"));
    }

    #[test]
    fn base64_ignores_whitespace() {
        assert_eq!(decode_base64("SGVs\r\n bG8=", 1).unwrap(), b"Hello");
        assert_eq!(
            decode_base64("!!!", 2).unwrap_err().kind,
            ParseErrorKind::EncodingError
        );
    }

    #[test]
    fn dates_in_both_forms() {
        let expected = NaiveDate::from_ymd_opt(1944, 6, 6).unwrap();
        assert_eq!(parse_date("19440606", 1).unwrap(), expected);
        assert_eq!(parse_date("1944-06-06", 1).unwrap(), expected);
        assert_eq!(parse_date("1944-06-06T10:00:00Z", 1).unwrap(), expected);
        assert_eq!(parse_date("19440606T100000", 1).unwrap(), expected);
    }

    #[test]
    fn invalid_dates() {
        for value in ["", "1944-13-01", "19440230", "44-06-06", "1944/06/06", "abcdefgh"] {
            let err = parse_date(value, 3).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::InvalidDateTime, "{value}");
        }
    }
}
