//! Parser-level errors.

use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// A failure while reading vCard text, tied to the physical line (1-based)
/// where it was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub message: String,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// A delimiter or property showed up where the record structure forbids
    /// it.
    #[must_use]
    pub fn unexpected(line: usize, expected: &str, found: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken,
            line,
            format!("expected {expected}, found {found}"),
        )
    }

    #[must_use]
    pub fn missing_property(line: usize, name: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingProperty,
            line,
            format!("record has no {name} property"),
        )
    }

    #[must_use]
    pub fn invalid_value(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidValue, line, message)
    }

    /// An enumeration token outside the closed set for `property`.
    #[must_use]
    pub fn unknown_token(line: usize, property: &str, token: &str) -> Self {
        Self::invalid_value(line, format!("unknown {property} token: {token}"))
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    #[error("empty input")]
    EmptyInput,
    /// Input ended inside a `BEGIN:VCARD` block.
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("invalid value")]
    InvalidValue,
    #[error("missing property")]
    MissingProperty,
    /// Content line without a `:` or with an illegal name.
    #[error("invalid property name")]
    InvalidPropertyName,
    #[error("invalid parameter")]
    InvalidParameter,
    #[error("invalid date")]
    InvalidDateTime,
    #[error("unsupported version")]
    UnsupportedVersion,
    /// Undecodable quoted-printable, base64 or charset.
    #[error("encoding error")]
    EncodingError,
}
