use std::path::PathBuf;

use thiserror::Error;

use crate::rfc::vcard::core::InvalidMailAddress;
use crate::rfc::vcard::parse::{ParseError, ParseErrorKind};

/// Codec errors surfaced to callers.
///
/// Every failure maps to exactly one [`ErrorKind`]; no partial result is
/// ever returned alongside an error.
#[derive(Error, Debug)]
pub enum VCardError {
    #[error("Argument missing: {0}")]
    ArgumentMissing(String),

    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Malformed structure at line {line}: {message}")]
    MalformedStructure { line: usize, message: String },

    #[error(
        "Invalid field value: {message}{}",
        .line.map(|l| format!(" (line {l})")).unwrap_or_default()
    )]
    InvalidFieldValue {
        line: Option<usize>,
        message: String,
    },

    #[error("Unsupported version: {0}")]
    UnsupportedVersion(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Discriminant of a [`VCardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ArgumentMissing,
    NotFound,
    MalformedStructure,
    InvalidFieldValue,
    UnsupportedVersion,
    Io,
}

impl VCardError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ArgumentMissing(_) => ErrorKind::ArgumentMissing,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::MalformedStructure { .. } => ErrorKind::MalformedStructure,
            Self::InvalidFieldValue { .. } => ErrorKind::InvalidFieldValue,
            Self::UnsupportedVersion(_) => ErrorKind::UnsupportedVersion,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Line of the offending input, when the error came from parsing.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedStructure { line, .. } => Some(*line),
            Self::InvalidFieldValue { line, .. } => *line,
            _ => None,
        }
    }
}

impl From<ParseError> for VCardError {
    fn from(err: ParseError) -> Self {
        let ParseError {
            kind,
            line,
            message,
        } = err;

        match kind {
            ParseErrorKind::EmptyInput => Self::ArgumentMissing(message),
            ParseErrorKind::UnsupportedVersion => Self::UnsupportedVersion(message),
            ParseErrorKind::InvalidValue
            | ParseErrorKind::InvalidDateTime
            | ParseErrorKind::EncodingError => Self::InvalidFieldValue {
                line: Some(line),
                message,
            },
            ParseErrorKind::UnexpectedEof
            | ParseErrorKind::UnexpectedToken
            | ParseErrorKind::MissingProperty
            | ParseErrorKind::InvalidPropertyName
            | ParseErrorKind::InvalidParameter => Self::MalformedStructure { line, message },
        }
    }
}

impl From<InvalidMailAddress> for VCardError {
    fn from(err: InvalidMailAddress) -> Self {
        Self::InvalidFieldValue {
            line: None,
            message: err.to_string(),
        }
    }
}

pub type VCardResult<T> = std::result::Result<T, VCardError>;
