//! Repeatable contact sub-entities.

use super::mail::{InvalidMailAddress, MailAddress};
use super::types::{AddressType, EmailType, Level, PhoneNumberType, PhotoEncoding};

/// A TEL entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    pub number: String,
    pub kind: Option<PhoneNumberType>,
}

impl PhoneNumber {
    #[must_use]
    pub fn new(number: impl Into<String>, kind: Option<PhoneNumberType>) -> Self {
        Self {
            number: number.into(),
            kind,
        }
    }
}

/// An EMAIL entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    pub email: MailAddress,
    pub kind: Option<EmailType>,
}

impl EmailAddress {
    #[must_use]
    pub const fn new(email: MailAddress, kind: Option<EmailType>) -> Self {
        Self { email, kind }
    }

    /// ## Summary
    /// Builds an entry from unvalidated text.
    ///
    /// ## Errors
    /// Returns [`InvalidMailAddress`] if `email` is not a valid address.
    pub fn parse(email: &str, kind: Option<EmailType>) -> Result<Self, InvalidMailAddress> {
        Ok(Self::new(MailAddress::new(email)?, kind))
    }
}

/// An ADR entry, flattened to a single location string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub location: String,
    pub kind: Option<AddressType>,
}

impl Address {
    #[must_use]
    pub fn new(location: impl Into<String>, kind: Option<AddressType>) -> Self {
        Self {
            location: location.into(),
            kind,
        }
    }
}

/// A PHOTO entry, either embedded bytes or a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Photo {
    Inline {
        data: Vec<u8>,
        encoding: Option<PhotoEncoding>,
    },
    Url {
        url: String,
        encoding: Option<PhotoEncoding>,
    },
}

impl Photo {
    #[must_use]
    pub const fn inline(data: Vec<u8>, encoding: Option<PhotoEncoding>) -> Self {
        Self::Inline { data, encoding }
    }

    #[must_use]
    pub fn url(url: impl Into<String>, encoding: Option<PhotoEncoding>) -> Self {
        Self::Url {
            url: url.into(),
            encoding,
        }
    }

    /// Image format, when declared.
    #[must_use]
    pub const fn encoding(&self) -> Option<PhotoEncoding> {
        match self {
            Self::Inline { encoding, .. } | Self::Url { encoding, .. } => *encoding,
        }
    }
}

/// A HOBBY entry (RFC 6715).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hobby {
    pub activity: String,
    pub level: Option<Level>,
}

/// An INTEREST entry (RFC 6715).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interest {
    pub activity: String,
    pub level: Option<Level>,
}

/// An EXPERTISE entry (RFC 6715).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expertise {
    pub area: String,
    pub level: Option<Level>,
}

impl Hobby {
    #[must_use]
    pub fn new(activity: impl Into<String>, level: Option<Level>) -> Self {
        Self {
            activity: activity.into(),
            level,
        }
    }
}

impl Interest {
    #[must_use]
    pub fn new(activity: impl Into<String>, level: Option<Level>) -> Self {
        Self {
            activity: activity.into(),
            level,
        }
    }
}

impl Expertise {
    #[must_use]
    pub fn new(area: impl Into<String>, level: Option<Level>) -> Self {
        Self {
            area: area.into(),
            level,
        }
    }
}
