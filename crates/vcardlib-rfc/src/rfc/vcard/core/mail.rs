//! Validated e-mail address.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

#[expect(
    clippy::expect_used,
    reason = "Pattern is a compile-time literal and is covered by tests"
)]
static MAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$")
        .expect("mail address pattern is valid")
});

/// Error returned for a syntactically invalid e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid e-mail address: {0}")]
pub struct InvalidMailAddress(pub String);

/// An e-mail address of the form `local@domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MailAddress(String);

impl MailAddress {
    /// ## Summary
    /// Validates and wraps an address. Surrounding whitespace is trimmed.
    ///
    /// ## Errors
    /// Returns [`InvalidMailAddress`] if the text is not a `local@domain` address.
    pub fn new(address: &str) -> Result<Self, InvalidMailAddress> {
        let address = address.trim();
        let local = address.split('@').next().unwrap_or_default();

        let valid = MAIL_PATTERN.is_match(address)
            && !local.starts_with('.')
            && !local.ends_with('.')
            && !local.contains("..");

        if valid {
            Ok(Self(address.to_string()))
        } else {
            Err(InvalidMailAddress(address.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for MailAddress {
    type Err = InvalidMailAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for MailAddress {
    type Error = InvalidMailAddress;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for MailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for address in [
            "forrestgump@example.com",
            "first.last+tag@sub.example.org",
            "x@localhost",
        ] {
            assert!(MailAddress::new(address).is_ok(), "{address}");
        }
    }

    #[test]
    fn trims_whitespace() {
        let mail = MailAddress::new("  jane@example.com ").unwrap();
        assert_eq!(mail.as_str(), "jane@example.com");
    }

    #[test]
    fn rejects_malformed() {
        for address in [
            "",
            "plainaddress",
            "@example.com",
            "jane@",
            "jane@@example.com",
            ".jane@example.com",
            "jane.@example.com",
            "ja..ne@example.com",
            "jane@-example.com",
            "jane doe@example.com",
        ] {
            assert!(MailAddress::new(address).is_err(), "{address}");
        }
    }
}
