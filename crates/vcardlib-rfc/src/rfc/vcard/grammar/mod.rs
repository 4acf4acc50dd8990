//! Field grammar.
//!
//! [`Property`] is the table of properties the codec understands, and
//! [`Dialect`] carries every rule on which 2.1 and 3.0 disagree. The reader
//! and writer both consult the same table, so a property added here is
//! handled in both directions.

mod read;
mod write;

pub use read::apply;
pub use write::{Field, FieldValue, fields};

use crate::rfc::vcard::core::VCardVersion;
use crate::rfc::vcard::parse::{TextEscaping, Unfold};

/// A property understood by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Fn,
    N,
    Nickname,
    Org,
    Title,
    Tel,
    Email,
    Adr,
    Photo,
    Hobby,
    Interest,
    Expertise,
    Kind,
    Gender,
    Bday,
    BirthPlace,
    DeathPlace,
    Tz,
    Lang,
    Url,
}

impl Property {
    /// Serialization order.
    pub const CANONICAL_ORDER: [Self; 20] = [
        Self::Fn,
        Self::N,
        Self::Nickname,
        Self::Org,
        Self::Title,
        Self::Tel,
        Self::Email,
        Self::Adr,
        Self::Photo,
        Self::Hobby,
        Self::Interest,
        Self::Expertise,
        Self::Kind,
        Self::Gender,
        Self::Bday,
        Self::BirthPlace,
        Self::DeathPlace,
        Self::Tz,
        Self::Lang,
        Self::Url,
    ];

    /// Looks up a property by name (case-insensitive), including the vendor
    /// aliases read for `KIND` and `GENDER`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "FN" => Some(Self::Fn),
            "N" => Some(Self::N),
            "NICKNAME" => Some(Self::Nickname),
            "ORG" => Some(Self::Org),
            "TITLE" => Some(Self::Title),
            "TEL" => Some(Self::Tel),
            "EMAIL" => Some(Self::Email),
            "ADR" => Some(Self::Adr),
            "PHOTO" => Some(Self::Photo),
            "HOBBY" => Some(Self::Hobby),
            "INTEREST" => Some(Self::Interest),
            "EXPERTISE" => Some(Self::Expertise),
            "KIND" | "X-KIND" | "X-ADDRESSBOOKSERVER-KIND" => Some(Self::Kind),
            "GENDER" | "X-GENDER" => Some(Self::Gender),
            "BDAY" => Some(Self::Bday),
            "BIRTHPLACE" => Some(Self::BirthPlace),
            "DEATHPLACE" => Some(Self::DeathPlace),
            "TZ" => Some(Self::Tz),
            "LANG" => Some(Self::Lang),
            "URL" => Some(Self::Url),
            _ => None,
        }
    }

    /// Name written on output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fn => "FN",
            Self::N => "N",
            Self::Nickname => "NICKNAME",
            Self::Org => "ORG",
            Self::Title => "TITLE",
            Self::Tel => "TEL",
            Self::Email => "EMAIL",
            Self::Adr => "ADR",
            Self::Photo => "PHOTO",
            Self::Hobby => "HOBBY",
            Self::Interest => "INTEREST",
            Self::Expertise => "EXPERTISE",
            Self::Kind => "KIND",
            Self::Gender => "GENDER",
            Self::Bday => "BDAY",
            Self::BirthPlace => "BIRTHPLACE",
            Self::DeathPlace => "DEATHPLACE",
            Self::Tz => "TZ",
            Self::Lang => "LANG",
            Self::Url => "URL",
        }
    }
}

/// How `TYPE` tokens are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSyntax {
    /// `TEL;WORK:...`
    Bare,
    /// `TEL;TYPE=WORK:...`
    Keyed,
}

/// How dates are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `YYYYMMDD`
    Basic,
    /// `YYYY-MM-DD`
    Extended,
}

/// Version-specific syntax rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub version: VCardVersion,
    pub unfold: Unfold,
    pub escaping: TextEscaping,
    pub type_syntax: TypeSyntax,
    pub date_style: DateStyle,
    /// `VALUE` parameter marking a reference instead of inline data.
    pub uri_value: &'static str,
    /// `ENCODING` parameter value for base64 payloads.
    pub base64_encoding: &'static str,
    /// Text that cannot be written plainly switches to quoted-printable.
    pub quoted_printable: bool,
    /// Long content lines are folded at 75 octets.
    pub folds: bool,
}

impl Dialect {
    pub const V2_1: Self = Self {
        version: VCardVersion::V2_1,
        unfold: Unfold::KeepWhitespace,
        escaping: TextEscaping::Semicolon,
        type_syntax: TypeSyntax::Bare,
        date_style: DateStyle::Basic,
        uri_value: "URL",
        base64_encoding: "BASE64",
        quoted_printable: true,
        folds: false,
    };

    pub const V3_0: Self = Self {
        version: VCardVersion::V3_0,
        unfold: Unfold::StripOne,
        escaping: TextEscaping::Backslash,
        type_syntax: TypeSyntax::Keyed,
        date_style: DateStyle::Extended,
        uri_value: "uri",
        base64_encoding: "b",
        quoted_printable: false,
        folds: true,
    };

    /// Returns the dialect for a version, or `None` if the version has no
    /// grammar.
    #[must_use]
    pub const fn for_version(version: VCardVersion) -> Option<Self> {
        match version {
            VCardVersion::V2_1 => Some(Self::V2_1),
            VCardVersion::V3_0 => Some(Self::V3_0),
            VCardVersion::V4_0 => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_table() {
        for property in Property::CANONICAL_ORDER {
            assert_eq!(Property::from_name(property.name()), Some(property));
        }
    }

    #[test]
    fn lookup_is_case_insensitive_with_aliases() {
        assert_eq!(Property::from_name("tel"), Some(Property::Tel));
        assert_eq!(Property::from_name("X-Gender"), Some(Property::Gender));
        assert_eq!(
            Property::from_name("X-ADDRESSBOOKSERVER-KIND"),
            Some(Property::Kind)
        );
        assert_eq!(Property::from_name("NOTE"), None);
        assert_eq!(Property::from_name("X-CUSTOM"), None);
    }

    #[test]
    fn four_has_no_dialect() {
        assert!(Dialect::for_version(VCardVersion::V4_0).is_none());
        assert_eq!(
            Dialect::for_version(VCardVersion::V2_1).map(|d| d.type_syntax),
            Some(TypeSyntax::Bare)
        );
        assert_eq!(
            Dialect::for_version(VCardVersion::V3_0).map(|d| d.type_syntax),
            Some(TypeSyntax::Keyed)
        );
    }
}
