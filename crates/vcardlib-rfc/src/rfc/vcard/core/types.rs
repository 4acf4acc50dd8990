//! Closed enumerations used by contact properties.
//!
//! Each enumeration maps to and from the parameter or value tokens of the
//! wire format. Lookup is ASCII case-insensitive; a token outside the set is
//! rejected by the grammar rather than dropped.

/// TEL categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    Home,
    Work,
    Cell,
    Voice,
    Fax,
    Pager,
    Video,
    Bbs,
    Modem,
    Isdn,
    Car,
    Message,
    Pcs,
    MainNumber,
    IPhone,
    Text,
    TextPhone,
}

impl PhoneNumberType {
    /// Parses a TEL type token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "HOME" => Some(Self::Home),
            "WORK" => Some(Self::Work),
            "CELL" => Some(Self::Cell),
            "VOICE" => Some(Self::Voice),
            "FAX" => Some(Self::Fax),
            "PAGER" => Some(Self::Pager),
            "VIDEO" => Some(Self::Video),
            "BBS" => Some(Self::Bbs),
            "MODEM" => Some(Self::Modem),
            "ISDN" => Some(Self::Isdn),
            "CAR" => Some(Self::Car),
            "MSG" => Some(Self::Message),
            "PCS" => Some(Self::Pcs),
            "MAIN" | "MAIN-NUMBER" => Some(Self::MainNumber),
            "IPHONE" => Some(Self::IPhone),
            "TEXT" => Some(Self::Text),
            "TEXTPHONE" => Some(Self::TextPhone),
            _ => None,
        }
    }

    /// Returns the token written on output.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Work => "WORK",
            Self::Cell => "CELL",
            Self::Voice => "VOICE",
            Self::Fax => "FAX",
            Self::Pager => "PAGER",
            Self::Video => "VIDEO",
            Self::Bbs => "BBS",
            Self::Modem => "MODEM",
            Self::Isdn => "ISDN",
            Self::Car => "CAR",
            Self::Message => "MSG",
            Self::Pcs => "PCS",
            Self::MainNumber => "MAIN",
            Self::IPhone => "IPHONE",
            Self::Text => "TEXT",
            Self::TextPhone => "TEXTPHONE",
        }
    }
}

/// EMAIL categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailType {
    Internet,
    Home,
    Work,
    Aol,
    AppleLink,
    AttMail,
    Cis,
    EWorld,
    IbmMail,
    McimMail,
    PowerShare,
    Prodigy,
    Tlx,
    X400,
}

impl EmailType {
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "INTERNET" => Some(Self::Internet),
            "HOME" => Some(Self::Home),
            "WORK" => Some(Self::Work),
            "AOL" => Some(Self::Aol),
            "APPLELINK" => Some(Self::AppleLink),
            "ATTMAIL" => Some(Self::AttMail),
            "CIS" => Some(Self::Cis),
            "EWORLD" => Some(Self::EWorld),
            "IBMMAIL" => Some(Self::IbmMail),
            "MCIMAIL" => Some(Self::McimMail),
            "POWERSHARE" => Some(Self::PowerShare),
            "PRODIGY" => Some(Self::Prodigy),
            "TLX" => Some(Self::Tlx),
            "X400" => Some(Self::X400),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Internet => "INTERNET",
            Self::Home => "HOME",
            Self::Work => "WORK",
            Self::Aol => "AOL",
            Self::AppleLink => "APPLELINK",
            Self::AttMail => "ATTMAIL",
            Self::Cis => "CIS",
            Self::EWorld => "EWORLD",
            Self::IbmMail => "IBMMAIL",
            Self::McimMail => "MCIMAIL",
            Self::PowerShare => "POWERSHARE",
            Self::Prodigy => "PRODIGY",
            Self::Tlx => "TLX",
            Self::X400 => "X400",
        }
    }
}

/// ADR categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    Home,
    Work,
    Domestic,
    International,
    Postal,
    Parcel,
}

impl AddressType {
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "HOME" => Some(Self::Home),
            "WORK" => Some(Self::Work),
            "DOM" => Some(Self::Domestic),
            "INTL" => Some(Self::International),
            "POSTAL" => Some(Self::Postal),
            "PARCEL" => Some(Self::Parcel),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Work => "WORK",
            Self::Domestic => "DOM",
            Self::International => "INTL",
            Self::Postal => "POSTAL",
            Self::Parcel => "PARCEL",
        }
    }
}

/// PHOTO image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoEncoding {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Tiff,
    Pict,
    Wmf,
    Emf,
    Cgm,
    Met,
    Pmb,
    Dib,
    Ps,
    Pdf,
    Mpeg,
    Mpeg2,
    Avi,
    Qtime,
}

impl PhotoEncoding {
    /// Parses an image type token; a leading `image/` media type prefix is accepted.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let upper = token.to_ascii_uppercase();
        let bare = upper.strip_prefix("IMAGE/").unwrap_or(&upper);
        match bare {
            "JPEG" | "JPG" => Some(Self::Jpeg),
            "PNG" => Some(Self::Png),
            "GIF" => Some(Self::Gif),
            "BMP" => Some(Self::Bmp),
            "TIFF" => Some(Self::Tiff),
            "PICT" => Some(Self::Pict),
            "WMF" => Some(Self::Wmf),
            "EMF" => Some(Self::Emf),
            "CGM" => Some(Self::Cgm),
            "MET" => Some(Self::Met),
            "PMB" => Some(Self::Pmb),
            "DIB" => Some(Self::Dib),
            "PS" => Some(Self::Ps),
            "PDF" => Some(Self::Pdf),
            "MPEG" => Some(Self::Mpeg),
            "MPEG2" => Some(Self::Mpeg2),
            "AVI" => Some(Self::Avi),
            "QTIME" => Some(Self::Qtime),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
            Self::Tiff => "TIFF",
            Self::Pict => "PICT",
            Self::Wmf => "WMF",
            Self::Emf => "EMF",
            Self::Cgm => "CGM",
            Self::Met => "MET",
            Self::Pmb => "PMB",
            Self::Dib => "DIB",
            Self::Ps => "PS",
            Self::Pdf => "PDF",
            Self::Mpeg => "MPEG",
            Self::Mpeg2 => "MPEG2",
            Self::Avi => "AVI",
            Self::Qtime => "QTIME",
        }
    }
}

/// Proficiency level of a hobby, interest or expertise (RFC 6715).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Parses either the `low|medium|high` or the `beginner|average|expert` vocabulary.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "low" | "beginner" => Some(Self::Low),
            "medium" | "average" => Some(Self::Medium),
            "high" | "expert" => Some(Self::High),
            _ => None,
        }
    }

    /// Token used by HOBBY and INTEREST.
    #[must_use]
    pub const fn as_interest_token(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Token used by EXPERTISE.
    #[must_use]
    pub const fn as_expertise_token(self) -> &'static str {
        match self {
            Self::Low => "beginner",
            Self::Medium => "average",
            Self::High => "expert",
        }
    }
}

/// KIND property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactType {
    Individual,
    Group,
    Organization,
    Location,
    Application,
}

impl ContactType {
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "individual" => Some(Self::Individual),
            "group" => Some(Self::Group),
            "org" | "organization" => Some(Self::Organization),
            "location" => Some(Self::Location),
            "application" => Some(Self::Application),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Group => "group",
            Self::Organization => "org",
            Self::Location => "location",
            Self::Application => "application",
        }
    }
}

/// GENDER property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderType {
    Male,
    Female,
    Other,
    None,
    Unknown,
}

impl GenderType {
    /// Parses the single-letter sex component or its spelled-out word.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "M" | "MALE" => Some(Self::Male),
            "F" | "FEMALE" => Some(Self::Female),
            "O" | "OTHER" => Some(Self::Other),
            "N" | "NONE" => Some(Self::None),
            "U" | "UNKNOWN" => Some(Self::Unknown),
            _ => Option::None,
        }
    }

    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "O",
            Self::None => "N",
            Self::Unknown => "U",
        }
    }
}
