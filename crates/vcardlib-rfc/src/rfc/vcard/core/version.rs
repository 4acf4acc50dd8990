//! vCard version tag.

use std::fmt;

use vcardlib_core::config::CodecConfig;

use crate::error::{VCardError, VCardResult};

/// vCard version.
///
/// 4.0 is recognized so it can be rejected as unsupported rather than as
/// malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VCardVersion {
    /// vCard 2.1 (versit).
    V2_1,
    /// vCard 3.0 (RFC 2426).
    #[default]
    V3_0,
    /// vCard 4.0 (RFC 6350), recognized but not implemented.
    V4_0,
}

impl VCardVersion {
    /// Parses from version string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "2.1" => Some(Self::V2_1),
            "3.0" => Some(Self::V3_0),
            "4.0" => Some(Self::V4_0),
            _ => None,
        }
    }

    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2_1 => "2.1",
            Self::V3_0 => "3.0",
            Self::V4_0 => "4.0",
        }
    }

    /// Returns whether the codec can read and write this version.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::V2_1 | Self::V3_0)
    }

    /// ## Summary
    /// Returns `self` if the codec implements this version.
    ///
    /// ## Errors
    /// Returns `UnsupportedVersion` for 4.0.
    pub fn ensure_supported(self) -> VCardResult<Self> {
        if self.is_supported() {
            Ok(self)
        } else {
            Err(VCardError::UnsupportedVersion(self.as_str().to_string()))
        }
    }

    /// ## Summary
    /// Resolves the configured default version.
    ///
    /// ## Errors
    /// Returns `UnsupportedVersion` if the configured value is not 2.1 or 3.0.
    pub fn from_config(config: &CodecConfig) -> VCardResult<Self> {
        config.default_version.parse::<Self>()?.ensure_supported()
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VCardVersion {
    type Err = VCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| VCardError::UnsupportedVersion(s.trim().to_string()))
    }
}
