/// Component tokens shared by the parser and serializer
pub const COMPONENT_NAME: &str = "VCARD";
pub const BEGIN_LINE: &str = const_str::concat!("BEGIN:", COMPONENT_NAME);
pub const END_LINE: &str = const_str::concat!("END:", COMPONENT_NAME);

pub const VERSION_PROPERTY: &str = "VERSION";
pub const VERSION_PREFIX: &str = const_str::concat!(VERSION_PROPERTY, ":");

pub const FILE_EXTENSION: &str = "vcf";

/// Maximum content line length in octets for 3.0 output (RFC 2425 §5.8.1).
pub const MAX_LINE_OCTETS: usize = 75;

/// Column width of quoted-printable soft line breaks (RFC 2045 §6.7).
pub const QUOTED_PRINTABLE_LINE_WIDTH: usize = 76;

/// Column width of wrapped base64 payloads in 2.1 output.
pub const BASE64_LINE_WIDTH: usize = 76;

/// Configuration sources
pub const CONFIG_FILE: &str = "vcardlib.toml";
pub const ENV_PREFIX: &str = "VCARDLIB";
