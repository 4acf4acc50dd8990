//! vCard 2.1 / 3.0 codec.
//!
//! Parses `.vcf` text into typed [`Contact`](rfc::vcard::Contact) records and
//! serializes them back into version-correct vCard text.

pub mod error;
pub mod rfc;

pub use error::{ErrorKind, VCardError, VCardResult};
