//! vCard 2.1 and 3.0 codec.
//!
//! This module turns `.vcf` text into typed [`Contact`] records and writes
//! them back out in either dialect.
//!
//! ## Overview
//!
//! vCard 2.1 and 3.0 disagree on line folding, escaping, parameter syntax,
//! date format and binary encoding. Every such rule lives in one
//! [`grammar::Dialect`], which both the parser and the serializer consult.
//! 4.0 input is rejected.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use vcardlib_rfc::rfc::vcard::{PhoneNumberType, parse};
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:2.1\r\n\
//! N:Gump;Forrest\r\n\
//! FN:Forrest Gump\r\n\
//! TEL;WORK;VOICE:(111) 555-1212\r\n\
//! END:VCARD\r\n";
//!
//! let contacts = parse(input).unwrap();
//! assert_eq!(contacts[0].formatted_name.as_deref(), Some("Forrest Gump"));
//! assert_eq!(contacts[0].phone_numbers[0].kind, Some(PhoneNumberType::Work));
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use vcardlib_rfc::rfc::vcard::{Contact, VCardVersion, serialize_contact};
//!
//! let contact = Contact::new(VCardVersion::V3_0).with_formatted_name("Jane Doe");
//! let output = serialize_contact(&contact).unwrap();
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Contact model, entity types and versions
//! - [`parse`] - Lexing, value decoding and the record parser
//! - [`grammar`] - Property table and per-version rules
//! - [`build`] - Escaping, folding and serialization
//! - [`io`] - Stream and file boundary

pub mod build;
pub mod collection;
pub mod core;
pub mod grammar;
pub mod io;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::{SerializeOptions, serialize_collection, serialize_contact, serialize_record};
pub use collection::ContactCollection;
pub use self::core::{
    Address, AddressType, Contact, ContactType, EmailAddress, EmailType, Expertise, GenderType,
    Hobby, Interest, Level, MailAddress, PhoneNumber, PhoneNumberType, Photo, PhotoEncoding,
    VCardVersion,
};
pub use io::{
    WriteMode, parse_file, parse_reader, write_collection, write_file, write_record,
    write_record_file,
};
pub use parse::{ParseError, ParseResult, parse, parse_single};
