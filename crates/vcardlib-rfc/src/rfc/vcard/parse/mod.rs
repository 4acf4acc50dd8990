//! vCard parsing (2.1 and 3.0).
//!
//! ## Usage
//!
//! ```rust
//! use vcardlib_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL;TYPE=INTERNET:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let contacts = parse::parse(input).unwrap();
//! assert_eq!(contacts[0].formatted_name.as_deref(), Some("John Doe"));
//! ```
//!
//! ## Features
//!
//! - Version-aware line unfolding and quoted-printable soft breaks
//! - 2.1 bare parameter tokens (`TEL;WORK;VOICE`)
//! - Property groups (`item1.TEL`) are accepted and discarded
//! - Quoted-printable with `CHARSET`, and base64 payloads

mod error;
mod lexer;
mod parser;
mod values;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{
    ContentLine, LogicalLine, Unfold, parse_content_line, property_name, split_lines,
};
pub use parser::{parse, parse_single};
pub use values::{
    TextEscaping, decode_base64, decode_charset, decode_quoted_printable, parse_date,
    split_structured, unescape_text,
};
