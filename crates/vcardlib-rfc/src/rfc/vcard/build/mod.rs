//! vCard serialization.
//!
//! This module provides serializers for vCard content:
//! - Escape: 3.0 text escaping, 2.1 semicolon escaping and quoted-printable
//! - Fold: 75-octet folding, quoted-printable soft breaks, base64 wrapping
//! - Serializer: Record and collection serialization with canonical ordering

mod escape;
mod fold;
mod serializer;

pub use escape::{encode_quoted_printable, escape_semicolons, escape_text, needs_quoted_printable};
pub use fold::{fold_line, wrap_base64, wrap_quoted_printable};
pub use serializer::{SerializeOptions, serialize_collection, serialize_contact, serialize_record};
