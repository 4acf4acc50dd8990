//! vCard serializer.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, trace};
use vcardlib_core::config::{CodecConfig, LineEnding};
use vcardlib_core::constants::{BEGIN_LINE, END_LINE, VERSION_PREFIX};

use super::escape::{
    encode_quoted_printable, escape_semicolons, escape_text, needs_quoted_printable,
};
use super::fold::{fold_line, wrap_base64, wrap_quoted_printable};
use crate::error::{VCardError, VCardResult};
use crate::rfc::vcard::core::{Contact, VCardVersion, param_names};
use crate::rfc::vcard::grammar::{Dialect, Field, FieldValue, TypeSyntax, fields};
use crate::rfc::vcard::parse::TextEscaping;

/// Output formatting knobs that do not affect the data written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    pub line_ending: LineEnding,
    /// Fold 3.0 content lines longer than 75 octets.
    pub fold_lines: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Crlf,
            fold_lines: true,
        }
    }
}

impl SerializeOptions {
    #[must_use]
    pub const fn from_config(config: &CodecConfig) -> Self {
        Self {
            line_ending: config.line_ending,
            fold_lines: config.fold_lines,
        }
    }
}

/// ## Summary
/// Serializes a contact under its own version with default options.
///
/// ## Errors
/// Returns `UnsupportedVersion` if the contact's version is 4.0.
pub fn serialize_contact(contact: &Contact) -> VCardResult<String> {
    serialize_record(contact, contact.version, &SerializeOptions::default())
}

/// ## Summary
/// Serializes a contact under an explicit target version, which overrides
/// the contact's own version.
///
/// ## Errors
/// Returns `UnsupportedVersion` if `version` has no grammar.
#[tracing::instrument(skip(contact, options), fields(version = %version))]
pub fn serialize_record(
    contact: &Contact,
    version: VCardVersion,
    options: &SerializeOptions,
) -> VCardResult<String> {
    let dialect = dialect(version)?;
    let mut out = String::new();
    write_record(&mut out, contact, &dialect, options)?;
    Ok(out)
}

/// ## Summary
/// Serializes contacts back-to-back under one target version.
///
/// ## Errors
/// Returns `UnsupportedVersion` if `version` has no grammar.
#[tracing::instrument(skip(contacts, options), fields(count = contacts.len(), version = %version))]
pub fn serialize_collection(
    contacts: &[Contact],
    version: VCardVersion,
    options: &SerializeOptions,
) -> VCardResult<String> {
    let dialect = dialect(version)?;
    let mut out = String::new();
    for contact in contacts {
        write_record(&mut out, contact, &dialect, options)?;
    }
    debug!(bytes = out.len(), "Serialized vCard collection");
    Ok(out)
}

fn dialect(version: VCardVersion) -> VCardResult<Dialect> {
    Dialect::for_version(version)
        .ok_or_else(|| VCardError::UnsupportedVersion(version.as_str().to_string()))
}

fn write_record(
    out: &mut String,
    contact: &Contact,
    dialect: &Dialect,
    options: &SerializeOptions,
) -> VCardResult<()> {
    let fields = fields(contact, dialect)?;
    let le = options.line_ending.as_str();

    out.push_str(BEGIN_LINE);
    out.push_str(le);
    out.push_str(VERSION_PREFIX);
    out.push_str(dialect.version.as_str());
    out.push_str(le);

    for field in fields {
        trace!(property = field.property.name(), "Writing property");
        write_field(out, &field, dialect, options);
    }

    out.push_str(END_LINE);
    out.push_str(le);
    Ok(())
}

/// Property name, type tokens and parameters, without the `:`.
fn head(field: &Field, dialect: &Dialect) -> String {
    let mut head = String::from(field.property.name());

    if !field.types.is_empty() {
        match dialect.type_syntax {
            TypeSyntax::Bare => {
                for token in &field.types {
                    head.push(';');
                    head.push_str(token);
                }
            }
            TypeSyntax::Keyed => {
                head.push_str(";TYPE=");
                head.push_str(&field.types.join(","));
            }
        }
    }

    for (name, value) in &field.params {
        head.push(';');
        head.push_str(name);
        head.push('=');
        head.push_str(value);
    }

    head
}

fn write_field(out: &mut String, field: &Field, dialect: &Dialect, options: &SerializeOptions) {
    let le = options.line_ending.as_str();
    let mut head = head(field, dialect);

    match &field.value {
        FieldValue::Text(components) => {
            if dialect.quoted_printable && components.iter().any(|c| needs_quoted_printable(c)) {
                head.push_str(";ENCODING=QUOTED-PRINTABLE;");
                head.push_str(param_names::CHARSET);
                head.push_str("=UTF-8:");
                let encoded: Vec<String> =
                    components.iter().map(|c| encode_quoted_printable(c)).collect();
                out.push_str(&wrap_quoted_printable(&head, &encoded.join(";"), le));
                out.push_str(le);
            } else if !dialect.quoted_printable && components.iter().any(|c| c.contains('\r')) {
                // 3.0 text has no escape for CR.
                let encoded: Vec<String> =
                    components.iter().map(|c| STANDARD.encode(c)).collect();
                let line = format!(
                    "{head};{}={};{}=UTF-8:{}",
                    param_names::ENCODING,
                    dialect.base64_encoding,
                    param_names::CHARSET,
                    encoded.join(";")
                );
                push_line(out, &line, dialect, options);
            } else {
                let escaped: Vec<String> = components
                    .iter()
                    .map(|c| match dialect.escaping {
                        TextEscaping::Semicolon => escape_semicolons(c),
                        TextEscaping::Backslash => escape_text(c),
                    })
                    .collect();
                push_line(out, &format!("{head}:{}", escaped.join(";")), dialect, options);
            }
        }
        FieldValue::Raw(value) => push_line(out, &format!("{head}:{value}"), dialect, options),
        FieldValue::Binary(data) => {
            let encoded = STANDARD.encode(data);
            if dialect.folds {
                push_line(out, &format!("{head}:{encoded}"), dialect, options);
            } else {
                head.push(':');
                out.push_str(&wrap_base64(&head, &encoded, le));
                out.push_str(le);
                // A blank line terminates the wrapped payload.
                out.push_str(le);
            }
        }
    }
}

fn push_line(out: &mut String, line: &str, dialect: &Dialect, options: &SerializeOptions) {
    let le = options.line_ending.as_str();
    if dialect.folds && options.fold_lines {
        out.push_str(&fold_line(line, le));
    } else {
        out.push_str(line);
    }
    out.push_str(le);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::rfc::vcard::core::{
        EmailAddress, EmailType, PhoneNumber, PhoneNumberType, Photo, PhotoEncoding,
    };

    fn gump(version: VCardVersion) -> Contact {
        Contact::new(version)
            .with_formatted_name("Forrest Gump")
            .with_name("Gump", "Forrest", None)
            .add_phone_number(PhoneNumber::new("(111) 555-1212", Some(PhoneNumberType::Work)))
            .add_email_address(
                EmailAddress::parse("forrestgump@example.com", Some(EmailType::Internet)).unwrap(),
            )
    }

    #[test]
    fn three_uses_keyed_types() {
        let out = serialize_contact(&gump(VCardVersion::V3_0)).unwrap();
        assert_eq!(
            out,
            "BEGIN:VCARD\r\n\
             VERSION:3.0\r\n\
             FN:Forrest Gump\r\n\
             N:Gump;Forrest;;;\r\n\
             TEL;TYPE=WORK:(111) 555-1212\r\n\
             EMAIL;TYPE=INTERNET:forrestgump@example.com\r\n\
             END:VCARD\r\n"
        );
    }

    #[test]
    fn two_one_uses_bare_types() {
        let out = serialize_contact(&gump(VCardVersion::V2_1)).unwrap();
        assert!(out.contains("VERSION:2.1\r\n"));
        assert!(out.contains("TEL;WORK:(111) 555-1212\r\n"));
        assert!(out.contains("EMAIL;INTERNET:forrestgump@example.com\r\n"));
        assert!(!out.contains("TYPE="));
    }

    #[test]
    fn target_version_overrides_record() {
        let options = SerializeOptions::default();
        let out =
            serialize_record(&gump(VCardVersion::V3_0), VCardVersion::V2_1, &options).unwrap();
        assert!(out.contains("VERSION:2.1"));
        assert!(out.contains("TEL;WORK:"));
    }

    #[test]
    fn four_is_rejected() {
        let err = serialize_contact(&gump(VCardVersion::V4_0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedVersion);

        let err = serialize_collection(
            &[gump(VCardVersion::V3_0)],
            VCardVersion::V4_0,
            &SerializeOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedVersion);
    }

    #[test]
    fn line_ending_option() {
        let options = SerializeOptions {
            line_ending: LineEnding::Lf,
            fold_lines: true,
        };
        let out =
            serialize_record(&gump(VCardVersion::V3_0), VCardVersion::V3_0, &options).unwrap();
        assert!(!out.contains('\r'));
        assert!(out.ends_with("END:VCARD\n"));
    }

    #[test]
    fn three_escapes_and_folds() {
        let contact = Contact::new(VCardVersion::V3_0)
            .with_title("Captain, Shrimp Boat; Owner")
            .with_formatted_name("X".repeat(100));
        let out = serialize_contact(&contact).unwrap();
        assert!(out.contains("TITLE:Captain\\, Shrimp Boat\\; Owner\r\n"));
        assert!(out.contains("\r\n X"));

        let unfolded = SerializeOptions {
            line_ending: LineEnding::Crlf,
            fold_lines: false,
        };
        let out = serialize_record(&contact, VCardVersion::V3_0, &unfolded).unwrap();
        assert!(out.contains(&format!("FN:{}\r\n", "X".repeat(100))));
    }

    #[test]
    fn two_one_switches_to_quoted_printable() {
        let contact = Contact::new(VCardVersion::V2_1)
            .with_formatted_name("Jörg Müller")
            .with_title("a;b");
        let out = serialize_contact(&contact).unwrap();
        assert!(out.contains(
            "FN;ENCODING=QUOTED-PRINTABLE;CHARSET=UTF-8:J=C3=B6rg M=C3=BCller\r\n"
        ));
        assert!(out.contains("TITLE:a\\;b\r\n"));
    }

    #[test]
    fn photo_encodings_per_version() {
        let contact = Contact::new(VCardVersion::V3_0)
            .add_photo(Photo::inline(b"Hello".to_vec(), Some(PhotoEncoding::Png)));

        let v30 = serialize_contact(&contact).unwrap();
        assert!(v30.contains("PHOTO;TYPE=PNG;ENCODING=b:SGVsbG8=\r\n"));

        let v21 = serialize_record(&contact, VCardVersion::V2_1, &SerializeOptions::default())
            .unwrap();
        assert!(v21.contains("PHOTO;PNG;ENCODING=BASE64:\r\n SGVsbG8=\r\n\r\nEND:VCARD"));
    }

    #[test]
    fn three_writes_carriage_returns_as_base64() {
        let contact = Contact::new(VCardVersion::V3_0).with_title("a\r\nb");
        let out = serialize_contact(&contact).unwrap();
        assert!(out.contains("TITLE;ENCODING=b;CHARSET=UTF-8:YQ0KYg==\r\n"));

        let out = serialize_record(&contact, VCardVersion::V2_1, &SerializeOptions::default())
            .unwrap();
        assert!(out.contains("TITLE;ENCODING=QUOTED-PRINTABLE;CHARSET=UTF-8:a=0D=0Ab\r\n"));
    }

    #[test]
    fn unwritable_value_produces_no_output() {
        let contact = gump(VCardVersion::V3_0)
            .add_photo(Photo::url("http://a/b\r\nFN:Injected", None));
        let err = serialize_collection(
            &[gump(VCardVersion::V3_0), contact],
            VCardVersion::V3_0,
            &SerializeOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFieldValue);
        assert!(err.to_string().contains("PHOTO"));
    }

    #[test]
    fn options_from_config() {
        let config = CodecConfig {
            default_version: "2.1".to_string(),
            line_ending: LineEnding::Lf,
            fold_lines: false,
        };
        let options = SerializeOptions::from_config(&config);
        assert_eq!(options.line_ending, LineEnding::Lf);
        assert!(!options.fold_lines);
    }
}
