//! Content line to contact field mapping.

use super::{Dialect, Property};
use crate::rfc::vcard::core::{
    Address, AddressType, Contact, ContactType, EmailAddress, EmailType, Expertise, GenderType,
    Hobby, Interest, Level, MailAddress, PhoneNumber, PhoneNumberType, Photo, PhotoEncoding,
    param_names,
};
use crate::rfc::vcard::parse::{
    ContentLine, ParseError, ParseResult, TextEscaping, decode_base64, decode_charset,
    decode_quoted_printable, parse_date, split_structured, unescape_text,
};

/// Qualifier token that never selects a category.
const PREF: &str = "PREF";

/// ## Summary
/// Applies one content line to the contact being built.
///
/// ## Errors
/// Returns an error if an enumeration token is unknown or the value cannot be
/// decoded.
pub fn apply(
    contact: &mut Contact,
    property: Property,
    line: &ContentLine,
    dialect: &Dialect,
    line_num: usize,
) -> ParseResult<()> {
    tracing::trace!(property = property.name(), line = line_num, "Applying property");

    match property {
        Property::Fn => contact.formatted_name = Some(text(line, dialect, line_num)?),
        Property::N => {
            let components = components(line, dialect, line_num)?;
            let mut parts = components.into_iter();
            contact.firstname = parts.next().filter(|s| !s.is_empty());
            contact.surname = parts.next().filter(|s| !s.is_empty());
            contact.othernames = join_non_empty(parts, " ");
        }
        Property::Nickname => contact.nickname = Some(text(line, dialect, line_num)?),
        Property::Org => {
            contact.organization = Some(components(line, dialect, line_num)?.join(";"));
        }
        Property::Title => contact.title = Some(text(line, dialect, line_num)?),
        Property::Tel => {
            let kind = phone_category(line, line_num)?;
            let number = text(line, dialect, line_num)?;
            contact.phone_numbers.push(PhoneNumber::new(number, kind));
        }
        Property::Email => {
            let kind = category(line, line_num, "EMAIL type", EmailType::from_token)?;
            let raw = text(line, dialect, line_num)?;
            let email = MailAddress::new(&raw)
                .map_err(|err| ParseError::invalid_value(line_num, err.to_string()))?;
            contact.email_addresses.push(EmailAddress::new(email, kind));
        }
        Property::Adr => {
            let kind = category(line, line_num, "ADR type", AddressType::from_token)?;
            let location =
                join_non_empty(components(line, dialect, line_num)?.into_iter(), ", ")
                    .unwrap_or_default();
            contact.addresses.push(Address::new(location, kind));
        }
        Property::Photo => contact.photos.push(photo(line, dialect, line_num)?),
        Property::Hobby => {
            let level = level(line, line_num)?;
            let activity = text(line, dialect, line_num)?;
            contact.hobbies.push(Hobby::new(activity, level));
        }
        Property::Interest => {
            let level = level(line, line_num)?;
            let activity = text(line, dialect, line_num)?;
            contact.interests.push(Interest::new(activity, level));
        }
        Property::Expertise => {
            let level = level(line, line_num)?;
            let area = text(line, dialect, line_num)?;
            contact.expertises.push(Expertise::new(area, level));
        }
        Property::Kind => {
            let token = text(line, dialect, line_num)?;
            let kind = ContactType::from_token(&token)
                .ok_or_else(|| ParseError::unknown_token(line_num, "KIND", &token))?;
            contact.kind = Some(kind);
        }
        Property::Gender => {
            let components = components(line, dialect, line_num)?;
            let sex = components.first().map(|s| s.trim()).unwrap_or_default();
            if !sex.is_empty() {
                let gender = GenderType::from_token(sex)
                    .ok_or_else(|| ParseError::unknown_token(line_num, "GENDER", sex))?;
                contact.gender = Some(gender);
            }
        }
        Property::Bday => {
            contact.birthday = Some(parse_date(&text(line, dialect, line_num)?, line_num)?);
        }
        Property::BirthPlace => contact.birth_place = Some(text(line, dialect, line_num)?),
        Property::DeathPlace => contact.death_place = Some(text(line, dialect, line_num)?),
        Property::Tz => contact.timezone = Some(text(line, dialect, line_num)?),
        Property::Lang => contact.language = Some(text(line, dialect, line_num)?),
        Property::Url => contact.url = Some(text(line, dialect, line_num)?),
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Plain,
    QuotedPrintable,
    Base64,
}

fn encoding(line: &ContentLine) -> Encoding {
    match line.param_value(param_names::ENCODING) {
        Some(e) if e.eq_ignore_ascii_case("QUOTED-PRINTABLE") => Encoding::QuotedPrintable,
        Some(e) if e.eq_ignore_ascii_case("BASE64") || e.eq_ignore_ascii_case("B") => {
            Encoding::Base64
        }
        _ => Encoding::Plain,
    }
}

/// Decodes one encoded component into text.
fn decode_component(
    raw: &str,
    line: &ContentLine,
    dialect: &Dialect,
    line_num: usize,
) -> ParseResult<String> {
    let charset = line.param_value(param_names::CHARSET);

    match encoding(line) {
        Encoding::Plain => Ok(unescape_text(raw, dialect.escaping)),
        Encoding::QuotedPrintable => {
            let octets = decode_quoted_printable(raw, line_num)?;
            let decoded = decode_charset(&octets, charset, line_num)?;
            Ok(match dialect.escaping {
                TextEscaping::Semicolon => decoded,
                TextEscaping::Backslash => unescape_text(&decoded, dialect.escaping),
            })
        }
        Encoding::Base64 => decode_charset(&decode_base64(raw, line_num)?, charset, line_num),
    }
}

/// Whole value as a single text.
fn text(line: &ContentLine, dialect: &Dialect, line_num: usize) -> ParseResult<String> {
    decode_component(&line.value, line, dialect, line_num)
}

/// Value split into structured components.
fn components(
    line: &ContentLine,
    dialect: &Dialect,
    line_num: usize,
) -> ParseResult<Vec<String>> {
    split_structured(&line.value, dialect.escaping)
        .into_iter()
        .map(|raw| decode_component(raw, line, dialect, line_num))
        .collect()
}

/// Joins the non-empty components, keeping their whitespace.
fn join_non_empty(parts: impl Iterator<Item = String>, separator: &str) -> Option<String> {
    let parts: Vec<String> = parts.filter(|s| !s.is_empty()).collect();
    (!parts.is_empty()).then(|| parts.join(separator))
}

/// `TYPE` tokens without the `PREF` qualifier, each mapped into `T`.
fn typed_tokens<T>(
    line: &ContentLine,
    line_num: usize,
    property: &str,
    lookup: impl Fn(&str) -> Option<T>,
) -> ParseResult<Vec<T>> {
    line.types()
        .iter()
        .filter(|token| !token.eq_ignore_ascii_case(PREF))
        .map(|token| {
            lookup(token).ok_or_else(|| ParseError::unknown_token(line_num, property, token))
        })
        .collect()
}

/// First category token, after qualifiers are removed.
fn category<T>(
    line: &ContentLine,
    line_num: usize,
    property: &str,
    lookup: impl Fn(&str) -> Option<T>,
) -> ParseResult<Option<T>> {
    Ok(typed_tokens(line, line_num, property, lookup)?.into_iter().next())
}

/// `VOICE` only selects the category when no other token is present.
fn phone_category(line: &ContentLine, line_num: usize) -> ParseResult<Option<PhoneNumberType>> {
    let kinds = typed_tokens(line, line_num, "TEL type", PhoneNumberType::from_token)?;
    Ok(kinds
        .iter()
        .copied()
        .find(|kind| *kind != PhoneNumberType::Voice)
        .or_else(|| kinds.first().copied()))
}

fn level(line: &ContentLine, line_num: usize) -> ParseResult<Option<Level>> {
    line.param_value(param_names::LEVEL)
        .map(|token| {
            Level::from_token(token)
                .ok_or_else(|| ParseError::unknown_token(line_num, "LEVEL", token))
        })
        .transpose()
}

fn photo(line: &ContentLine, dialect: &Dialect, line_num: usize) -> ParseResult<Photo> {
    let image_type = category(line, line_num, "PHOTO type", PhotoEncoding::from_token)?;

    let is_reference = line
        .param_value(param_names::VALUE)
        .is_some_and(|v| v.eq_ignore_ascii_case("URL") || v.eq_ignore_ascii_case("URI"));

    if !is_reference && encoding(line) == Encoding::Base64 {
        let data = decode_base64(&line.value, line_num)?;
        return Ok(Photo::inline(data, image_type));
    }

    let url = match encoding(line) {
        Encoding::QuotedPrintable => text(line, dialect, line_num)?,
        Encoding::Plain | Encoding::Base64 => line.value.clone(),
    };
    Ok(Photo::url(url, image_type))
}
