//! Contact field to content line mapping.

use chrono::{Datelike, NaiveDate};

use super::{DateStyle, Dialect, Property};
use crate::error::{VCardError, VCardResult};
use crate::rfc::vcard::core::{
    AddressType, Contact, EmailType, Level, PhoneNumberType, Photo, PhotoEncoding, param_names,
};

/// Value of a field before escaping and encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text components, joined with `;` after escaping.
    Text(Vec<String>),
    /// Written verbatim (tokens, dates, references).
    Raw(String),
    /// Written as base64.
    Binary(Vec<u8>),
}

/// A content line in semantic form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub property: Property,
    /// `TYPE` tokens, written bare or keyed depending on the dialect.
    pub types: Vec<&'static str>,
    pub params: Vec<(&'static str, String)>,
    pub value: FieldValue,
}

impl Field {
    fn text(property: Property, value: &str) -> Self {
        Self::components(property, vec![value.to_string()])
    }

    fn components(property: Property, components: Vec<String>) -> Self {
        Self {
            property,
            types: Vec::new(),
            params: Vec::new(),
            value: FieldValue::Text(components),
        }
    }

    fn raw(property: Property, value: impl Into<String>) -> Self {
        Self {
            property,
            types: Vec::new(),
            params: Vec::new(),
            value: FieldValue::Raw(value.into()),
        }
    }

    fn with_type(mut self, token: Option<&'static str>) -> Self {
        self.types.extend(token);
        self
    }

    fn with_param(mut self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.params.push((name, value.into()));
        }
        self
    }
}

/// ## Summary
/// Returns the fields of a contact in canonical order.
///
/// ## Errors
/// Returns `InvalidFieldValue` for a value the dialect cannot carry: a
/// birthday outside years 0 to 9999, or a photo URL with control characters.
pub fn fields(contact: &Contact, dialect: &Dialect) -> VCardResult<Vec<Field>> {
    let mut out = Vec::new();
    for property in Property::CANONICAL_ORDER {
        write_property(contact, property, dialect, &mut out)?;
    }
    Ok(out)
}

fn write_property(
    contact: &Contact,
    property: Property,
    dialect: &Dialect,
    out: &mut Vec<Field>,
) -> VCardResult<()> {
    let text = |value: Option<&str>| value.map(|v| Field::text(property, v));

    match property {
        Property::Fn => out.extend(text(contact.formatted_name.as_deref())),
        Property::N => {
            let names = [&contact.firstname, &contact.surname, &contact.othernames];
            if names.iter().any(|name| name.is_some()) {
                let mut components: Vec<String> = names
                    .iter()
                    .map(|name| name.as_deref().unwrap_or_default().to_string())
                    .collect();
                components.resize(5, String::new());
                out.push(Field::components(property, components));
            }
        }
        Property::Nickname => out.extend(text(contact.nickname.as_deref())),
        Property::Org => out.extend(contact.organization.as_deref().map(|org| {
            Field::components(property, org.split(';').map(str::to_string).collect())
        })),
        Property::Title => out.extend(text(contact.title.as_deref())),
        Property::Tel => out.extend(contact.phone_numbers.iter().map(|phone| {
            Field::text(property, &phone.number)
                .with_type(phone.kind.map(PhoneNumberType::as_token))
        })),
        Property::Email => out.extend(contact.email_addresses.iter().map(|email| {
            Field::text(property, email.email.as_str())
                .with_type(email.kind.map(EmailType::as_token))
        })),
        Property::Adr => out.extend(contact.addresses.iter().map(|address| {
            let mut components = vec![String::new(); 7];
            components[2].clone_from(&address.location);
            Field::components(property, components)
                .with_type(address.kind.map(AddressType::as_token))
        })),
        Property::Photo => {
            for photo in &contact.photos {
                out.push(photo_field(photo, dialect)?);
            }
        }
        Property::Hobby => out.extend(contact.hobbies.iter().map(|hobby| {
            Field::text(property, &hobby.activity)
                .with_param(param_names::LEVEL, hobby.level.map(Level::as_interest_token))
        })),
        Property::Interest => out.extend(contact.interests.iter().map(|interest| {
            Field::text(property, &interest.activity)
                .with_param(param_names::LEVEL, interest.level.map(Level::as_interest_token))
        })),
        Property::Expertise => out.extend(contact.expertises.iter().map(|expertise| {
            Field::text(property, &expertise.area)
                .with_param(param_names::LEVEL, expertise.level.map(Level::as_expertise_token))
        })),
        Property::Kind => {
            out.extend(contact.kind.map(|kind| Field::raw(property, kind.as_token())));
        }
        Property::Gender => {
            out.extend(contact.gender.map(|gender| Field::raw(property, gender.as_token())));
        }
        Property::Bday => {
            if let Some(date) = contact.birthday {
                out.push(Field::raw(property, birthday(date, dialect)?));
            }
        }
        Property::BirthPlace => out.extend(text(contact.birth_place.as_deref())),
        Property::DeathPlace => out.extend(text(contact.death_place.as_deref())),
        Property::Tz => out.extend(text(contact.timezone.as_deref())),
        Property::Lang => out.extend(text(contact.language.as_deref())),
        Property::Url => out.extend(text(contact.url.as_deref())),
    }

    Ok(())
}

fn invalid_field(message: String) -> VCardError {
    VCardError::InvalidFieldValue {
        line: None,
        message,
    }
}

/// Dates are written with a four-digit year, which the reader requires.
fn birthday(date: NaiveDate, dialect: &Dialect) -> VCardResult<String> {
    if !(0..=9999).contains(&date.year()) {
        return Err(invalid_field(format!(
            "BDAY year {} has no four-digit form",
            date.year()
        )));
    }

    let format = match dialect.date_style {
        DateStyle::Basic => "%Y%m%d",
        DateStyle::Extended => "%Y-%m-%d",
    };
    Ok(date.format(format).to_string())
}

/// URLs are written unescaped, so a line break would end the content line.
fn photo_field(photo: &Photo, dialect: &Dialect) -> VCardResult<Field> {
    let field = match photo {
        Photo::Inline { data, .. } => Field {
            property: Property::Photo,
            types: Vec::new(),
            params: Vec::new(),
            value: FieldValue::Binary(data.clone()),
        }
        .with_param(param_names::ENCODING, Some(dialect.base64_encoding)),
        Photo::Url { url, .. } => {
            if url.chars().any(char::is_control) {
                return Err(invalid_field(format!(
                    "PHOTO URL contains a control character: {url:?}"
                )));
            }
            Field::raw(Property::Photo, url.as_str())
                .with_param(param_names::VALUE, Some(dialect.uri_value))
        }
    };
    Ok(field.with_type(photo.encoding().map(PhotoEncoding::as_token)))
}
