//! Contact record.

use chrono::NaiveDate;

use super::entity::{Address, EmailAddress, Expertise, Hobby, Interest, PhoneNumber, Photo};
use super::types::{ContactType, GenderType};
use super::version::VCardVersion;

/// A single contact card.
///
/// `None` scalars and empty sequences are omitted on output. Sequence order
/// is preserved through parse and serialize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub version: VCardVersion,
    pub formatted_name: Option<String>,
    pub firstname: Option<String>,
    pub surname: Option<String>,
    pub othernames: Option<String>,
    pub nickname: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub kind: Option<ContactType>,
    pub gender: Option<GenderType>,
    pub birthday: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub death_place: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
    pub url: Option<String>,
    pub phone_numbers: Vec<PhoneNumber>,
    pub email_addresses: Vec<EmailAddress>,
    pub addresses: Vec<Address>,
    pub photos: Vec<Photo>,
    pub hobbies: Vec<Hobby>,
    pub interests: Vec<Interest>,
    pub expertises: Vec<Expertise>,
}

impl Contact {
    /// Creates an empty contact of the given version.
    #[must_use]
    pub fn new(version: VCardVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_formatted_name(mut self, name: impl Into<String>) -> Self {
        self.formatted_name = Some(name.into());
        self
    }

    /// Sets the N components.
    #[must_use]
    pub fn with_name(
        mut self,
        firstname: impl Into<String>,
        surname: impl Into<String>,
        othernames: Option<String>,
    ) -> Self {
        self.firstname = Some(firstname.into());
        self.surname = Some(surname.into());
        self.othernames = othernames;
        self
    }

    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    #[must_use]
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: ContactType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub const fn with_gender(mut self, gender: GenderType) -> Self {
        self.gender = Some(gender);
        self
    }

    #[must_use]
    pub const fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }

    #[must_use]
    pub fn with_birth_place(mut self, place: impl Into<String>) -> Self {
        self.birth_place = Some(place.into());
        self
    }

    #[must_use]
    pub fn with_death_place(mut self, place: impl Into<String>) -> Self {
        self.death_place = Some(place.into());
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn add_phone_number(mut self, phone: PhoneNumber) -> Self {
        self.phone_numbers.push(phone);
        self
    }

    #[must_use]
    pub fn add_email_address(mut self, email: EmailAddress) -> Self {
        self.email_addresses.push(email);
        self
    }

    #[must_use]
    pub fn add_address(mut self, address: Address) -> Self {
        self.addresses.push(address);
        self
    }

    #[must_use]
    pub fn add_photo(mut self, photo: Photo) -> Self {
        self.photos.push(photo);
        self
    }

    #[must_use]
    pub fn add_hobby(mut self, hobby: Hobby) -> Self {
        self.hobbies.push(hobby);
        self
    }

    #[must_use]
    pub fn add_interest(mut self, interest: Interest) -> Self {
        self.interests.push(interest);
        self
    }

    #[must_use]
    pub fn add_expertise(mut self, expertise: Expertise) -> Self {
        self.expertises.push(expertise);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::PhoneNumberType;

    #[test]
    fn builder_sets_fields() {
        let contact = Contact::new(VCardVersion::V2_1)
            .with_formatted_name("Forrest Gump")
            .with_name("Gump", "Forrest", None)
            .add_phone_number(PhoneNumber::new("(111) 555-1212", Some(PhoneNumberType::Work)));

        assert_eq!(contact.version, VCardVersion::V2_1);
        assert_eq!(contact.formatted_name.as_deref(), Some("Forrest Gump"));
        assert_eq!(contact.firstname.as_deref(), Some("Gump"));
        assert_eq!(contact.surname.as_deref(), Some("Forrest"));
        assert_eq!(contact.phone_numbers.len(), 1);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = Contact::default()
            .add_phone_number(PhoneNumber::new("1", None))
            .add_phone_number(PhoneNumber::new("2", None));
        let b = Contact::default()
            .add_phone_number(PhoneNumber::new("2", None))
            .add_phone_number(PhoneNumber::new("1", None));
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }
}
