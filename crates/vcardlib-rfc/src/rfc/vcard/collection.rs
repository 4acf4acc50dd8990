//! Ordered contact collection.

use std::ops::Index;

use crate::error::VCardResult;
use crate::rfc::vcard::build::{SerializeOptions, serialize_collection};
use crate::rfc::vcard::core::{Contact, VCardVersion};

/// Contacts in insertion order, which is also the serialization order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactCollection {
    contacts: Vec<Contact>,
}

impl ContactCollection {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Appends a contact.
    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    /// ## Summary
    /// Serializes every member under `version` with default options.
    ///
    /// ## Errors
    /// Returns `UnsupportedVersion` if `version` is not 2.1 or 3.0.
    pub fn serialize(&self, version: VCardVersion) -> VCardResult<String> {
        self.serialize_with(version, &SerializeOptions::default())
    }

    /// ## Summary
    /// Serializes every member under `version`.
    ///
    /// ## Errors
    /// Returns `UnsupportedVersion` if `version` is not 2.1 or 3.0.
    pub fn serialize_with(
        &self,
        version: VCardVersion,
        options: &SerializeOptions,
    ) -> VCardResult<String> {
        serialize_collection(&self.contacts, version, options)
    }
}

impl Index<usize> for ContactCollection {
    type Output = Contact;

    fn index(&self, index: usize) -> &Self::Output {
        &self.contacts[index]
    }
}

impl From<Vec<Contact>> for ContactCollection {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl FromIterator<Contact> for ContactCollection {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        Self {
            contacts: iter.into_iter().collect(),
        }
    }
}

impl Extend<Contact> for ContactCollection {
    fn extend<I: IntoIterator<Item = Contact>>(&mut self, iter: I) {
        self.contacts.extend(iter);
    }
}

impl IntoIterator for ContactCollection {
    type Item = Contact;
    type IntoIter = std::vec::IntoIter<Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.into_iter()
    }
}

impl<'a> IntoIterator for &'a ContactCollection {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
