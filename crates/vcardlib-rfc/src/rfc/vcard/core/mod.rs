//! Core contact model.

mod contact;
mod entity;
mod mail;
mod parameter;
mod types;
mod version;

pub use contact::Contact;
pub use entity::{Address, EmailAddress, Expertise, Hobby, Interest, PhoneNumber, Photo};
pub use mail::{InvalidMailAddress, MailAddress};
pub use parameter::{ENCODING_KEYWORDS, VCardParameter, names as param_names};
pub use types::{
    AddressType, ContactType, EmailType, GenderType, Level, PhoneNumberType, PhotoEncoding,
};
pub use version::VCardVersion;
