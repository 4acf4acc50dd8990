//! vCard test fixtures.
//!
//! The Forrest Gump card in both dialects plus programmatic contacts that
//! touch every supported property.

use chrono::NaiveDate;

use crate::rfc::vcard::core::{
    Address, AddressType, Contact, ContactType, EmailAddress, EmailType, Expertise, GenderType,
    Hobby, Interest, Level, PhoneNumber, PhoneNumberType, Photo, PhotoEncoding, VCardVersion,
};

/// vCard 2.1 with bare type tokens, a property the codec ignores and a
/// quoted-printable label split by soft breaks.
pub const VCARD_GUMP_21: &str = "\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N:Gump;Forrest\r\n\
FN:Forrest Gump\r\n\
TEL;WORK;VOICE:(111) 555-1212\r\n\
TEL;HOME;VOICE:(404) 555-1212\r\n\
LABEL;WORK;ENCODING=QUOTED-PRINTABLE:100 Waters Edge=0D=0ABaytown, LA 30314=\r\n\
=0D=0AUnited States of America\r\n\
EMAIL;PREF;INTERNET:forrestgump@example.com\r\n\
REV:20080424T195243Z\r\n\
END:VCARD\r\n";

/// The same card in 3.0 syntax.
pub const VCARD_GUMP_30: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Gump;Forrest;;;\r\n\
FN:Forrest Gump\r\n\
ORG:Bubba Gump Shrimp Co.\r\n\
TITLE:Shrimp Man\r\n\
TEL;TYPE=WORK,VOICE:(111) 555-1212\r\n\
TEL;TYPE=HOME,VOICE:(404) 555-1212\r\n\
ADR;TYPE=WORK:;;100 Waters Edge;Baytown;LA;30314;United States of America\r\n\
LABEL;TYPE=WORK:100 Waters Edge\\nBaytown\\, LA 30314\\nUnited States of America\r\n\
EMAIL;TYPE=PREF,INTERNET:forrestgump@example.com\r\n\
REV:2008-04-24T19:52:43Z\r\n\
END:VCARD\r\n";

/// Programmatic equivalent of the shared fields of the Gump cards.
pub fn gump(version: VCardVersion) -> Contact {
    Contact::new(version)
        .with_formatted_name("Forrest Gump")
        .with_name("Gump", "Forrest", None)
        .add_phone_number(PhoneNumber::new("(111) 555-1212", Some(PhoneNumberType::Work)))
        .add_phone_number(PhoneNumber::new("(404) 555-1212", Some(PhoneNumberType::Home)))
        .add_email_address(
            EmailAddress::parse("forrestgump@example.com", Some(EmailType::Internet)).unwrap(),
        )
}

/// A contact with every supported property set.
pub fn everything(version: VCardVersion) -> Contact {
    gump(version)
        .with_url("http://www.google.com")
        .with_organization("Facebook")
        .with_title("baba nla fuji")
        .with_nickname("Pasuma")
        .with_kind(ContactType::Individual)
        .with_gender(GenderType::Male)
        .with_language("en-US")
        .with_birthday(NaiveDate::from_ymd_opt(1944, 6, 6).unwrap())
        .with_birth_place("Makurdi")
        .with_death_place("Takoraddi")
        .with_timezone("GMT-1")
        .add_address(Address::new("Sabo, Yaba", Some(AddressType::Work)))
        .add_photo(Photo::url("www.google/images", Some(PhotoEncoding::Jpeg)))
        .add_hobby(Hobby::new("Watching Hobbits", Some(Level::Medium)))
        .add_interest(Interest::new("Watching Hobbits", Some(Level::Medium)))
        .add_expertise(Expertise::new("Watching Hobbits", Some(Level::Medium)))
}

/// Values that need escaping, encoding or folding in one dialect or the
/// other.
pub fn awkward(version: VCardVersion) -> Contact {
    Contact::new(version)
        .with_formatted_name("Jörg Müller")
        .with_name("Jörg", "Müller", Some("Karl".to_string()))
        .with_organization("Bubba Gump, Inc.;Shrimping")
        .with_title("Captain; First Mate\\Cook")
        .with_nickname("Lieutenant Dan ".repeat(12).trim_end().to_string())
        .add_address(Address::new("Greenbow, Alabama", Some(AddressType::Home)))
        .add_photo(Photo::inline(
            (0..=255).cycle().take(600).collect(),
            Some(PhotoEncoding::Png),
        ))
        .add_hobby(Hobby::new("Ping-pong\nRunning", None))
        .add_expertise(Expertise::new("Shrimping", Some(Level::High)))
}

/// Values whose whitespace, empty components or line breaks must survive
/// unchanged.
pub fn untrimmed(version: VCardVersion) -> Contact {
    Contact::new(version)
        .with_name("Gump", "Forrest", Some(" ".to_string()))
        .with_organization("Acme;;Sales ")
        .with_title("a\r\nb")
        .add_address(Address::new(" x", None))
}
