//! Content-line parameters.

/// Parameter names the codec reads or writes.
pub mod names {
    pub const TYPE: &str = "TYPE";
    pub const ENCODING: &str = "ENCODING";
    pub const CHARSET: &str = "CHARSET";
    pub const VALUE: &str = "VALUE";
    pub const LEVEL: &str = "LEVEL";
}

/// Bare 2.1 tokens that denote an `ENCODING` rather than a `TYPE`.
pub const ENCODING_KEYWORDS: [&str; 5] = ["BASE64", "B", "QUOTED-PRINTABLE", "8BIT", "7BIT"];

/// One `;`-separated parameter of a content line.
///
/// Names are stored uppercase. 2.1 bare tokens (`TEL;WORK;VOICE`) are
/// normalized into `TYPE` or `ENCODING` parameters, so both dialects reach
/// the grammar in the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    pub name: String,
    pub values: Vec<String>,
}

impl VCardParameter {
    /// A `NAME=v1,v2` parameter.
    #[must_use]
    pub fn keyed(name: &str, values: Vec<String>) -> Self {
        Self {
            name: name.to_ascii_uppercase(),
            values,
        }
    }

    /// A 2.1 bare token, classified by whether it names an encoding.
    #[must_use]
    pub fn bare(token: &str) -> Self {
        let name = if ENCODING_KEYWORDS
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(token))
        {
            names::ENCODING
        } else {
            names::TYPE
        };
        Self::keyed(name, vec![token.to_string()])
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Case-insensitive name match.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
