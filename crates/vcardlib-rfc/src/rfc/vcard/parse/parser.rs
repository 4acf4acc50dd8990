//! vCard record parser.

use tracing::{debug, trace};
use vcardlib_core::constants::{COMPONENT_NAME, VERSION_PROPERTY};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{LogicalLine, Unfold, parse_content_line, property_name, split_lines};
use crate::error::VCardResult;
use crate::rfc::vcard::collection::ContactCollection;
use crate::rfc::vcard::core::{Contact, VCardVersion};
use crate::rfc::vcard::grammar::{self, Dialect, Property};

/// ## Summary
/// Parses a vCard stream into its records, in stream order.
///
/// ## Errors
/// Returns an error if the input is empty, malformed, declares an
/// unsupported version, or holds an invalid field value. No partial result is
/// returned.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> VCardResult<ContactCollection> {
    debug!("Parsing vCard stream");
    let contacts = Parser::new(input).parse()?;
    debug!(count = contacts.len(), "Parsed vCard stream");
    Ok(contacts.into_iter().collect())
}

/// ## Summary
/// Parses the first record of a vCard stream.
///
/// ## Errors
/// Returns an error under the same conditions as [`parse`].
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> VCardResult<Contact> {
    let contacts = Parser::new(input).parse()?;
    contacts.into_iter().next().ok_or_else(|| {
        ParseError::new(ParseErrorKind::EmptyInput, 1, "input holds no vCard record").into()
    })
}

/// Lines buffered between `BEGIN:VCARD` and `END:VCARD`.
#[derive(Debug)]
struct PendingRecord {
    begin_line: usize,
    version: Option<VCardVersion>,
    lines: Vec<LogicalLine>,
}

impl PendingRecord {
    const fn new(begin_line: usize) -> Self {
        Self {
            begin_line,
            version: None,
            lines: Vec::new(),
        }
    }
}

#[derive(Debug)]
enum State {
    AwaitingBegin,
    InRecord(PendingRecord),
}

/// vCard record parser state machine.
struct Parser {
    lines: Vec<LogicalLine>,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            lines: split_lines(input),
        }
    }

    fn parse(self) -> ParseResult<Vec<Contact>> {
        if self.lines.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyInput,
                1,
                "input holds no content",
            ));
        }

        let mut contacts = Vec::new();
        let mut state = State::AwaitingBegin;

        for line in self.lines {
            trace!(line = line.number, "Processing line");
            state = match state {
                State::AwaitingBegin => Self::awaiting_begin(line)?,
                State::InRecord(record) => Self::in_record(record, line, &mut contacts)?,
            };
        }

        if let State::InRecord(record) = state {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedEof,
                record.begin_line,
                "vCard record is not terminated by END:VCARD",
            ));
        }

        Ok(contacts)
    }

    fn awaiting_begin(line: LogicalLine) -> ParseResult<State> {
        if is_delimiter(line.head(), "BEGIN") {
            trace!(line = line.number, "Record started");
            Ok(State::InRecord(PendingRecord::new(line.number)))
        } else {
            Err(ParseError::unexpected(line.number, "BEGIN:VCARD", line.head()))
        }
    }

    fn in_record(
        mut record: PendingRecord,
        line: LogicalLine,
        contacts: &mut Vec<Contact>,
    ) -> ParseResult<State> {
        let head = line.head();

        if is_delimiter(head, "BEGIN") {
            return Err(ParseError::unexpected(line.number, "END:VCARD", head));
        }

        if is_delimiter(head, "END") {
            contacts.push(Self::finish(record, line.number)?);
            return Ok(State::AwaitingBegin);
        }

        if property_name(head).as_deref() == Some(VERSION_PROPERTY) {
            if record.version.is_some() {
                return Err(ParseError::unexpected(
                    line.number,
                    "a single VERSION",
                    "a repeated VERSION",
                ));
            }
            record.version = Some(read_version(&line)?);
            return Ok(State::InRecord(record));
        }

        record.lines.push(line);
        Ok(State::InRecord(record))
    }

    /// Applies the buffered lines once the version is known.
    fn finish(record: PendingRecord, end_line: usize) -> ParseResult<Contact> {
        let version = record
            .version
            .ok_or_else(|| ParseError::missing_property(end_line, VERSION_PROPERTY))?;
        let dialect = Dialect::for_version(version).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::UnsupportedVersion,
                end_line,
                version.as_str(),
            )
        })?;

        let mut contact = Contact::new(version);

        for logical in &record.lines {
            let text = logical.unfold(dialect.unfold);
            let content = parse_content_line(&text, logical.number)?;

            match Property::from_name(&content.name) {
                Some(property) => {
                    grammar::apply(&mut contact, property, &content, &dialect, logical.number)?;
                }
                None => debug!(
                    property = %content.name,
                    line = logical.number,
                    "Ignoring unrecognized property"
                ),
            }
        }

        trace!(begin = record.begin_line, end = end_line, "Record finished");
        Ok(contact)
    }
}

/// Matches `BEGIN:VCARD` / `END:VCARD` case-insensitively.
fn is_delimiter(head: &str, keyword: &str) -> bool {
    head.split_once(':').is_some_and(|(name, value)| {
        name.trim().eq_ignore_ascii_case(keyword)
            && value.trim().eq_ignore_ascii_case(COMPONENT_NAME)
    })
}

fn read_version(line: &LogicalLine) -> ParseResult<VCardVersion> {
    let text = line.unfold(Unfold::StripOne);
    let content = parse_content_line(&text, line.number)?;
    let value = content.value.trim();

    match VCardVersion::parse(value) {
        Some(version) if version.is_supported() => Ok(version),
        _ => Err(ParseError::new(
            ParseErrorKind::UnsupportedVersion,
            line.number,
            value,
        )),
    }
}
