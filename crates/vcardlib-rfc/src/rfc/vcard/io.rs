//! Reading and writing `.vcf` streams and files.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{VCardError, VCardResult};
use crate::rfc::vcard::build::{SerializeOptions, serialize_collection, serialize_record};
use crate::rfc::vcard::collection::ContactCollection;
use crate::rfc::vcard::core::{Contact, VCardVersion};
use crate::rfc::vcard::parse::parse;

/// How [`write_file`] treats an existing destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and replace.
    Overwrite,
    /// Add records after the existing content.
    Append,
    /// Fail if the destination already exists.
    #[default]
    CreateNew,
}

/// ## Summary
/// Reads an entire stream and parses it.
///
/// ## Errors
/// Returns `Io` if the stream fails or is not UTF-8, otherwise whatever
/// [`parse`] returns.
pub fn parse_reader(mut reader: impl BufRead) -> VCardResult<ContactCollection> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse(&input)
}

/// ## Summary
/// Parses a `.vcf` file.
///
/// ## Errors
/// Returns `ArgumentMissing` if no path is given, `NotFound` if the file
/// does not exist, `Io` on read failure, otherwise whatever [`parse`]
/// returns.
#[tracing::instrument]
pub fn parse_file(path: Option<&Path>) -> VCardResult<ContactCollection> {
    let path = require_path(path)?;

    let input = match std::fs::read_to_string(path) {
        Ok(input) => input,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(VCardError::NotFound(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };

    let contacts = parse(&input)?;
    info!(count = contacts.len(), "Parsed vCard file");
    Ok(contacts)
}

/// ## Summary
/// Serializes one contact under `version` into `writer`.
///
/// ## Errors
/// Returns `UnsupportedVersion` before anything is written, or `Io` if the
/// writer fails.
pub fn write_record(
    writer: &mut impl Write,
    contact: &Contact,
    version: VCardVersion,
    options: &SerializeOptions,
) -> VCardResult<()> {
    let text = serialize_record(contact, version, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// ## Summary
/// Serializes a collection under `version` into `writer`.
///
/// ## Errors
/// Returns `UnsupportedVersion` before anything is written, or `Io` if the
/// writer fails.
pub fn write_collection(
    writer: &mut impl Write,
    contacts: &ContactCollection,
    version: VCardVersion,
    options: &SerializeOptions,
) -> VCardResult<()> {
    let text = serialize_collection(contacts.as_slice(), version, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// ## Summary
/// Serializes a collection into a file.
///
/// The text is produced before the file is touched, so an unsupported
/// version never creates or truncates the destination. In
/// [`WriteMode::Append`] a line ending is inserted first if the existing
/// content does not end with one.
///
/// ## Errors
/// Returns `ArgumentMissing` for an empty path, `UnsupportedVersion` for a
/// version without a grammar, `InvalidFieldValue` for a value the version
/// cannot carry, or `Io` if the file cannot be written (including an
/// existing file under [`WriteMode::CreateNew`]).
#[tracing::instrument(skip(contacts, options), fields(path = %path.display(), count = contacts.len()))]
pub fn write_file(
    path: &Path,
    contacts: &ContactCollection,
    version: VCardVersion,
    mode: WriteMode,
    options: &SerializeOptions,
) -> VCardResult<()> {
    let path = require_path(Some(path))?;
    let text = serialize_collection(contacts.as_slice(), version, options)?;
    write_text(path, &text, mode, options)
}

/// ## Summary
/// Serializes a single contact into a file, with the same guarantees as
/// [`write_file`].
///
/// ## Errors
/// Same as [`write_file`].
#[tracing::instrument(skip(contact, options), fields(path = %path.display()))]
pub fn write_record_file(
    path: &Path,
    contact: &Contact,
    version: VCardVersion,
    mode: WriteMode,
    options: &SerializeOptions,
) -> VCardResult<()> {
    let path = require_path(Some(path))?;
    let text = serialize_record(contact, version, options)?;
    write_text(path, &text, mode, options)
}

fn write_text(
    path: &Path,
    text: &str,
    mode: WriteMode,
    options: &SerializeOptions,
) -> VCardResult<()> {
    let mut file = match mode {
        WriteMode::Overwrite => OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?,
        WriteMode::Append => {
            let separate = lacks_trailing_newline(path)?;
            let mut file = OpenOptions::new().append(true).create(true).open(path)?;
            if separate {
                debug!("Existing content has no trailing newline");
                file.write_all(options.line_ending.as_str().as_bytes())?;
            }
            file
        }
        WriteMode::CreateNew => OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?,
    };

    file.write_all(text.as_bytes())?;
    file.flush()?;
    info!(bytes = text.len(), "Wrote vCard file");
    Ok(())
}

fn require_path(path: Option<&Path>) -> VCardResult<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| VCardError::ArgumentMissing("path".to_string()))
}

/// Whether `path` holds content whose last byte is not `\n`.
fn lacks_trailing_newline(path: &Path) -> io::Result<bool> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };

    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0_u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
