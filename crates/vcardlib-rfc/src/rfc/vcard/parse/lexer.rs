//! Physical lines to logical lines, and logical lines to content lines.
//!
//! Folded lines are kept as separate segments until the record's version is
//! known, because 2.1 and 3.0 disagree on whether the fold whitespace is part
//! of the value. Quoted-printable soft breaks are joined eagerly.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::{VCardParameter, param_names};

/// How the whitespace that starts a continuation line is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unfold {
    /// The whitespace character is kept (2.1).
    KeepWhitespace,
    /// One leading whitespace character is removed (3.0).
    StripOne,
}

/// A logical line made of one or more physical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Physical line number (1-based) of the first segment.
    pub number: usize,
    first: String,
    continuations: Vec<String>,
}

impl LogicalLine {
    fn new(number: usize, text: &str) -> Self {
        Self {
            number,
            first: text.to_string(),
            continuations: Vec::new(),
        }
    }

    /// The first physical line, before any continuation is applied.
    #[must_use]
    pub fn head(&self) -> &str {
        &self.first
    }

    /// Returns the logical line text with continuations joined.
    #[must_use]
    pub fn unfold(&self, mode: Unfold) -> String {
        let mut result = self.first.clone();
        for segment in &self.continuations {
            match mode {
                Unfold::KeepWhitespace => result.push_str(segment),
                Unfold::StripOne => {
                    let mut chars = segment.chars();
                    chars.next();
                    result.push_str(chars.as_str());
                }
            }
        }
        result
    }

    fn last_segment_mut(&mut self) -> &mut String {
        self.continuations.last_mut().unwrap_or(&mut self.first)
    }

    fn is_quoted_printable(&self) -> bool {
        let head = self.first.split(':').next().unwrap_or_default();
        head.to_ascii_uppercase().contains("QUOTED-PRINTABLE")
    }

    /// Whether the next physical line continues a quoted-printable value.
    fn awaits_soft_break(&self) -> bool {
        let last = self.continuations.last().unwrap_or(&self.first);
        last.ends_with('=') && self.is_quoted_printable()
    }
}

/// Splits input into logical lines.
///
/// Accepts CRLF and bare LF. Blank lines are dropped unless they complete a
/// quoted-printable soft break.
#[must_use]
pub fn split_lines(input: &str) -> Vec<LogicalLine> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut lines: Vec<LogicalLine> = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let number = index + 1;

        if let Some(prev) = lines.last_mut()
            && prev.awaits_soft_break()
        {
            let segment = prev.last_segment_mut();
            segment.pop();
            segment.push_str(line);
            continue;
        }

        if line.is_empty() {
            continue;
        }

        if line.starts_with([' ', '\t']) {
            if let Some(prev) = lines.last_mut() {
                prev.continuations.push(line.to_string());
            } else {
                let trimmed = line.trim_start_matches([' ', '\t']);
                if !trimmed.is_empty() {
                    lines.push(LogicalLine::new(number, trimmed));
                }
            }
        } else {
            lines.push(LogicalLine::new(number, line));
        }
    }

    lines
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Group prefix such as `item1` in `item1.TEL`. Parsed and then ignored.
    pub group: Option<String>,
    /// Uppercased property name.
    pub name: String,
    /// Parameters, with repeated `TYPE` parameters merged.
    pub params: Vec<VCardParameter>,
    /// Raw value string.
    pub value: String,
}

impl ContentLine {
    /// Returns the named parameter, if present.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&VCardParameter> {
        self.params.iter().find(|p| p.is(name))
    }

    /// Returns the first value of the named parameter.
    #[must_use]
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.param(name).and_then(VCardParameter::value)
    }

    /// All `TYPE` values in order of appearance.
    #[must_use]
    pub fn types(&self) -> &[String] {
        self.param(param_names::TYPE)
            .map(|p| p.values.as_slice())
            .unwrap_or_default()
    }
}

/// Returns the uppercase property name of a raw line without its group, if
/// the line has a value separator.
#[must_use]
pub fn property_name(line: &str) -> Option<String> {
    let colon = find_value_separator(line)?;
    let name_params = &line[..colon];
    let name_part = name_params.split(';').next().unwrap_or_default();
    let (_, name) = parse_group(name_part);
    Some(name.trim().to_ascii_uppercase())
}

/// Parses a single content line into its components.
///
/// Format: `[group.]name[;param[=value]]*:value`
///
/// ## Errors
/// Returns an error if the line is missing the colon separator, has an
/// invalid property name, or has an empty parameter name.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon_pos = find_value_separator(line).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("missing colon separator: {line}"),
        )
    })?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let (name_part, params_str) = match name_params.find(';') {
        Some(semi_pos) => (&name_params[..semi_pos], Some(&name_params[semi_pos + 1..])),
        None => (name_params, None),
    };

    let (group, name) = parse_group(name_part);

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    let params = match params_str {
        Some(params_str) => parse_parameters(params_str, line_num)?,
        None => Vec::new(),
    };

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Quoted parameter values may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    if let Some(dot_pos) = s.find('.') {
        let potential_group = &s[..dot_pos];
        if !potential_group.is_empty()
            && potential_group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(potential_group), &s[dot_pos + 1..]);
        }
    }
    (None, s)
}

/// Splits on `;` outside double quotes.
fn split_params(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Parses the parameter section into parameters.
fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<VCardParameter>> {
    let mut params: Vec<VCardParameter> = Vec::new();

    for raw in split_params(s) {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let param = match raw.split_once('=') {
            Some((name, values)) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(ParseError::new(
                        ParseErrorKind::InvalidParameter,
                        line_num,
                        format!("parameter without a name: {raw}"),
                    ));
                }
                VCardParameter::keyed(name, parse_param_values(values))
            }
            None => VCardParameter::bare(raw),
        };

        if param.is(param_names::TYPE)
            && let Some(existing) = params.iter_mut().find(|p| p.is(param_names::TYPE))
        {
            existing.values.extend(param.values);
        } else {
            params.push(param);
        }
    }

    Ok(params)
}

/// Parses comma-separated parameter values, removing surrounding quotes.
fn parse_param_values(s: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in s.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    values.push(current);

    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_filters_empty() {
        let lines = split_lines("LINE1\r\n\r\nLINE2\n");
        let heads: Vec<&str> = lines.iter().map(LogicalLine::head).collect();
        assert_eq!(heads, vec!["LINE1", "LINE2"]);
        assert_eq!(lines[1].number, 3);
    }

    #[test]
    fn unfold_strip_one() {
        let lines = split_lines("FN:John\r\n  Doe");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].unfold(Unfold::StripOne), "FN:John Doe");
    }

    #[test]
    fn unfold_keep_whitespace() {
        let lines = split_lines("FN:John\n\tDoe");
        assert_eq!(lines[0].unfold(Unfold::KeepWhitespace), "FN:John\tDoe");
        assert_eq!(lines[0].unfold(Unfold::StripOne), "FN:JohnDoe");
    }

    #[test]
    fn quoted_printable_soft_break() {
        let input = "LABEL;ENCODING=QUOTED-PRINTABLE:100 Waters Edge=0D=0A=\r\nBaytown, LA=\r\n\r\nFN:x";
        let lines = split_lines(input);
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0].unfold(Unfold::StripOne),
            "LABEL;ENCODING=QUOTED-PRINTABLE:100 Waters Edge=0D=0ABaytown, LA"
        );
        assert_eq!(lines[1].head(), "FN:x");
    }

    #[test]
    fn trailing_equals_without_quoted_printable_is_literal() {
        let lines = split_lines("NOTE:a=\r\nFN:x");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let lines = split_lines("\u{feff}BEGIN:VCARD");
        assert_eq!(lines[0].head(), "BEGIN:VCARD");
    }

    #[test]
    fn parse_simple_line() {
        let line = parse_content_line("FN:John Doe", 1).unwrap();
        assert!(line.group.is_none());
        assert_eq!(line.name, "FN");
        assert!(line.params.is_empty());
        assert_eq!(line.value, "John Doe");
    }

    #[test]
    fn parse_grouped_line() {
        let line = parse_content_line("item1.tel:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.group, Some("item1".to_string()));
        assert_eq!(line.name, "TEL");
    }

    #[test]
    fn bare_tokens_become_type_and_encoding() {
        let line = parse_content_line("PHOTO;JPEG;BASE64:AAAA", 1).unwrap();
        assert_eq!(line.types(), ["JPEG".to_string()]);
        assert_eq!(line.param_value("encoding"), Some("BASE64"));
    }

    #[test]
    fn type_parameters_are_merged() {
        let line = parse_content_line("TEL;WORK;TYPE=voice,pref;TYPE=fax:1", 1).unwrap();
        assert_eq!(line.params.len(), 1);
        assert_eq!(line.types(), ["WORK", "voice", "pref", "fax"]);
    }

    #[test]
    fn dotted_parameter_value_is_not_a_group() {
        let line = parse_content_line("PHOTO;VALUE=uri;TYPE=image/jpeg:http://a.b/c.jpg", 1)
            .unwrap();
        assert!(line.group.is_none());
        assert_eq!(line.name, "PHOTO");
        assert_eq!(line.value, "http://a.b/c.jpg");
    }

    #[test]
    fn parse_colon_in_value() {
        let line = parse_content_line("URL:https://example.com:8080/path", 1).unwrap();
        assert_eq!(line.value, "https://example.com:8080/path");
    }

    #[test]
    fn quoted_parameter_may_hold_colon() {
        let line = parse_content_line("ADR;LABEL=\"a:b\":;;x", 1).unwrap();
        assert_eq!(line.param_value("LABEL"), Some("a:b"));
        assert_eq!(line.value, ";;x");
    }

    #[test]
    fn missing_colon_is_error() {
        let err = parse_content_line("FN John", 4).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidPropertyName);
        assert_eq!(err.line, 4);
    }

    #[test]
    fn invalid_name_is_error() {
        let err = parse_content_line("F N:John", 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidPropertyName);
    }

    #[test]
    fn empty_parameter_name_is_error() {
        let err = parse_content_line("TEL;=x:1", 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidParameter);
    }

    #[test]
    fn property_name_of_raw_line() {
        assert_eq!(property_name("item1.Version:3.0").as_deref(), Some("VERSION"));
        assert_eq!(property_name("no colon"), None);
    }
}
