//! Content line folding and payload wrapping.

use vcardlib_core::constants::{BASE64_LINE_WIDTH, MAX_LINE_OCTETS, QUOTED_PRINTABLE_LINE_WIDTH};

/// Folds a line to the maximum length.
///
/// Lines longer than 75 octets are folded by inserting the line ending
/// followed by a space. Folds at UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str, line_ending: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();

        if current_len + char_len > MAX_LINE_OCTETS {
            result.push_str(line_ending);
            result.push(' ');
            current_len = 1;
        }

        result.push(c);
        current_len += char_len;
    }

    result
}

/// Wraps a quoted-printable line with `=` soft breaks.
///
/// `prefix` is the property name and parameters up to and including `:`.
/// Escape triplets (`=XX`) are never split.
#[must_use]
pub fn wrap_quoted_printable(prefix: &str, encoded: &str, line_ending: &str) -> String {
    // One column is reserved for the soft break marker.
    let max = QUOTED_PRINTABLE_LINE_WIDTH - 1;
    let mut result = String::from(prefix);
    let mut width = prefix.len();
    let mut rest = encoded;

    while !rest.is_empty() {
        let unit = if rest.starts_with('=') {
            rest.len().min(3)
        } else {
            rest.chars().next().map_or(1, char::len_utf8)
        };

        if width + unit > max {
            result.push('=');
            result.push_str(line_ending);
            width = 0;
        }

        result.push_str(&rest[..unit]);
        width += unit;
        rest = &rest[unit..];
    }

    result
}

/// Wraps a 2.1 base64 payload onto space-indented continuation lines.
#[must_use]
pub fn wrap_base64(prefix: &str, encoded: &str, line_ending: &str) -> String {
    let chunk_len = BASE64_LINE_WIDTH - 1;
    let mut result = String::from(prefix);

    for chunk in encoded.as_bytes().chunks(chunk_len) {
        result.push_str(line_ending);
        result.push(' ');
        result.push_str(&String::from_utf8_lossy(chunk));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_unchanged() {
        let line = "FN:John Doe";
        assert_eq!(fold_line(line, "\r\n"), line);
    }

    #[test]
    fn fold_at_75_octets() {
        let line = "X".repeat(80);
        let folded = fold_line(&line, "\r\n");
        assert!(folded.contains("\r\n "));

        let first_line: String = folded.chars().take_while(|&c| c != '\r').collect();
        assert_eq!(first_line.len(), 75);
    }

    #[test]
    fn fold_respects_utf8() {
        // 日 is 3 bytes in UTF-8
        let line = format!("NOTE:{}", "日".repeat(30));
        let folded = fold_line(&line, "\n");

        for part in folded.split("\n ") {
            assert!(part.len() <= 75);
            assert!(part.is_char_boundary(part.len()));
        }
        assert_eq!(folded.replace("\n ", ""), line);
    }

    #[test]
    fn fold_multiple_times() {
        let line = "X".repeat(200);
        let folded = fold_line(&line, "\r\n");
        assert!(folded.matches("\r\n ").count() >= 2);
        for part in folded.split("\r\n") {
            assert!(part.len() <= 75);
        }
    }

    #[test]
    fn quoted_printable_soft_breaks() {
        let encoded = "=C3=B6".repeat(30);
        let wrapped = wrap_quoted_printable("NOTE;ENCODING=QUOTED-PRINTABLE:", &encoded, "\r\n");
        let lines: Vec<&str> = wrapped.split("\r\n").collect();

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 76, "{line}");
        }
        for line in &lines[..lines.len() - 1] {
            assert!(line.ends_with('='));
        }

        let rejoined: String = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i + 1 < lines.len() {
                    &line[..line.len() - 1]
                } else {
                    *line
                }
            })
            .collect();
        assert_eq!(rejoined, format!("NOTE;ENCODING=QUOTED-PRINTABLE:{encoded}"));
    }

    #[test]
    fn base64_continuation_lines() {
        let encoded = "A".repeat(200);
        let wrapped = wrap_base64("PHOTO;ENCODING=BASE64:", &encoded, "\r\n");
        let lines: Vec<&str> = wrapped.split("\r\n").collect();

        assert_eq!(lines[0], "PHOTO;ENCODING=BASE64:");
        assert_eq!(lines.len(), 4);
        for line in &lines[1..] {
            assert!(line.starts_with(' '));
            assert!(line.len() <= 76);
        }
    }
}
