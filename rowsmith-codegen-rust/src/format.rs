//! Validation and normalisation of rendered source.

use miette::SourceSpan;
use rowsmith_codegen::{Error, Result};

/// Check that `source` parses as a Rust file and normalise its whitespace.
///
/// Trailing whitespace is stripped from every line, runs of blank lines
/// collapse to one and the result ends with exactly one newline. When the
/// source does not parse, the error carries the unformatted buffer and the
/// location reported by the parser.
pub fn format_source(file: &str, source: &str) -> Result<String> {
    if let Err(err) = syn::parse_file(source) {
        let span = error_span(source, &err);
        return Err(Error::format(file, source, span, err.to_string()));
    }
    Ok(normalize(source))
}

fn normalize(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut previous_blank = true;

    for line in source.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            if !previous_blank {
                out.push('\n');
            }
            previous_blank = true;
        } else {
            out.push_str(line);
            out.push('\n');
            previous_blank = false;
        }
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

/// Convert the parser's line/column location to a byte span.
fn error_span(source: &str, err: &syn::Error) -> Option<SourceSpan> {
    let start = err.span().start();
    let end = err.span().end();
    let offset = byte_offset(source, start.line, start.column)?;
    let end = byte_offset(source, end.line, end.column).unwrap_or(offset);
    Some(SourceSpan::from((offset, end.saturating_sub(offset))))
}

/// Byte offset of a 1-based line and 0-based character column.
fn byte_offset(source: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut line_start = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let within = text
                .char_indices()
                .nth(column)
                .map(|(i, _)| i)
                .unwrap_or(text.len());
            return Some(line_start + within);
        }
        line_start += text.len();
    }
    Some(source.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_source_is_normalized() {
        let source = "\n\npub struct A;   \n\n\n\npub struct B;\n\n";
        let formatted = format_source("a.rs", source).unwrap();
        assert_eq!(formatted, "pub struct A;\n\npub struct B;\n");
    }

    #[test]
    fn test_normalize_adds_trailing_newline() {
        assert_eq!(normalize("pub struct A;"), "pub struct A;\n");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_invalid_source_keeps_buffer() {
        let source = "pub struct User {\n    pub id: i32\n    pub name: String,\n}\n";
        let err = format_source("user.table.rs", source).unwrap_err();

        match *err {
            Error::Format {
                ref file,
                ref span,
                ref message,
                ..
            } => {
                assert_eq!(file, "user.table.rs");
                assert!(!message.is_empty());
                let span = span.expect("parse errors carry a location");
                assert!(span.offset() < source.len());
            }
            _ => panic!("Expected Format variant"),
        }
    }

    #[test]
    fn test_byte_offset() {
        let source = "ab\ncd\u{e9}f\n";
        assert_eq!(byte_offset(source, 1, 0), Some(0));
        assert_eq!(byte_offset(source, 2, 1), Some(4));
        assert_eq!(byte_offset(source, 2, 3), Some(7));
        assert_eq!(byte_offset(source, 9, 0), Some(source.len()));
        assert_eq!(byte_offset(source, 0, 0), None);
    }
}
