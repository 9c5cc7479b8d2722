//! E001: a line must end with the statement terminator.
//!
//! Lines containing a comment marker are not checked at all, whatever
//! precedes the marker. Trailing spaces after the terminator are a
//! violation; only a CRLF `\r` is dropped.

use crate::models::{Code, Diagnostic};
use crate::statement::{is_ordering_marker, COMMENT, TERMINATOR};
use crate::suppress::Suppressions;

pub fn check_termination(line: &str, lineno: usize, ignore: &Suppressions) -> Option<Diagnostic> {
    if ignore.is_suppressed(Code::E001) {
        return None;
    }
    let text = line.strip_suffix('\r').unwrap_or(line);
    if text.trim().is_empty() || is_ordering_marker(text, lineno) || text.contains(COMMENT) {
        return None;
    }
    if text.ends_with(TERMINATOR) {
        return None;
    }
    Some(Diagnostic::error(
        lineno,
        None,
        Code::E001,
        "Missing semicolon at the end of the line".to_string(),
    ))
}
