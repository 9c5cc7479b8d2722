//! E002: the operator must be a known keyword.

use crate::keywords;
use crate::models::{Code, Diagnostic};
use crate::statement::Statement;
use crate::suppress::Suppressions;

pub fn check_keyword(st: &Statement<'_>, ignore: &Suppressions) -> Option<Diagnostic> {
    if ignore.is_suppressed(Code::E002) || st.is_marker() {
        return None;
    }
    if keywords::is_recognized(st.operator) {
        return None;
    }
    Some(Diagnostic::error(
        st.line,
        Some(st.index),
        Code::E002,
        format!("Unknown Keyword {}", st.operator),
    ))
}
