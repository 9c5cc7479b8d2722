//! E003: the argument count must match one of the keyword's overloads.
//!
//! An unknown keyword is reported here too, as a missing overload. E002
//! reports it separately; neither rule suppresses the other.

use crate::keywords::{self, Arity};
use crate::models::{Code, Diagnostic};
use crate::statement::Statement;
use crate::suppress::Suppressions;

pub fn check_arity(st: &Statement<'_>, ignore: &Suppressions) -> Option<Diagnostic> {
    if ignore.is_suppressed(Code::E003) || st.is_marker() {
        return None;
    }
    let func = keywords::strip_sigil(st.operator);
    let count = st.arguments.len();
    let message = match keywords::lookup(func) {
        None => format!(
            "Couldn't find an overload of {} that takes {} arguments",
            func, count
        ),
        Some(Arity::Variadic) => return None,
        Some(arity) if arity.accepts(count) => return None,
        Some(_) => format!("No overload of {} takes {} arguments", func, count),
    };
    Some(Diagnostic::error(st.line, Some(st.index), Code::E003, message))
}
