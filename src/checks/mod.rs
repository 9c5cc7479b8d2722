//! Rule checkers.
//!
//! Each checker is a pure function returning at most one diagnostic and
//! consults the suppression list before looking at the input.
//!
//! - `termination`: E001, works on whole lines.
//! - `keyword`: E002, works on statements.
//! - `arity`: E003, works on statements.

pub mod arity;
pub mod keyword;
pub mod termination;

pub use arity::check_arity;
pub use keyword::check_keyword;
pub use termination::check_termination;

use crate::models::Diagnostic;
use crate::statement::Statement;
use crate::suppress::Suppressions;

/// Run every statement-level checker against `st`.
pub fn run_statement_checks(st: &Statement<'_>, ignore: &Suppressions) -> Vec<Diagnostic> {
    [check_keyword(st, ignore), check_arity(st, ignore)]
        .into_iter()
        .flatten()
        .collect()
}
