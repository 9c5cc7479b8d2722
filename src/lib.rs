//! cxlint core library.
//!
//! This crate exposes programmatic APIs for linting CX Setup scripts:
//! statements of the form `KEYWORD ?? arg ?? arg;`.
//!
//! High-level modules:
//! - `keywords`: Bare keyword table with accepted argument counts.
//! - `statement`: Line and statement splitting.
//! - `models`: Diagnostic record, rule codes and lint output structs.
//! - `checks`: Rule checkers (E001 termination, E002 keyword, E003 arity).
//! - `suppress`: Per-run rule suppression.
//! - `lint`: Entry points over lines, sources and files.
//! - `config`: Discovery and effective configuration resolution.
//! - `output`: Human/plain/JSON/tuple printers.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `error`: Operational error types.
//! - `utils`: Supporting helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod keywords;
pub mod lint;
pub mod models;
pub mod output;
pub mod statement;
pub mod suppress;
pub mod utils;

pub use lint::{lint, lint_source};
pub use models::{Code, Diagnostic, Severity};
pub use suppress::Suppressions;
