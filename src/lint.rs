//! Lint runner.
//!
//! `lint` checks one source (already split into lines). `run_lint` lints
//! many files in parallel and returns a `LintResult` ordered by file, then
//! by line, statement and rule code.

use crate::checks::{check_termination, run_statement_checks};
use crate::config::DEFAULT_PATTERN;
use crate::error::LintError;
use crate::models::{Diagnostic, FileReport, LintResult};
use crate::statement::split_source;
use crate::suppress::Suppressions;
use glob::glob;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Lint a sequence of source lines.
///
/// Line-level rules see every line; statement-level rules see every
/// statement with its 1-based line and global statement number.
pub fn lint<'a, I>(source_lines: I, ignore: &Suppressions) -> Vec<Diagnostic>
where
    I: IntoIterator<Item = &'a str>,
{
    let lines: Vec<&str> = source_lines.into_iter().collect();
    let mut out: Vec<Diagnostic> = lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| check_termination(line, i + 1, ignore))
        .collect();
    for st in split_source(lines.iter().copied()) {
        out.extend(run_statement_checks(&st, ignore));
    }
    out.sort_by_key(Diagnostic::sort_key);
    out
}

/// Lint a whole source text.
pub fn lint_source(source: &str, ignore: &Suppressions) -> Vec<Diagnostic> {
    lint(source.lines(), ignore)
}

/// Expand CLI paths (files, directories or globs) into lint targets. With no
/// paths, `patterns` are expanded relative to `root`.
pub fn collect_targets(
    root: &Path,
    paths: &[String],
    patterns: &[String],
) -> (Vec<PathBuf>, Vec<LintError>) {
    let mut globs: Vec<String> = Vec::new();
    let mut targets: BTreeSet<PathBuf> = BTreeSet::new();
    if paths.is_empty() {
        for pat in patterns {
            globs.push(root.join(pat).to_string_lossy().to_string());
        }
    }
    for p in paths {
        let path = PathBuf::from(p);
        if path.is_dir() {
            globs.push(path.join(DEFAULT_PATTERN).to_string_lossy().to_string());
        } else if path.is_file() {
            targets.insert(path);
        } else {
            globs.push(p.clone());
        }
    }

    let mut errors = Vec::new();
    for pattern in globs {
        match glob(&pattern) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    if entry.is_file() {
                        targets.insert(entry);
                    }
                }
            }
            Err(source) => errors.push(LintError::Pattern { pattern, source }),
        }
    }
    (targets.into_iter().collect(), errors)
}

/// Lint every target file. Unreadable files are reported as errors and do
/// not stop the run.
pub fn run_lint(
    root: &Path,
    targets: &[PathBuf],
    ignore: &Suppressions,
) -> (LintResult, Vec<LintError>) {
    let per_file: Vec<Result<FileReport, LintError>> = targets
        .par_iter()
        .map(|path| {
            let data = fs::read_to_string(path).map_err(|source| LintError::Read {
                path: path.clone(),
                source,
            })?;
            let diagnostics = lint_source(&data, ignore);
            tracing::debug!(file = %path.display(), found = diagnostics.len(), "linted");
            Ok(FileReport {
                file: display_path(root, path),
                diagnostics,
            })
        })
        .collect();

    let mut reports = Vec::new();
    let mut errors = Vec::new();
    for r in per_file {
        match r {
            Ok(report) => reports.push(report),
            Err(e) => errors.push(e),
        }
    }
    // Deterministic ordering of reports by file
    reports.sort_by(|a, b| a.file.cmp(&b.file));
    (LintResult::from_reports(reports), errors)
}

/// Path relative to `root` when it lives underneath it.
fn display_path(root: &Path, path: &Path) -> String {
    let abs_root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let abs = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    match pathdiff::diff_paths(&abs, &abs_root) {
        Some(rel) if !rel.starts_with("..") => rel.to_string_lossy().to_string(),
        _ => path.to_string_lossy().to_string(),
    }
}
