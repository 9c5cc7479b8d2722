//! Output rendering for lint results, rule codes and the keyword table.
//!
//! Lint supports `human` (default, colored), `plain`, `json` and `tuple`.
//! The JSON form includes per-file diagnostics and a top-level summary.

use crate::config::OutputMode;
use crate::error::LintError;
use crate::keywords::KEYWORDS;
use crate::models::{Code, Diagnostic, Hint, LintResult};
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: OutputMode) -> bool {
    output == OutputMode::Human && utils::colors_enabled()
}

/// Print lint results in the requested format, then any operational errors
/// on stderr.
pub fn print_lint(res: &LintResult, output: OutputMode, errors: &[LintError]) {
    for e in errors {
        eprintln!("{} {}", utils::error_prefix(), e);
    }
    match output {
        OutputMode::Json => println!("{:#}", compose_lint_json(res)),
        OutputMode::Tuple => {
            for r in &res.results {
                for d in &r.diagnostics {
                    println!("{}", render_tuple(d));
                }
            }
        }
        OutputMode::Plain => {
            for r in &res.results {
                for d in &r.diagnostics {
                    println!("{}: {}", r.file, d);
                }
            }
        }
        OutputMode::Human => {
            let color = use_colors(output);
            for r in res.results.iter().filter(|r| !r.diagnostics.is_empty()) {
                if color {
                    println!("{}", r.file.bold());
                } else {
                    println!("{}", r.file);
                }
                for d in &r.diagnostics {
                    if color {
                        println!("  {}", render_pretty(d));
                    } else {
                        println!("  {}", d);
                    }
                }
            }
            let summary = format!(
                "— Summary — errors={} warnings={} infos={} files={}",
                res.summary.errors, res.summary.warnings, res.summary.infos, res.summary.files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Colored single-line rendering of a diagnostic.
pub fn render_pretty(d: &Diagnostic) -> String {
    let body = format!("{}: {}", d.code, d.message);
    let body = match d.hint {
        Hint::Red => body.red().to_string(),
        Hint::Yellow => body.yellow().to_string(),
        Hint::Blue => body.blue().to_string(),
    };
    format!(
        "{} Line {}: Global Statement {}: {}",
        "[LINT]".bright_white(),
        d.line.magenta(),
        d.statement_number().magenta(),
        body
    )
}

/// Tuple rendering: `(line, statement, "code", "message", severity)`.
pub fn render_tuple(d: &Diagnostic) -> String {
    format!("{:?}", d.as_tuple())
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> JsonVal {
    serde_json::to_value(res).unwrap_or(JsonVal::Null)
}

/// Print every rule code with its title.
pub fn print_codes() {
    for code in Code::ALL {
        println!("{}  {}", code, code.title());
    }
}

/// Print the catalog entry for one rule.
pub fn print_explain(code: Code) {
    let color = utils::colors_enabled();
    let head = format!("{} - {}", code, code.title());
    if color {
        println!("{}", head.bold());
    } else {
        println!("{}", head);
    }
    if !code.example().is_empty() {
        println!("\nExample:\n  {}", code.example());
    }
    println!("\n{}", code.help());
}

/// Print the keyword table with accepted argument counts.
pub fn print_keywords() {
    let width = KEYWORDS.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (name, arity) in KEYWORDS {
        println!("{:<width$}  {}", name, arity, width = width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileReport;

    fn result() -> LintResult {
        LintResult::from_reports(vec![FileReport {
            file: "setup.cxsetup".into(),
            diagnostics: vec![
                Diagnostic::error(1, None, Code::E001, "Missing semicolon at the end of the line".into()),
                Diagnostic::error(2, Some(3), Code::E002, "Unknown Keyword FOO".into()),
            ],
        }])
    }

    #[test]
    fn test_compose_lint_json_shape() {
        let out = compose_lint_json(&result());
        assert_eq!(out["summary"]["errors"], 2);
        assert_eq!(out["summary"]["files"], 1);
        assert_eq!(out["results"][0]["file"], "setup.cxsetup");
        let first = &out["results"][0]["diagnostics"][0];
        assert_eq!(first["statement"], -1);
        assert_eq!(first["code"], "E001");
        assert_eq!(first["severity"], 3);
        assert!(first.get("hint").is_none());
    }

    #[test]
    fn test_render_tuple() {
        let res = result();
        assert_eq!(
            render_tuple(&res.results[0].diagnostics[1]),
            r#"(2, 3, "E002", "Unknown Keyword FOO", 3)"#
        );
    }

    #[test]
    fn test_render_pretty_keeps_plain_text() {
        let res = result();
        let d = &res.results[0].diagnostics[1];
        let pretty = render_pretty(d);
        assert!(pretty.contains("E002: Unknown Keyword FOO"));
        assert!(pretty.contains("Global Statement"));
    }
}
