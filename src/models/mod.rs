//! Diagnostic record and lint report models.

pub mod code;

pub use code::Code;

use serde::{Serialize, Serializer};
use serde_json::{json, Value as Json};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
/// Diagnostic severity. Starts at 1; 0 means "nothing to report" and is
/// never carried by a diagnostic.
pub enum Severity {
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl Severity {
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Default display color for this severity.
    pub fn hint(self) -> Hint {
        match self {
            Severity::Error => Hint::Red,
            Severity::Warning => Hint::Yellow,
            Severity::Info => Hint::Blue,
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(self.level())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Display color used by the human printer.
pub enum Hint {
    Red,
    Yellow,
    Blue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One lint violation.
pub struct Diagnostic {
    /// 1-based source line.
    pub line: usize,
    /// 1-based global statement number; `None` when only the line is known.
    #[serde(serialize_with = "serialize_statement")]
    pub statement: Option<usize>,
    pub code: Code,
    pub message: String,
    pub severity: Severity,
    #[serde(skip)]
    pub hint: Hint,
}

fn serialize_statement<S: Serializer>(st: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(statement_number(*st))
}

fn statement_number(st: Option<usize>) -> i64 {
    st.map_or(-1, |n| n as i64)
}

/// Positional projection: (line, statement, code, message, severity).
pub type DiagnosticTuple<'a> = (usize, i64, &'a str, &'a str, u8);

impl Diagnostic {
    pub fn new(
        line: usize,
        statement: Option<usize>,
        code: Code,
        message: String,
        severity: Severity,
    ) -> Self {
        Diagnostic {
            line,
            statement,
            code,
            message,
            severity,
            hint: severity.hint(),
        }
    }

    /// An error-severity diagnostic. Every current rule reports at this level.
    pub fn error(line: usize, statement: Option<usize>, code: Code, message: String) -> Self {
        Self::new(line, statement, code, message, Severity::Error)
    }

    /// Statement number as rendered; `-1` when unknown.
    pub fn statement_number(&self) -> i64 {
        statement_number(self.statement)
    }

    pub fn to_json(&self) -> Json {
        json!({
            "line": self.line,
            "statement": self.statement_number(),
            "code": self.code,
            "message": self.message,
            "severity": self.severity.level(),
        })
    }

    pub fn as_tuple(&self) -> DiagnosticTuple<'_> {
        (
            self.line,
            self.statement_number(),
            self.code.as_str(),
            &self.message,
            self.severity.level(),
        )
    }

    /// Report ordering key: line, then statement, then code.
    pub fn sort_key(&self) -> (usize, Option<usize>, Code) {
        (self.line, self.statement, self.code)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[LINT] Line {}: Global Statement {}: {}: {}",
            self.line,
            self.statement_number(),
            self.code,
            self.message
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Diagnostics for one linted file.
pub struct FileReport {
    pub file: String,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Aggregated lint summary used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub files: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Lint results container.
pub struct LintResult {
    pub results: Vec<FileReport>,
    pub summary: Summary,
}

impl LintResult {
    pub fn from_reports(results: Vec<FileReport>) -> Self {
        let mut summary = Summary {
            files: results.len(),
            ..Summary::default()
        };
        for d in results.iter().flat_map(|r| r.diagnostics.iter()) {
            match d.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Info => summary.infos += 1,
            }
        }
        LintResult { results, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diagnostic {
        Diagnostic::error(
            4,
            Some(9),
            Code::E003,
            "No overload of SET takes 2 arguments".into(),
        )
    }

    #[test]
    fn test_display_line() {
        assert_eq!(
            sample().to_string(),
            "[LINT] Line 4: Global Statement 9: E003: No overload of SET takes 2 arguments"
        );
    }

    #[test]
    fn test_projections_agree() {
        let d = sample();
        let j = d.to_json();
        let t = d.as_tuple();
        assert_eq!(j["line"], t.0);
        assert_eq!(j["statement"], t.1);
        assert_eq!(j["code"], t.2);
        assert_eq!(j["message"], t.3);
        assert_eq!(j["severity"], t.4);
        // Derived serialization matches the hand-built mapping.
        assert_eq!(serde_json::to_value(&d).unwrap(), j);
    }

    #[test]
    fn test_unknown_statement_renders_minus_one() {
        let d = Diagnostic::error(2, None, Code::E001, "Missing semicolon at the end of the line".into());
        assert!(d.to_string().contains("Global Statement -1:"));
        assert_eq!(d.to_json()["statement"], -1);
        assert_eq!(d.as_tuple().1, -1);
    }

    #[test]
    fn test_severity_never_zero() {
        for s in [Severity::Info, Severity::Warning, Severity::Error] {
            assert!(s.level() >= 1);
        }
        assert_eq!(sample().severity.level(), 3);
    }

    #[test]
    fn test_sort_key_puts_line_level_first() {
        let line_level = Diagnostic::error(4, None, Code::E001, String::new());
        assert!(line_level.sort_key() < sample().sort_key());
    }

    #[test]
    fn test_new_derives_hint_from_severity() {
        let warn = Diagnostic::new(1, Some(1), Code::E004, "w".into(), Severity::Warning);
        assert_eq!(warn.hint, Hint::Yellow);
        assert_eq!(warn.to_json()["severity"], 2);
        let info = Diagnostic::new(1, Some(1), Code::E004, "i".into(), Severity::Info);
        assert_eq!(info.hint, Hint::Blue);
        assert_eq!(sample().hint, Hint::Red);
    }

    #[test]
    fn test_summary_counts() {
        let res = LintResult::from_reports(vec![
            FileReport {
                file: "a.cxsetup".into(),
                diagnostics: vec![
                    sample(),
                    sample(),
                    Diagnostic::new(5, Some(1), Code::E004, "w".into(), Severity::Warning),
                    Diagnostic::new(6, Some(2), Code::E004, "i".into(), Severity::Info),
                ],
            },
            FileReport {
                file: "b.cxsetup".into(),
                diagnostics: vec![],
            },
        ]);
        assert_eq!(res.summary.errors, 2);
        assert_eq!(res.summary.warnings, 1);
        assert_eq!(res.summary.infos, 1);
        assert_eq!(res.summary.files, 2);
    }
}
