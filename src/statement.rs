//! Statement splitting for CX Setup source.
//!
//! A line is truncated at the first `//`, then cut into statements at `;`
//! (outside double quotes). Each statement is cut into fields at every `??`,
//! quoted or not; the first field is the operator, the rest are positional
//! arguments.

use regex::Regex;
use std::sync::LazyLock;

/// Statement terminator.
pub const TERMINATOR: char = ';';
/// Argument separator.
pub const SEPARATOR: &str = "??";
/// Line comment marker.
pub const COMMENT: &str = "//";

static INTEGER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+$").expect("integer pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
/// One command invocation as written in the source.
pub struct Statement<'a> {
    /// Untrimmed source slice, including the terminator when present.
    pub raw: &'a str,
    /// Operator field, trimmed and without terminator. May carry a sigil.
    pub operator: &'a str,
    /// Trimmed argument fields in source order.
    pub arguments: Vec<&'a str>,
    /// 1-based source line.
    pub line: usize,
    /// 1-based global statement number.
    pub index: usize,
}

impl<'a> Statement<'a> {
    /// Split one statement's text into operator and arguments.
    pub fn parse(raw: &'a str, line: usize, index: usize) -> Self {
        let body = strip_comment(raw).trim_end();
        let body = body.strip_suffix(TERMINATOR).unwrap_or(body);
        let mut fields = body.split(SEPARATOR).map(str::trim);
        let operator = fields.next().unwrap_or("");
        Statement {
            raw,
            operator,
            arguments: fields.collect(),
            line,
            index,
        }
    }

    /// Whether this statement is the line-1 ordering marker.
    pub fn is_marker(&self) -> bool {
        is_ordering_marker(self.raw, self.line)
    }
}

/// A bare integer on line 1 is an ordering marker, not a statement.
pub fn is_ordering_marker(text: &str, line: usize) -> bool {
    line == 1 && INTEGER_PATTERN.is_match(text.trim())
}

/// The part of `line` before the first comment marker.
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(at) => &line[..at],
        None => line,
    }
}

/// Cut one line into statement slices. Each keeps its terminator;
/// whitespace-only pieces are dropped.
pub fn split_line(line: &str) -> Vec<&str> {
    let code = strip_comment(line);
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_quote = false;
    for (i, ch) in code.char_indices() {
        match ch {
            '"' => in_quote = !in_quote,
            TERMINATOR if !in_quote => {
                out.push(&code[start..=i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(&code[start..]);
    out.retain(|s| !s.trim().is_empty());
    out
}

/// Split every line of `lines` into statements, numbering them globally.
pub fn split_source<'a, I>(lines: I) -> Vec<Statement<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut statements = Vec::new();
    for (lineno, line) in lines.into_iter().enumerate() {
        for raw in split_line(line) {
            let index = statements.len() + 1;
            statements.push(Statement::parse(raw, lineno + 1, index));
        }
    }
    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operator_and_arguments() {
        let st = Statement::parse("COUT ?? \"Hello\" ?? \"World\";", 3, 7);
        assert_eq!(st.operator, "COUT");
        assert_eq!(st.arguments, vec!["\"Hello\"", "\"World\""]);
        assert_eq!((st.line, st.index), (3, 7));
    }

    #[test]
    fn test_parse_terminator_on_operator() {
        let st = Statement::parse("ENDL;", 1, 1);
        assert_eq!(st.operator, "ENDL");
        assert!(st.arguments.is_empty());
    }

    #[test]
    fn test_parse_keeps_sigil_and_empty_fields() {
        let st = Statement::parse("  &SET ?? ;", 1, 1);
        assert_eq!(st.operator, "&SET");
        assert_eq!(st.arguments, vec![""]);
    }

    #[test]
    fn test_comment_text_is_never_an_argument() {
        let st = Statement::parse("SET ?? 1 // ?? 2 ?? 3", 2, 1);
        assert_eq!(st.arguments, vec!["1"]);
    }

    #[test]
    fn test_separator_splits_even_inside_quotes() {
        let st = Statement::parse("SET ?? \"a ?? b\";", 1, 1);
        assert_eq!(st.operator, "SET");
        assert_eq!(st.arguments, vec!["\"a", "b\""]);
    }

    #[test]
    fn test_parse_total_on_odd_input() {
        for raw in ["", ";", "&", "??", "?? ??;", "\"", "é??ü"] {
            let st = Statement::parse(raw, 1, 1);
            assert!(st.arguments.len() <= 2, "{raw:?}");
        }
    }

    #[test]
    fn test_split_line_multiple_statements() {
        let parts = split_line("SET ?? 1; COUT ?? \"a;b\";  ENDL; // trailing; text");
        assert_eq!(parts, vec!["SET ?? 1;", " COUT ?? \"a;b\";", "  ENDL;"]);
    }

    #[test]
    fn test_split_line_unterminated_tail() {
        assert_eq!(split_line("ENDL; COUT"), vec!["ENDL;", " COUT"]);
        assert!(split_line("   ").is_empty());
        assert!(split_line("// only a comment").is_empty());
    }

    #[test]
    fn test_split_source_numbers_globally() {
        let sts = split_source(["SET ?? 1; ENDL;", "", "COUT;"]);
        let coords: Vec<_> = sts.iter().map(|s| (s.line, s.index)).collect();
        assert_eq!(coords, vec![(1, 1), (1, 2), (3, 3)]);
    }

    #[test]
    fn test_ordering_marker_only_on_first_line() {
        assert!(is_ordering_marker("42", 1));
        assert!(is_ordering_marker(" 7 ", 1));
        assert!(!is_ordering_marker("42", 2));
        assert!(!is_ordering_marker("42;", 1));
        assert!(!is_ordering_marker("", 1));
        assert!(Statement::parse("100", 1, 1).is_marker());
    }
}
