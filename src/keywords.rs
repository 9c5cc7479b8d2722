//! Keyword table: bare CX Setup keywords and their accepted argument counts.
//!
//! Keywords may be written with a leading sigil (`&`, `!`, `+`). Sigils only
//! change presentation/scope, so the table stores bare names and lookups
//! strip the sigil first.

use std::fmt;

/// Leading characters that may prefix a keyword without changing its identity.
pub const SIGILS: [char; 3] = ['&', '!', '+'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Accepted argument counts for a keyword.
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any of these counts (overloads). Never empty.
    OneOf(&'static [usize]),
    /// Any count, including zero.
    Variadic,
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => n == count,
            Arity::OneOf(counts) => counts.contains(&count),
            Arity::Variadic => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::OneOf(counts) => {
                let joined: Vec<String> = counts.iter().map(|c| c.to_string()).collect();
                write!(f, "{{{}}}", joined.join(", "))
            }
            Arity::Variadic => f.write_str("variadic"),
        }
    }
}

/// Sorted by name; `lookup` relies on it for binary search.
pub const KEYWORDS: &[(&str, Arity)] = &[
    ("ABS", Arity::Exact(1)),
    ("BACK", Arity::Exact(1)),
    ("CIN", Arity::OneOf(&[0, 1, 2])),
    ("CLEAR", Arity::Exact(1)),
    ("COUT", Arity::Variadic),
    ("DIR.EXISTS", Arity::Exact(1)),
    ("DIV", Arity::Exact(2)),
    ("ECHO", Arity::Exact(2)),
    ("ECHORDIE", Arity::Exact(2)),
    ("ENDL", Arity::Exact(0)),
    ("ENDL2", Arity::Exact(0)),
    ("FILE.EXISTS", Arity::Exact(1)),
    ("FORE", Arity::Exact(1)),
    ("GETPASS", Arity::Exact(1)),
    ("INVERT", Arity::Exact(0)),
    ("NPMRUN", Arity::Variadic),
    ("PATH.EXISTS", Arity::Exact(1)),
    ("PIPRUN", Arity::Variadic),
    ("PKGRUN", Arity::Variadic),
    ("PROD", Arity::Variadic),
    ("REM", Arity::Exact(2)),
    ("REQINSTALL", Arity::Exact(0)),
    ("REQUIRES", Arity::Exact(2)),
    ("RESET", Arity::Exact(0)),
    ("ROUND", Arity::Exact(2)),
    ("RUN", Arity::Variadic),
    ("SAFECIN", Arity::OneOf(&[1, 2])),
    ("SET", Arity::Exact(1)),
    ("STYLE", Arity::Exact(1)),
    ("SUB", Arity::Exact(2)),
    ("SUM", Arity::Variadic),
    ("TERMINATE", Arity::OneOf(&[0, 1, 2])),
    ("YAYORNAY", Arity::Exact(0)),
];

/// Look up a bare keyword (no sigil).
pub fn lookup(bare: &str) -> Option<Arity> {
    KEYWORDS
        .binary_search_by(|(name, _)| (*name).cmp(bare))
        .ok()
        .map(|i| KEYWORDS[i].1)
}

/// Strip one leading sigil, if present.
pub fn strip_sigil(operator: &str) -> &str {
    operator.strip_prefix(SIGILS).unwrap_or(operator)
}

/// Whether `operator` (optionally sigil-prefixed) names a known keyword.
pub fn is_recognized(operator: &str) -> bool {
    lookup(strip_sigil(operator)).is_some()
}
