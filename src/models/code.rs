//! Rule codes and the catalog shown by `cxlint explain`.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// Stable identifier of the rule that produced a diagnostic.
pub enum Code {
    E001,
    E002,
    E003,
    /// Reserved for variable validity; no checker emits it yet.
    E004,
}

impl Code {
    pub const ALL: [Code; 4] = [Code::E001, Code::E002, Code::E003, Code::E004];

    pub fn as_str(self) -> &'static str {
        match self {
            Code::E001 => "E001",
            Code::E002 => "E002",
            Code::E003 => "E003",
            Code::E004 => "E004",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Code::E001 => "Missing semicolon at the end of the line",
            Code::E002 => "Unknown keyword",
            Code::E003 => "Too many or too few arguments",
            Code::E004 => "Invalid CX variable (reserved)",
        }
    }

    /// Offending snippet used by `explain`.
    pub fn example(self) -> &'static str {
        match self {
            Code::E001 => "COUT ?? 42",
            Code::E002 => "FOOBAR ?? \"Hello!\";",
            Code::E003 => "SET ?? 42 ?? 50;",
            Code::E004 => "",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Code::E001 => "End the statement with `;`, e.g. `COUT ?? 42;`. Lines containing `//` are not checked.",
            Code::E002 => "`FOOBAR` is not a recognized keyword. Sigils (`&`, `!`, `+`) do not change a keyword's identity.",
            Code::E003 => "SET has no overload that takes 2 arguments. Run `cxlint keywords` to list accepted counts.",
            Code::E004 => "This rule is reserved and currently never reported.",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule code '{0}' (expected one of E001, E002, E003, E004)")]
pub struct UnknownCode(pub String);

impl FromStr for Code {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Code::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(t))
            .ok_or_else(|| UnknownCode(t.to_string()))
    }
}
