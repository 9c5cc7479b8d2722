//! Per-run rule suppression.

use crate::models::code::{Code, UnknownCode};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Rule codes to skip for the current run.
pub struct Suppressions(BTreeSet<Code>);

impl Suppressions {
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse codes such as `["E001", "e003"]`. Comma-separated entries are
    /// accepted too (`"E001,E002"`).
    pub fn parse<I, S>(codes: I) -> Result<Self, UnknownCode>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: BTreeSet<Code> = BTreeSet::new();
        for entry in codes {
            for tok in entry.as_ref().split(',').filter(|t| !t.trim().is_empty()) {
                set.insert(tok.parse::<Code>()?);
            }
        }
        Ok(Suppressions(set))
    }

    pub fn is_suppressed(&self, code: Code) -> bool {
        self.0.contains(&code)
    }

    /// Union with `other` (config codes plus CLI codes).
    pub fn merged(mut self, other: Suppressions) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = Code> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Code> for Suppressions {
    fn from_iter<T: IntoIterator<Item = Code>>(iter: T) -> Self {
        Suppressions(iter.into_iter().collect())
    }
}
