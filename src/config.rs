//! Configuration discovery and effective settings resolution.
//!
//! cxlint reads `cxlint.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `ignore`: none
//! - `output`: `human`
//! - `patterns`: `["**/*.cxsetup"]`
//!
//! Overrides precedence: CLI > config file > defaults. Ignored codes from the
//! CLI are added to the configured ones.

use crate::error::ConfigError;
use crate::suppress::Suppressions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILES: [&str; 3] = ["cxlint.toml", "cxlint.yaml", "cxlint.yml"];
pub const DEFAULT_PATTERN: &str = "**/*.cxsetup";

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `cxlint.toml|yaml`.
pub struct CxlintConfig {
    #[serde(default)]
    pub ignore: Vec<String>,
    pub output: Option<String>,
    pub patterns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Plain,
    Json,
    Tuple,
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputMode::Human),
            "plain" => Ok(OutputMode::Plain),
            "json" => Ok(OutputMode::Json),
            "tuple" => Ok(OutputMode::Tuple),
            _ => Err(ConfigError::UnknownOutput(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    /// Path of the config file that was loaded, if any.
    pub config_path: Option<PathBuf>,
    pub ignore: Suppressions,
    pub output: OutputMode,
    pub patterns: Vec<String>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `cxlint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `CxlintConfig` from the first config file present under `root`.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, CxlintConfig)>, ConfigError> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let cfg = if name.ends_with(".toml") {
            toml::from_str(&s).map_err(|source| ConfigError::Toml {
                path: path.clone(),
                source,
            })?
        } else {
            serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml {
                path: path.clone(),
                source,
            })?
        };
        return Ok(Some((path, cfg)));
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_ignore: &[String],
    cli_output: Option<&str>,
) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let (config_path, cfg) = match load_config(&repo_root)? {
        Some((p, c)) => (Some(p), c),
        None => (None, CxlintConfig::default()),
    };
    tracing::debug!(root = %repo_root.display(), config = ?config_path, "resolved repo root");

    let ignore = Suppressions::parse(&cfg.ignore)?.merged(Suppressions::parse(cli_ignore)?);
    let output = cli_output
        .map(str::to_string)
        .or(cfg.output)
        .map(|s| s.parse::<OutputMode>())
        .transpose()?
        .unwrap_or(OutputMode::Human);
    let patterns = cfg
        .patterns
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| vec![DEFAULT_PATTERN.to_string()]);

    Ok(Effective {
        repo_root,
        config_path,
        ignore,
        output,
        patterns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Code;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(dir.path().to_str(), &[], None).unwrap();
        assert!(eff.config_path.is_none());
        assert_eq!(eff.output, OutputMode::Human);
        assert_eq!(eff.patterns, vec![DEFAULT_PATTERN.to_string()]);
        assert_eq!(eff.ignore, Suppressions::none());
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("cxlint.toml"),
            r#"
ignore = ["E001"]
output = "json"
patterns = ["setup/*.cxsetup"]
"#,
        )
        .unwrap();
        let nested = root.join("setup/deep");
        fs::create_dir_all(&nested).unwrap();

        // Discovery walks up from a nested directory.
        let eff = resolve_effective(nested.to_str(), &[], None).unwrap();
        assert_eq!(eff.repo_root, root);
        assert_eq!(eff.output, OutputMode::Json);
        assert_eq!(eff.patterns, vec!["setup/*.cxsetup".to_string()]);
        assert!(eff.ignore.is_suppressed(Code::E001));
    }

    #[test]
    fn test_load_yaml_and_cli_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("cxlint.yaml"),
            "ignore:\n  - E002\noutput: plain\n",
        )
        .unwrap();
        let eff = resolve_effective(root.to_str(), &["E003".to_string()], Some("tuple")).unwrap();
        assert_eq!(eff.output, OutputMode::Tuple);
        assert!(eff.ignore.is_suppressed(Code::E002));
        assert!(eff.ignore.is_suppressed(Code::E003));
        assert!(!eff.ignore.is_suppressed(Code::E001));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("cxlint.toml"), "ignore = [").unwrap();
        let err = resolve_effective(dir.path().to_str(), &[], None).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn test_unknown_code_and_output_rejected() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let err = resolve_effective(dir.path().to_str(), &["X1".to_string()], None).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCode(_)));
        let err = resolve_effective(dir.path().to_str(), &[], Some("xml")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownOutput(_)));
    }
}
