//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cxlint",
    version,
    about = "Linter for CX Setup scripts",
    long_about = "cxlint — a static linter for CX Setup scripts. Reports missing terminators, unknown keywords and wrong argument counts.\n\nConfiguration precedence: CLI > cxlint.toml > defaults.",
    after_help = "Examples:\n  cxlint lint setup.cxsetup\n  cxlint lint scripts/ --ignore E001 --output json\n  cxlint explain E003",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current cxlint version.")]
    Version,
    /// Lint CX Setup scripts
    #[command(
        about = "Run lint checks",
        long_about = "Lint files, directories (searched for *.cxsetup) or globs. Without paths, the patterns from cxlint.toml are used.",
        after_help = "Examples:\n  cxlint lint\n  cxlint lint a.cxsetup b.cxsetup --output tuple\n  cxlint lint --ignore E001,E002"
    )]
    Lint {
        #[arg(help = "Files, directories or glob patterns to lint")]
        paths: Vec<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, value_delimiter = ',', help = "Rule codes to skip (repeatable or comma-separated)")]
        ignore: Vec<String>,
        #[arg(long, help = "Output mode: human|plain|json|tuple (default: human)")]
        output: Option<String>,
    },
    /// Explain a rule code
    #[command(about = "Explain a rule", long_about = "Show the description, an offending example and the fix for a rule code.")]
    Explain {
        #[arg(help = "Rule code, e.g. E002")]
        code: String,
    },
    /// List rule codes
    #[command(about = "List rule codes")]
    Codes,
    /// List recognized keywords
    #[command(
        about = "List keywords",
        long_about = "List recognized keywords with the argument counts they accept. Sigils (&, !, +) may prefix any keyword."
    )]
    Keywords,
}
