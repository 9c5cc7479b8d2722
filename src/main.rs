//! cxlint CLI binary entry point.
//! Delegates to the library for config, linting and printing.

use clap::Parser;
use cxlint::cli::{Cli, Commands};
use cxlint::models::Code;
use cxlint::{config, lint, output, utils};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CXLINT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Lint {
            paths,
            repo_root,
            ignore,
            output: out,
        } => {
            let eff = match config::resolve_effective(repo_root.as_deref(), &ignore, out.as_deref()) {
                Ok(eff) => eff,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            // Friendly note if no config was found
            if eff.config_path.is_none() && eff.output == config::OutputMode::Human {
                eprintln!(
                    "{} No cxlint.toml found; using defaults.",
                    utils::note_prefix()
                );
            }
            let (targets, mut errors) = lint::collect_targets(&eff.repo_root, &paths, &eff.patterns);
            if targets.is_empty() && eff.output == config::OutputMode::Human {
                eprintln!(
                    "{} No files matched [{}].",
                    utils::info_prefix(),
                    if paths.is_empty() { eff.patterns.join(", ") } else { paths.join(", ") }
                );
            }
            tracing::debug!(targets = targets.len(), "collected lint targets");
            let (result, lint_errors) = lint::run_lint(&eff.repo_root, &targets, &eff.ignore);
            errors.extend(lint_errors);
            output::print_lint(&result, eff.output, &errors);
            if !errors.is_empty() {
                std::process::exit(2);
            }
            if result.summary.errors > 0 {
                std::process::exit(1);
            }
        }
        Commands::Explain { code } => match code.parse::<Code>() {
            Ok(code) => output::print_explain(code),
            Err(e) => {
                eprintln!("{} {}", utils::error_prefix(), e);
                std::process::exit(2);
            }
        },
        Commands::Codes => output::print_codes(),
        Commands::Keywords => output::print_keywords(),
    }
}
