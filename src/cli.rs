//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lintrep",
    version,
    about = "Lintrep (Rust + TOML)",
    long_about = "Lintrep — run a lint pass, write xml/html/text reports, and fail on critical violations.\n\nConfiguration precedence: CLI > lintrep.toml > defaults.",
    after_help = "Examples:\n  lintrep report --rules conventions/lint-rules.toml --xml build/lint.xml\n  lintrep report --rules lint-rules.toml --only-fixable --output json\n  lintrep report --text build/lint.txt --ignore-failures",
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
    #[command(
        about = "Show version",
        long_about = "Print the current lintrep version."
    )]
    Version,
    /// Run lint and write the enabled reports
    #[command(
        about = "Run lint and write reports",
        long_about = "Run a full lint pass over the repository, optionally keep only fixable violations, write every enabled report, and exit non-zero when critical (priority 1) violations remain.",
        after_help = "Examples:\n  lintrep report --rules lint-rules.toml\n  lintrep report --rules lint-rules.toml --html build/lint.html --output json"
    )]
    Report {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Path to the rule set TOML (required)")]
        rules: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Report only violations with an applicable fix")]
        only_fixable: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit 0 even when critical violations remain")]
        ignore_failures: bool,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, value_name = "FILE", help = "Enable the xml report at FILE")]
        xml: Option<String>,
        #[arg(long, value_name = "FILE", help = "Enable the html report at FILE")]
        html: Option<String>,
        #[arg(long, value_name = "FILE", help = "Enable the text report at FILE")]
        text: Option<String>,
    },
}
