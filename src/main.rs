//! Lintrep CLI binary entry point.
//! Wires configuration into the report task and maps outcomes to exit codes.

mod cli;
mod config;
mod lint;
mod models;
mod output;
mod patch;
mod report;
mod task;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use lint::{LintService, Project, RuleSetLintService};
use patch::RuleFixAction;
use report::ReportLocation;
use task::{LintReportTask, ReportEntry, TaskError};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Report {
            repo_root,
            rules,
            only_fixable,
            ignore_failures,
            output,
            xml,
            html,
            text,
        } => {
            let over = config::ReportOverrides { xml, html, text };
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                rules.as_deref(),
                output.as_deref(),
                if only_fixable { Some(true) } else { None },
                if ignore_failures { Some(true) } else { None },
                &over,
            );
            // Require a rule set to be configured (no default)
            if !eff.rules_configured {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    "Rule set is not configured. Pass --rules or add lintrep.toml."
                );
                std::process::exit(2);
            }
            // Friendly note if no lintrep config was found
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No lintrep.toml found; using defaults."
                );
            }
            let rules_path = eff.repo_root.join(&eff.rules);
            if !rules_path.is_file() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Rule set file not found: {} (pass --rules or configure lintrep.toml)",
                        rules_path.to_string_lossy()
                    )
                );
                std::process::exit(2);
            }
            if eff.reports.is_empty() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No reports enabled; nothing to do."
                );
                return;
            }

            let service = match RuleSetLintService::from_path(&rules_path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            let patch_action = RuleFixAction::new(service.rule_set());
            let reports: Vec<ReportEntry> = eff
                .reports
                .iter()
                .map(|(name, path)| ReportEntry {
                    format: name.clone(),
                    location: ReportLocation::for_path(&eff.repo_root, path),
                })
                .collect();
            let task = LintReportTask::new(
                &service,
                &patch_action,
                Project::new(&eff.repo_root),
                reports,
                eff.only_fixable,
            );

            match task.execute() {
                Ok(Some(out)) => {
                    output::print_run(&out.results, &out.written, &eff.output);
                }
                Ok(None) => {}
                Err(TaskError::CriticalViolations { count, outcome }) => {
                    let msg = task::critical_failure_message(count);
                    output::print_run(&outcome.results, &outcome.written, &eff.output);
                    if eff.ignore_failures {
                        eprintln!("{} {} (ignored)", utils::warn_prefix(), msg);
                    } else {
                        eprintln!("{} {}", utils::error_prefix(), msg);
                        std::process::exit(1);
                    }
                }
                Err(TaskError::Io(e)) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            }
        }
    }
}
