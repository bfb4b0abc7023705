//! Console rendering for a report run.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! the violations, a summary, the status line, and the reports written.

use crate::models::Results;
use crate::utils::plural;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::PathBuf;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// The one-line run status, pluralized.
pub fn status_line(count: usize) -> String {
    format!(
        "Generated a report containing information about {} lint violation{} in this project",
        count,
        plural(count)
    )
}

/// Print run results in the requested format.
pub fn print_run(res: &Results, written: &[PathBuf], output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_run_json(res, written)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for v in &res.violations {
                let tag = match v.priority {
                    1 => {
                        if color {
                            "⟦crit⟧".red().bold().to_string()
                        } else {
                            "⟦crit⟧".to_string()
                        }
                    }
                    2 => {
                        if color {
                            "⟦warn⟧".yellow().bold().to_string()
                        } else {
                            "⟦warn⟧".to_string()
                        }
                    }
                    _ => {
                        if color {
                            "⟦info⟧".blue().bold().to_string()
                        } else {
                            "⟦info⟧".to_string()
                        }
                    }
                };
                let icon = match v.priority {
                    1 => {
                        if color {
                            "✖".red().to_string()
                        } else {
                            "✖".to_string()
                        }
                    }
                    2 => {
                        if color {
                            "▲".yellow().to_string()
                        } else {
                            "▲".to_string()
                        }
                    }
                    _ => {
                        if color {
                            "◆".blue().to_string()
                        } else {
                            "◆".to_string()
                        }
                    }
                };
                let loc = format!("{}:{}", v.file, v.line);
                let loc = if color { loc.bold().to_string() } else { loc };
                println!("{} {} {} ❲{}❳ — {}", icon, tag, loc, v.rule, v.message);
            }
            for p in written {
                println!("report written: {}", p.to_string_lossy());
            }
            let summary = format!(
                "— Summary — violations={} critical={} files={}",
                res.len(),
                res.critical_count(),
                res.files_scanned
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose the run JSON object (pure) for testing/snapshot purposes.
pub fn compose_run_json(res: &Results, written: &[PathBuf]) -> JsonVal {
    let reports: Vec<String> = written
        .iter()
        .map(|p| p.to_string_lossy().to_string())
        .collect();
    json!({
        "violations": serde_json::to_value(&res.violations).unwrap(),
        "summary": {
            "violations": res.len(),
            "critical": res.critical_count(),
            "files": res.files_scanned,
        },
        "status": status_line(res.len()),
        "reports": reports,
    })
}
