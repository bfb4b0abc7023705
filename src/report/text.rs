//! Plain-text report writer.

use super::{write_file, ReportLocation, ReportWriter};
use crate::models::ruleset::RuleSet;
use crate::models::Results;
use crate::utils::plural;
use std::io;

pub struct TextReportWriter {
    location: ReportLocation,
}

impl TextReportWriter {
    pub fn new(location: ReportLocation) -> Self {
        TextReportWriter { location }
    }
}

impl ReportWriter for TextReportWriter {
    fn write_report(&self, rules: &RuleSet, results: &Results) -> io::Result<()> {
        write_file(&self.location, &render(rules, results))
    }
}

fn render(rules: &RuleSet, results: &Results) -> String {
    let mut out = format!("Lint report (ruleset: {})\n\n", rules.name);
    for v in &results.violations {
        out.push_str(&format!(
            "{}:{} [P{}] {}: {}\n",
            v.file, v.line, v.priority, v.rule, v.message
        ));
        if let Some(fix) = v.fixes.iter().find(|f| f.reason_not_fixing.is_none()) {
            out.push_str(&format!("    fix available: {}\n", fix.description));
        }
    }
    if !results.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!(
        "{} lint violation{} in {} file{} scanned\n",
        results.len(),
        plural(results.len()),
        results.files_scanned,
        plural(results.files_scanned)
    ));
    out
}
