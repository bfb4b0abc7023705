//! HTML report writer: a standalone page with a summary and a table.

use super::{write_file, ReportLocation, ReportWriter};
use crate::models::ruleset::RuleSet;
use crate::models::Results;
use crate::utils::plural;
use std::io;

pub struct HtmlReportWriter {
    location: ReportLocation,
}

impl HtmlReportWriter {
    pub fn new(location: ReportLocation) -> Self {
        HtmlReportWriter { location }
    }
}

impl ReportWriter for HtmlReportWriter {
    fn write_report(&self, rules: &RuleSet, results: &Results) -> io::Result<()> {
        write_file(&self.location, &render(rules, results))
    }
}

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
table{border-collapse:collapse}td,th{border:1px solid #999;padding:4px 8px}\
.p1{color:#b00}.p2{color:#a60}";

fn render(rules: &RuleSet, results: &Results) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str(&format!(
        "<title>Lint report — {}</title>\n<style>{}</style>\n</head>\n<body>\n",
        escape(&rules.name),
        STYLE
    ));
    out.push_str(&format!("<h1>Lint report — {}</h1>\n", escape(&rules.name)));
    out.push_str(&format!(
        "<p>{} lint violation{} across {} file{} scanned.</p>\n",
        results.len(),
        plural(results.len()),
        results.files_scanned,
        plural(results.files_scanned)
    ));
    if !results.is_empty() {
        out.push_str(
            "<table>\n<tr><th>File</th><th>Line</th><th>Rule</th>\
<th>Priority</th><th>Message</th></tr>\n",
        );
        for v in &results.violations {
            out.push_str(&format!(
                "<tr class=\"p{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                v.priority,
                escape(&v.file),
                v.line,
                escape(&v.rule),
                v.priority,
                escape(&v.message)
            ));
        }
        out.push_str("</table>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
