//! XML report writer.

use super::{write_file, ReportLocation, ReportWriter};
use crate::models::ruleset::RuleSet;
use crate::models::Results;
use std::io;

pub struct XmlReportWriter {
    location: ReportLocation,
}

impl XmlReportWriter {
    pub fn new(location: ReportLocation) -> Self {
        XmlReportWriter { location }
    }
}

impl ReportWriter for XmlReportWriter {
    fn write_report(&self, rules: &RuleSet, results: &Results) -> io::Result<()> {
        write_file(&self.location, &render(rules, results))
    }
}

fn render(rules: &RuleSet, results: &Results) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<lint ruleset=\"{}\" violations=\"{}\" files=\"{}\">\n",
        escape(&rules.name),
        results.len(),
        results.files_scanned
    ));
    for v in &results.violations {
        out.push_str(&format!(
            "  <violation rule=\"{}\" priority=\"{}\" file=\"{}\" line=\"{}\">\n",
            escape(&v.rule),
            v.priority,
            escape(&v.file),
            v.line
        ));
        out.push_str(&format!("    <message>{}</message>\n", escape(&v.message)));
        out.push_str(&format!(
            "    <source>{}</source>\n",
            escape(&v.source_line)
        ));
        for f in &v.fixes {
            match f.reason_not_fixing.as_deref() {
                Some(reason) => out.push_str(&format!(
                    "    <fix description=\"{}\" reasonNotFixing=\"{}\"/>\n",
                    escape(&f.description),
                    escape(reason)
                )),
                None => out.push_str(&format!(
                    "    <fix description=\"{}\"/>\n",
                    escape(&f.description)
                )),
            }
        }
        out.push_str("  </violation>\n");
    }
    out.push_str("</lint>\n");
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
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
