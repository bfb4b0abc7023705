//! Report writers for lint results: xml, html, and text files.
//!
//! Each writer is constructed with a target location and writes exactly one
//! file per run. Format names not mapped here produce no writer and are
//! skipped by the task; this keeps configurations carrying format names
//! from newer versions from failing the run.

pub mod html;
pub mod text;
pub mod xml;

use crate::models::ruleset::RuleSet;
use crate::models::Results;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where a report lands on disk.
///
/// Two resolution variants behind one call: a fixed absolute path used
/// as-is, and a deferred relative path joined to the repository root at
/// write time. Both yield a concrete `PathBuf`.
#[derive(Debug, Clone)]
pub enum ReportLocation {
    Fixed(PathBuf),
    Deferred { root: PathBuf, rel: PathBuf },
}

impl ReportLocation {
    pub fn for_path(root: &Path, path: &Path) -> Self {
        if path.is_absolute() {
            ReportLocation::Fixed(path.to_path_buf())
        } else {
            ReportLocation::Deferred {
                root: root.to_path_buf(),
                rel: path.to_path_buf(),
            }
        }
    }

    pub fn resolve(&self) -> PathBuf {
        match self {
            ReportLocation::Fixed(p) => p.clone(),
            ReportLocation::Deferred { root, rel } => root.join(rel),
        }
    }
}

/// A format-specific serializer of lint results to one file.
pub trait ReportWriter {
    fn write_report(&self, rules: &RuleSet, results: &Results) -> io::Result<()>;
}

/// Map a format name to its writer. Unknown names yield `None`.
pub fn for_format(name: &str, location: ReportLocation) -> Option<Box<dyn ReportWriter>> {
    match name {
        "xml" => Some(Box::new(xml::XmlReportWriter::new(location))),
        "html" => Some(Box::new(html::HtmlReportWriter::new(location))),
        "text" => Some(Box::new(text::TextReportWriter::new(location))),
        _ => None,
    }
}

/// Create parent directories and write the report body.
fn write_file(location: &ReportLocation, body: &str) -> io::Result<()> {
    let path = location.resolve();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, body)
}
