//! Shared data models: violations, fixes, lint results, and the rule set.

pub mod ruleset;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
/// A proposed automated correction for a violation.
///
/// A fix carrying a non-null `reason_not_fixing` is considered not
/// applicable; see [`Violation::is_fixable`].
pub struct Fix {
    pub description: String,
    pub replacement: Option<String>,
    pub reason_not_fixing: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
/// A single rule breach found in analyzed source.
///
/// Priority 1 is critical and fails the run. File paths are stored
/// repo-relative.
pub struct Violation {
    pub rule: String,
    pub priority: u8,
    pub file: String,
    pub line: usize,
    pub message: String,
    pub source_line: String,
    pub fixes: Vec<Fix>,
}

impl Violation {
    /// A violation is fixable when at least one fix has no
    /// `reason_not_fixing` annotation.
    pub fn is_fixable(&self) -> bool {
        self.fixes.iter().any(|f| f.reason_not_fixing.is_none())
    }

    pub fn is_critical(&self) -> bool {
        self.priority == 1
    }
}

#[derive(Debug, Serialize)]
/// Ordered violations from one lint run. Transient; created fresh per
/// invocation and discarded after.
pub struct Results {
    pub violations: Vec<Violation>,
    pub files_scanned: usize,
}

impl Results {
    pub fn new(violations: Vec<Violation>, files_scanned: usize) -> Self {
        Results {
            violations,
            files_scanned,
        }
    }

    /// Remove every violation that has zero fixes, or whose every fix
    /// carries a `reason_not_fixing` annotation. Mutates in place.
    pub fn retain_fixable(&mut self) {
        self.violations.retain(|v| v.is_fixable());
    }

    pub fn critical_count(&self) -> usize {
        self.violations.iter().filter(|v| v.is_critical()).count()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

#[cfg(test)]
pub fn violation(rule: &str, priority: u8, fixes: Vec<Fix>) -> Violation {
    Violation {
        rule: rule.to_string(),
        priority,
        file: "src/sample.rs".into(),
        line: 1,
        message: format!("rule {} broken", rule),
        source_line: "let x = 1;".into(),
        fixes,
    }
}
