//! The lint report task: one lint pass, optional fixable-only pruning,
//! report emission, and the critical-violation gate.
//!
//! Collaborators (lint engine, patch action) are injected at construction
//! and reached only through their traits; everything substantive happens
//! in them or in the report writers.

use crate::lint::{LintService, Project};
use crate::output;
use crate::patch::PatchAction;
use crate::report::{self, ReportLocation};
use crate::models::Results;
use crate::utils::plural;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// One enabled report: a format name and its target location.
///
/// Names are free-form at configuration time; names with no matching
/// writer are skipped at execution (see `report::for_format`).
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub format: String,
    pub location: ReportLocation,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct TaskOutcome {
    pub results: Results,
    pub written: Vec<PathBuf>,
}

/// Failure modes of `execute`. Collaborator errors pass through as `Io`.
#[derive(Debug)]
pub enum TaskError {
    /// Critical (priority 1) violations remained after the run. Carries
    /// the outcome so callers can still print and inspect the results.
    CriticalViolations { count: usize, outcome: TaskOutcome },
    Io(io::Error),
}

/// The build-stopping failure message, pluralized.
pub fn critical_failure_message(count: usize) -> String {
    format!(
        "This build contains {} critical lint violation{}",
        count,
        plural(count)
    )
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::CriticalViolations { count, .. } => {
                write!(f, "{}", critical_failure_message(*count))
            }
            TaskError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl From<io::Error> for TaskError {
    fn from(e: io::Error) -> Self {
        TaskError::Io(e)
    }
}

/// Drives one lint pass and reports on it.
pub struct LintReportTask<'a> {
    lint: &'a dyn LintService,
    patch: &'a dyn PatchAction,
    project: Project,
    reports: Vec<ReportEntry>,
    only_fixable: bool,
}

impl<'a> LintReportTask<'a> {
    pub fn new(
        lint: &'a dyn LintService,
        patch: &'a dyn PatchAction,
        project: Project,
        reports: Vec<ReportEntry>,
        only_fixable: bool,
    ) -> Self {
        LintReportTask {
            lint,
            patch,
            project,
            reports,
            only_fixable,
        }
    }

    /// Run lint, filter, report, and gate on critical violations.
    ///
    /// Returns `Ok(None)` without linting when no report is enabled.
    /// Reports are written exactly once per enabled format; the returned
    /// results reflect post-filter violations.
    pub fn execute(&self) -> Result<Option<TaskOutcome>, TaskError> {
        if self.reports.is_empty() {
            return Ok(None);
        }

        // Always a full re-run; reports are never considered up to date.
        let mut results = self.lint.lint(&self.project, false)?;

        if self.only_fixable {
            self.patch.on_lint_finished(&mut results.violations);
            results.retain_fixable();
        }

        eprintln!("{}", output::status_line(results.len()));

        let rules = self.lint.rule_set();
        let mut written = Vec::new();
        for entry in &self.reports {
            let Some(writer) = report::for_format(&entry.format, entry.location.clone()) else {
                // No writer for this name; skipped by contract.
                continue;
            };
            writer.write_report(rules, &results)?;
            written.push(entry.location.resolve());
        }

        let count = results.critical_count();
        let outcome = TaskOutcome { results, written };
        if count > 0 {
            Err(TaskError::CriticalViolations { count, outcome })
        } else {
            Ok(Some(outcome))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ruleset::RuleSet;
    use crate::models::{violation, Fix, Violation};
    use std::cell::Cell;
    use tempfile::tempdir;

    struct StubLint {
        priorities: Vec<u8>,
        fixes: Vec<Vec<Fix>>,
        rules: RuleSet,
        calls: Cell<usize>,
    }

    impl StubLint {
        fn new(priorities: Vec<u8>) -> Self {
            let fixes = priorities.iter().map(|_| Vec::new()).collect();
            StubLint {
                priorities,
                fixes,
                rules: RuleSet {
                    name: "stub".into(),
                    rules: vec![],
                },
                calls: Cell::new(0),
            }
        }

        fn with_fixes(mut self, fixes: Vec<Vec<Fix>>) -> Self {
            self.fixes = fixes;
            self
        }
    }

    impl LintService for StubLint {
        fn lint(&self, _project: &Project, _incremental: bool) -> io::Result<Results> {
            self.calls.set(self.calls.get() + 1);
            let violations: Vec<Violation> = self
                .priorities
                .iter()
                .zip(self.fixes.iter())
                .enumerate()
                .map(|(i, (p, fx))| violation(&format!("rule-{}", i), *p, fx.clone()))
                .collect();
            Ok(Results::new(violations, 1))
        }

        fn rule_set(&self) -> &RuleSet {
            &self.rules
        }
    }

    struct NoopPatch;
    impl PatchAction for NoopPatch {
        fn on_lint_finished(&self, _violations: &mut [Violation]) {}
    }

    fn entry(root: &std::path::Path, format: &str, file: &str) -> ReportEntry {
        ReportEntry {
            format: format.to_string(),
            location: ReportLocation::for_path(root, std::path::Path::new(file)),
        }
    }

    fn clean_fix() -> Fix {
        Fix {
            description: "apply replacement".into(),
            replacement: Some("".into()),
            reason_not_fixing: None,
        }
    }

    #[test]
    fn test_no_enabled_reports_is_a_noop() {
        let lint = StubLint::new(vec![1, 1, 1]);
        let task = LintReportTask::new(&lint, &NoopPatch, Project::new("."), vec![], false);
        let out = task.execute().unwrap();
        assert!(out.is_none());
        assert_eq!(lint.calls.get(), 0);
    }

    #[test]
    fn test_critical_violations_fail_with_pluralized_count() {
        let dir = tempdir().unwrap();
        let lint = StubLint::new(vec![1, 2, 1]);
        let task = LintReportTask::new(
            &lint,
            &NoopPatch,
            Project::new(dir.path()),
            vec![entry(dir.path(), "text", "lint.txt")],
            false,
        );
        let err = task.execute().unwrap_err();
        match &err {
            TaskError::CriticalViolations { count, outcome } => {
                assert_eq!(*count, 2);
                assert_eq!(outcome.results.len(), 3);
                assert_eq!(outcome.written.len(), 1);
            }
            other => panic!("unexpected: {}", other),
        }
        assert_eq!(
            err.to_string(),
            "This build contains 2 critical lint violations"
        );
    }

    #[test]
    fn test_single_critical_violation_message_is_singular() {
        let dir = tempdir().unwrap();
        let lint = StubLint::new(vec![1]);
        let task = LintReportTask::new(
            &lint,
            &NoopPatch,
            Project::new(dir.path()),
            vec![entry(dir.path(), "text", "lint.txt")],
            false,
        );
        let err = task.execute().unwrap_err();
        assert_eq!(
            err.to_string(),
            "This build contains 1 critical lint violation"
        );
    }

    #[test]
    fn test_no_filtering_keeps_results_identical() {
        let dir = tempdir().unwrap();
        let lint = StubLint::new(vec![2, 3, 3]);
        let task = LintReportTask::new(
            &lint,
            &NoopPatch,
            Project::new(dir.path()),
            vec![entry(dir.path(), "text", "lint.txt")],
            false,
        );
        let out = task.execute().unwrap().unwrap();
        assert_eq!(out.results.len(), 3);
    }

    #[test]
    fn test_fixable_filter_retains_only_fixable_violations() {
        let dir = tempdir().unwrap();
        // one violation with a clean fix, one with none, one annotated-only
        let annotated = Fix {
            reason_not_fixing: Some("manual only".into()),
            ..clean_fix()
        };
        let lint = StubLint::new(vec![3, 3, 3]).with_fixes(vec![
            vec![clean_fix()],
            vec![],
            vec![annotated],
        ]);
        let task = LintReportTask::new(
            &lint,
            &NoopPatch,
            Project::new(dir.path()),
            vec![entry(dir.path(), "text", "lint.txt")],
            true,
        );
        let out = task.execute().unwrap().unwrap();
        assert_eq!(out.results.len(), 1);
        assert_eq!(out.results.violations[0].rule, "rule-0");
    }

    #[test]
    fn test_fixable_priority_three_violation_passes() {
        // one priority-3 violation with one un-annotated fix: retained, no failure
        let dir = tempdir().unwrap();
        let lint = StubLint::new(vec![3]).with_fixes(vec![vec![clean_fix()]]);
        let task = LintReportTask::new(
            &lint,
            &NoopPatch,
            Project::new(dir.path()),
            vec![entry(dir.path(), "text", "lint.txt")],
            true,
        );
        let out = task.execute().unwrap().unwrap();
        assert_eq!(out.results.len(), 1);
    }

    #[test]
    fn test_each_enabled_format_writes_exactly_one_file() {
        let dir = tempdir().unwrap();
        let lint = StubLint::new(vec![2]);
        let task = LintReportTask::new(
            &lint,
            &NoopPatch,
            Project::new(dir.path()),
            vec![
                entry(dir.path(), "xml", "reports/lint.xml"),
                entry(dir.path(), "html", "reports/lint.html"),
                entry(dir.path(), "text", "reports/lint.txt"),
            ],
            false,
        );
        let out = task.execute().unwrap().unwrap();
        assert_eq!(out.written.len(), 3);
        for p in &out.written {
            assert!(p.exists(), "{}", p.display());
        }
        let xml = std::fs::read_to_string(dir.path().join("reports/lint.xml")).unwrap();
        assert!(xml.contains("rule-0"));
    }

    #[test]
    fn test_unknown_format_is_silently_skipped() {
        let dir = tempdir().unwrap();
        let lint = StubLint::new(vec![2]);
        let task = LintReportTask::new(
            &lint,
            &NoopPatch,
            Project::new(dir.path()),
            vec![
                entry(dir.path(), "sarif", "reports/lint.sarif"),
                entry(dir.path(), "text", "reports/lint.txt"),
            ],
            false,
        );
        let out = task.execute().unwrap().unwrap();
        assert_eq!(out.written.len(), 1);
        assert!(!dir.path().join("reports/lint.sarif").exists());
    }
}
