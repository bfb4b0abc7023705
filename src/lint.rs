//! Lint engine: the `LintService` seam and the rule-set scanner behind it.
//!
//! `RuleSetLintService` loads a TOML rule set, expands each rule's glob
//! patterns against the repository root, scans matched files in parallel,
//! and emits one violation per line matching the rule's regex. Ordering is
//! deterministic: file, then line, then rule id.

use crate::models::ruleset::{RuleDef, RuleSet};
use crate::models::{Results, Violation};
use glob::glob;
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The project under lint: just a root directory here.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Project { root: root.into() }
    }
}

/// Produces lint results for a project. The report task depends only on
/// this trait; tests substitute canned results.
pub trait LintService {
    /// Run lint. `incremental` is advisory; the report task always passes
    /// `false` (full re-run).
    fn lint(&self, project: &Project, incremental: bool) -> io::Result<Results>;

    /// The rule set active for the project, used as report context.
    fn rule_set(&self) -> &RuleSet;
}

/// Glob-and-regex lint engine driven by a TOML rule set.
#[derive(Debug)]
pub struct RuleSetLintService {
    rule_set: RuleSet,
}

impl RuleSetLintService {
    pub fn new(rule_set: RuleSet) -> Self {
        RuleSetLintService { rule_set }
    }

    /// Load the rule set from a TOML file. Parse failures surface as
    /// `InvalidData` so callers can report the path in one place.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let raw = fs::read_to_string(path)?;
        let rule_set: RuleSet = toml::from_str(&raw).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("rule set {} is not valid TOML: {}", path.display(), e),
            )
        })?;
        Ok(RuleSetLintService::new(rule_set))
    }
}

impl LintService for RuleSetLintService {
    fn lint(&self, project: &Project, _incremental: bool) -> io::Result<Results> {
        let mut violations: Vec<Violation> = Vec::new();
        let mut files_scanned = 0usize;
        for rule in &self.rule_set.rules {
            let (mut found, files) = lint_rule(&project.root, rule)?;
            violations.append(&mut found);
            files_scanned += files;
        }
        violations.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then(a.line.cmp(&b.line))
                .then(a.rule.cmp(&b.rule))
        });
        Ok(Results::new(violations, files_scanned))
    }

    fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }
}

/// Scan one rule's targets, collecting violations and the file count.
fn lint_rule(root: &Path, rule: &RuleDef) -> io::Result<(Vec<Violation>, usize)> {
    let re = Regex::new(&rule.regex).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("rule '{}' has an invalid regex: {}", rule.id, e),
        )
    })?;

    let mut targets: Vec<PathBuf> = Vec::new();
    for pat in &rule.patterns {
        let abs_glob = root.join(pat);
        let pattern = abs_glob.to_string_lossy().to_string();
        let entries = glob(&pattern).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("rule '{}' has a bad glob pattern: {}", rule.id, e),
            )
        })?;
        for entry in entries.flatten() {
            if entry.is_file() {
                targets.push(entry);
            }
        }
    }
    targets.sort();
    targets.dedup();

    let per_file: Vec<Vec<Violation>> = targets
        .par_iter()
        .map(|path| {
            let data = match fs::read_to_string(path) {
                Ok(s) => s,
                // Unreadable or non-UTF-8 files are outside this rule's scope
                Err(_) => return Vec::new(),
            };
            let rel = pathdiff::diff_paths(path, root)
                .unwrap_or_else(|| path.clone())
                .to_string_lossy()
                .to_string();
            let mut found = Vec::new();
            for (idx, line) in data.lines().enumerate() {
                if re.is_match(line) {
                    found.push(Violation {
                        rule: rule.id.clone(),
                        priority: rule.priority,
                        file: rel.clone(),
                        line: idx + 1,
                        message: rule
                            .message
                            .clone()
                            .unwrap_or_else(|| format!("matched /{}/", rule.regex)),
                        source_line: line.trim_end().to_string(),
                        fixes: Vec::new(),
                    });
                }
            }
            found
        })
        .collect();

    let count = targets.len();
    Ok((per_file.into_iter().flatten().collect(), count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_rules(dir: &Path, body: &str) -> PathBuf {
        let p = dir.join("lint-rules.toml");
        fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn test_lint_finds_matches_with_relative_paths() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/a.rs"), "fine\ndbg!(x);\nfine\n").unwrap();
        fs::write(root.join("src/b.rs"), "dbg!(y);\n").unwrap();
        let rules = write_rules(
            root,
            r#"
name = "demo"
[[rules]]
id = "no-dbg"
priority = 2
patterns = ["src/**/*.rs"]
regex = "dbg!"
message = "leftover dbg! call"
"#,
        );

        let svc = RuleSetLintService::from_path(&rules).unwrap();
        let res = svc.lint(&Project::new(root), false).unwrap();
        assert_eq!(res.len(), 2);
        assert_eq!(res.files_scanned, 2);
        assert_eq!(res.violations[0].file, "src/a.rs");
        assert_eq!(res.violations[0].line, 2);
        assert_eq!(res.violations[0].message, "leftover dbg! call");
        assert_eq!(res.violations[1].file, "src/b.rs");
    }

    #[test]
    fn test_lint_ordering_is_deterministic_across_rules() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("z.txt"), "TODO then FIXME\n").unwrap();
        fs::write(root.join("a.txt"), "FIXME first\n").unwrap();
        let rules = write_rules(
            root,
            r#"
[[rules]]
id = "todo"
priority = 3
patterns = ["*.txt"]
regex = "TODO"

[[rules]]
id = "fixme"
priority = 1
patterns = ["*.txt"]
regex = "FIXME"
"#,
        );

        let svc = RuleSetLintService::from_path(&rules).unwrap();
        let res = svc.lint(&Project::new(root), false).unwrap();
        let keys: Vec<(String, usize, String)> = res
            .violations
            .iter()
            .map(|v| (v.file.clone(), v.line, v.rule.clone()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("a.txt".into(), 1, "fixme".into()),
                ("z.txt".into(), 1, "fixme".into()),
                ("z.txt".into(), 1, "todo".into()),
            ]
        );
    }

    #[test]
    fn test_invalid_rule_set_toml_is_invalid_data() {
        let dir = tempdir().unwrap();
        let rules = write_rules(dir.path(), "rules = 3");
        let err = RuleSetLintService::from_path(&rules).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_invalid_regex_surfaces_rule_id() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let rules = write_rules(
            root,
            r#"
[[rules]]
id = "broken"
priority = 2
patterns = ["*.txt"]
regex = "("
"#,
        );
        let svc = RuleSetLintService::from_path(&rules).unwrap();
        let err = svc.lint(&Project::new(root), false).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }
}
