//! Configuration discovery and effective settings resolution.
//!
//! Lintrep reads `lintrep.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config. Defaults:
//! - `output`: `human`
//! - `task.onlyFixable|ignoreFailures`: false
//! - `[reports.<name>].enabled`: true when the table is present
//! - `[reports.<name>].file`: `reports/lint.<name>`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Task-behavior section under `[task]`.
pub struct TaskCfg {
    #[serde(rename = "onlyFixable")]
    pub only_fixable: Option<bool>,
    #[serde(rename = "ignoreFailures")]
    pub ignore_failures: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// One `[reports.<name>]` table. Names are free-form; names with no
/// matching writer are skipped at execution time.
pub struct ReportCfg {
    pub enabled: Option<bool>,
    pub file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintrep.toml|yaml`.
pub struct LintrepConfig {
    pub rules: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub task: Option<TaskCfg>,
    #[serde(default)]
    pub reports: Option<BTreeMap<String, ReportCfg>>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the report command.
pub struct Effective {
    pub repo_root: PathBuf,
    pub rules: String,
    pub rules_configured: bool,
    pub output: String,
    pub only_fixable: bool,
    pub ignore_failures: bool,
    /// Enabled reports: format name, configured path (repo-relative unless
    /// absolute). Sorted by name for deterministic write order.
    pub reports: Vec<(String, PathBuf)>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `lintrep.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("lintrep.toml").exists()
            || cur.join("lintrep.yaml").exists()
            || cur.join("lintrep.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `LintrepConfig` from `lintrep.toml` or `lintrep.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<LintrepConfig> {
    let toml_path = root.join("lintrep.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: LintrepConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["lintrep.yaml", "lintrep.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: LintrepConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// CLI-side report overrides: a path per format, enabling it.
#[derive(Debug, Default, Clone)]
pub struct ReportOverrides {
    pub xml: Option<String>,
    pub html: Option<String>,
    pub text: Option<String>,
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_rules: Option<&str>,
    cli_output: Option<&str>,
    cli_only_fixable: Option<bool>,
    cli_ignore_failures: Option<bool>,
    overrides: &ReportOverrides,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let (rules, rules_configured) = match cli_rules.map(|s| s.to_string()).or(cfg.rules) {
        Some(s) => (s, true),
        None => (String::new(), false),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let only_fixable = cli_only_fixable
        .or_else(|| cfg.task.as_ref().and_then(|t| t.only_fixable))
        .unwrap_or(false);
    let ignore_failures = cli_ignore_failures
        .or_else(|| cfg.task.as_ref().and_then(|t| t.ignore_failures))
        .unwrap_or(false);

    let mut reports: BTreeMap<String, PathBuf> = BTreeMap::new();
    for (name, rc) in cfg.reports.unwrap_or_default() {
        if !rc.enabled.unwrap_or(true) {
            continue;
        }
        let file = rc
            .file
            .unwrap_or_else(|| format!("reports/lint.{}", name));
        reports.insert(name, PathBuf::from(file));
    }
    for (name, over) in [
        ("xml", overrides.xml.as_ref()),
        ("html", overrides.html.as_ref()),
        ("text", overrides.text.as_ref()),
    ] {
        if let Some(path) = over {
            reports.insert(name.to_string(), PathBuf::from(path));
        }
    }

    Effective {
        repo_root,
        rules,
        rules_configured,
        output,
        only_fixable,
        ignore_failures,
        reports: reports.into_iter().collect(),
    }
}
