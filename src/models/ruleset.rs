//! Rule set schema: the lint rules active for a project, loaded from TOML.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
/// Top-level rule set, used as report context.
pub struct RuleSet {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

fn default_name() -> String {
    "default".to_string()
}

#[derive(Debug, Clone, Deserialize)]
/// One lint rule: where to look, what to match, how severe.
pub struct RuleDef {
    pub id: String,
    /// 1 = critical (fails the run); larger numbers are less severe.
    pub priority: u8,
    pub patterns: Vec<String>,
    pub regex: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub fix: Option<FixDef>,
}

#[derive(Debug, Clone, Deserialize)]
/// Optional automated-fix declaration for a rule.
pub struct FixDef {
    pub description: String,
    #[serde(default)]
    pub replacement: Option<String>,
    /// Declares the fix non-applicable up front (kept on the violation as
    /// its `reason_not_fixing`).
    #[serde(default)]
    pub reason: Option<String>,
}

impl RuleSet {
    pub fn rule(&self, id: &str) -> Option<&RuleDef> {
        self.rules.iter().find(|r| r.id == id)
    }
}
