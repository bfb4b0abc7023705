//! Fix annotation: the `PatchAction` seam and the rule-driven annotator.
//!
//! Runs after lint, before the fixable-only filter. Fixes are computed from
//! each rule's declared fix spec; nothing here touches files on disk.

use crate::models::ruleset::RuleSet;
use crate::models::{Fix, Violation};
use std::collections::HashSet;

/// Hook invoked with the full violation list once lint has finished.
pub trait PatchAction {
    fn on_lint_finished(&self, violations: &mut [Violation]);
}

/// Attaches fixes declared in the rule set to their violations.
///
/// A rule without a fix spec leaves its violations with zero fixes. A fix
/// spec may carry a static `reason` marking it non-applicable. When two
/// replacement-carrying fixes land on the same file and line, the later one
/// is annotated as overlapping and will not be offered.
pub struct RuleFixAction<'a> {
    rule_set: &'a RuleSet,
}

impl<'a> RuleFixAction<'a> {
    pub fn new(rule_set: &'a RuleSet) -> Self {
        RuleFixAction { rule_set }
    }
}

impl PatchAction for RuleFixAction<'_> {
    fn on_lint_finished(&self, violations: &mut [Violation]) {
        let mut claimed: HashSet<(String, usize)> = HashSet::new();
        for v in violations.iter_mut() {
            let Some(rule) = self.rule_set.rule(&v.rule) else {
                continue;
            };
            let Some(spec) = rule.fix.as_ref() else {
                continue;
            };
            let mut reason = spec.reason.clone();
            if reason.is_none() && spec.replacement.is_some() {
                let key = (v.file.clone(), v.line);
                if !claimed.insert(key) {
                    reason = Some("overlaps an earlier fix on the same line".to_string());
                }
            }
            v.fixes.push(Fix {
                description: spec.description.clone(),
                replacement: spec.replacement.clone(),
                reason_not_fixing: reason,
            });
        }
    }
}
