use tracing::trace;
use urlscope_pattern::UrlParts;

use crate::{ScopeRule, ScopeRuleType};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeEvaluation {
    pub in_scope: bool,
    /// Indices into the rule list.
    pub matched_include: Vec<usize>,
    pub matched_exclude: Vec<usize>,
}

pub fn is_in_scope(rules: &[ScopeRule], url: &str) -> bool {
    evaluate_scope(rules, url).in_scope
}

/// Exclude rules win over include rules; with no matching include the URL
/// is out of scope. Disabled rules are skipped.
pub fn evaluate_scope(rules: &[ScopeRule], url: &str) -> ScopeEvaluation {
    let parts = match UrlParts::parse(url) {
        Ok(parts) => Some(parts),
        Err(err) => {
            trace!(url, error = %err, "scope candidate did not parse");
            None
        }
    };

    let mut evaluation = ScopeEvaluation::default();
    for (index, rule) in rules.iter().enumerate().filter(|(_, rule)| rule.enabled) {
        if matches_rule(rule, parts.as_ref()) {
            match rule.rule_type {
                ScopeRuleType::Include => evaluation.matched_include.push(index),
                ScopeRuleType::Exclude => evaluation.matched_exclude.push(index),
            }
        }
    }

    evaluation.in_scope =
        evaluation.matched_exclude.is_empty() && !evaluation.matched_include.is_empty();
    evaluation
}

fn matches_rule(rule: &ScopeRule, parts: Option<&UrlParts>) -> bool {
    match parts {
        Some(parts) => rule.pattern.test_url(parts),
        None => rule.pattern.is_match_all(),
    }
}
