use std::sync::LazyLock;

use tracing::debug;

use crate::rules::{Rule, supertest_rules};

static RULES: LazyLock<Vec<Rule>> =
    LazyLock::new(|| supertest_rules().expect("built-in rewrite patterns must compile"));

/// How many replacements each rule made, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    pub counts: Vec<(&'static str, usize)>,
}

impl RewriteReport {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    #[cfg(test)]
    pub fn count_for(&self, rule: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(name, _)| *name == rule)
            .map(|(_, count)| *count)
    }
}

/// Rewrites supertest chains into `app.request()` calls.
///
/// Never fails: text that matches no rule comes back unchanged.
pub fn rewrite(text: &str) -> String {
    rewrite_with_report(text).0
}

pub fn rewrite_with_report(text: &str) -> (String, RewriteReport) {
    let mut report = RewriteReport::default();
    let mut current = text.to_owned();
    for rule in RULES.iter() {
        let (next, count) = rule.apply(&current);
        debug!(rule = rule.name, count, "applied rewrite rule");
        report.counts.push((rule.name, count));
        current = next;
    }
    (current, report)
}
