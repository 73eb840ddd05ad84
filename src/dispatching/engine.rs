//! Rule engine for ready-set ordering.
//!
//! Applies dispatching rules lexicographically: the first rule decides,
//! later rules only separate jobs the earlier ones scored equal. Sorting
//! is stable, so jobs no rule can separate keep their ready-set traversal
//! order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Job;

/// An ordered chain of dispatching rules.
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (keeps input order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Each added rule only breaks ties left by the
    /// rules before it.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Stable-sorts jobs, highest priority first.
    pub fn sort(&self, jobs: &mut [&Job]) {
        jobs.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(a).cmp(&rule.evaluate(b)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| r.name()))
            .finish()
    }
}
