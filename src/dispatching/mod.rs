//! Dispatching rules for ordering ready jobs.
//!
//! Each scheduling pass sorts its ready set before placing jobs. The
//! default is longest-processing-time first (LPT), the classic list
//! scheduling heuristic for makespan on parallel machines.
//!
//! # Usage
//!
//! ```
//! use u_assembly::dispatching::{rules, RuleEngine};
//! use u_assembly::models::Job;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::SkillDemand)
//!     .with_rule(rules::Lpt);
//!
//! let a = Job::new(0, 100).with_skill(1);
//! let b = Job::new(1, 50).with_skill(4);
//! let mut ready = vec![&a, &b];
//! engine.sort(&mut ready);
//! assert_eq!(ready[0].id, 1);
//! ```
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies" (LPT)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::Job;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (scheduled first). Wide enough to
/// negate any `i64` processing time exactly.
pub type RuleScore = i128;

/// A dispatching rule that evaluates job priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// jobs that should be placed first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "LPT").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a ready job.
    fn evaluate(&self, job: &Job) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Named ready-set orderings selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityRule {
    /// Longest processing time first.
    #[default]
    Lpt,
    /// Shortest processing time first.
    Spt,
    /// Highest skill requirement first, then LPT.
    SkillDemand,
    /// Lowest job id first.
    Fifo,
}

impl PriorityRule {
    /// Builds the rule engine for this ordering.
    pub fn engine(self) -> RuleEngine {
        match self {
            Self::Lpt => RuleEngine::new().with_rule(rules::Lpt),
            Self::Spt => RuleEngine::new().with_rule(rules::Spt),
            Self::SkillDemand => RuleEngine::new()
                .with_rule(rules::SkillDemand)
                .with_rule(rules::Lpt),
            Self::Fifo => RuleEngine::new().with_rule(rules::Fifo),
        }
    }
}
