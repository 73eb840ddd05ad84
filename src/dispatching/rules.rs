//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for higher priority jobs.

use super::{DispatchingRule, RuleScore};
use crate::models::Job;

/// Longest Processing Time.
///
/// Prioritizes jobs with longer nominal processing time. Placing long jobs
/// early leaves short jobs to fill gaps, which reduces makespan on
/// parallel lines.
///
/// # Reference
/// Graham (1969), LPT bound of 4/3 - 1/(3m) on identical machines.
#[derive(Debug, Clone, Copy)]
pub struct Lpt;

impl DispatchingRule for Lpt {
    fn name(&self) -> &'static str {
        "LPT"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        -i128::from(job.processing_time)
    }

    fn description(&self) -> &'static str {
        "Longest Processing Time"
    }
}

/// Shortest Processing Time.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        i128::from(job.processing_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Highest skill requirement first.
///
/// Jobs only few workers can perform grab those workers before easier
/// jobs occupy them.
#[derive(Debug, Clone, Copy)]
pub struct SkillDemand;

impl DispatchingRule for SkillDemand {
    fn name(&self) -> &'static str {
        "SKILL"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        -i128::from(job.skill_required)
    }

    fn description(&self) -> &'static str {
        "Highest Skill Requirement"
    }
}

/// Lowest job id first.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        job.id as RuleScore
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}
