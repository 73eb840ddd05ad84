//! Worker model.
//!
//! Workers carry an integer skill level and a busy-until clock. A worker
//! qualifies for a job when its skill level is at least the job's
//! requirement; it is available at `t` when `busy_until <= t`.

use serde::{Deserialize, Serialize};

use super::Job;

/// Worker identifier.
pub type WorkerId = usize;

/// A skill-rated worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: WorkerId,
    /// Skill level (higher = more capable).
    pub skill_level: u32,
    /// Time at which the worker becomes free. Never decreases.
    #[serde(skip)]
    pub busy_until: i64,
}

impl Worker {
    /// Creates an idle worker.
    pub fn new(id: WorkerId, skill_level: u32) -> Self {
        Self {
            id,
            skill_level,
            busy_until: 0,
        }
    }

    /// Whether this worker meets the job's skill requirement.
    #[inline]
    pub fn is_qualified_for(&self, job: &Job) -> bool {
        self.skill_level >= job.skill_required
    }

    /// Whether this worker is free at `time`.
    #[inline]
    pub fn is_available_at(&self, time: i64) -> bool {
        self.busy_until <= time
    }

    /// Moves the busy-until clock forward to `end`.
    ///
    /// Earlier values are ignored so the clock stays monotonic.
    pub fn occupy_until(&mut self, end: i64) {
        self.busy_until = self.busy_until.max(end);
    }
}
