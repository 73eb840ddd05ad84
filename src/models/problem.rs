//! Problem instance: the input collections of a scheduling run.
//!
//! A problem is plain data. It can be built in code, deserialized from
//! TOML, or taken from the built-in sample.
//!
//! # TOML layout
//!
//! ```toml
//! [[jobs]]
//! id = 0
//! processing_time = 65
//! skill_required = 2
//!
//! [[jobs]]
//! id = 1
//! processing_time = 160
//! dependencies = [0]
//! skill_required = 3
//!
//! [[lines]]
//! id = 0
//! speed_factor = 1.0
//! maintenance_windows = [{ start = 20, duration = 5 }]
//!
//! [[workers]]
//! id = 0
//! skill_level = 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AssemblyLine, Job, JobGraph, ResourcePool, Worker};
use crate::error::{read_file, ConfigResult};

/// Jobs, lines and workers for one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Jobs, dense by id.
    #[serde(default)]
    pub jobs: Vec<Job>,
    /// Assembly lines.
    #[serde(default)]
    pub lines: Vec<AssemblyLine>,
    /// Workers.
    #[serde(default)]
    pub workers: Vec<Worker>,
}

impl Problem {
    /// Creates a problem from its collections.
    pub fn new(jobs: Vec<Job>, lines: Vec<AssemblyLine>, workers: Vec<Worker>) -> Self {
        Self {
            jobs,
            lines,
            workers,
        }
    }

    /// Adds a job.
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    /// Adds a line.
    pub fn with_line(mut self, line: AssemblyLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Adds a worker.
    pub fn with_worker(mut self, worker: Worker) -> Self {
        self.workers.push(worker);
        self
    }

    /// Parses a problem from TOML.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads a problem from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::from_toml_str(&read_file(path.as_ref())?)
    }

    /// Four-job diamond on two lines with two workers.
    ///
    /// Processing times are the sum of the operation and downtime figures
    /// of the reference plant data (35+30, 150+10, 110+40, 80+40).
    pub fn sample() -> Self {
        Self::new(
            vec![
                Job::new(0, 35 + 30).with_skill(2),
                Job::new(1, 150 + 10).with_dependency(0).with_skill(3),
                Job::new(2, 110 + 40).with_dependency(0).with_skill(2),
                Job::new(3, 80 + 40).with_dependencies([1, 2]).with_skill(4),
            ],
            vec![
                AssemblyLine::new(0, 1.0).with_maintenance(20, 5),
                AssemblyLine::new(1, 0.9).with_maintenance(15, 3),
            ],
            vec![Worker::new(0, 3), Worker::new(1, 4)],
        )
    }

    /// Total nominal processing time (saturating).
    pub fn total_processing_time(&self) -> i64 {
        self.jobs
            .iter()
            .fold(0i64, |acc, j| acc.saturating_add(j.processing_time))
    }

    /// Splits the problem into the scheduler's owned state.
    ///
    /// Run state (completion flags, line and worker clocks) always starts
    /// from zero, whatever the caller left in the collections.
    pub fn into_parts(self) -> (JobGraph, ResourcePool) {
        let Self {
            mut jobs,
            mut lines,
            mut workers,
        } = self;
        for job in &mut jobs {
            job.completed = false;
        }
        for line in &mut lines {
            line.current_time = 0;
            line.scheduled_jobs.clear();
        }
        for worker in &mut workers {
            worker.busy_until = 0;
        }
        (JobGraph::new(jobs), ResourcePool::new(lines, workers))
    }
}
