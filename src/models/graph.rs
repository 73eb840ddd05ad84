//! Job precedence graph.
//!
//! Owns the job collection for one scheduling run and answers readiness
//! queries. Job ids are dense, so dependency lookups are plain indexing.

use super::{Job, JobId, Schedule};

/// Precedence graph over a dense job collection.
#[derive(Debug, Clone, Default)]
pub struct JobGraph {
    jobs: Vec<Job>,
}

impl JobGraph {
    /// Wraps a job collection. Jobs must satisfy `jobs[i].id == i`.
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the graph has no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Looks up a job by id.
    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.get(id)
    }

    /// All jobs in id order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Whether every dependency of `job` is completed.
    ///
    /// A dependency id outside the collection counts as unsatisfied.
    pub fn dependencies_satisfied(&self, job: &Job) -> bool {
        job.dependencies
            .iter()
            .all(|&dep| self.jobs.get(dep).is_some_and(|d| d.completed))
    }

    /// Lower bound on the start time of `job`: the latest end among its
    /// already-scheduled dependencies, or 0.
    pub fn earliest_start(&self, job: &Job, schedule: &Schedule) -> i64 {
        job.dependencies
            .iter()
            .filter_map(|&dep| schedule.end(dep))
            .max()
            .unwrap_or(0)
            .max(0)
    }

    /// Marks a job completed. Returns `false` for an unknown id.
    pub fn mark_completed(&mut self, id: JobId) -> bool {
        match self.jobs.get_mut(id) {
            Some(job) => {
                job.completed = true;
                true
            }
            None => false,
        }
    }

    /// Consumes the graph, returning the jobs.
    pub fn into_jobs(self) -> Vec<Job> {
        self.jobs
    }
}
