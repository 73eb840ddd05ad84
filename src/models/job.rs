//! Job model.
//!
//! A job is a single unit of work processed on one assembly line by one
//! worker. Jobs form a precedence DAG through their dependency lists.
//!
//! # Time Representation
//! All times are abstract integer time units relative to the start of the
//! run (t=0). Processing times are nominal: the actual slot length depends
//! on the chosen line and worker (see [`crate::timing`]).

use serde::{Deserialize, Serialize};

/// Dense job identifier (equal to the job's position in its collection).
pub type JobId = usize;

/// A job to be scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Dense identifier, doubles as the index into the job collection.
    pub id: JobId,
    /// Nominal processing time (resource-agnostic baseline).
    pub processing_time: i64,
    /// Jobs that must complete before this one may start.
    #[serde(default)]
    pub dependencies: Vec<JobId>,
    /// Minimum worker skill level.
    #[serde(default)]
    pub skill_required: u32,
    /// Set once by the scheduler when the job is committed.
    #[serde(skip)]
    pub completed: bool,
}

impl Job {
    /// Creates a job with no dependencies and no skill requirement.
    pub fn new(id: JobId, processing_time: i64) -> Self {
        Self {
            id,
            processing_time,
            dependencies: Vec::new(),
            skill_required: 0,
            completed: false,
        }
    }

    /// Adds a dependency.
    pub fn with_dependency(mut self, dependency: JobId) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Replaces the dependency list.
    pub fn with_dependencies(mut self, dependencies: impl IntoIterator<Item = JobId>) -> Self {
        self.dependencies = dependencies.into_iter().collect();
        self
    }

    /// Sets the required skill level.
    pub fn with_skill(mut self, skill_required: u32) -> Self {
        self.skill_required = skill_required;
        self
    }

    /// Whether this job has any dependencies.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    /// Whether `other` is a direct dependency of this job.
    pub fn depends_on(&self, other: JobId) -> bool {
        self.dependencies.contains(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new(3, 120).with_dependencies([1, 2]).with_skill(4);

        assert_eq!(job.id, 3);
        assert_eq!(job.processing_time, 120);
        assert_eq!(job.dependencies, vec![1, 2]);
        assert_eq!(job.skill_required, 4);
        assert!(!job.completed);
        assert!(job.has_dependencies());
        assert!(job.depends_on(2));
        assert!(!job.depends_on(0));
    }

    #[test]
    fn test_job_without_dependencies() {
        let job = Job::new(0, 65).with_skill(2);
        assert!(!job.has_dependencies());
        assert_eq!(job.skill_required, 2);
    }

    #[test]
    fn test_job_deserialize_defaults() {
        let job: Job = serde_json::from_str(r#"{"id": 1, "processing_time": 10}"#).unwrap();
        assert_eq!(job, Job::new(1, 10));
    }
}
