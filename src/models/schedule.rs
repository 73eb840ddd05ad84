//! Schedule (solution) model.
//!
//! The schedule is the read-only result view of a scheduling run: one
//! write-once assignment per job, the job order on each line and the
//! makespan. Reports and KPIs consume it without touching scheduler state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{JobId, LineId, WorkerId};

/// A job-line-worker-time assignment.
///
/// The job occupies both the line and the worker during `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAssignment {
    /// Assigned job.
    pub job_id: JobId,
    /// Line the job runs on.
    pub line_id: LineId,
    /// Worker operating the job.
    pub worker_id: WorkerId,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl JobAssignment {
    /// Creates a new assignment.
    pub fn new(job_id: JobId, line_id: LineId, worker_id: WorkerId, start: i64, end: i64) -> Self {
        Self {
            job_id,
            line_id,
            worker_id,
            start,
            end,
        }
    }

    /// Slot length (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether two assignments overlap in time.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A (possibly partial) schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    assignments: BTreeMap<JobId, JobAssignment>,
    line_jobs: BTreeMap<LineId, Vec<JobId>>,
    commit_order: Vec<JobId>,
    makespan: i64,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an assignment.
    ///
    /// Entries are write-once: returns `false` and leaves the schedule
    /// untouched if the job already has an assignment.
    pub fn record(&mut self, assignment: JobAssignment) -> bool {
        if self.assignments.contains_key(&assignment.job_id) {
            return false;
        }
        self.assignments.insert(assignment.job_id, assignment);
        self.line_jobs
            .entry(assignment.line_id)
            .or_default()
            .push(assignment.job_id);
        self.commit_order.push(assignment.job_id);
        self.makespan = self.makespan.max(assignment.end);
        true
    }

    /// Makespan: latest end time across all assignments (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.makespan
    }

    /// Assignment for a job.
    pub fn assignment(&self, job_id: JobId) -> Option<&JobAssignment> {
        self.assignments.get(&job_id)
    }

    /// All assignments in job id order.
    pub fn assignments(&self) -> impl Iterator<Item = &JobAssignment> {
        self.assignments.values()
    }

    /// Start time of a job.
    pub fn start(&self, job_id: JobId) -> Option<i64> {
        self.assignment(job_id).map(|a| a.start)
    }

    /// End time of a job.
    pub fn end(&self, job_id: JobId) -> Option<i64> {
        self.assignment(job_id).map(|a| a.end)
    }

    /// Actual duration of a job.
    pub fn duration(&self, job_id: JobId) -> Option<i64> {
        self.assignment(job_id).map(|a| a.duration())
    }

    /// Line a job was assigned to.
    pub fn line_of(&self, job_id: JobId) -> Option<LineId> {
        self.assignment(job_id).map(|a| a.line_id)
    }

    /// Worker a job was assigned to.
    pub fn worker_of(&self, job_id: JobId) -> Option<WorkerId> {
        self.assignment(job_id).map(|a| a.worker_id)
    }

    /// Jobs on a line in commit order (empty for an unused line).
    pub fn jobs_on_line(&self, line_id: LineId) -> &[JobId] {
        self.line_jobs
            .get(&line_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Assignments on a line in commit order.
    pub fn assignments_for_line(&self, line_id: LineId) -> Vec<&JobAssignment> {
        self.jobs_on_line(line_id)
            .iter()
            .filter_map(|id| self.assignments.get(id))
            .collect()
    }

    /// Assignments of a worker in job id order.
    pub fn assignments_for_worker(&self, worker_id: WorkerId) -> Vec<&JobAssignment> {
        self.assignments
            .values()
            .filter(|a| a.worker_id == worker_id)
            .collect()
    }

    /// Job ids in the order they were committed.
    pub fn commit_order(&self) -> &[JobId] {
        &self.commit_order
    }

    /// Whether a job has been scheduled.
    pub fn is_scheduled(&self, job_id: JobId) -> bool {
        self.assignments.contains_key(&job_id)
    }

    /// Number of scheduled jobs.
    pub fn scheduled_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether jobs `0..total_jobs` are all scheduled.
    pub fn is_complete(&self, total_jobs: usize) -> bool {
        (0..total_jobs).all(|id| self.is_scheduled(id))
    }

    /// Whether the schedule has no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Total busy time of a line.
    pub fn line_busy_time(&self, line_id: LineId) -> i64 {
        self.assignments_for_line(line_id)
            .iter()
            .map(|a| a.duration())
            .sum()
    }

    /// Total work time of a worker.
    pub fn worker_busy_time(&self, worker_id: WorkerId) -> i64 {
        self.assignments_for_worker(worker_id)
            .iter()
            .map(|a| a.duration())
            .sum()
    }
}
