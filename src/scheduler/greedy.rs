//! Greedy list scheduler for assembly lines.
//!
//! # Algorithm
//!
//! Repeated passes over the unscheduled jobs:
//! 1. Ready set: unscheduled jobs (ascending id) whose dependencies are
//!    all completed. Empty while jobs remain → abort (cycle or dangling
//!    dependency).
//! 2. Order the ready set with the dispatching rule (LPT by default,
//!    stable).
//! 3. For each ready job, try every line in ascending id order:
//!    `start = max(earliest_start, line.current_time)`, pick a worker
//!    first-fit at `start`, estimate the duration with the reference
//!    worker and keep the candidate with the strictly smallest end time.
//! 4. Commit the best candidate, or defer the job to the next pass.
//! 5. A pass that commits nothing aborts the run; nothing it could see
//!    would change in a later pass.
//!
//! # Complexity
//! O(n² · (l · w)) worst case: up to n passes, each over at most n ready
//! jobs, each scoring l lines with a w-worker scan.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 5: Parallel Machine Models

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::config::SchedulerConfig;
use crate::dispatching::RuleEngine;
use crate::error::{Aborted, ScheduleError};
use crate::models::{
    Job, JobAssignment, JobGraph, JobId, LineId, Problem, ReferenceWorker, ResourcePool,
    Schedule, WorkerId,
};
use crate::timing::actual_duration;
use crate::validation::validate_problem;

/// Greedy LPT list scheduler with skill-gated worker assignment.
///
/// The scheduler itself is stateless; each call works on a private copy
/// of the problem, so one scheduler can serve many runs.
///
/// # Example
///
/// ```
/// use u_assembly::models::Problem;
/// use u_assembly::scheduler::GreedyScheduler;
///
/// let schedule = GreedyScheduler::new().schedule(&Problem::sample()).unwrap();
/// assert_eq!(schedule.scheduled_count(), 4);
/// assert_eq!(schedule.makespan(), 353);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    config: SchedulerConfig,
    rule_engine: RuleEngine,
}

impl GreedyScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SchedulerConfig::default())
    }

    /// Creates a scheduler from a configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        let rule_engine = config.priority_rule.engine();
        Self {
            config,
            rule_engine,
        }
    }

    /// Replaces the ready-set ordering with a custom rule engine.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Schedules every job of `problem`.
    ///
    /// Returns the complete schedule, or an [`Aborted`] value with the
    /// reason and whatever was committed before the abort.
    pub fn schedule(&self, problem: &Problem) -> Result<Schedule, Aborted> {
        let mut run = self.start(problem)?;
        match run.execute() {
            Ok(()) => Ok(run.into_schedule()),
            Err(error) => Err(Aborted::new(error, run.into_schedule())),
        }
    }

    /// Validates `problem` (if enabled) and prepares a run over a copy of
    /// it without scheduling anything yet.
    pub fn start(&self, problem: &Problem) -> Result<SchedulingRun, Aborted> {
        if self.config.validate {
            if let Err(errors) = validate_problem(problem) {
                warn!(errors = errors.len(), "problem failed validation");
                return Err(Aborted::new(
                    ScheduleError::InvalidInput(errors),
                    Schedule::new(),
                ));
            }
        }
        Ok(SchedulingRun::new(
            problem.clone(),
            self.config.reference_worker,
            self.rule_engine.clone(),
        ))
    }
}

impl Default for GreedyScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Best placement found for one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    line_id: LineId,
    worker_id: WorkerId,
    start: i64,
    end: i64,
}

/// State of one scheduling run.
///
/// Owns the job graph, resource pool and schedule exclusively. Mutation
/// is destructive, so a run cannot be restarted; start a new one instead.
#[derive(Debug, Clone)]
pub struct SchedulingRun {
    graph: JobGraph,
    pool: ResourcePool,
    schedule: Schedule,
    unscheduled: BTreeSet<JobId>,
    reference: ReferenceWorker,
    rule_engine: RuleEngine,
    passes: usize,
}

impl SchedulingRun {
    /// Creates a run over `problem`. No validation is performed here.
    pub fn new(problem: Problem, reference: ReferenceWorker, rule_engine: RuleEngine) -> Self {
        let (graph, pool) = problem.into_parts();
        let unscheduled = graph.jobs().iter().map(|j| j.id).collect();
        Self {
            graph,
            pool,
            schedule: Schedule::new(),
            unscheduled,
            reference,
            rule_engine,
            passes: 0,
        }
    }

    /// Runs passes until every job is scheduled or the run aborts.
    pub fn execute(&mut self) -> Result<(), ScheduleError> {
        while !self.is_finished() {
            if let Err(error) = self.step() {
                warn!(
                    scheduled = self.schedule.scheduled_count(),
                    remaining = self.unscheduled.len(),
                    %error,
                    "scheduling aborted"
                );
                return Err(error);
            }
        }
        info!(
            jobs = self.schedule.scheduled_count(),
            passes = self.passes,
            makespan = self.schedule.makespan(),
            "scheduling complete"
        );
        Ok(())
    }

    /// Runs one pass over the current ready set.
    ///
    /// Returns the number of jobs committed. A finished run returns
    /// `Ok(0)`.
    pub fn step(&mut self) -> Result<usize, ScheduleError> {
        if self.is_finished() {
            return Ok(0);
        }

        let order = self.ready_jobs();
        if order.is_empty() {
            return Err(ScheduleError::Unsatisfiable {
                blocked: self.unscheduled.iter().copied().collect(),
            });
        }
        self.passes += 1;
        debug!(pass = self.passes, ready = ?order, "ready set");

        let mut committed = 0;
        for &job_id in &order {
            let Some(job) = self.graph.job(job_id) else {
                continue;
            };
            let earliest = self.graph.earliest_start(job, &self.schedule);
            match self.best_candidate(job, earliest) {
                Some(candidate) => {
                    self.commit(job_id, candidate);
                    committed += 1;
                }
                None => debug!(job = job_id, earliest, "no feasible line/worker, deferring"),
            }
        }

        if committed == 0 {
            return Err(ScheduleError::Stalled { ready: order });
        }
        Ok(committed)
    }

    /// Whether every job has been scheduled.
    pub fn is_finished(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// Jobs not yet scheduled, ascending.
    pub fn unscheduled(&self) -> impl Iterator<Item = JobId> + '_ {
        self.unscheduled.iter().copied()
    }

    /// Number of passes executed so far.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Schedule committed so far.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Current job graph (completion flags reflect commits).
    pub fn graph(&self) -> &JobGraph {
        &self.graph
    }

    /// Current line and worker state.
    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    /// Consumes the run, returning the (possibly partial) schedule.
    pub fn into_schedule(self) -> Schedule {
        self.schedule
    }

    /// Ready jobs in dispatch order.
    fn ready_jobs(&self) -> Vec<JobId> {
        let mut ready: Vec<&Job> = self
            .unscheduled
            .iter()
            .filter_map(|&id| self.graph.job(id))
            .filter(|job| self.graph.dependencies_satisfied(job))
            .collect();
        self.rule_engine.sort(&mut ready);
        ready.iter().map(|job| job.id).collect()
    }

    /// Scores every line for `job`; first line wins on equal end times.
    fn best_candidate(&self, job: &Job, earliest: i64) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;

        for line in self.pool.line_candidates() {
            let start = earliest.max(line.current_time);
            let Some(worker_id) = self.pool.select_worker(job, start) else {
                continue;
            };
            let Some(reference) = self.pool.reference_worker(self.reference, Some(worker_id))
            else {
                continue;
            };
            let end = start.saturating_add(actual_duration(job, reference, line));

            if best.map_or(true, |b| end < b.end) {
                best = Some(Candidate {
                    line_id: line.id,
                    worker_id,
                    start,
                    end,
                });
            }
        }

        best
    }

    fn commit(&mut self, job_id: JobId, c: Candidate) {
        let recorded = self.schedule.record(JobAssignment::new(
            job_id,
            c.line_id,
            c.worker_id,
            c.start,
            c.end,
        ));
        debug_assert!(recorded, "job {job_id} committed twice");

        self.graph.mark_completed(job_id);
        self.pool.advance_line(c.line_id, job_id, c.end);
        self.pool.advance_worker(c.worker_id, c.end);
        self.unscheduled.remove(&job_id);

        debug!(
            job = job_id,
            line = c.line_id,
            worker = c.worker_id,
            start = c.start,
            end = c.end,
            "committed"
        );
        if let Some(line) = self.pool.line(c.line_id) {
            let conflicts = line.maintenance_conflicts(c.start, c.end);
            if !conflicts.is_empty() {
                debug!(
                    job = job_id,
                    line = c.line_id,
                    windows = ?conflicts,
                    "slot overlaps maintenance (not enforced)"
                );
            }
        }
    }
}
