//! Resource pool: assembly lines and workers.
//!
//! Both collections are kept sorted by ascending id. That order is the
//! tie-break for line selection and the scan order for first-fit worker
//! selection, so it is fixed at construction.

use serde::{Deserialize, Serialize};

use super::{AssemblyLine, Job, JobId, LineId, Worker, WorkerId};

/// Which worker's skill is used to score candidate lines.
///
/// Line ranking estimates a job's duration before the actual worker is
/// chosen. The estimate also becomes the committed slot length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceWorker {
    /// Lowest-id worker in the pool.
    #[default]
    First,
    /// Worker with the lowest skill level (lowest id on ties).
    LeastSkilled,
    /// Worker with the highest skill level (lowest id on ties).
    MostSkilled,
    /// The worker actually selected for the candidate line.
    Assigned,
}

/// Lines and workers available to one scheduling run.
#[derive(Debug, Clone, Default)]
pub struct ResourcePool {
    lines: Vec<AssemblyLine>,
    workers: Vec<Worker>,
}

impl ResourcePool {
    /// Creates a pool, sorting lines and workers by id.
    pub fn new(mut lines: Vec<AssemblyLine>, mut workers: Vec<Worker>) -> Self {
        lines.sort_by_key(|l| l.id);
        workers.sort_by_key(|w| w.id);
        Self { lines, workers }
    }

    /// Lines in ascending id order.
    pub fn line_candidates(&self) -> &[AssemblyLine] {
        &self.lines
    }

    /// Workers in ascending id order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Looks up a line by id.
    pub fn line(&self, id: LineId) -> Option<&AssemblyLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Looks up a worker by id.
    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    /// First-fit worker selection.
    ///
    /// Returns the first worker (ascending id) that is qualified for `job`
    /// and free at `not_before`. Neither closest skill match nor earliest
    /// availability is preferred.
    pub fn select_worker(&self, job: &Job, not_before: i64) -> Option<WorkerId> {
        self.workers
            .iter()
            .find(|w| w.is_qualified_for(job) && w.is_available_at(not_before))
            .map(|w| w.id)
    }

    /// Resolves the worker used to score a line.
    ///
    /// `assigned` is the worker chosen for the line under evaluation; it is
    /// only consulted by [`ReferenceWorker::Assigned`].
    pub fn reference_worker(
        &self,
        strategy: ReferenceWorker,
        assigned: Option<WorkerId>,
    ) -> Option<&Worker> {
        match strategy {
            ReferenceWorker::First => self.workers.first(),
            ReferenceWorker::LeastSkilled => self
                .workers
                .iter()
                .reduce(|best, w| if w.skill_level < best.skill_level { w } else { best }),
            ReferenceWorker::MostSkilled => self
                .workers
                .iter()
                .reduce(|best, w| if w.skill_level > best.skill_level { w } else { best }),
            ReferenceWorker::Assigned => assigned.and_then(|id| self.worker(id)),
        }
    }

    /// Appends `job_id` to a line and advances its clock to `end`.
    pub fn advance_line(&mut self, line_id: LineId, job_id: JobId, end: i64) -> bool {
        match self.lines.iter_mut().find(|l| l.id == line_id) {
            Some(line) => {
                line.push_job(job_id, end);
                true
            }
            None => false,
        }
    }

    /// Advances a worker's busy-until clock to `end`.
    pub fn advance_worker(&mut self, worker_id: WorkerId, end: i64) -> bool {
        match self.workers.iter_mut().find(|w| w.id == worker_id) {
            Some(worker) => {
                worker.occupy_until(end);
                true
            }
            None => false,
        }
    }

    /// Consumes the pool, returning lines and workers.
    pub fn into_parts(self) -> (Vec<AssemblyLine>, Vec<Worker>) {
        (self.lines, self.workers)
    }
}
