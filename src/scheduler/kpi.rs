//! Schedule quality metrics (KPIs).
//!
//! Computes performance indicators from a finished (or partial) schedule
//! and its input problem.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Line utilization | Busy time / makespan per line |
//! | Worker utilization | Work time / makespan per worker |
//! | Avg waiting time | Mean of (start - dependency-ready time) |
//! | Maintenance overlaps | Slots intersecting a line's maintenance window |
//! | Setup time | Changeovers (consecutive jobs on a line) × fixed setup |
//!
//! Setup time is an estimate only: scheduling never inserts setup gaps.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::Serialize;

use crate::models::{Problem, Schedule};

/// Setup time charged per changeover between consecutive jobs on a line.
pub const CHANGEOVER_SETUP_TIME: i64 = 2;

/// Busy time and utilization of one line or worker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceUsage {
    /// Line or worker id.
    pub id: usize,
    /// Total occupied time.
    pub busy_time: i64,
    /// Busy time / makespan (0.0 when makespan is 0).
    pub utilization: f64,
}

/// Schedule performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Jobs with an assignment.
    pub scheduled_jobs: usize,
    /// Jobs in the problem.
    pub total_jobs: usize,
    /// Per-line usage, ascending id.
    pub lines: Vec<ResourceUsage>,
    /// Per-worker usage, ascending id.
    pub workers: Vec<ResourceUsage>,
    /// Mean line utilization (0.0..1.0).
    pub avg_line_utilization: f64,
    /// Mean delay between a job becoming ready and starting.
    pub avg_waiting_time: f64,
    /// Assignments overlapping a maintenance window of their line.
    pub maintenance_overlaps: usize,
    /// Job-to-job transitions summed over all lines.
    pub changeovers: usize,
    /// `changeovers × CHANGEOVER_SETUP_TIME`.
    pub setup_time: i64,
    /// Setup time / makespan (0.0 when makespan is 0).
    pub setup_ratio: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its input problem.
    pub fn calculate(schedule: &Schedule, problem: &Problem) -> Self {
        let makespan = schedule.makespan();
        let utilization = |busy: i64| {
            if makespan > 0 {
                busy as f64 / makespan as f64
            } else {
                0.0
            }
        };

        let mut line_ids: Vec<usize> = problem.lines.iter().map(|l| l.id).collect();
        line_ids.sort_unstable();
        let lines: Vec<ResourceUsage> = line_ids
            .into_iter()
            .map(|id| {
                let busy_time = schedule.line_busy_time(id);
                ResourceUsage {
                    id,
                    busy_time,
                    utilization: utilization(busy_time),
                }
            })
            .collect();

        let mut worker_ids: Vec<usize> = problem.workers.iter().map(|w| w.id).collect();
        worker_ids.sort_unstable();
        let workers = worker_ids
            .into_iter()
            .map(|id| {
                let busy_time = schedule.worker_busy_time(id);
                ResourceUsage {
                    id,
                    busy_time,
                    utilization: utilization(busy_time),
                }
            })
            .collect();

        let avg_line_utilization = if lines.is_empty() {
            0.0
        } else {
            lines.iter().map(|l| l.utilization).sum::<f64>() / lines.len() as f64
        };

        // Waiting time: start minus the moment all dependencies had ended
        let mut total_wait: i64 = 0;
        for a in schedule.assignments() {
            let ready_at = problem
                .jobs
                .get(a.job_id)
                .map(|job| {
                    job.dependencies
                        .iter()
                        .filter_map(|&d| schedule.end(d))
                        .max()
                        .unwrap_or(0)
                })
                .unwrap_or(0);
            total_wait = total_wait.saturating_add((a.start - ready_at).max(0));
        }
        let avg_waiting_time = if schedule.is_empty() {
            0.0
        } else {
            total_wait as f64 / schedule.scheduled_count() as f64
        };

        let maintenance_overlaps = schedule
            .assignments()
            .filter(|a| {
                problem
                    .lines
                    .iter()
                    .find(|l| l.id == a.line_id)
                    .is_some_and(|l| !l.maintenance_conflicts(a.start, a.end).is_empty())
            })
            .count();

        let changeovers = jobs_per_line(schedule, problem)
            .map(|n| n.saturating_sub(1))
            .sum::<usize>();
        let setup_time = i64::try_from(changeovers)
            .unwrap_or(i64::MAX)
            .saturating_mul(CHANGEOVER_SETUP_TIME);

        Self {
            makespan,
            scheduled_jobs: schedule.scheduled_count(),
            total_jobs: problem.jobs.len(),
            lines,
            workers,
            avg_line_utilization,
            avg_waiting_time,
            maintenance_overlaps,
            changeovers,
            setup_time,
            setup_ratio: utilization(setup_time),
        }
    }

    /// Whether every job of the problem was scheduled.
    pub fn is_complete(&self) -> bool {
        self.scheduled_jobs == self.total_jobs
    }

    /// Usage of a worker.
    pub fn worker(&self, id: usize) -> Option<&ResourceUsage> {
        self.workers.iter().find(|w| w.id == id)
    }

    /// Usage of a line.
    pub fn line(&self, id: usize) -> Option<&ResourceUsage> {
        self.lines.iter().find(|l| l.id == id)
    }
}

/// Committed job counts of the problem's lines.
fn jobs_per_line<'a>(
    schedule: &'a Schedule,
    problem: &'a Problem,
) -> impl Iterator<Item = usize> + 'a {
    problem
        .lines
        .iter()
        .map(move |l| schedule.jobs_on_line(l.id).len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssemblyLine, Job, JobAssignment, Worker};

    fn sample() -> (Schedule, Problem) {
        let mut s = Schedule::new();
        s.record(JobAssignment::new(0, 0, 0, 0, 59));
        s.record(JobAssignment::new(1, 0, 0, 59, 220));
        s.record(JobAssignment::new(2, 1, 1, 59, 210));
        s.record(JobAssignment::new(3, 0, 1, 220, 353));
        (s, Problem::sample())
    }

    #[test]
    fn test_kpi_basic() {
        let (s, p) = sample();
        let kpi = ScheduleKpi::calculate(&s, &p);
        assert_eq!(kpi.makespan, 353);
        assert_eq!(kpi.scheduled_jobs, 4);
        assert!(kpi.is_complete());
    }

    #[test]
    fn test_kpi_utilization() {
        let (s, p) = sample();
        let kpi = ScheduleKpi::calculate(&s, &p);

        // Line 0 is busy the whole horizon
        assert_eq!(kpi.line(0).unwrap().busy_time, 353);
        assert!((kpi.line(0).unwrap().utilization - 1.0).abs() < 1e-10);
        assert_eq!(kpi.line(1).unwrap().busy_time, 151);

        assert_eq!(kpi.worker(0).unwrap().busy_time, 220);
        assert_eq!(kpi.worker(1).unwrap().busy_time, 151 + 133);
        let expected = (1.0 + 151.0 / 353.0) / 2.0;
        assert!((kpi.avg_line_utilization - expected).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_waiting_time() {
        let (s, p) = sample();
        let kpi = ScheduleKpi::calculate(&s, &p);
        // Every job starts as soon as its dependencies end
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);

        let p = Problem::default()
            .with_job(Job::new(0, 10))
            .with_job(Job::new(1, 10));
        let mut s = Schedule::new();
        s.record(JobAssignment::new(0, 0, 0, 0, 11));
        s.record(JobAssignment::new(1, 0, 0, 11, 22));
        let kpi = ScheduleKpi::calculate(&s, &p);
        assert!((kpi.avg_waiting_time - 5.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_maintenance_overlaps() {
        let (s, p) = sample();
        // Line 0 window [20, 25) hits J0; line 1 window [15, 18) is idle
        let kpi = ScheduleKpi::calculate(&s, &p);
        assert_eq!(kpi.maintenance_overlaps, 1);
    }

    #[test]
    fn test_kpi_setup_time() {
        let (s, p) = sample();
        let kpi = ScheduleKpi::calculate(&s, &p);
        // Line 0 runs J0 → J1 → J3, line 1 only J2
        assert_eq!(kpi.changeovers, 2);
        assert_eq!(kpi.setup_time, 2 * CHANGEOVER_SETUP_TIME);
        assert!((kpi.setup_ratio - 4.0 / 353.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_partial() {
        let p = Problem::default()
            .with_job(Job::new(0, 10))
            .with_job(Job::new(1, 10))
            .with_line(AssemblyLine::new(0, 1.0))
            .with_worker(Worker::new(0, 0));
        let mut s = Schedule::new();
        s.record(JobAssignment::new(0, 0, 0, 0, 11));
        let kpi = ScheduleKpi::calculate(&s, &p);
        assert!(!kpi.is_complete());
        assert_eq!(kpi.total_jobs, 2);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new(), &Problem::default());
        assert_eq!(kpi.makespan, 0);
        assert!(kpi.lines.is_empty());
        assert!((kpi.avg_line_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
        assert_eq!(kpi.setup_time, 0);
        assert!((kpi.setup_ratio - 0.0).abs() < 1e-10);
        assert!(kpi.is_complete());
    }

    #[test]
    fn test_kpi_idle_resources_zero_makespan() {
        let p = Problem::default()
            .with_line(AssemblyLine::new(0, 1.0))
            .with_worker(Worker::new(0, 0));
        let kpi = ScheduleKpi::calculate(&Schedule::new(), &p);
        assert_eq!(kpi.lines.len(), 1);
        assert!((kpi.line(0).unwrap().utilization - 0.0).abs() < 1e-10);
    }
}
