//! Plain-text schedule report.
//!
//! Read-only: formats a [`Schedule`] together with its [`Problem`] and
//! KPIs. Sections: per-line job listing, worker utilization, maintenance
//! windows, a compact Gantt chart, job dependencies and an evaluation
//! summary. The evaluation's setup figures are the changeover estimate
//! from [`ScheduleKpi`]; the schedule itself carries no setup gaps.

use std::fmt;

use crate::models::{Problem, Schedule};
use crate::scheduler::ScheduleKpi;

/// Time units per Gantt chart cell.
const DEFAULT_GANTT_SCALE: i64 = 10;

/// Widest Gantt row; longer horizons get a coarser scale.
pub const MAX_GANTT_WIDTH: i64 = 120;

/// Formattable view over a schedule.
///
/// # Example
/// ```
/// use u_assembly::models::Problem;
/// use u_assembly::report::ScheduleReport;
/// use u_assembly::scheduler::GreedyScheduler;
///
/// let problem = Problem::sample();
/// let schedule = GreedyScheduler::new().schedule(&problem).unwrap();
/// let text = ScheduleReport::new(&problem, &schedule).to_string();
/// assert!(text.contains("Total Makespan: 353"));
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleReport<'a> {
    problem: &'a Problem,
    schedule: &'a Schedule,
    kpi: ScheduleKpi,
    gantt_scale: i64,
}

impl<'a> ScheduleReport<'a> {
    /// Creates a report and computes its KPIs.
    pub fn new(problem: &'a Problem, schedule: &'a Schedule) -> Self {
        Self {
            problem,
            schedule,
            kpi: ScheduleKpi::calculate(schedule, problem),
            gantt_scale: DEFAULT_GANTT_SCALE,
        }
    }

    /// Sets the time units represented by one Gantt cell (minimum 1).
    ///
    /// Raised automatically when the makespan would need more than
    /// [`MAX_GANTT_WIDTH`] cells.
    pub fn with_gantt_scale(mut self, scale: i64) -> Self {
        self.gantt_scale = scale.max(1);
        self
    }

    /// KPIs shown in the report.
    pub fn kpi(&self) -> &ScheduleKpi {
        &self.kpi
    }

    fn fmt_lines(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== Assembly Line Schedule ==========")?;
        writeln!(f, "Total Makespan: {} time units", self.kpi.makespan)?;
        for line in &self.problem.lines {
            writeln!(
                f,
                "Assembly Line {} (Speed Factor: {}):",
                line.id, line.speed_factor
            )?;
            for a in self.schedule.assignments_for_line(line.id) {
                writeln!(
                    f,
                    "  Job {}: Start={}, End={}, Duration={}, Worker={}",
                    a.job_id,
                    a.start,
                    a.end,
                    a.duration(),
                    a.worker_id
                )?;
            }
        }
        Ok(())
    }

    fn fmt_workers(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n========== Worker Utilization ==========")?;
        for worker in &self.problem.workers {
            let (busy, util) = self
                .kpi
                .worker(worker.id)
                .map(|u| (u.busy_time, u.utilization))
                .unwrap_or((0, 0.0));
            writeln!(
                f,
                "Worker {} (Skill Level: {}): Work Time={}, Utilization={:.2}%",
                worker.id,
                worker.skill_level,
                busy,
                util * 100.0
            )?;
        }
        Ok(())
    }

    fn fmt_maintenance(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n========== Maintenance Windows ==========")?;
        for line in &self.problem.lines {
            write!(f, "Assembly Line {} Maintenance Windows:", line.id)?;
            for w in &line.maintenance_windows {
                write!(f, " [{}, {}]", w.start, w.end())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    /// Cell size actually used, so that a row never exceeds
    /// [`MAX_GANTT_WIDTH`] cells.
    pub fn effective_gantt_scale(&self) -> i64 {
        self.gantt_scale
            .max(ceil_div(self.kpi.makespan, MAX_GANTT_WIDTH))
    }

    fn fmt_gantt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.effective_gantt_scale();
        writeln!(
            f,
            "\n========== Gantt Chart (1 cell = {scale} units) =========="
        )?;
        let cells = ceil_div(self.kpi.makespan, scale);
        for line in &self.problem.lines {
            let mut row = vec!['.'; cells.max(0) as usize];
            for a in self.schedule.assignments_for_line(line.id) {
                let glyph = job_glyph(a.job_id);
                let from = (a.start / scale).max(0) as usize;
                let to = ceil_div(a.end, scale).max(0) as usize;
                for cell in row.iter_mut().take(to).skip(from) {
                    *cell = glyph;
                }
            }
            writeln!(f, "Line {}: {}", line.id, row.into_iter().collect::<String>())?;
        }
        Ok(())
    }

    fn fmt_dependencies(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n========== Job Dependencies ==========")?;
        for job in &self.problem.jobs {
            if job.dependencies.is_empty() {
                writeln!(f, "Job {} depends on: None", job.id)?;
            } else {
                let deps = job
                    .dependencies
                    .iter()
                    .map(|d| d.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(f, "Job {} depends on: {deps}", job.id)?;
            }
        }
        Ok(())
    }

    fn fmt_evaluation(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n========== Schedule Evaluation ==========")?;
        writeln!(
            f,
            "Scheduled Jobs: {}/{}",
            self.kpi.scheduled_jobs, self.kpi.total_jobs
        )?;
        writeln!(
            f,
            "Average Job Waiting Time: {:.2} time units",
            self.kpi.avg_waiting_time
        )?;
        writeln!(
            f,
            "Average Line Utilization: {:.2}%",
            self.kpi.avg_line_utilization * 100.0
        )?;
        writeln!(f, "Total Setup Time: {} time units", self.kpi.setup_time)?;
        writeln!(
            f,
            "Setup Time Percentage: {:.2}%",
            self.kpi.setup_ratio * 100.0
        )?;
        write!(
            f,
            "Slots Overlapping Maintenance: {}",
            self.kpi.maintenance_overlaps
        )
    }
}

impl fmt::Display for ScheduleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_lines(f)?;
        self.fmt_workers(f)?;
        self.fmt_maintenance(f)?;
        self.fmt_gantt(f)?;
        self.fmt_dependencies(f)?;
        self.fmt_evaluation(f)
    }
}

/// `ceil(value / divisor)` for non-negative values, without overflow.
fn ceil_div(value: i64, divisor: i64) -> i64 {
    value / divisor + i64::from(value % divisor > 0)
}

/// Single-character label for a job in the Gantt chart.
fn job_glyph(job_id: usize) -> char {
    const GLYPHS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    GLYPHS
        .get(job_id)
        .map(|&b| char::from(b))
        .unwrap_or('#')
}
