//! Assembly line model.
//!
//! A line processes one job at a time. Its speed factor scales nominal
//! processing time (1.0 = normal, <1.0 = slower, >1.0 = faster) and its
//! clock records when it is next free.
//!
//! # Maintenance
//! Lines carry maintenance windows as plain data. The scheduler never
//! consults them; they are surfaced in reports only.

use serde::{Deserialize, Serialize};

use super::JobId;

/// Assembly line identifier.
pub type LineId = usize;

/// A maintenance interval `[start, start + duration)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceWindow {
    /// Window start.
    pub start: i64,
    /// Window length.
    pub duration: i64,
}

impl MaintenanceWindow {
    /// Creates a new maintenance window.
    pub fn new(start: i64, duration: i64) -> Self {
        Self { start, duration }
    }

    /// Exclusive end of the window.
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }

    /// Whether the window overlaps `[start, end)`.
    pub fn overlaps(&self, start: i64, end: i64) -> bool {
        self.start < end && start < self.end()
    }
}

/// A speed-rated assembly line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyLine {
    /// Unique line identifier.
    pub id: LineId,
    /// Work rate multiplier.
    pub speed_factor: f64,
    /// Time at which the line is free to start a new job. Never decreases.
    #[serde(skip)]
    pub current_time: i64,
    /// Jobs committed to this line, in commit order.
    #[serde(skip)]
    pub scheduled_jobs: Vec<JobId>,
    /// Planned maintenance (informational).
    #[serde(default)]
    pub maintenance_windows: Vec<MaintenanceWindow>,
}

impl AssemblyLine {
    /// Creates an idle line.
    pub fn new(id: LineId, speed_factor: f64) -> Self {
        Self {
            id,
            speed_factor,
            current_time: 0,
            scheduled_jobs: Vec::new(),
            maintenance_windows: Vec::new(),
        }
    }

    /// Adds a maintenance window.
    pub fn with_maintenance(mut self, start: i64, duration: i64) -> Self {
        self.maintenance_windows
            .push(MaintenanceWindow::new(start, duration));
        self
    }

    /// Appends a job ending at `end` and moves the line clock forward.
    pub fn push_job(&mut self, job_id: JobId, end: i64) {
        self.scheduled_jobs.push(job_id);
        self.current_time = self.current_time.max(end);
    }

    /// Maintenance windows overlapping `[start, end)`.
    pub fn maintenance_conflicts(&self, start: i64, end: i64) -> Vec<MaintenanceWindow> {
        self.maintenance_windows
            .iter()
            .filter(|w| w.overlaps(start, end))
            .copied()
            .collect()
    }
}
