//! Greedy assembly-line scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyScheduler` is a list scheduler: it repeatedly dispatches the
//! ready jobs (longest first) onto the line/worker pair that finishes
//! them earliest. It is not optimal, but fast and deterministic.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, line and worker utilization, average
//! waiting time, maintenance overlaps and changeover setup time.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod greedy;
mod kpi;

pub use greedy::{GreedyScheduler, SchedulingRun};
pub use kpi::{ResourceUsage, ScheduleKpi, CHANGEOVER_SETUP_TIME};
