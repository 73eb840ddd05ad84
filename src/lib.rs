//! Assembly-line scheduling for the U-Engine ecosystem.
//!
//! Places precedence-constrained jobs onto speed-rated assembly lines,
//! assigning each job a skill-qualified worker, with a greedy
//! longest-processing-time-first list scheduler.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `AssemblyLine`, `Worker`,
//!   `Problem`, `JobGraph`, `ResourcePool`, `Schedule`
//! - **`timing`**: Skill- and speed-adjusted job durations
//! - **`dispatching`**: Ready-set ordering rules (LPT, SPT, ...)
//! - **`scheduler`**: `GreedyScheduler` and `ScheduleKpi`
//! - **`validation`**: Input integrity checks (ids, dependencies, cycles)
//! - **`report`**: Plain-text schedule report
//! - **`config`**: `SchedulerConfig` (TOML-loadable)
//!
//! # Example
//!
//! ```
//! use u_assembly::models::{AssemblyLine, Job, Problem, Worker};
//! use u_assembly::scheduler::GreedyScheduler;
//!
//! let problem = Problem::default()
//!     .with_job(Job::new(0, 100).with_skill(1))
//!     .with_job(Job::new(1, 50).with_dependency(0))
//!     .with_line(AssemblyLine::new(0, 1.0))
//!     .with_worker(Worker::new(0, 1));
//!
//! let schedule = GreedyScheduler::new().schedule(&problem).unwrap();
//! assert_eq!(schedule.end(0), schedule.start(1));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod timing;
pub mod validation;

pub use config::SchedulerConfig;
pub use error::{Aborted, ConfigError, ScheduleError};
pub use scheduler::GreedyScheduler;
