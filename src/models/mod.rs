//! Assembly-line scheduling domain models.
//!
//! Provides the input types (jobs, lines, workers), the per-run state
//! owners (job graph, resource pool) and the result view (schedule).
//!
//! # Domain Mappings
//!
//! | u-assembly | Manufacturing | Generic |
//! |------------|---------------|---------|
//! | Job | Work order step | Precedence-constrained task |
//! | AssemblyLine | Production line | Uniform parallel machine |
//! | Worker | Operator | Skill-gated secondary resource |
//! | Schedule | Production plan | Solution |

mod graph;
mod job;
mod line;
mod pool;
mod problem;
mod schedule;
mod worker;

pub use graph::JobGraph;
pub use job::{Job, JobId};
pub use line::{AssemblyLine, LineId, MaintenanceWindow};
pub use pool::{ReferenceWorker, ResourcePool};
pub use problem::Problem;
pub use schedule::{JobAssignment, Schedule};
pub use worker::{Worker, WorkerId};
