//! Input validation for scheduling problems.
//!
//! Checks structural integrity of jobs, lines and workers before
//! scheduling. Detects:
//! - Duplicate IDs
//! - Job IDs that are not dense (id != position)
//! - Dangling and self dependencies
//! - Circular dependencies (DAG validation)
//! - Non-positive processing times and speed factors
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{JobId, Problem};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A job's ID does not match its position in the collection.
    NonDenseJobId,
    /// A job depends on an ID outside the job collection.
    InvalidDependency,
    /// A job lists itself as a dependency.
    SelfDependency,
    /// Dependency graph contains a cycle.
    CyclicDependency,
    /// A job's processing time is zero or negative.
    NonPositiveProcessingTime,
    /// A line's speed factor is zero, negative or not finite.
    InvalidSpeedFactor,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a scheduling problem.
///
/// Checks:
/// 1. No duplicate job, line or worker IDs
/// 2. Every job's ID equals its position
/// 3. Processing times are positive
/// 4. Speed factors are positive and finite
/// 5. Dependencies reference existing jobs other than the job itself
/// 6. No circular dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &Problem) -> ValidationResult {
    let mut errors = Vec::new();
    let job_count = problem.jobs.len();

    let mut job_ids = HashSet::new();
    for (position, job) in problem.jobs.iter().enumerate() {
        if !job_ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }
        if job.id != position {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonDenseJobId,
                format!("Job ID {} at position {position}", job.id),
            ));
        }
        if job.processing_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveProcessingTime,
                format!(
                    "Job {} has non-positive processing time {}",
                    job.id, job.processing_time
                ),
            ));
        }
        for &dep in &job.dependencies {
            if dep == job.id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfDependency,
                    format!("Job {} depends on itself", job.id),
                ));
            } else if dep >= job_count {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDependency,
                    format!("Job {} references unknown dependency {dep}", job.id),
                ));
            }
        }
    }

    let mut line_ids = HashSet::new();
    for line in &problem.lines {
        if !line_ids.insert(line.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate line ID: {}", line.id),
            ));
        }
        if !(line.speed_factor.is_finite() && line.speed_factor > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSpeedFactor,
                format!("Line {} has invalid speed factor {}", line.id, line.speed_factor),
            ));
        }
    }

    let mut worker_ids = HashSet::new();
    for worker in &problem.workers {
        if !worker_ids.insert(worker.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", worker.id),
            ));
        }
    }

    // Cycle detection indexes by position; only meaningful on dense ids.
    let dense = problem.jobs.iter().enumerate().all(|(i, j)| i == j.id);
    if dense {
        if let Some(cycle_err) = detect_cycles(problem) {
            errors.push(cycle_err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the dependency graph using DFS.
///
/// # Algorithm
/// Topological sort via DFS over dependency edges. Reaching a node that
/// is still on the recursion stack is a back edge, hence a cycle.
/// Self-loops are reported separately and skipped here.
fn detect_cycles(problem: &Problem) -> Option<ValidationError> {
    let n = problem.jobs.len();
    let mut visited = vec![false; n];
    let mut in_stack = vec![false; n];

    for node in 0..n {
        if !visited[node] && has_cycle_dfs(node, problem, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving job {node}"),
            ));
        }
    }

    None
}

fn has_cycle_dfs(
    node: JobId,
    problem: &Problem,
    visited: &mut [bool],
    in_stack: &mut [bool],
) -> bool {
    visited[node] = true;
    in_stack[node] = true;

    for &next in &problem.jobs[node].dependencies {
        if next == node || next >= visited.len() {
            continue;
        }
        if in_stack[next] {
            return true; // Back edge → cycle
        }
        if !visited[next] && has_cycle_dfs(next, problem, visited, in_stack) {
            return true;
        }
    }

    in_stack[node] = false;
    false
}
