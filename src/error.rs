//! Error types.
//!
//! A scheduling run either returns a complete [`Schedule`] or aborts with
//! an [`Aborted`] value carrying the reason and whatever was committed
//! before the abort.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{JobId, Schedule};
use crate::validation::ValidationError;

/// Why a scheduling run stopped before every job was placed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The input failed validation; nothing was scheduled.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Jobs remain but none has its dependencies satisfied (cycle or
    /// dangling dependency).
    #[error("unsatisfiable dependencies: no ready job among {} remaining {blocked:?}", .blocked.len())]
    Unsatisfiable {
        /// Jobs left unscheduled.
        blocked: Vec<JobId>,
    },

    /// Ready jobs exist but a full pass placed none of them (no qualified
    /// worker or no line).
    #[error("no feasible line/worker for ready jobs {ready:?}")]
    Stalled {
        /// Ready jobs that could not be placed.
        ready: Vec<JobId>,
    },
}

impl ScheduleError {
    /// Jobs the error refers to (empty for invalid input).
    pub fn jobs(&self) -> &[JobId] {
        match self {
            Self::InvalidInput(_) => &[],
            Self::Unsatisfiable { blocked } => blocked,
            Self::Stalled { ready } => ready,
        }
    }
}

/// A terminal scheduling abort with the partial schedule.
#[derive(Debug, Clone, Error)]
#[error("scheduling aborted after {} job(s): {error}", .partial.scheduled_count())]
pub struct Aborted {
    /// Abort reason.
    #[source]
    pub error: ScheduleError,
    /// Assignments committed before the abort.
    pub partial: Schedule,
}

impl Aborted {
    /// Creates an abort value.
    pub fn new(error: ScheduleError, partial: Schedule) -> Self {
        Self { error, partial }
    }
}

/// Errors loading problem or configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML could not be parsed into the expected shape.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for file loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

pub(crate) fn read_file(path: &std::path::Path) -> ConfigResult<String> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_schedule_error_display() {
        let e = ScheduleError::Unsatisfiable { blocked: vec![0, 1] };
        assert_eq!(
            e.to_string(),
            "unsatisfiable dependencies: no ready job among 2 remaining [0, 1]"
        );
        assert_eq!(e.jobs(), &[0, 1]);

        let e = ScheduleError::Stalled { ready: vec![3] };
        assert_eq!(e.to_string(), "no feasible line/worker for ready jobs [3]");
    }

    #[test]
    fn test_invalid_input_display() {
        let e = ScheduleError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::InvalidDependency, "a"),
            ValidationError::new(ValidationErrorKind::CyclicDependency, "b"),
        ]);
        assert_eq!(e.to_string(), "invalid input: a; b");
        assert!(e.jobs().is_empty());
    }

    #[test]
    fn test_aborted_display() {
        let a = Aborted::new(ScheduleError::Stalled { ready: vec![2] }, Schedule::new());
        assert_eq!(
            a.to_string(),
            "scheduling aborted after 0 job(s): no feasible line/worker for ready jobs [2]"
        );
        assert!(std::error::Error::source(&a).is_some());
    }

    #[test]
    fn test_missing_file() {
        let err = read_file(std::path::Path::new("/nonexistent/problem.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
