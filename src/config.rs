//! Scheduler configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! reference_worker = "first"   # first | least_skilled | most_skilled | assigned
//! priority_rule = "lpt"        # lpt | spt | skill_demand | fifo
//! validate = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dispatching::PriorityRule;
use crate::error::{read_file, ConfigResult};
use crate::models::ReferenceWorker;

/// Tuning knobs of the greedy scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Worker whose skill scores candidate lines.
    pub reference_worker: ReferenceWorker,
    /// Ready-set ordering.
    pub priority_rule: PriorityRule,
    /// Validate the problem before scheduling.
    pub validate: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            reference_worker: ReferenceWorker::First,
            priority_rule: PriorityRule::Lpt,
            validate: true,
        }
    }
}

impl SchedulerConfig {
    /// Sets the reference worker strategy.
    pub fn with_reference_worker(mut self, strategy: ReferenceWorker) -> Self {
        self.reference_worker = strategy;
        self
    }

    /// Sets the ready-set ordering.
    pub fn with_priority_rule(mut self, rule: PriorityRule) -> Self {
        self.priority_rule = rule;
        self
    }

    /// Enables or disables input validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Parses a configuration from TOML.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::from_toml_str(&read_file(path.as_ref())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = SchedulerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SchedulerConfig::default());
        assert!(config.validate);
    }

    #[test]
    fn test_partial_toml() {
        let config = SchedulerConfig::from_toml_str(
            r#"
            reference_worker = "most_skilled"
            validate = false
            "#,
        )
        .unwrap();
        assert_eq!(config.reference_worker, ReferenceWorker::MostSkilled);
        assert_eq!(config.priority_rule, PriorityRule::Lpt);
        assert!(!config.validate);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(SchedulerConfig::from_toml_str("reference_worker = \"random\"").is_err());
    }

    #[test]
    fn test_builder() {
        let config = SchedulerConfig::default()
            .with_reference_worker(ReferenceWorker::Assigned)
            .with_priority_rule(PriorityRule::Spt)
            .with_validation(false);
        assert_eq!(config.reference_worker, ReferenceWorker::Assigned);
        assert_eq!(config.priority_rule, PriorityRule::Spt);
        assert!(!config.validate);
    }
}
