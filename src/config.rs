//! Planner configuration.
//!
//! Holds the daily capacity the feasibility test compares against, an
//! optional cap on how much of the search space the planner may walk,
//! and the ranges used by the synthetic task source.
//!
//! Loaded from TOML; every field has a default, so an empty file is a
//! valid configuration.
//!
//! ```toml
//! capacity = 7.0
//! max_candidates = 10000
//!
//! [generator]
//! min_tasks = 2
//! max_tasks = 4
//! max_bursts = 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PlanError, Result};
use crate::validation::{check_capacity, ValidationError, ValidationErrorKind};

/// Hours available per day when nothing else is configured.
pub const DEFAULT_DAILY_CAPACITY: f64 = 7.0;

/// Planner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Daily capacity in hours. A schedule is feasible iff its total is at most this.
    pub capacity: f64,
    /// Maximum number of candidate schedules to evaluate. `None` = unbounded.
    pub max_candidates: Option<usize>,
    /// Synthetic task source ranges.
    pub generator: GeneratorConfig,
}

/// Ranges for synthetic task generation.
///
/// Task times are drawn in whole hours from `1..=capacity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fewest tasks to generate.
    pub min_tasks: usize,
    /// Most tasks to generate.
    pub max_tasks: usize,
    /// Upper bound for a task's burst count (lower bound is 1).
    pub max_bursts: u32,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_DAILY_CAPACITY,
            max_candidates: None,
            generator: GeneratorConfig::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_tasks: 2,
            max_tasks: 4,
            max_bursts: 5,
        }
    }
}

impl PlanConfig {
    /// Creates a configuration with the given capacity and defaults elsewhere.
    pub fn new(capacity: f64) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Sets the daily capacity.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Caps the number of candidate schedules evaluated.
    pub fn with_max_candidates(mut self, limit: usize) -> Self {
        self.max_candidates = Some(limit);
        self
    }

    /// Sets the generator ranges.
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Checks capacity and the generator's own ranges.
    ///
    /// Whether the capacity leaves room for generated task times is only
    /// checked when the synthetic source runs, so sub-hour capacities
    /// stay usable with tasks read from a file.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        check_capacity(self.capacity)?;
        self.generator.validate_ranges()
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| PlanError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

impl GeneratorConfig {
    /// Checks that the ranges are non-empty and can yield valid tasks.
    ///
    /// `capacity` must allow at least one whole hour, since task times
    /// are drawn from `1..=capacity`.
    pub fn validate(&self, capacity: f64) -> std::result::Result<(), ValidationError> {
        self.validate_ranges()?;
        if capacity < 1.0 {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidGenerator,
                format!("Capacity {capacity} leaves no whole hour for generated task times"),
            ));
        }
        Ok(())
    }

    /// Checks the task count and burst ranges alone.
    pub fn validate_ranges(&self) -> std::result::Result<(), ValidationError> {
        if self.min_tasks < 1 || self.min_tasks > self.max_tasks {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidGenerator,
                format!(
                    "Task count range {}..={} must be non-empty and start at 1 or more",
                    self.min_tasks, self.max_tasks
                ),
            ));
        }
        if self.max_bursts < 1 {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidGenerator,
                "max_bursts must be at least 1",
            ));
        }
        Ok(())
    }
}
