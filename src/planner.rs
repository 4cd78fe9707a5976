//! Planner: runs the search and packages the outcome.
//!
//! # Algorithm
//!
//! 1. Start a [`Solutions`] search over the request's tasks.
//! 2. Apply the configured candidate limit, if any.
//! 3. Take the first feasible schedule.
//! 4. Report it (or its absence) with the search counters.
//!
//! The planner is stateless; running it twice on the same request gives
//! the same report.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::PlanConfig;
use crate::models::{Schedule, Task};
use crate::search::{SearchStats, Solutions};
use crate::validation::{check_capacity, ValidationError};

/// Input container for planning.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Tasks to plan, in source order.
    pub tasks: Vec<Task>,
    /// Capacity and search limit.
    pub config: PlanConfig,
}

impl PlanRequest {
    /// Creates a request with the default configuration.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            config: PlanConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: PlanConfig) -> Self {
        self.config = config;
        self
    }
}

/// Result of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// A schedule fits the capacity.
    Feasible {
        /// The chosen schedule.
        schedule: Schedule,
        /// Its total hours.
        total: f64,
    },
    /// No schedule fits (or none was reached within the limit).
    NoSolution,
}

impl Outcome {
    /// The chosen schedule, if any.
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            Self::Feasible { schedule, .. } => Some(schedule),
            Self::NoSolution => None,
        }
    }

    /// Whether a schedule was found.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible { .. })
    }
}

/// Planning outcome with search counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Daily capacity used.
    pub capacity: f64,
    /// Found schedule or no solution.
    pub outcome: Outcome,
    /// How much of the search space was walked.
    pub stats: SearchStats,
    /// The candidate limit stopped the search before a schedule was found.
    pub truncated: bool,
}

impl PlanReport {
    /// Hours left over by the chosen schedule.
    pub fn remaining(&self) -> Option<f64> {
        match &self.outcome {
            Outcome::Feasible { total, .. } => Some(self.capacity - total),
            Outcome::NoSolution => None,
        }
    }
}

/// First-fit burst planner.
///
/// Returns the first feasible schedule in enumeration order: the largest
/// groupings first, burst counts descending in lockstep within each. No
/// objective is optimized beyond that ordering.
///
/// # Example
///
/// ```
/// use burst_plan::planner::{Planner, PlanRequest};
/// use burst_plan::models::Task;
///
/// let tasks = vec![Task::new("Review", 7.0, 2).unwrap()];
/// let report = Planner::new().plan_request(&PlanRequest::new(tasks));
/// assert_eq!(report.outcome.schedule().unwrap().burst_counts(), vec![2]);
/// assert_eq!(report.remaining(), Some(0.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlanConfig,
}

impl Planner {
    /// Creates a planner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner after checking the configured capacity.
    ///
    /// # Errors
    /// `InvalidCapacity` if the capacity is not a positive finite number.
    pub fn try_new(config: PlanConfig) -> Result<Self, ValidationError> {
        check_capacity(config.capacity)?;
        Ok(Self { config })
    }

    /// Sets the configuration.
    ///
    /// The capacity is not checked here; a NaN or non-positive capacity
    /// makes every schedule infeasible. Use [`Planner::try_new`] for
    /// unchecked input.
    pub fn with_config(mut self, config: PlanConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Plans `tasks` under this planner's configuration.
    pub fn plan(&self, tasks: &[Task]) -> PlanReport {
        let capacity = self.config.capacity;
        let mut search = Solutions::new(tasks, capacity);
        if let Some(limit) = self.config.max_candidates {
            search = search.with_candidate_limit(limit as u64);
        }

        let outcome = match search.next() {
            Some(schedule) => {
                let total = schedule.total();
                info!(
                    tasks = schedule.len(),
                    total,
                    remaining = capacity - total,
                    "found feasible schedule"
                );
                Outcome::Feasible { schedule, total }
            }
            None => Outcome::NoSolution,
        };

        let truncated = !outcome.is_feasible() && search.limit_reached();
        if truncated {
            warn!(
                limit = ?self.config.max_candidates,
                "candidate limit reached before any schedule fit"
            );
        } else if !outcome.is_feasible() {
            info!(tasks = tasks.len(), capacity, "no feasible schedule");
        }

        PlanReport {
            capacity,
            outcome,
            stats: search.stats(),
            truncated,
        }
    }

    /// Plans from a request, using the request's configuration.
    pub fn plan_request(&self, request: &PlanRequest) -> PlanReport {
        let planner = Self {
            config: request.config.clone(),
        };
        planner.plan(&request.tasks)
    }
}
