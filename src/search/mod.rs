//! Feasible schedule search.
//!
//! Composes three lazy stages:
//!
//! | Stage | Type | Produces |
//! |-------|------|----------|
//! | Subset enumeration | [`Groupings`] | Non-empty task subsets, largest first |
//! | Burst assignment | [`BurstDescent`] | Lockstep burst counts for one subset |
//! | Feasibility | [`Evaluator`] | Total hours and the capacity check |
//!
//! [`Solutions`] chains them into one iterator of feasible schedules.
//!
//! # Usage
//!
//! ```
//! use burst_plan::models::Task;
//! use burst_plan::search::first_feasible;
//!
//! let tasks = vec![
//!     Task::new("A", 3.0, 1).unwrap(),
//!     Task::new("B", 5.0, 1).unwrap(),
//! ];
//! // A + B = 8 hours does not fit 7; A alone does.
//! let schedule = first_feasible(&tasks, 7.0).unwrap();
//! assert_eq!(schedule.len(), 1);
//! assert_eq!(schedule.total(), 3.0);
//! ```

mod bursts;
mod feasibility;
mod solutions;
mod subsets;

pub use bursts::{burst_descent, BurstDescent};
pub use feasibility::{Evaluation, Evaluator};
pub use solutions::{first_feasible, solutions, SearchStats, Solutions};
pub use subsets::{grouping_count, groupings, Combinations, Grouping, Groupings};
