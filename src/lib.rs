//! Daily burst planning.
//!
//! Fits a small set of divisible tasks into a fixed daily time budget.
//! Each task can be split into up to `bursts` equal pieces; the planner
//! looks for one assignment of burst counts whose total fits the
//! capacity, trying to schedule as many distinct tasks as possible.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `BurstAssignment`, `Schedule`
//! - **`search`**: Lazy subset enumeration, lockstep burst descent, feasibility test
//! - **`planner`**: First-fit planner with search limits and counters
//! - **`source`**: Task sources (seeded synthetic, JSON file)
//! - **`report`**: Text and JSON rendering
//! - **`config`**: Capacity, search limit, generator ranges (TOML)
//! - **`validation`**: Task and configuration invariant checks
//!
//! # Search Order
//!
//! Groupings are tried largest first. Within a grouping, burst counts
//! descend in lockstep from each task's maximum. The first feasible
//! schedule wins; no objective beyond that order is optimized.
//!
//! # References
//!
//! - Knuth (2011), "The Art of Computer Programming", Vol. 4A, §7.2.1.3
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", Ch. 1

pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod report;
pub mod search;
pub mod source;
pub mod validation;

pub use config::{GeneratorConfig, PlanConfig, DEFAULT_DAILY_CAPACITY};
pub use error::{PlanError, Result};
pub use planner::{Outcome, PlanReport, PlanRequest, Planner};
