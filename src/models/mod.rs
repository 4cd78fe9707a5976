//! Burst planning domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | Task | Divisible unit of work (hours, max bursts) |
//! | BurstAssignment | One task paired with a burst count |
//! | Schedule | Assignments for every task of a grouping |

mod schedule;
mod task;

pub use schedule::{BurstAssignment, Schedule};
pub use task::Task;
