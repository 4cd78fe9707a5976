//! Task sources.
//!
//! A source produces the ordered task list once, before the search
//! starts. Two sources are provided:
//!
//! | Source | Input |
//! |--------|-------|
//! | [`SyntheticSource`] | Seeded random tasks within [`GeneratorConfig`](crate::config::GeneratorConfig) ranges |
//! | [`FileSource`] | JSON array of `{ "name", "time", "bursts" }` records |

mod file;
mod seed;
mod synthetic;

pub use file::FileSource;
pub use seed::{parse_seed, time_seed};
pub use synthetic::SyntheticSource;

use crate::error::Result;
use crate::models::Task;

/// Supplies the task list for one planning run.
///
/// Every returned task already satisfies the `Task` invariants.
pub trait TaskSource {
    /// Short label for logs (e.g., "synthetic", "file").
    fn name(&self) -> &'static str;

    /// Produces the ordered task list.
    fn tasks(&mut self) -> Result<Vec<Task>>;
}
