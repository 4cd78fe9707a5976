//! Burst count assignment for a grouping.
//!
//! # Lockstep Descent
//! Each task in the grouping gets its own countdown `bursts, bursts-1, .., 1`.
//! The countdowns are paired by position: schedule `i` runs every task at
//! `task.bursts() - i`. The sequence ends when the shortest countdown
//! runs out, so a grouping yields exactly `min(task.bursts())` schedules.
//!
//! This walks only the diagonal of the per-task burst product. For two
//! tasks with 3 and 2 bursts it yields `(3, 2)` and `(2, 1)`, never
//! `(3, 1)` or `(1, 1)`. Whether the full product was meant is unresolved;
//! the diagonal is kept so results match the established planner output.

use super::subsets::Grouping;
use crate::models::{BurstAssignment, Schedule, Task};

/// Lazy lockstep descent of burst counts over one grouping.
#[derive(Debug, Clone)]
pub struct BurstDescent<'a> {
    grouping: Grouping<'a>,
    step: u32,
    steps: u32,
}

impl<'a> BurstDescent<'a> {
    /// Starts the descent. An empty grouping yields nothing.
    pub fn new(grouping: Grouping<'a>) -> Self {
        let steps = grouping.iter().map(|t| t.bursts()).min().unwrap_or(0);
        Self {
            grouping,
            step: 0,
            steps,
        }
    }

    /// The tasks this descent assigns bursts to.
    pub fn grouping(&self) -> &[&'a Task] {
        &self.grouping
    }

    /// Total number of schedules this descent yields.
    pub fn steps(&self) -> u32 {
        self.steps
    }
}

impl Iterator for BurstDescent<'_> {
    type Item = Schedule;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.steps {
            return None;
        }
        let step = self.step;
        self.step += 1;
        let assignments = self
            .grouping
            .iter()
            .map(|&task| BurstAssignment::new(task.clone(), task.bursts() - step))
            .collect();
        Some(Schedule::new(assignments))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps - self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BurstDescent<'_> {}

/// Lockstep burst descent over `grouping`.
pub fn burst_descent(grouping: Grouping<'_>) -> BurstDescent<'_> {
    BurstDescent::new(grouping)
}
