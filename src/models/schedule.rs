//! Schedule (candidate solution) model.
//!
//! A schedule assigns a burst count to every task of one grouping.
//! Schedules are produced by the burst assigner and never mutated
//! afterwards; the feasibility evaluator only reads them.

use serde::{Deserialize, Serialize};

use super::Task;

/// A `(task, burst count)` pair.
///
/// `bursts` is in `1..=task.bursts()` for every pair the search produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurstAssignment {
    /// The scheduled task.
    pub task: Task,
    /// Number of bursts run today.
    pub bursts: u32,
}

impl BurstAssignment {
    /// Creates a new assignment.
    pub fn new(task: Task, bursts: u32) -> Self {
        Self { task, bursts }
    }

    /// Hours this assignment takes.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.task.cost(self.bursts)
    }

    /// Whether every burst of the task is scheduled.
    pub fn is_whole(&self) -> bool {
        self.bursts == self.task.bursts()
    }
}

/// An ordered set of burst assignments, one per task of a grouping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    assignments: Vec<BurstAssignment>,
}

impl Schedule {
    /// Creates a schedule from its assignments, keeping their order.
    pub fn new(assignments: Vec<BurstAssignment>) -> Self {
        Self { assignments }
    }

    /// The assignments in grouping order.
    pub fn assignments(&self) -> &[BurstAssignment] {
        &self.assignments
    }

    /// Iterates over the assignments.
    pub fn iter(&self) -> std::slice::Iter<'_, BurstAssignment> {
        self.assignments.iter()
    }

    /// Number of distinct tasks scheduled.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Total hours: sum of every assignment's cost.
    pub fn total(&self) -> f64 {
        self.assignments.iter().map(BurstAssignment::cost).sum()
    }

    /// First assignment for the named task.
    pub fn assignment_for(&self, name: &str) -> Option<&BurstAssignment> {
        self.assignments.iter().find(|a| a.task.name() == name)
    }

    /// Burst counts in grouping order.
    pub fn burst_counts(&self) -> Vec<u32> {
        self.assignments.iter().map(|a| a.bursts).collect()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a BurstAssignment;
    type IntoIter = std::slice::Iter<'a, BurstAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
