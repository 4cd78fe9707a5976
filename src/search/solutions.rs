//! Lazy search for feasible schedules.
//!
//! # Algorithm
//! 1. Take groupings from [`Groupings`] (largest first).
//! 2. For each grouping, walk its [`BurstDescent`].
//! 3. Yield every schedule the [`Evaluator`] marks feasible.
//!
//! Nothing is materialized ahead of the consumer: taking the first item
//! stops the search at the first feasible schedule. Building a new
//! [`Solutions`] over the same tasks replays the identical sequence.
//!
//! # Complexity
//! Up to `2^L - 1` groupings, each with up to `min(bursts)` candidates.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::bursts::BurstDescent;
use super::feasibility::Evaluator;
use super::subsets::Groupings;
use crate::models::{Schedule, Task};

/// Counters describing how much of the search space was walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Groupings pulled from the subset enumerator.
    pub groupings_examined: u64,
    /// Candidate schedules evaluated.
    pub candidates_examined: u64,
    /// Feasible schedules yielded.
    pub solutions_found: u64,
}

/// Iterator over feasible schedules, in enumeration order.
#[derive(Debug, Clone)]
pub struct Solutions<'a> {
    groupings: Groupings<'a>,
    current: Option<BurstDescent<'a>>,
    evaluator: Evaluator,
    candidate_limit: Option<u64>,
    stats: SearchStats,
}

impl<'a> Solutions<'a> {
    /// Starts a search over `tasks` with the given daily capacity.
    pub fn new(tasks: &'a [Task], capacity: f64) -> Self {
        Self {
            groupings: Groupings::new(tasks),
            current: None,
            evaluator: Evaluator::new(capacity),
            candidate_limit: None,
            stats: SearchStats::default(),
        }
    }

    /// Stops the search after `limit` candidate schedules have been evaluated.
    pub fn with_candidate_limit(mut self, limit: u64) -> Self {
        self.candidate_limit = Some(limit);
        self
    }

    /// Counters so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Whether the candidate limit cut the search short.
    pub fn limit_reached(&self) -> bool {
        self.candidate_limit
            .is_some_and(|limit| self.stats.candidates_examined >= limit)
    }

    /// The evaluator in use.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    fn next_descent(&mut self) -> Option<BurstDescent<'a>> {
        let grouping = self.groupings.next()?;
        self.stats.groupings_examined += 1;
        debug!(
            size = grouping.len(),
            grouping = self.stats.groupings_examined,
            "examining grouping"
        );
        Some(BurstDescent::new(grouping))
    }
}

impl Iterator for Solutions<'_> {
    type Item = Schedule;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.limit_reached() {
                return None;
            }
            let candidate = match self.current.as_mut().and_then(|d| d.next()) {
                Some(candidate) => candidate,
                None => {
                    self.current = Some(self.next_descent()?);
                    continue;
                }
            };

            self.stats.candidates_examined += 1;
            let evaluation = self.evaluator.evaluate(&candidate);
            trace!(
                bursts = ?candidate.burst_counts(),
                total = evaluation.total,
                feasible = evaluation.feasible,
                "evaluated candidate"
            );
            if evaluation.feasible {
                self.stats.solutions_found += 1;
                return Some(candidate);
            }
        }
    }
}

/// All feasible schedules for `tasks` under `capacity`, lazily.
pub fn solutions(tasks: &[Task], capacity: f64) -> Solutions<'_> {
    Solutions::new(tasks, capacity)
}

/// The first feasible schedule, or `None` if no schedule fits.
pub fn first_feasible(tasks: &[Task], capacity: f64) -> Option<Schedule> {
    solutions(tasks, capacity).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, time: f64, bursts: u32) -> Task {
        Task::new(name, time, bursts).unwrap()
    }

    fn names(schedule: &Schedule) -> Vec<&str> {
        schedule.iter().map(|a| a.task.name()).collect()
    }

    #[test]
    fn test_prefers_larger_grouping() {
        let tasks = vec![task("A", 2.0, 1), task("B", 3.0, 1), task("C", 4.0, 1)];
        // A+B+C = 9 > 7; A+B = 5 fits.
        let schedule = first_feasible(&tasks, 7.0).unwrap();
        assert_eq!(names(&schedule), vec!["A", "B"]);
        assert_eq!(schedule.total(), 5.0);
    }

    #[test]
    fn test_descends_bursts_before_shrinking() {
        let tasks = vec![task("A", 6.0, 2), task("B", 4.0, 2)];
        // (2,2) = 10 > 7, (1,1) = 5 fits, before any single-task grouping.
        let schedule = first_feasible(&tasks, 7.0).unwrap();
        assert_eq!(schedule.burst_counts(), vec![1, 1]);
        assert_eq!(schedule.total(), 5.0);
    }

    #[test]
    fn test_all_yielded_are_feasible() {
        let tasks = vec![task("A", 5.0, 3), task("B", 4.0, 2), task("C", 6.0, 1)];
        let evaluator = Evaluator::new(7.0);
        let all: Vec<Schedule> = solutions(&tasks, 7.0).collect();
        assert!(!all.is_empty());
        assert!(all.iter().all(|s| evaluator.is_feasible(s)));
        assert!(all.windows(2).all(|w| w[0].len() >= w[1].len()));
    }

    #[test]
    fn test_restartable() {
        let tasks = vec![task("A", 5.0, 3), task("B", 4.0, 2), task("C", 6.0, 5)];
        let first: Vec<Schedule> = solutions(&tasks, 7.0).collect();
        let second: Vec<Schedule> = solutions(&tasks, 7.0).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_solution() {
        let tasks = vec![task("A", 8.0, 1), task("B", 9.0, 1)];
        let mut search = solutions(&tasks, 7.0);
        assert!(search.next().is_none());
        let stats = search.stats();
        assert_eq!(stats.groupings_examined, 3);
        assert_eq!(stats.candidates_examined, 3);
        assert_eq!(stats.solutions_found, 0);
    }

    #[test]
    fn test_stops_at_first() {
        let tasks = vec![task("A", 1.0, 1), task("B", 1.0, 1), task("C", 1.0, 1)];
        let mut search = solutions(&tasks, 7.0);
        assert!(search.next().is_some());
        let stats = search.stats();
        assert_eq!(stats.groupings_examined, 1);
        assert_eq!(stats.candidates_examined, 1);
    }

    #[test]
    fn test_candidate_limit() {
        let tasks = vec![task("A", 8.0, 1), task("B", 9.0, 1), task("C", 3.0, 1)];
        // Full enumeration would reach C alone at candidate 7.
        let mut search = solutions(&tasks, 7.0).with_candidate_limit(3);
        assert!(search.next().is_none());
        assert!(search.limit_reached());
        assert_eq!(search.stats().candidates_examined, 3);

        let mut unlimited = solutions(&tasks, 7.0);
        assert_eq!(unlimited.next().map(|s| s.total()), Some(3.0));
        assert!(!unlimited.limit_reached());
    }

    #[test]
    fn test_empty_tasks() {
        assert!(first_feasible(&[], 7.0).is_none());
        let mut search = solutions(&[], 7.0);
        assert!(search.next().is_none());
        assert_eq!(search.stats(), SearchStats::default());
    }
}
