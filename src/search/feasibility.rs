//! Feasibility test against the daily capacity.
//!
//! A schedule is a knapsack packing with fractional item sizes
//! (`n * time / bursts`); feasibility is the capacity constraint alone.
//!
//! # Reference
//! Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", Ch. 1

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Total hours of a schedule and whether they fit the capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Sum of `n * time / bursts` over the schedule.
    pub total: f64,
    /// `total <= capacity`.
    pub feasible: bool,
}

impl Evaluation {
    /// Hours left over (negative when over capacity).
    pub fn slack(&self, capacity: f64) -> f64 {
        capacity - self.total
    }
}

/// Evaluates schedules against a fixed daily capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    capacity: f64,
}

impl Evaluator {
    /// Creates an evaluator for `capacity` hours.
    pub fn new(capacity: f64) -> Self {
        Self { capacity }
    }

    /// The capacity compared against.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Computes the total and the feasibility flag.
    pub fn evaluate(&self, schedule: &Schedule) -> Evaluation {
        let total = schedule.total();
        Evaluation {
            total,
            feasible: total <= self.capacity,
        }
    }

    /// Whether the schedule fits.
    #[inline]
    pub fn is_feasible(&self, schedule: &Schedule) -> bool {
        self.evaluate(schedule).feasible
    }
}
