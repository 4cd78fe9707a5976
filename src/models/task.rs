//! Task model.
//!
//! A task is a unit of work with a total duration (hours) that can be
//! split into up to `bursts` equal pieces within one day.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::{check_task, ValidationError};

/// A divisible unit of work.
///
/// Immutable once built. The constructor enforces `time > 0` and
/// `bursts >= 1`, and deserialization runs through the same check, so a
/// `Task` value is always safe to evaluate.
///
/// # Cost Model
/// One burst costs `time / bursts` hours; running `n` bursts costs
/// `n * time / bursts`. Running every burst costs exactly `time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord", into = "TaskRecord")]
pub struct Task {
    name: String,
    time: f64,
    bursts: u32,
}

/// Wire shape of a task, validated on conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TaskRecord {
    name: String,
    time: f64,
    bursts: u32,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        Task::new(record.name, record.time, record.bursts)
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self {
            name: task.name,
            time: task.time,
            bursts: task.bursts,
        }
    }
}

impl Task {
    /// Creates a task.
    ///
    /// # Errors
    /// `InvalidTime` if `time` is not a positive finite number,
    /// `InvalidBursts` if `bursts` is zero.
    pub fn new(name: impl Into<String>, time: f64, bursts: u32) -> Result<Self, ValidationError> {
        let name = name.into();
        check_task(&name, time, bursts)?;
        Ok(Self { name, time, bursts })
    }

    /// Display label. Not required to be unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hours needed to complete the whole task.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Maximum number of equal pieces the task splits into per day.
    pub fn bursts(&self) -> u32 {
        self.bursts
    }

    /// Hours per burst.
    #[inline]
    pub fn burst_time(&self) -> f64 {
        self.time / f64::from(self.bursts)
    }

    /// Hours spent running `n` bursts.
    #[inline]
    pub fn cost(&self, n: u32) -> f64 {
        f64::from(n) * self.time / f64::from(self.bursts)
    }

    /// Whether the task can only run whole or not at all.
    pub fn is_atomic(&self) -> bool {
        self.bursts == 1
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{} hours ({} bursts)",
            self.name, self.time, self.bursts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_task_new() {
        let task = Task::new("Write report", 3.0, 2).unwrap();
        assert_eq!(task.name(), "Write report");
        assert_eq!(task.time(), 3.0);
        assert_eq!(task.bursts(), 2);
        assert!(!task.is_atomic());
    }

    #[test]
    fn test_task_rejects_invalid() {
        let err = Task::new("A", 0.0, 1).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidTime);

        let err = Task::new("A", 1.0, 0).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidBursts);
    }

    #[test]
    fn test_task_cost() {
        let task = Task::new("A", 7.0, 2).unwrap();
        assert_eq!(task.burst_time(), 3.5);
        assert_eq!(task.cost(1), 3.5);
        assert_eq!(task.cost(2), 7.0);
        assert_eq!(task.cost(0), 0.0);
    }

    #[test]
    fn test_full_bursts_cost_whole_time() {
        for bursts in 1..=9 {
            let task = Task::new("A", 5.0, bursts).unwrap();
            assert!((task.cost(bursts) - task.time()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_task_display() {
        let task = Task::new("Email", 1.5, 3).unwrap();
        assert_eq!(task.to_string(), "Email\t1.5 hours (3 bursts)");
    }

    #[test]
    fn test_task_serde_roundtrip() {
        let task = Task::new("A", 4.0, 2).unwrap();
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"name":"A","time":4.0,"bursts":2}"#);
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_task_deserialize_rejects_invalid() {
        let result: Result<Task, _> = serde_json::from_str(r#"{"name":"A","time":-2,"bursts":1}"#);
        assert!(result.is_err());

        let result: Result<Task, _> = serde_json::from_str(r#"{"name":"A","time":2,"bursts":0}"#);
        assert!(result.is_err());
    }
}
