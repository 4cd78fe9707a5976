//! Seeded random task generation.
//!
//! Draws a task count from `min_tasks..=max_tasks`, then for each task a
//! short name, a whole number of hours in `1..=capacity`, and a burst
//! count in `1..=max_bursts`. The same seed and settings always produce
//! the same list.

use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::TaskSource;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::models::Task;
use crate::validation::check_capacity;

/// Longest generated task name, in characters.
pub const MAX_NAME_CHARS: usize = 20;

const WORDS: &[&str] = &[
    "review", "draft", "plan", "call", "email", "budget", "design", "test", "deploy", "read",
    "write", "fix", "sync", "notes", "report", "audit", "sketch", "triage", "backlog", "demo",
    "invoice", "study", "refactor", "outline", "survey", "train",
];

/// Random task source.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    seed: u64,
    rng: SmallRng,
    generator: GeneratorConfig,
    capacity: f64,
}

impl SyntheticSource {
    /// Creates a source for the given seed, ranges and daily capacity.
    ///
    /// Ranges are checked when [`TaskSource::tasks`] runs.
    pub fn new(seed: u64, generator: GeneratorConfig, capacity: f64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
            generator,
            capacity,
        }
    }

    /// The seed this source was built with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn random_name(&mut self) -> String {
        let words = self.rng.random_range(1..=3);
        let mut name = String::new();
        for _ in 0..words {
            let Some(word) = WORDS.choose(&mut self.rng) else {
                break;
            };
            let sep = usize::from(!name.is_empty());
            // Leave room for the closing period.
            if name.len() + sep + word.len() + 1 > MAX_NAME_CHARS {
                break;
            }
            if sep == 1 {
                name.push(' ');
            }
            name.push_str(word);
        }
        let mut chars = name.chars();
        let mut name: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::from("Task"),
        };
        name.push('.');
        name
    }
}

impl TaskSource for SyntheticSource {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn tasks(&mut self) -> Result<Vec<Task>> {
        check_capacity(self.capacity)?;
        self.generator.validate(self.capacity)?;
        let count = self
            .rng
            .random_range(self.generator.min_tasks..=self.generator.max_tasks);
        let max_hours = self.capacity.floor() as u32;

        let mut tasks = Vec::with_capacity(count);
        for _ in 0..count {
            let name = self.random_name();
            let hours = self.rng.random_range(1..=max_hours);
            let bursts = self.rng.random_range(1..=self.generator.max_bursts);
            tasks.push(Task::new(name, f64::from(hours), bursts)?);
        }
        debug!(seed = self.seed, count, "generated synthetic tasks");
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_deterministic_for_seed() {
        let a = SyntheticSource::new(42, GeneratorConfig::default(), 7.0)
            .tasks()
            .unwrap();
        let b = SyntheticSource::new(42, GeneratorConfig::default(), 7.0)
            .tasks()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ranges_respected() {
        let generator = GeneratorConfig::default();
        for seed in 0..200 {
            let tasks = SyntheticSource::new(seed, generator.clone(), 7.0)
                .tasks()
                .unwrap();
            assert!((2..=4).contains(&tasks.len()));
            for task in &tasks {
                assert!(task.time() >= 1.0 && task.time() <= 7.0);
                assert_eq!(task.time().fract(), 0.0);
                assert!((1..=5).contains(&task.bursts()));
                assert!(!task.name().is_empty());
                assert!(task.name().chars().count() <= MAX_NAME_CHARS);
            }
        }
    }

    #[test]
    fn test_fixed_count() {
        let generator = GeneratorConfig {
            min_tasks: 3,
            max_tasks: 3,
            max_bursts: 1,
        };
        let tasks = SyntheticSource::new(9, generator, 4.0).tasks().unwrap();
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(Task::is_atomic));
    }

    #[test]
    fn test_invalid_generator() {
        let generator = GeneratorConfig {
            min_tasks: 0,
            max_tasks: 2,
            max_bursts: 3,
        };
        let err = SyntheticSource::new(1, generator, 7.0).tasks().unwrap_err();
        match err {
            PlanError::Validation(e) => assert_eq!(e.kind, ValidationErrorKind::InvalidGenerator),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_seed_accessor() {
        let source = SyntheticSource::new(123, GeneratorConfig::default(), 7.0);
        assert_eq!(source.seed(), 123);
        assert_eq!(source.name(), "synthetic");
    }
}
