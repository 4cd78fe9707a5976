//! Subset enumeration over the task list.
//!
//! # Order
//! Largest groupings first: every subset of size `L`, then `L-1`, down
//! to single tasks. Within one size, subsets come in lexicographic order
//! of their original indices, and each subset keeps the relative order
//! of the task list. The empty subset is never produced.
//!
//! # Complexity
//! `2^L - 1` groupings in total; each step is O(k) for a subset of size k.
//!
//! # Reference
//! Knuth (2011), "The Art of Computer Programming", Vol. 4A, §7.2.1.3,
//! Algorithm L (lexicographic combinations)

use crate::models::Task;

/// A non-empty subset of the task list, in original order.
pub type Grouping<'a> = Vec<&'a Task>;

/// Lexicographic k-combinations of `0..n`.
///
/// Yields nothing when `k == 0` or `k > n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    /// Creates the combination cursor for choosing `k` out of `n`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k == 0 || k > n,
        }
    }

    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // Rightmost position that has not reached its final value.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + self.n - k) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started && !self.advance() {
            self.done = true;
            return None;
        }
        self.started = true;
        Some(self.indices.clone())
    }
}

/// Lazy sequence of groupings in descending size order.
#[derive(Debug, Clone)]
pub struct Groupings<'a> {
    tasks: &'a [Task],
    size: usize,
    current: Combinations,
}

impl<'a> Groupings<'a> {
    /// Starts enumeration over `tasks`. An empty list yields nothing.
    pub fn new(tasks: &'a [Task]) -> Self {
        let size = tasks.len();
        Self {
            tasks,
            size,
            current: Combinations::new(tasks.len(), size),
        }
    }

    /// Size of the groupings currently being produced.
    pub fn current_size(&self) -> usize {
        self.size
    }
}

impl<'a> Iterator for Groupings<'a> {
    type Item = Grouping<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tasks = self.tasks;
        while self.size > 0 {
            if let Some(indices) = self.current.next() {
                return Some(indices.into_iter().map(|i| &tasks[i]).collect());
            }
            self.size -= 1;
            self.current = Combinations::new(self.tasks.len(), self.size);
        }
        None
    }
}

/// Enumerates every non-empty subset of `tasks`, largest first.
pub fn groupings(tasks: &[Task]) -> Groupings<'_> {
    Groupings::new(tasks)
}

/// Number of groupings produced for `n` tasks: `2^n - 1`, saturating.
pub fn grouping_count(n: usize) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}
