//! Text and JSON rendering of planning results.
//!
//! # Text Format
//!
//! ```text
//! 2 tasks
//! Review.		3 (1)
//! Draft notes.		5 (1)
//!
//! Review.	1
//! -----------------------------
//! TOTAL: 3.0 (4.0 left)
//!
//! ```
//!
//! With no feasible schedule the outcome block is `No solutions` followed
//! by an empty line. Totals always carry a fractional part (`3.0`) and use
//! the shortest round-trip float formatting, so the chosen total can be
//! parsed back exactly. Task times are printed as given (`3`, `5.5`).

use std::fmt::Write;

use crate::error::Result;
use crate::models::Task;
use crate::planner::{Outcome, PlanReport};

/// Separator between the schedule lines and the total.
pub const SEPARATOR: &str = "-----------------------------";

/// Renders the task list: a count line, one line per task, a blank line.
pub fn render_tasks(tasks: &[Task]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} tasks", tasks.len());
    for task in tasks {
        let _ = writeln!(out, "{}\t\t{} ({})", task.name(), task.time(), task.bursts());
    }
    out.push('\n');
    out
}

/// Renders the chosen schedule and its total, or `No solutions`.
pub fn render_outcome(report: &PlanReport) -> String {
    let mut out = String::new();
    match &report.outcome {
        Outcome::Feasible { schedule, total } => {
            for assignment in schedule {
                let _ = writeln!(out, "{}\t{}", assignment.task.name(), assignment.bursts);
            }
            let _ = writeln!(out, "{SEPARATOR}");
            let _ = writeln!(
                out,
                "TOTAL: {:?} ({:?} left)",
                total,
                report.capacity - total
            );
        }
        Outcome::NoSolution => {
            out.push_str("No solutions\n");
        }
    }
    out.push('\n');
    out
}

/// Renders the full report as pretty-printed JSON.
pub fn render_json(report: &PlanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
