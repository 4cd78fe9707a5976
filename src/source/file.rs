//! JSON task list source.
//!
//! ```json
//! [
//!   { "name": "Review", "time": 3, "bursts": 1 },
//!   { "name": "Draft",  "time": 5, "bursts": 2 }
//! ]
//! ```
//!
//! Each record is validated while parsing; one bad record rejects the file.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::TaskSource;
use crate::error::Result;
use crate::models::Task;

/// Reads tasks from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses a JSON task list.
    pub fn parse(content: &str) -> Result<Vec<Task>> {
        Ok(serde_json::from_str(content)?)
    }
}

impl TaskSource for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    fn tasks(&mut self) -> Result<Vec<Task>> {
        let content = std::fs::read_to_string(&self.path)?;
        let tasks = Self::parse(&content)?;
        if tasks.is_empty() {
            warn!(path = %self.path.display(), "task file is empty");
        }
        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }
}
