//! Error types for burst planning.

use crate::validation::ValidationError;

/// Top-level error type.
///
/// The search itself never fails; these errors come from building
/// inputs (tasks, configuration) and from the task sources.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// A task or setting broke an invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Task list could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, PlanError>;
