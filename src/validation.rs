//! Input validation for burst planning.
//!
//! Checks the invariants the search relies on before any enumeration
//! starts. Detects:
//! - Non-positive or non-finite task times
//! - Tasks that cannot be split into at least one burst
//! - Non-positive or non-finite daily capacities
//! - Empty or out-of-range synthetic generator settings
//!
//! Invalid values are rejected at construction, so the feasibility
//! arithmetic (`n * time / bursts`) never divides by zero.

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Task time is zero, negative, or not a finite number.
    InvalidTime,
    /// Task burst count is below one.
    InvalidBursts,
    /// Daily capacity is zero, negative, or not a finite number.
    InvalidCapacity,
    /// Synthetic generator ranges are empty or cannot produce valid tasks.
    InvalidGenerator,
}

impl ValidationErrorKind {
    /// Whether this kind describes a malformed task.
    pub fn is_task_error(self) -> bool {
        matches!(self, Self::InvalidTime | Self::InvalidBursts)
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::InvalidTime => "invalid task time",
            Self::InvalidBursts => "invalid task bursts",
            Self::InvalidCapacity => "invalid capacity",
            Self::InvalidGenerator => "invalid generator",
        };
        f.write_str(label)
    }
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks the raw fields of a task.
///
/// Returns the first violated invariant. `time` must be finite and
/// strictly positive, `bursts` must be at least one.
pub fn check_task(name: &str, time: f64, bursts: u32) -> Result<(), ValidationError> {
    if !time.is_finite() || time <= 0.0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidTime,
            format!("Task '{name}' has time {time}, expected a positive number of hours"),
        ));
    }
    if bursts < 1 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidBursts,
            format!("Task '{name}' has {bursts} bursts, expected at least 1"),
        ));
    }
    Ok(())
}

/// Checks a daily capacity value.
pub fn check_capacity(capacity: f64) -> Result<(), ValidationError> {
    if !capacity.is_finite() || capacity <= 0.0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidCapacity,
            format!("Daily capacity {capacity} must be a positive number of hours"),
        ));
    }
    Ok(())
}
