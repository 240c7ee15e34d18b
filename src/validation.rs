//! Input validation for process batches.
//!
//! Checks the preconditions every discipline relies on before a simulation
//! starts. Detects:
//! - Empty batches
//! - Zero burst times
//! - Duplicate ids
//! - Ids outside `1..=N`
//!
//! With N processes, "every id in `1..=N`" plus "no duplicates" together
//! force the id set to be exactly `{1..N}`, so contiguity needs no
//! separate check.

use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The batch contains no processes.
    EmptyBatch,
    /// A process needs zero CPU ticks.
    ZeroBurst,
    /// Two processes share an id.
    DuplicateId,
    /// An id falls outside `1..=N`.
    IdOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. The batch is non-empty
/// 2. Every burst time is at least 1
/// 3. Every id lies in `1..=N`
/// 4. No id appears twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyBatch,
            "process batch is empty",
        )]);
    }

    let mut errors = Vec::new();
    let n = processes.len();
    let mut seen = vec![false; n];

    for p in processes {
        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("process {} has zero burst time", p.id),
            ));
        }

        if p.id == 0 || p.id as usize > n {
            errors.push(ValidationError::new(
                ValidationErrorKind::IdOutOfRange,
                format!("process id {} outside 1..={n}", p.id),
            ));
        } else if seen[p.id as usize - 1] {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate process id {}", p.id),
            ));
        } else {
            seen[p.id as usize - 1] = true;
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
