//! Error types for task domain validation and parsing.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing a task listing sort key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid sorting: {0:?}")]
pub struct ParseTaskSortingError(pub String);

/// Field-level failures collected while validating a task proposal.
///
/// Every violated field is reported; validation never stops at the first
/// failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskValidationError {
    errors: BTreeMap<String, String>,
}

impl TaskValidationError {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records a message against a field, replacing any earlier message.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Returns `true` when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the message recorded for `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Returns all field messages keyed by field name.
    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Consumes the error, returning the field messages.
    #[must_use]
    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("task validation failed")?;
        for (index, (field, message)) in self.errors.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for TaskValidationError {}
