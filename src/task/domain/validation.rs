//! Validation gate applied to every task proposal before persistence.

use super::{ParsedTaskName, PriorityInput, TaskPriority, TaskValidationError};
use chrono::{DateTime, Utc};

/// Field key for name failures.
pub const NAME_FIELD: &str = "name";
/// Field key for deadline failures.
pub const DEADLINE_FIELD: &str = "deadline";
/// Field key for priority failures.
pub const PRIORITY_FIELD: &str = "priority";

/// Task fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTaskFields {
    /// Non-empty task name.
    pub name: String,
    /// Deadline that lay strictly in the future when validated.
    pub deadline: Option<DateTime<Utc>>,
    /// Resolved priority, `Medium` when none was given.
    pub priority: TaskPriority,
}

/// Validates a resolved task proposal against `now`.
///
/// # Errors
///
/// Returns [`TaskValidationError`] carrying one message per violated field
/// when the name is empty, the deadline is not strictly after `now`, or the
/// priority names no known level.
pub fn validate_task(
    draft: ParsedTaskName,
    now: DateTime<Utc>,
) -> Result<ValidatedTaskFields, TaskValidationError> {
    let mut error = TaskValidationError::new();

    let name = draft.name.trim().to_owned();
    if name.is_empty() {
        error.add(NAME_FIELD, "Name is required");
    }

    if draft.deadline.is_some_and(|deadline| deadline <= now) {
        error.add(DEADLINE_FIELD, "Deadline must be in the future");
    }

    let priority = match draft.priority {
        None => TaskPriority::default(),
        Some(PriorityInput::Known(priority)) => priority,
        Some(PriorityInput::Unrecognised(raw)) => {
            error.add(
                PRIORITY_FIELD,
                format!("Unsupported priority {raw:?}, expected one of Low, Medium, High, Critical"),
            );
            TaskPriority::default()
        }
    };

    if !error.is_empty() {
        return Err(error);
    }

    Ok(ValidatedTaskFields {
        name,
        deadline: draft.deadline,
        priority,
    })
}
