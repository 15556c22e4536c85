//! Task priority levels.

use super::ParseTaskPriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority of a task.
///
/// Variants are declared in ascending rank, so the derived ordering ranks
/// `Low < Medium < High < Critical`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Default priority for tasks created without one.
    #[default]
    Medium,
    /// Should be handled soon.
    High,
    /// Must be handled first.
    Critical,
}

impl TaskPriority {
    /// All priorities in ascending rank.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Returns the human-facing label used on the HTTP boundary.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Priority as supplied by a caller, before validation.
///
/// Callers on the HTTP boundary send free-form strings; an unrecognised value
/// is carried through to validation so it is reported alongside every other
/// field failure instead of rejecting the request early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorityInput {
    /// A recognised priority.
    Known(TaskPriority),
    /// A value that names no priority.
    Unrecognised(String),
}

impl PriorityInput {
    /// Interprets a raw priority label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        TaskPriority::try_from(label)
            .map_or_else(|_| Self::Unrecognised(label.to_owned()), Self::Known)
    }
}

impl From<TaskPriority> for PriorityInput {
    fn from(priority: TaskPriority) -> Self {
        Self::Known(priority)
    }
}
