//! Task lifecycle status and its transition rules.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a task.
///
/// `Overdue` marks an unfinished task whose deadline has passed; `Late` marks
/// a task that was completed after its deadline passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Open and within its deadline, if any.
    #[default]
    Active,
    /// Done on time.
    Completed,
    /// Open past its deadline.
    Overdue,
    /// Done after its deadline.
    Late,
}

impl TaskStatus {
    /// All statuses.
    pub const ALL: [Self; 4] = [Self::Active, Self::Completed, Self::Overdue, Self::Late];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
            Self::Late => "late",
        }
    }

    /// Returns `true` for statuses that count as done.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Completed | Self::Late)
    }

    /// Status reached by toggling completion.
    ///
    /// `deadline_passed` is `true` only when the task has a deadline and the
    /// current time is strictly after it. Toggling towards the state the task
    /// is already in leaves the status unchanged.
    #[must_use]
    pub const fn after_toggle(self, is_done: bool, deadline_passed: bool) -> Self {
        match (self, is_done) {
            (Self::Active, true) if deadline_passed => Self::Overdue,
            (Self::Active | Self::Overdue, true) if !deadline_passed => Self::Completed,
            (Self::Overdue, true) => Self::Late,
            (Self::Completed, false) if deadline_passed => Self::Overdue,
            (Self::Completed, false) => Self::Active,
            (Self::Late, false) => Self::Overdue,
            (unchanged, _) => unchanged,
        }
    }

    /// Status reached when an update changes the deadline.
    ///
    /// A new deadline resolves the deadline problem: `Late` becomes
    /// `Completed` and `Overdue` becomes `Active`.
    #[must_use]
    pub const fn after_deadline_edit(self) -> Self {
        match self {
            Self::Late => Self::Completed,
            Self::Overdue => Self::Active,
            unchanged => unchanged,
        }
    }

    /// Status reached by a deadline sweep, or `None` when the sweep leaves
    /// the task alone.
    #[must_use]
    pub const fn after_sweep(self, deadline_passed: bool) -> Option<Self> {
        match self {
            Self::Active if deadline_passed => Some(Self::Overdue),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            "late" => Ok(Self::Late),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
