//! Sort keys accepted when listing tasks.

use super::{ParseTaskSortingError, Task};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Ordering requested for a task listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskSorting {
    /// Oldest first.
    CreateAsc,
    /// Newest first.
    CreateDesc,
    /// `Low` first.
    PriorityAsc,
    /// `Critical` first.
    PriorityDesc,
    /// Tasks without a deadline first, then earliest deadline.
    DeadlineAsc,
    /// Latest deadline first, tasks without a deadline last.
    DeadlineDesc,
}

impl TaskSorting {
    /// Returns the literal key used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateAsc => "CreateAsc",
            Self::CreateDesc => "CreateDesc",
            Self::PriorityAsc => "PriorityAsc",
            Self::PriorityDesc => "PriorityDesc",
            Self::DeadlineAsc => "DeadlineAsc",
            Self::DeadlineDesc => "DeadlineDesc",
        }
    }

    /// Compares two tasks under this ordering.
    ///
    /// Intended for stable sorts, so ties keep storage order.
    #[must_use]
    pub fn compare(self, left: &Task, right: &Task) -> Ordering {
        match self {
            Self::CreateAsc => left.created_at().cmp(&right.created_at()),
            Self::CreateDesc => right.created_at().cmp(&left.created_at()),
            Self::PriorityAsc => left.priority().cmp(&right.priority()),
            Self::PriorityDesc => right.priority().cmp(&left.priority()),
            // `None` orders before `Some`, which gives nulls-first ascending
            // and nulls-last descending.
            Self::DeadlineAsc => left.deadline().cmp(&right.deadline()),
            Self::DeadlineDesc => right.deadline().cmp(&left.deadline()),
        }
    }
}

impl fmt::Display for TaskSorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskSorting {
    type Error = ParseTaskSortingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "CreateAsc" => Ok(Self::CreateAsc),
            "CreateDesc" => Ok(Self::CreateDesc),
            "PriorityAsc" => Ok(Self::PriorityAsc),
            "PriorityDesc" => Ok(Self::PriorityDesc),
            "DeadlineAsc" => Ok(Self::DeadlineAsc),
            "DeadlineDesc" => Ok(Self::DeadlineDesc),
            _ => Err(ParseTaskSortingError(value.to_owned())),
        }
    }
}
