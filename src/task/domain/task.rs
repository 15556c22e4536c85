//! Task aggregate root.

use super::{TaskId, TaskPriority, TaskStatus, ValidatedTaskFields};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    description: Option<String>,
    deadline: Option<DateTime<Utc>>,
    status: TaskStatus,
    priority: TaskPriority,
    created_at: DateTime<Utc>,
    changed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted name.
    pub name: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted deadline, if any.
    pub deadline: Option<DateTime<Utc>>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp, if the task was ever changed.
    pub changed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new active task from validated fields.
    #[must_use]
    pub fn new(
        fields: ValidatedTaskFields,
        description: Option<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            name: fields.name,
            description,
            deadline: fields.deadline,
            status: TaskStatus::Active,
            priority: fields.priority,
            created_at: clock.utc(),
            changed_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            deadline: data.deadline,
            status: data.status,
            priority: data.priority,
            created_at: data.created_at,
            changed_at: data.changed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp, or `None` if never changed.
    #[must_use]
    pub const fn changed_at(&self) -> Option<DateTime<Utc>> {
        self.changed_at
    }

    /// Overwrites the mutable fields from an update.
    ///
    /// When the update carries a deadline, the deadline problem counts as
    /// resolved: `Late` becomes `Completed` and `Overdue` becomes `Active`.
    pub fn revise(
        &mut self,
        fields: ValidatedTaskFields,
        description: Option<String>,
        clock: &impl Clock,
    ) {
        self.name = fields.name;
        self.description = description;
        self.priority = fields.priority;
        if fields.deadline.is_some() {
            self.status = self.status.after_deadline_edit();
        }
        self.deadline = fields.deadline;
        self.touch(clock.utc());
    }

    /// Marks the task done or not done, walking the status against the
    /// stored deadline.
    pub fn toggle(&mut self, is_done: bool, clock: &impl Clock) {
        let now = clock.utc();
        self.status = self
            .status
            .after_toggle(is_done, self.deadline_passed(now));
        self.touch(now);
    }

    /// Promotes an active task whose deadline has passed to `Overdue`.
    ///
    /// Returns `true` when the task changed.
    pub fn mark_overdue_if_due(&mut self, clock: &impl Clock) -> bool {
        let now = clock.utc();
        let Some(next) = self.status.after_sweep(self.deadline_passed(now)) else {
            return false;
        };
        self.status = next;
        self.touch(now);
        true
    }

    fn deadline_passed(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_some_and(|deadline| now > deadline)
    }

    const fn touch(&mut self, now: DateTime<Utc>) {
        self.changed_at = Some(now);
    }
}
