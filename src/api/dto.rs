//! Request and response bodies for the task endpoints.

use crate::task::{
    domain::{PriorityInput, Task, TaskId, TaskPriority, TaskSorting, TaskStatus},
    services::TaskRequest,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ApiError;

/// Body accepted by `POST /tasks` and `PUT /tasks/:id`.
///
/// A missing `name` is treated as empty so it surfaces as a validation
/// failure rather than a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// Task name, possibly carrying `!before` and `!N` directives.
    #[serde(default)]
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional explicit deadline.
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    /// Optional priority label such as `"High"`.
    #[serde(default)]
    pub priority: Option<String>,
}

impl From<TaskPayload> for TaskRequest {
    fn from(payload: TaskPayload) -> Self {
        let TaskPayload {
            name,
            description,
            deadline,
            priority,
        } = payload;

        let mut request = Self::new(name);
        if let Some(text) = description {
            request = request.with_description(text);
        }
        if let Some(at) = deadline {
            request = request.with_deadline(at);
        }
        if let Some(label) = priority {
            request = request.with_priority(PriorityInput::from_label(&label));
        }
        request
    }
}

/// Body accepted by `PATCH /tasks/:id/toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    /// Whether the task should be marked done.
    pub is_done: bool,
}

/// Query string accepted by `GET /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    /// One of the six sort keys, e.g. `DeadlineAsc`.
    pub sorting: Option<String>,
}

impl ListQuery {
    /// Resolves the requested sort key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for an unknown key.
    pub fn sorting(&self) -> Result<Option<TaskSorting>, ApiError> {
        self.sorting
            .as_deref()
            .map(TaskSorting::try_from)
            .transpose()
            .map_err(|err| ApiError::InvalidRequest("sorting".to_owned(), err.to_string()))
    }
}

/// Task as rendered to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: TaskId,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of the last change, if any.
    pub changed_at: Option<DateTime<Utc>>,
    /// Cleaned task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: TaskPriority,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            created_at: task.created_at(),
            changed_at: task.changed_at(),
            name: task.name().to_owned(),
            description: task.description().map(str::to_owned),
            deadline: task.deadline(),
            status: task.status(),
            priority: task.priority(),
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

/// Body returned by `POST /tasks`: the new task under a `task` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTaskResponse {
    /// The stored task.
    pub task: TaskResponse,
}

impl From<Task> for CreatedTaskResponse {
    fn from(task: Task) -> Self {
        Self { task: task.into() }
    }
}

/// Body returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the server is accepting requests.
    pub status: String,
}

impl HealthResponse {
    /// Healthy response.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_owned(),
        }
    }
}
