//! Service layer orchestrating task creation, listing, updates and status
//! changes.

use crate::task::{
    domain::{
        NameMacros, PriorityInput, Task, TaskId, TaskSorting, TaskValidationError, validate_task,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating or updating a task.
///
/// The name may carry `!before` and `!N` directives; explicit deadline and
/// priority values take precedence over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    name: String,
    description: Option<String>,
    deadline: Option<DateTime<Utc>>,
    priority: Option<PriorityInput>,
}

/// Request payload for creating a task.
pub type CreateTaskRequest = TaskRequest;

/// Request payload for updating a task.
pub type UpdateTaskRequest = TaskRequest;

impl TaskRequest {
    /// Creates a request with the required name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deadline: None,
            priority: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets an explicit deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets an explicit priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<PriorityInput>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// One or more fields failed validation.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Outcome of one deadline sweep pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Tasks loaded for the pass.
    pub examined: usize,
    /// Tasks moved to `Overdue` and persisted.
    pub promoted: usize,
    /// Tasks whose promotion could not be persisted.
    pub failed: usize,
}

/// Task orchestration service.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    async fn find_task_or_error(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))
    }

    /// Creates a new active task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the resolved fields are
    /// invalid, or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let parsed = NameMacros::parse(&request.name, request.deadline, request.priority);
        let fields = validate_task(parsed, self.clock.utc())?;
        let task = Task::new(fields, request.description, &*self.clock);
        self.repository.store(&task).await?;
        debug!(task_id = %task.id(), "created task");
        Ok(task)
    }

    /// Lists every task, optionally sorted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_all_tasks(&self, sorting: Option<TaskSorting>) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_all(sorting).await?)
    }

    /// Retrieves a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the given ID,
    /// or [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_task(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        self.find_task_or_error(task_id).await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the given ID,
    /// or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete_task(&self, task_id: TaskId) -> TaskServiceResult<()> {
        self.find_task_or_error(task_id).await?;
        self.repository.delete(task_id).await?;
        debug!(%task_id, "deleted task");
        Ok(())
    }

    /// Replaces the mutable fields of a task.
    ///
    /// The proposal is validated before the task is looked up. When the
    /// update carries a deadline, `Overdue` resets to `Active` and `Late`
    /// resets to `Completed`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the resolved fields are
    /// invalid, [`TaskServiceError::NotFound`] when no task has the given ID,
    /// or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update_task(
        &self,
        task_id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let parsed = NameMacros::parse(&request.name, request.deadline, request.priority);
        let fields = validate_task(parsed, self.clock.utc())?;

        let mut task = self.find_task_or_error(task_id).await?;
        task.revise(fields, request.description, &*self.clock);
        self.repository.update(&task).await?;
        debug!(%task_id, status = %task.status(), "updated task");
        Ok(task)
    }

    /// Marks a task done or not done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the given ID,
    /// or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn toggle_task_status(
        &self,
        task_id: TaskId,
        is_done: bool,
    ) -> TaskServiceResult<Task> {
        let mut task = self.find_task_or_error(task_id).await?;
        task.toggle(is_done, &*self.clock);
        self.repository.update(&task).await?;
        debug!(%task_id, is_done, status = %task.status(), "toggled task");
        Ok(task)
    }

    /// Moves every active task whose deadline has passed to `Overdue`.
    ///
    /// Failures are logged rather than returned: a failed listing ends the
    /// pass early, and a failed update skips only that task.
    pub async fn update_task_statuses(&self) -> SweepReport {
        let tasks = match self.repository.find_all(None).await {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(error = %err, "deadline sweep could not load tasks");
                return SweepReport::default();
            }
        };

        let mut report = SweepReport {
            examined: tasks.len(),
            ..SweepReport::default()
        };
        for mut task in tasks {
            if !task.mark_overdue_if_due(&*self.clock) {
                continue;
            }
            match self.repository.update(&task).await {
                Ok(()) => report.promoted += 1,
                Err(err) => {
                    report.failed += 1;
                    warn!(task_id = %task.id(), error = %err, "deadline sweep could not update task");
                }
            }
        }

        if report.promoted > 0 || report.failed > 0 {
            info!(
                examined = report.examined,
                promoted = report.promoted,
                failed = report.failed,
                "deadline sweep finished"
            );
        } else {
            debug!(examined = report.examined, "deadline sweep found nothing overdue");
        }
        report
    }
}
