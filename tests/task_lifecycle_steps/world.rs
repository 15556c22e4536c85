//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{SteppedClock, reference_now};
use rstest::fixture;
use taskdeck::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, SteppedClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub service: TestTaskService,
    pub clock: SteppedClock,
    pub last_task: Option<Task>,
    pub last_error: Option<TaskServiceError>,
}

impl TaskLifecycleWorld {
    /// Creates a world with an empty board and a pinned clock.
    #[must_use]
    pub fn new() -> Self {
        let clock = SteppedClock::at(reference_now());
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(clock.clone()),
        );

        Self {
            service,
            clock,
            last_task: None,
            last_error: None,
        }
    }

    /// Returns the task the scenario is working with.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn current_task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Records the outcome of a service call.
    pub fn record(&mut self, result: Result<Task, TaskServiceError>) {
        match result {
            Ok(task) => {
                self.last_task = Some(task);
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(err),
        }
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
