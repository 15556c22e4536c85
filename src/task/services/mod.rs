//! Application services for task orchestration and background sweeps.

mod deadline_sweep;
mod lifecycle;

pub use deadline_sweep::{DeadlineSweepHandle, DeadlineSweepScheduler};
pub use lifecycle::{
    CreateTaskRequest, SweepReport, TaskRequest, TaskService, TaskServiceError,
    TaskServiceResult, UpdateTaskRequest,
};
