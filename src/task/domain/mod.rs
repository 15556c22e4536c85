//! Domain model for task lifecycle management.
//!
//! The task domain covers name directive parsing, validation, and the status
//! state machine while keeping all infrastructure concerns outside of the
//! domain boundary.

mod error;
mod ids;
mod name_macro;
mod priority;
mod sorting;
mod status;
mod task;
mod validation;

pub use error::{
    ParseTaskPriorityError, ParseTaskSortingError, ParseTaskStatusError, TaskValidationError,
};
pub use ids::TaskId;
pub use name_macro::{NameMacros, ParsedTaskName};
pub use priority::{PriorityInput, TaskPriority};
pub use sorting::TaskSorting;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
pub use validation::{
    DEADLINE_FIELD, NAME_FIELD, PRIORITY_FIELD, ValidatedTaskFields, validate_task,
};
