//! taskdeck: a to-do task service with deadline tracking.
//!
//! Tasks carry a name, optional description, deadline and priority. Names may
//! embed `!before DD.MM.YYYY` and `!1`..`!4` directives that set the deadline
//! and priority. A background sweep moves active tasks past their deadline to
//! `Overdue`.
//!
//! # Architecture
//!
//! taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Task state, validation and directive parsing
//! - **Ports**: The storage trait the service depends on
//! - **Adapters**: In-memory and `PostgreSQL` storage
//! - **Services**: Task operations and the deadline sweep scheduler
//!
//! # Modules
//!
//! - [`task`]: Task domain, storage and services
//! - [`api`]: JSON HTTP endpoints over the task service
//! - [`config`]: Environment-driven runtime configuration

pub mod api;
pub mod config;
pub mod task;
