//! Task lifecycle management.
//!
//! Tasks carry a name, optional description and deadline, a priority, and a
//! status driven by a small state machine: completion toggles, deadline edits
//! and a periodic deadline sweep move tasks between `Active`, `Completed`,
//! `Overdue` and `Late`. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
