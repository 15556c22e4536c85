//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub id: uuid::Uuid,
    /// Task name.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub name: String,
    /// Optional description.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    pub description: Option<String>,
    /// Optional deadline.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Timestamptz>)]
    pub deadline: Option<DateTime<Utc>>,
    /// Lifecycle status.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub status: String,
    /// Priority level.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub priority: String,
    /// Creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Timestamptz>)]
    pub changed_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Lifecycle status.
    pub status: String,
    /// Priority level.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub changed_at: Option<DateTime<Utc>>,
}

/// Changeset for the mutable task columns.
///
/// `None` clears the column, so a deadline removed by an update is persisted.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Lifecycle status.
    pub status: String,
    /// Priority level.
    pub priority: String,
    /// Latest mutation timestamp.
    pub changed_at: Option<DateTime<Utc>>,
}
