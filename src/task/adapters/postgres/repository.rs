//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskPriority, TaskSorting, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema for the `tasks` table, applied idempotently at startup.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_tasks/up.sql");

const SELECT_TASKS_SQL: &str = concat!(
    "SELECT id, name, description, deadline, status, priority, created_at, changed_at ",
    "FROM tasks",
);

const PRIORITY_RANK_SQL: &str = concat!(
    "CASE priority ",
    "WHEN 'low' THEN 1 ",
    "WHEN 'medium' THEN 2 ",
    "WHEN 'high' THEN 3 ",
    "WHEN 'critical' THEN 4 ",
    "END",
);

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `tasks` table and its indexes when missing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when a connection cannot
    /// be obtained or the schema statements fail.
    pub async fn apply_schema(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_TASKS_SQL)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(task_id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_all(&self, sorting: Option<TaskSorting>) -> TaskRepositoryResult<Vec<Task>> {
        let query = match sorting {
            Some(ordering) => format!("{SELECT_TASKS_SQL} ORDER BY {}", order_clause(ordering)),
            None => SELECT_TASKS_SQL.to_owned(),
        };

        self.run_blocking(move |connection| {
            let rows = diesel::sql_query(query)
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

/// Returns the `ORDER BY` body for a sort key.
///
/// Only fixed fragments are produced; no caller input reaches the SQL text.
fn order_clause(sorting: TaskSorting) -> String {
    match sorting {
        TaskSorting::CreateAsc => "created_at".to_owned(),
        TaskSorting::CreateDesc => "created_at DESC".to_owned(),
        TaskSorting::PriorityAsc => PRIORITY_RANK_SQL.to_owned(),
        TaskSorting::PriorityDesc => format!("{PRIORITY_RANK_SQL} DESC"),
        TaskSorting::DeadlineAsc => "deadline NULLS FIRST".to_owned(),
        TaskSorting::DeadlineDesc => "deadline DESC NULLS LAST".to_owned(),
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        name: task.name().to_owned(),
        description: task.description().map(str::to_owned),
        deadline: task.deadline(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        created_at: task.created_at(),
        changed_at: task.changed_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        name: task.name().to_owned(),
        description: task.description().map(str::to_owned),
        deadline: task.deadline(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        changed_at: task.changed_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        name,
        description,
        deadline,
        status: persisted_status,
        priority: persisted_priority,
        created_at,
        changed_at,
    } = row;

    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;
    let priority = TaskPriority::try_from(persisted_priority.as_str())
        .map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        name,
        description,
        deadline,
        status,
        priority,
        created_at,
        changed_at,
    }))
}
