//! Request handlers for the task endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use mockable::Clock;
use uuid::Uuid;

use super::{
    ApiError,
    dto::{CreatedTaskResponse, ListQuery, TaskPayload, TaskResponse, ToggleRequest},
    routes::AppState,
};
use crate::task::{domain::TaskId, ports::TaskRepository};

type ApiResult<T> = Result<T, ApiError>;

fn task_id(path: Result<Path<Uuid>, PathRejection>) -> ApiResult<TaskId> {
    let Path(uuid) = path?;
    Ok(TaskId::from_uuid(uuid))
}

/// Create a task.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    body: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedTaskResponse>)>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(payload) = body?;
    let task = state.service.create_task(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// List tasks, optionally sorted.
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<TaskResponse>>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(list) = query?;
    let tasks = state.service.get_all_tasks(list.sorting()?).await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// Fetch a single task.
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = state.service.get_task(task_id(path)?).await?;
    Ok(Json(task.into()))
}

/// Replace a task's editable fields.
pub async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = task_id(path)?;
    let Json(payload) = body?;
    let task = state.service.update_task(id, payload.into()).await?;
    Ok(Json(task.into()))
}

/// Mark a task done or not done.
pub async fn toggle_task<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<ToggleRequest>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = task_id(path)?;
    let Json(ToggleRequest { is_done }) = body?;
    let task = state.service.toggle_task_status(id, is_done).await?;
    Ok(Json(task.into()))
}

/// Delete a task.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<StatusCode>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.service.delete_task(task_id(path)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
