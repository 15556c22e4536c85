//! Error bodies and status codes returned by the task router.

use std::sync::Arc;

use super::helpers::{app, create, id_of, send, send_request};
use crate::test_helpers::{SteppedClock, reference_now};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use eyre::ensure;
use rstest::rstest;
use serde_json::json;
use taskdeck::{
    api,
    task::{
        domain::{Task, TaskId, TaskSorting},
        ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
        services::TaskService,
    },
};
use uuid::Uuid;

/// Repository whose every call fails.
struct BrokenRepository;

fn outage() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("database is down"))
}

#[async_trait]
impl TaskRepository for BrokenRepository {
    async fn store(&self, _task: &Task) -> TaskRepositoryResult<()> {
        Err(outage())
    }

    async fn update(&self, _task: &Task) -> TaskRepositoryResult<()> {
        Err(outage())
    }

    async fn find_by_id(&self, _id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Err(outage())
    }

    async fn find_all(&self, _sorting: Option<TaskSorting>) -> TaskRepositoryResult<Vec<Task>> {
        Err(outage())
    }

    async fn delete(&self, _id: TaskId) -> TaskRepositoryResult<()> {
        Err(outage())
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_name_is_a_validation_error() -> eyre::Result<()> {
    let (router, _) = app();

    let (status, body) = send(&router, Method::POST, "/tasks", Some(json!({ "name": "  " }))).await?;

    ensure!(status == StatusCode::BAD_REQUEST);
    ensure!(
        body == json!({
            "code": "Validation",
            "statusCode": 400,
            "errors": { "name": "Name is required" }
        })
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_invalid_field_is_reported() -> eyre::Result<()> {
    let (router, _) = app();

    let (status, body) = send(
        &router,
        Method::POST,
        "/tasks",
        Some(json!({
            "deadline": "2020-01-01T00:00:00Z",
            "priority": "Urgent"
        })),
    )
    .await?;

    ensure!(status == StatusCode::BAD_REQUEST);
    ensure!(body["code"] == "Validation");
    ensure!(body["errors"]["name"] == "Name is required");
    ensure!(body["errors"]["deadline"] == "Deadline must be in the future");
    ensure!(
        body["errors"]["priority"]
            == "Unsupported priority \"Urgent\", expected one of Low, Medium, High, Critical"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_is_validated_before_lookup() -> eyre::Result<()> {
    let (router, _) = app();
    let uri = format!("/tasks/{}", Uuid::new_v4());

    let (status, body) = send(&router, Method::PUT, &uri, Some(json!({ "name": "" }))).await?;

    ensure!(status == StatusCode::BAD_REQUEST);
    ensure!(body["code"] == "Validation");
    Ok(())
}

#[rstest]
#[case::get(Method::GET, "")]
#[case::put(Method::PUT, "")]
#[case::delete(Method::DELETE, "")]
#[case::toggle(Method::PATCH, "/toggle")]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_is_not_found(#[case] method: Method, #[case] suffix: &str) -> eyre::Result<()> {
    let (router, _) = app();
    let uri = format!("/tasks/{}{suffix}", Uuid::new_v4());
    let body = if method == Method::PUT {
        Some(json!({ "name": "Anything" }))
    } else if method == Method::PATCH {
        Some(json!({ "isDone": true }))
    } else {
        None
    };

    let (status, response) = send(&router, method, &uri, body).await?;

    ensure!(status == StatusCode::NOT_FOUND);
    ensure!(
        response
            == json!({
                "code": "NotFound",
                "statusCode": 404,
                "errors": { "message": "Task not found" }
            })
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_identifier_is_an_invalid_request() -> eyre::Result<()> {
    let (router, _) = app();

    let (status, body) = send(&router, Method::GET, "/tasks/not-a-uuid", None).await?;

    ensure!(status == StatusCode::BAD_REQUEST);
    ensure!(body["code"] == "InvalidRequest");
    ensure!(body["errors"]["id"].is_string());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_sorting_key_is_an_invalid_request() -> eyre::Result<()> {
    let (router, _) = app();

    let (status, body) = send(&router, Method::GET, "/tasks?sorting=NameAsc", None).await?;

    ensure!(status == StatusCode::BAD_REQUEST);
    ensure!(body["code"] == "InvalidRequest");
    ensure!(body["statusCode"] == 400);
    ensure!(body["errors"]["sorting"] == "invalid sorting: \"NameAsc\"");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_json_is_an_invalid_request() -> eyre::Result<()> {
    let (router, _) = app();
    let task = create(&router, json!({ "name": "Paint fence" })).await?;
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(format!("/tasks/{}/toggle", id_of(&task)?))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"isDone\":"))?;

    let (status, body) = send_request(&router, request).await?;

    ensure!(status == StatusCode::BAD_REQUEST);
    ensure!(body["code"] == "InvalidRequest");
    ensure!(body["errors"]["body"].is_string());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn storage_failure_hides_detail() -> eyre::Result<()> {
    let service = TaskService::new(
        Arc::new(BrokenRepository),
        Arc::new(SteppedClock::at(reference_now())),
    );
    let router = api::router(service);

    let (status, body) = send(&router, Method::GET, "/tasks", None).await?;

    ensure!(status == StatusCode::INTERNAL_SERVER_ERROR);
    ensure!(
        body == json!({
            "code": "Internal",
            "statusCode": 500,
            "errors": { "message": "Internal Server Error" }
        })
    );
    Ok(())
}
