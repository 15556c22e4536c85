//! Successful requests against every task endpoint.

use super::helpers::{app, create, id_of, send};
use axum::http::{Method, StatusCode};
use chrono::Duration;
use eyre::ensure;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn health_reports_ok() -> eyre::Result<()> {
    let (router, _) = app();

    let (status, body) = send(&router, Method::GET, "/health", None).await?;

    ensure!(status == StatusCode::OK);
    ensure!(body == json!({ "status": "ok" }));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_applies_name_directives() -> eyre::Result<()> {
    let (router, _) = app();

    let task = create(
        &router,
        json!({ "name": "Buy milk !before 31.12.2099 !2", "description": "Semi-skimmed" }),
    )
    .await?;

    ensure!(task["name"] == "Buy milk");
    ensure!(task["description"] == "Semi-skimmed");
    ensure!(task["deadline"] == "2099-12-31T00:00:00Z");
    ensure!(task["priority"] == "High");
    ensure!(task["status"] == "Active");
    ensure!(task["createdAt"] == "2030-06-15T12:00:00Z");
    ensure!(task["changedAt"] == Value::Null);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_wraps_the_task_under_a_task_key() -> eyre::Result<()> {
    let (router, _) = app();

    let (status, body) = send(&router, Method::POST, "/tasks", Some(json!({ "name": "x" }))).await?;

    ensure!(status == StatusCode::CREATED);
    let Some(fields) = body.as_object() else {
        eyre::bail!("create body is not an object: {body}");
    };
    ensure!(
        fields.len() == 1 && fields.contains_key("task"),
        "unexpected top-level keys in {body}"
    );
    ensure!(body["task"]["name"] == "x");
    ensure!(body["task"]["status"] == "Active");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn explicit_fields_take_precedence_over_directives() -> eyre::Result<()> {
    let (router, _) = app();

    let task = create(
        &router,
        json!({
            "name": "Ship release !before 01-01-2099 !4",
            "deadline": "2031-02-03T04:05:06Z",
            "priority": "critical"
        }),
    )
    .await?;

    ensure!(task["name"] == "Ship release !before 01-01-2099 !4");
    ensure!(task["deadline"] == "2031-02-03T04:05:06Z");
    ensure!(task["priority"] == "Critical");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_returns_the_stored_task() -> eyre::Result<()> {
    let (router, _) = app();
    let task = create(&router, json!({ "name": "Water plants" })).await?;
    let id = id_of(&task)?;

    let (status, body) = send(&router, Method::GET, &format!("/tasks/{id}"), None).await?;

    ensure!(status == StatusCode::OK);
    ensure!(body == task);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_honours_sorting_query() -> eyre::Result<()> {
    let (router, clock) = app();
    for (name, priority) in [("low", "Low"), ("critical", "Critical"), ("medium", "Medium")] {
        create(&router, json!({ "name": name, "priority": priority })).await?;
        clock.advance(Duration::seconds(1));
    }

    let (status, body) = send(&router, Method::GET, "/tasks?sorting=PriorityDesc", None).await?;
    let names: Vec<&str> = body
        .as_array()
        .map(|tasks| tasks.iter().filter_map(|task| task["name"].as_str()).collect())
        .unwrap_or_default();

    ensure!(status == StatusCode::OK);
    ensure!(names == ["critical", "medium", "low"], "unexpected order {names:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn put_replaces_editable_fields() -> eyre::Result<()> {
    let (router, clock) = app();
    let task = create(
        &router,
        json!({ "name": "Draft report", "description": "Q2", "priority": "Low" }),
    )
    .await?;
    let id = id_of(&task)?;
    clock.advance(Duration::minutes(5));

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("/tasks/{id}"),
        Some(json!({ "name": "Final report !1" })),
    )
    .await?;

    ensure!(status == StatusCode::OK);
    ensure!(body["name"] == "Final report");
    ensure!(body["priority"] == "Critical");
    ensure!(body["description"] == Value::Null);
    ensure!(body["createdAt"] == task["createdAt"]);
    ensure!(body["changedAt"] == "2030-06-15T12:05:00Z");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggle_marks_done_and_undone() -> eyre::Result<()> {
    let (router, _) = app();
    let task = create(&router, json!({ "name": "Feed cat" })).await?;
    let uri = format!("/tasks/{}/toggle", id_of(&task)?);

    let (done_status, done) =
        send(&router, Method::PATCH, &uri, Some(json!({ "isDone": true }))).await?;
    ensure!(done_status == StatusCode::OK);
    ensure!(done["status"] == "Completed");

    let (_, reopened) = send(&router, Method::PATCH, &uri, Some(json!({ "isDone": false }))).await?;
    ensure!(reopened["status"] == "Active");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task() -> eyre::Result<()> {
    let (router, _) = app();
    let task = create(&router, json!({ "name": "Cancel gym" })).await?;
    let uri = format!("/tasks/{}", id_of(&task)?);

    let (status, body) = send(&router, Method::DELETE, &uri, None).await?;
    ensure!(status == StatusCode::NO_CONTENT);
    ensure!(body == Value::Null);

    let (after, _) = send(&router, Method::GET, &uri, None).await?;
    ensure!(after == StatusCode::NOT_FOUND);
    let (_, listing) = send(&router, Method::GET, "/tasks", None).await?;
    ensure!(listing == json!([]));
    Ok(())
}
