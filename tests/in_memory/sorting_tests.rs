//! Listing order tests against the in-memory adapter.

use std::sync::Arc;

use crate::test_helpers::{SteppedClock, reference_now};
use chrono::Duration;
use eyre::ensure;
use rstest::rstest;
use taskdeck::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskPriority, TaskSorting},
    services::{CreateTaskRequest, TaskService},
};

type TestService = TaskService<InMemoryTaskRepository, SteppedClock>;

/// Creates four tasks one minute apart:
///
/// | name | priority | deadline |
/// |---|---|---|
/// | alpha | Low | +3 days |
/// | bravo | Critical | none |
/// | charlie | Medium | +1 day |
/// | delta | High | +2 days |
async fn seeded_service() -> eyre::Result<TestService> {
    let clock = SteppedClock::at(reference_now());
    let service = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(clock.clone()),
    );

    let requests = [
        CreateTaskRequest::new("alpha")
            .with_priority(TaskPriority::Low)
            .with_deadline(reference_now() + Duration::days(3)),
        CreateTaskRequest::new("bravo").with_priority(TaskPriority::Critical),
        CreateTaskRequest::new("charlie")
            .with_priority(TaskPriority::Medium)
            .with_deadline(reference_now() + Duration::days(1)),
        CreateTaskRequest::new("delta")
            .with_priority(TaskPriority::High)
            .with_deadline(reference_now() + Duration::days(2)),
    ];
    for request in requests {
        service.create_task(request).await?;
        clock.advance(Duration::minutes(1));
    }
    Ok(service)
}

#[rstest]
#[case::unsorted(None, ["alpha", "bravo", "charlie", "delta"])]
#[case::create_asc(Some(TaskSorting::CreateAsc), ["alpha", "bravo", "charlie", "delta"])]
#[case::create_desc(Some(TaskSorting::CreateDesc), ["delta", "charlie", "bravo", "alpha"])]
#[case::priority_asc(Some(TaskSorting::PriorityAsc), ["alpha", "charlie", "delta", "bravo"])]
#[case::priority_desc(Some(TaskSorting::PriorityDesc), ["bravo", "delta", "charlie", "alpha"])]
#[case::deadline_asc(Some(TaskSorting::DeadlineAsc), ["bravo", "charlie", "delta", "alpha"])]
#[case::deadline_desc(Some(TaskSorting::DeadlineDesc), ["alpha", "delta", "charlie", "bravo"])]
#[tokio::test(flavor = "multi_thread")]
async fn listing_follows_requested_order(
    #[case] sorting: Option<TaskSorting>,
    #[case] expected: [&str; 4],
) -> eyre::Result<()> {
    let service = seeded_service().await?;

    let tasks = service.get_all_tasks(sorting).await?;
    let names: Vec<&str> = tasks.iter().map(|task| task.name()).collect();

    ensure!(names == expected, "unexpected order {names:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_board_lists_nothing_for_every_order() -> eyre::Result<()> {
    let service = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(SteppedClock::at(reference_now())),
    );

    for sorting in [
        None,
        Some(TaskSorting::CreateAsc),
        Some(TaskSorting::PriorityDesc),
        Some(TaskSorting::DeadlineAsc),
    ] {
        ensure!(service.get_all_tasks(sorting).await?.is_empty());
    }
    Ok(())
}

