//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use crate::test_helpers::reference_now;
use chrono::Duration;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdeck::task::services::CreateTaskRequest;

#[given(r#"a task "{name}" due in {hours:u64} hours"#)]
fn task_due_in(
    world: &mut TaskLifecycleWorld,
    name: String,
    hours: u64,
) -> Result<(), eyre::Report> {
    let offset = Duration::hours(i64::try_from(hours).wrap_err("deadline offset overflows")?);
    let request = CreateTaskRequest::new(name).with_deadline(reference_now() + offset);
    let created = run_async(world.service.create_task(request))
        .wrap_err("create task for lifecycle scenario")?;
    world.last_task = Some(created);
    Ok(())
}

#[given("{hours:u64} hours pass")]
fn hours_pass(world: &mut TaskLifecycleWorld, hours: u64) -> Result<(), eyre::Report> {
    let step = i64::try_from(hours).wrap_err("clock step overflows")?;
    world.clock.advance(Duration::hours(step));
    Ok(())
}

#[given("the deadline sweep runs")]
fn sweep_has_run(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    super::when::run_sweep(world)
}

#[given("the task is marked done")]
fn task_was_marked_done(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    super::when::set_done(world, true)
}
