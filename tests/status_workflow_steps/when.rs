//! When steps for status workflow BDD scenarios.

use super::world::{StatusWorkflowWorld, run_async, scenario_color};
use camp_workflow::status::{
    domain::{BoardColumn, InsertPosition, StatusDefinition},
    services::AddStatusRequest,
};
use rstest_bdd_macros::when;

fn add_status(
    world: &mut StatusWorkflowWorld,
    title: String,
    position: InsertPosition,
) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let request = AddStatusRequest::new(task_id, title, scenario_color()?).at(position);
    let result = run_async(world.editor.add_status(request));
    world.record(result);
    Ok(())
}

#[when(r#"the status "{title}" is added at the start"#)]
fn status_added_at_start(
    world: &mut StatusWorkflowWorld,
    title: String,
) -> Result<(), eyre::Report> {
    add_status(world, title, InsertPosition::Start)
}

#[when(r#"the status "{title}" is added at the end"#)]
fn status_added_at_end(world: &mut StatusWorkflowWorld, title: String) -> Result<(), eyre::Report> {
    add_status(world, title, InsertPosition::End)
}

#[when(r#"the status titled "{title}" is deleted"#)]
fn status_deleted(world: &mut StatusWorkflowWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let task_id = task.id();
    let status_id = task
        .statuses()
        .find_by_title(&title)
        .map(StatusDefinition::id)
        .ok_or_else(|| eyre::eyre!("no status titled {title}"))?;
    let result = run_async(world.editor.delete_status(task_id, status_id));
    world.record(result);
    Ok(())
}

#[when(r#"the task is moved to the "{column}" column"#)]
fn task_moved(world: &mut StatusWorkflowWorld, column: String) -> Result<(), eyre::Report> {
    let target = BoardColumn::try_from(column.as_str())?;
    let task_id = world.task()?.id();
    let session = world
        .session
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing board session in scenario world"))?;
    let result = run_async(world.board.move_task(session, task_id, target));
    world.record(result);
    Ok(())
}
