//! Then steps for status workflow BDD scenarios.

use super::world::StatusWorkflowWorld;
use camp_workflow::status::{
    domain::{BoardColumn, StatusDomainError},
    services::WorkflowServiceError,
};
use rstest_bdd_macros::then;

#[then(r#"the first status is "{title}" with id {id:u64}"#)]
fn first_status_is(
    world: &StatusWorkflowWorld,
    title: String,
    id: u64,
) -> Result<(), eyre::Report> {
    let first = world
        .task()?
        .statuses()
        .first()
        .ok_or_else(|| eyre::eyre!("task has no statuses"))?;
    if first.title() != title || first.id().value() != id {
        return Err(eyre::eyre!(
            "expected first status {title} ({id}), found {} ({})",
            first.title(),
            first.id()
        ));
    }
    Ok(())
}

#[then("the edit fails with a duplicate title error")]
fn edit_fails_with_duplicate_title(world: &StatusWorkflowWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing edit result"))?;
    if !matches!(
        result,
        Err(WorkflowServiceError::Domain(StatusDomainError::DuplicateTitle(_)))
    ) {
        return Err(eyre::eyre!("expected DuplicateTitle error, got {result:?}"));
    }
    Ok(())
}

#[then("the edit fails with a not deletable error")]
fn edit_fails_with_not_deletable(world: &StatusWorkflowWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing edit result"))?;
    if !matches!(
        result,
        Err(WorkflowServiceError::Domain(StatusDomainError::NotDeletable { .. }))
    ) {
        return Err(eyre::eyre!("expected NotDeletable error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the task status pointer is "{title}""#)]
fn task_pointer_is(world: &StatusWorkflowWorld, title: String) -> Result<(), eyre::Report> {
    let actual = world.task()?.current_status_title();
    if actual != title {
        return Err(eyre::eyre!("expected status pointer {title}, found {actual}"));
    }
    Ok(())
}

#[then("the task has {count:u64} statuses")]
fn task_has_statuses(world: &StatusWorkflowWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = u64::try_from(world.task()?.statuses().len())?;
    if actual != count {
        return Err(eyre::eyre!("expected {count} statuses, found {actual}"));
    }
    Ok(())
}

#[then(r#"the task is in the "{column}" column"#)]
fn task_is_in_column(world: &StatusWorkflowWorld, column: String) -> Result<(), eyre::Report> {
    let expected = BoardColumn::try_from(column.as_str())?;
    let task_id = world.task()?.id();
    let actual = world
        .session
        .as_ref()
        .and_then(|session| session.column_of(task_id));
    if actual != Some(expected) {
        return Err(eyre::eyre!("expected task in {expected}, found {actual:?}"));
    }
    Ok(())
}
