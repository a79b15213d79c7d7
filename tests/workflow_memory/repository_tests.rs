//! Storage and lookup tests for [`InMemoryWorkItemRepository`].

use crate::workflow_memory::helpers::{clock, project_with_tasks, repo, runtime};
use camp_workflow::status::{
    adapters::memory::InMemoryWorkItemRepository,
    domain::{WorkItem, WorkItemId, WorkflowConfig},
    ports::{WorkItemRepository, WorkItemRepositoryError},
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Stored items are retrievable and duplicates are rejected.
#[rstest]
fn store_then_find(
    runtime: io::Result<Runtime>,
    repo: InMemoryWorkItemRepository,
    clock: DefaultClock,
) -> TestResult {
    let rt = runtime?;
    let project = WorkItem::new_project("Camp", &WorkflowConfig::default(), &clock);

    rt.block_on(repo.store(&project))?;
    let found = rt.block_on(repo.find_by_id(project.id()))?;
    assert_eq!(found, Some(project.clone()));

    let duplicate = rt.block_on(repo.store(&project));
    assert!(matches!(
        duplicate,
        Err(WorkItemRepositoryError::DuplicateWorkItem(id)) if id == project.id()
    ));
    Ok(())
}

/// Updates overwrite the stored item; the last write wins.
#[rstest]
fn update_is_last_write_wins(
    runtime: io::Result<Runtime>,
    repo: InMemoryWorkItemRepository,
    clock: DefaultClock,
) -> TestResult {
    let rt = runtime?;
    let task = WorkItem::new_task("Race", None, &WorkflowConfig::default(), &clock);
    rt.block_on(repo.store(&task))?;

    let mut first = task.clone();
    first.select_status("testing", &clock);
    let mut second = task.clone();
    second.select_status("done", &clock);

    rt.block_on(repo.update(&first))?;
    rt.block_on(repo.update(&second))?;

    let stored = rt
        .block_on(repo.find_by_id(task.id()))?
        .ok_or("task should exist")?;
    assert_eq!(stored.current_status_title(), "done");
    Ok(())
}

/// Updating an unknown item reports it as missing.
#[rstest]
fn update_unknown_item_fails(
    runtime: io::Result<Runtime>,
    repo: InMemoryWorkItemRepository,
    clock: DefaultClock,
) -> TestResult {
    let rt = runtime?;
    let task = WorkItem::new_task("Ghost", None, &WorkflowConfig::default(), &clock);

    let result = rt.block_on(repo.update(&task));

    assert!(matches!(result, Err(WorkItemRepositoryError::NotFound(_))));
    Ok(())
}

/// Project task listings keep creation order and skip other projects.
#[rstest]
fn tasks_by_project_keep_creation_order(
    runtime: io::Result<Runtime>,
    repo: InMemoryWorkItemRepository,
    clock: DefaultClock,
) -> TestResult {
    let rt = runtime?;
    let (project, tasks) = project_with_tasks(&clock, &["todo", "Doing", "done"]);
    let (_, other_tasks) = project_with_tasks(&clock, &["testing"]);

    rt.block_on(repo.store(&project))?;
    for task in tasks.iter().chain(&other_tasks) {
        rt.block_on(repo.store(task))?;
    }

    let listed = rt.block_on(repo.find_tasks_by_project(project.id()))?;
    assert_eq!(listed, tasks);

    let none = rt.block_on(repo.find_tasks_by_project(WorkItemId::new()))?;
    assert!(none.is_empty());
    Ok(())
}

/// Deleting a project's task removes it from listings.
#[rstest]
fn delete_removes_item(
    runtime: io::Result<Runtime>,
    clock: DefaultClock,
) -> TestResult {
    let rt = runtime?;
    let (project, tasks) = project_with_tasks(&clock, &["todo", "done"]);
    let repo = InMemoryWorkItemRepository::with_items(tasks.clone());
    let removed = tasks.first().ok_or("task should exist")?;

    rt.block_on(repo.delete(removed.id()))?;

    let listed = rt.block_on(repo.find_tasks_by_project(project.id()))?;
    assert_eq!(listed.len(), 1);
    assert!(rt.block_on(repo.find_by_id(removed.id()))?.is_none());
    Ok(())
}
