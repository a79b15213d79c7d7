//! End-to-end status editing and board flows over the in-memory store.

use crate::workflow_memory::helpers::{clock, project_with_tasks, runtime};
use camp_workflow::status::{
    adapters::memory::InMemoryWorkItemRepository,
    domain::{BoardColumn, HexColor, InsertPosition, StatusDomainError, WorkItem},
    services::{AddStatusRequest, BoardService, StatusEditorService, WorkflowServiceError},
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Custom statuses added to one task never leak into another.
#[rstest]
fn status_sets_are_owned_per_item(runtime: io::Result<Runtime>) -> TestResult {
    let rt = runtime?;
    let repository = Arc::new(InMemoryWorkItemRepository::new());
    let editor = StatusEditorService::new(Arc::clone(&repository), Arc::new(DefaultClock));

    let first = rt.block_on(editor.create_task("First", None))?;
    let second = rt.block_on(editor.create_task("Second", None))?;
    let color = HexColor::new("#0EA5E9")?;

    let updated = rt.block_on(editor.add_status(
        AddStatusRequest::new(first.id(), "blocked", color.clone()).at(InsertPosition::Custom(3)),
    ))?;
    let untouched = rt
        .block_on(editor.find(second.id()))?
        .ok_or("second task should exist")?;

    assert_eq!(
        updated.statuses().titles().collect::<Vec<_>>(),
        vec!["todo", "inProgress", "blocked", "testing", "done"]
    );
    assert!(!untouched.statuses().contains_title("blocked"));

    // Both sets hand out the same next identifier: ids are per item.
    let other = rt.block_on(
        editor.add_status(AddStatusRequest::new(second.id(), "blocked", color)),
    )?;
    let first_id = updated.statuses().find_by_title("blocked").map(|s| s.id());
    let second_id = other.statuses().find_by_title("blocked").map(|s| s.id());
    assert_eq!(first_id, second_id);
    Ok(())
}

/// Moving a task on the board persists the column key as its pointer.
#[rstest]
fn board_move_round_trips_through_store(
    runtime: io::Result<Runtime>,
    clock: DefaultClock,
) -> TestResult {
    let rt = runtime?;
    let (project, tasks) = project_with_tasks(&clock, &["Doing", "done", "weird-value"]);
    let repository = Arc::new(InMemoryWorkItemRepository::with_items(
        std::iter::once(project.clone()).chain(tasks.clone()),
    ));
    let board = BoardService::new(Arc::clone(&repository), Arc::new(DefaultClock));
    let orphan = tasks.get(2).map(WorkItem::id).ok_or("third task should exist")?;

    let mut session = rt.block_on(board.load_board(project.id()))?;
    assert_eq!(session.column_of(orphan), Some(BoardColumn::Todo));

    rt.block_on(board.move_task(&mut session, orphan, BoardColumn::Testing))?;

    let reloaded = rt.block_on(board.load_board(project.id()))?;
    assert_eq!(reloaded.column_of(orphan), Some(BoardColumn::Testing));
    assert_eq!(
        reloaded.find(orphan).map(WorkItem::current_status_title),
        Some("testing")
    );
    Ok(())
}

/// Protected statuses survive delete attempts through the service.
#[rstest]
fn protected_statuses_cannot_be_deleted(runtime: io::Result<Runtime>) -> TestResult {
    let rt = runtime?;
    let editor = StatusEditorService::new(
        Arc::new(InMemoryWorkItemRepository::new()),
        Arc::new(DefaultClock),
    );
    let project = rt.block_on(editor.create_project("Camp"))?;

    for status in project.statuses().iter().filter(|status| !status.is_deletable()) {
        let result = rt.block_on(editor.delete_status(project.id(), status.id()));
        assert!(matches!(
            result,
            Err(WorkflowServiceError::Domain(StatusDomainError::NotDeletable { .. }))
        ));
    }
    let stored = rt
        .block_on(editor.find(project.id()))?
        .ok_or("project should exist")?;
    assert_eq!(stored, project);
    Ok(())
}
