//! Shared test helpers for in-memory work item integration tests.

use camp_workflow::status::{
    adapters::memory::InMemoryWorkItemRepository,
    domain::{WorkItem, WorkflowConfig},
};
use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryWorkItemRepository {
    InMemoryWorkItemRepository::new()
}

/// Provides a clock for work item creation.
#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

/// Builds a project and tasks whose pointers are set to `titles`, in order.
pub fn project_with_tasks(clock: &DefaultClock, titles: &[&str]) -> (WorkItem, Vec<WorkItem>) {
    let config = WorkflowConfig::default();
    let project = WorkItem::new_project("Logic Camp", &config, clock);
    let tasks = titles
        .iter()
        .map(|title| {
            let mut task = WorkItem::new_task(*title, Some(project.id()), &config, clock);
            task.select_status(*title, clock);
            task
        })
        .collect();
    (project, tasks)
}
