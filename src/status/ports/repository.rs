//! Repository port for work item persistence and lookup.

use crate::status::domain::{WorkItem, WorkItemId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for work item repository operations.
pub type WorkItemRepositoryResult<T> = Result<T, WorkItemRepositoryError>;

/// Work item persistence contract.
///
/// Updates are last-write-wins: no version check is made, so of two racing
/// saves of the same item the later one is kept.
#[async_trait]
pub trait WorkItemRepository: Send + Sync {
    /// Stores a new work item.
    ///
    /// # Errors
    ///
    /// Returns [`WorkItemRepositoryError::DuplicateWorkItem`] when the
    /// identifier already exists.
    async fn store(&self, item: &WorkItem) -> WorkItemRepositoryResult<()>;

    /// Persists changes to an existing work item, including its status set
    /// and status pointer.
    ///
    /// # Errors
    ///
    /// Returns [`WorkItemRepositoryError::NotFound`] when the item does not
    /// exist.
    async fn update(&self, item: &WorkItem) -> WorkItemRepositoryResult<()>;

    /// Finds a work item by identifier.
    ///
    /// Returns `None` when the item does not exist.
    async fn find_by_id(&self, id: WorkItemId) -> WorkItemRepositoryResult<Option<WorkItem>>;

    /// Returns the tasks belonging to a project in creation order.
    async fn find_tasks_by_project(
        &self,
        project_id: WorkItemId,
    ) -> WorkItemRepositoryResult<Vec<WorkItem>>;

    /// Removes a work item together with its status set.
    ///
    /// # Errors
    ///
    /// Returns [`WorkItemRepositoryError::NotFound`] when the item does not
    /// exist.
    async fn delete(&self, id: WorkItemId) -> WorkItemRepositoryResult<()>;
}

/// Errors returned by work item repository implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkItemRepositoryError {
    /// A work item with the same identifier already exists.
    #[error("duplicate work item identifier: {0}")]
    DuplicateWorkItem(WorkItemId),

    /// The work item was not found.
    #[error("work item not found: {0}")]
    NotFound(WorkItemId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkItemRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
