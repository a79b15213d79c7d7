//! Service-level errors for status editing and board operations.

use crate::status::{
    domain::{StatusDomainError, WorkItemId},
    ports::WorkItemRepositoryError,
};
use thiserror::Error;

/// Errors returned by workflow services.
///
/// Domain errors are user-facing validation failures. Repository errors are
/// save failures; the stored item is left at its pre-edit value.
#[derive(Debug, Error)]
pub enum WorkflowServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] StatusDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] WorkItemRepositoryError),
    /// The work item does not exist.
    #[error("work item not found: {0}")]
    NotFound(WorkItemId),
    /// The work item is a task where a project is required.
    #[error("work item {0} is not a project")]
    NotAProject(WorkItemId),
    /// The task is not on the loaded board.
    #[error("task {0} is not on the board")]
    NotOnBoard(WorkItemId),
}

/// Result type for workflow service operations.
pub type WorkflowServiceResult<T> = Result<T, WorkflowServiceError>;
