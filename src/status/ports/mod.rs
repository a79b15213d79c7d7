//! Port definitions for work item persistence.

pub mod repository;

pub use repository::{WorkItemRepository, WorkItemRepositoryError, WorkItemRepositoryResult};
