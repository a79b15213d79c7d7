//! In-memory work item repository backing the demo data set.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::status::{
    domain::{WorkItem, WorkItemId},
    ports::{WorkItemRepository, WorkItemRepositoryError, WorkItemRepositoryResult},
};

/// Thread-safe in-memory work item repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkItemRepository {
    state: Arc<RwLock<InMemoryWorkItemState>>,
}

#[derive(Debug, Default)]
struct InMemoryWorkItemState {
    items: HashMap<WorkItemId, WorkItem>,
    // Creation order, used to keep task listings stable.
    order: Vec<WorkItemId>,
}

impl InMemoryWorkItemRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `items`, in order.
    ///
    /// Items sharing an identifier keep the last occurrence.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = WorkItem>) -> Self {
        let mut state = InMemoryWorkItemState::default();
        for item in items {
            if state.items.insert(item.id(), item.clone()).is_none() {
                state.order.push(item.id());
            }
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

fn lock_error(err: &impl ToString) -> WorkItemRepositoryError {
    WorkItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl WorkItemRepository for InMemoryWorkItemRepository {
    async fn store(&self, item: &WorkItem) -> WorkItemRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        if state.items.contains_key(&item.id()) {
            return Err(WorkItemRepositoryError::DuplicateWorkItem(item.id()));
        }
        state.order.push(item.id());
        state.items.insert(item.id(), item.clone());
        Ok(())
    }

    async fn update(&self, item: &WorkItem) -> WorkItemRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let slot = state
            .items
            .get_mut(&item.id())
            .ok_or(WorkItemRepositoryError::NotFound(item.id()))?;
        *slot = item.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: WorkItemId) -> WorkItemRepositoryResult<Option<WorkItem>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.items.get(&id).cloned())
    }

    async fn find_tasks_by_project(
        &self,
        project_id: WorkItemId,
    ) -> WorkItemRepositoryResult<Vec<WorkItem>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        let tasks = state
            .order
            .iter()
            .filter_map(|id| state.items.get(id))
            .filter(|item| item.project_id() == Some(project_id))
            .cloned()
            .collect();
        Ok(tasks)
    }

    async fn delete(&self, id: WorkItemId) -> WorkItemRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        if state.items.remove(&id).is_none() {
            return Err(WorkItemRepositoryError::NotFound(id));
        }
        state.order.retain(|existing| *existing != id);
        Ok(())
    }
}
