//! Service layer for creating work items and editing their statuses.

use crate::status::{
    domain::{
        HexColor, InsertPosition, NewStatus, StatusDefinition, StatusId, StatusSet, WorkItem,
        WorkItemId, WorkItemKind, WorkflowConfig,
    },
    ports::WorkItemRepository,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use super::{WorkflowServiceError, WorkflowServiceResult};

/// Request payload for adding a custom status to a work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStatusRequest {
    item_id: WorkItemId,
    title: String,
    color: HexColor,
    description: Option<String>,
    position: InsertPosition,
}

impl AddStatusRequest {
    /// Creates a request that appends the status at the end of the set.
    #[must_use]
    pub fn new(item_id: WorkItemId, title: impl Into<String>, color: HexColor) -> Self {
        Self {
            item_id,
            title: title.into(),
            color,
            description: None,
            position: InsertPosition::End,
        }
    }

    /// Sets the status description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the insert position.
    #[must_use]
    pub const fn at(mut self, position: InsertPosition) -> Self {
        self.position = position;
        self
    }
}

/// Status fields accepted by `PATCH /projects/:id` and `PATCH /tasks/:id`.
///
/// Present fields are stored verbatim; absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPatch {
    /// New status pointer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_title: Option<String>,
    /// Replacement status set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_statuses: Option<Vec<StatusDefinition>>,
}

/// Status editing orchestration service.
#[derive(Clone)]
pub struct StatusEditorService<R, C>
where
    R: WorkItemRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: Arc<WorkflowConfig>,
}

impl<R, C> StatusEditorService<R, C>
where
    R: WorkItemRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service using the default workflow configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, Arc::new(WorkflowConfig::default()))
    }

    /// Creates a service using `config`.
    #[must_use]
    pub const fn with_config(
        repository: Arc<R>,
        clock: Arc<C>,
        config: Arc<WorkflowConfig>,
    ) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Creates and stores a project with the default project statuses.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::Repository`] when the save fails.
    pub async fn create_project(&self, name: impl Into<String>) -> WorkflowServiceResult<WorkItem> {
        let project = WorkItem::new_project(name, &self.config, &*self.clock);
        self.repository.store(&project).await?;
        debug!(item_id = %project.id(), "created project");
        Ok(project)
    }

    /// Creates and stores a task with the default task statuses.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::NotFound`] when `project_id` names no
    /// item, [`WorkflowServiceError::NotAProject`] when it names a task, and
    /// [`WorkflowServiceError::Repository`] when persistence fails.
    pub async fn create_task(
        &self,
        name: impl Into<String>,
        project_id: Option<WorkItemId>,
    ) -> WorkflowServiceResult<WorkItem> {
        if let Some(project_id) = project_id {
            let project = self.load(project_id).await?;
            if project.kind() != WorkItemKind::Project {
                return Err(WorkflowServiceError::NotAProject(project_id));
            }
        }
        let task = WorkItem::new_task(name, project_id, &self.config, &*self.clock);
        self.repository.store(&task).await?;
        debug!(item_id = %task.id(), "created task");
        Ok(task)
    }

    /// Retrieves a work item.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::Repository`] when lookup fails.
    pub async fn find(&self, item_id: WorkItemId) -> WorkflowServiceResult<Option<WorkItem>> {
        Ok(self.repository.find_by_id(item_id).await?)
    }

    /// Adds a custom status to a work item's set.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::Domain`] for blank, over-long, or
    /// duplicate titles or identifiers; [`WorkflowServiceError::NotFound`] for unknown
    /// items; [`WorkflowServiceError::Repository`] when the save fails.
    pub async fn add_status(&self, request: AddStatusRequest) -> WorkflowServiceResult<WorkItem> {
        let mut item = self.load(request.item_id).await?;
        self.config.check_title(&request.title)?;
        let mut status = NewStatus::new(request.title, request.color)?;
        if let Some(description) = request.description {
            status = status.with_description(description);
        }

        let status_id = item
            .add_status(status, request.position, &*self.clock)
            .inspect_err(|err| warn!(item_id = %request.item_id, %err, "status insert rejected"))?;
        self.save(&item).await?;
        debug!(item_id = %item.id(), %status_id, "added status");
        Ok(item)
    }

    /// Deletes a status from a work item's set.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::Domain`] when the status is protected
    /// or unknown; [`WorkflowServiceError::NotFound`] for unknown items;
    /// [`WorkflowServiceError::Repository`] when the save fails.
    pub async fn delete_status(
        &self,
        item_id: WorkItemId,
        status_id: StatusId,
    ) -> WorkflowServiceResult<WorkItem> {
        let mut item = self.load(item_id).await?;
        item.delete_status(status_id, &*self.clock)
            .inspect_err(|err| warn!(%item_id, %status_id, %err, "status delete rejected"))?;
        self.save(&item).await?;
        debug!(
            %item_id,
            %status_id,
            status_title = item.current_status_title(),
            "deleted status"
        );
        Ok(item)
    }

    /// Points a work item at `title`. Membership in the set is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::NotFound`] for unknown items and
    /// [`WorkflowServiceError::Repository`] when the save fails.
    pub async fn select_status(
        &self,
        item_id: WorkItemId,
        title: impl Into<String>,
    ) -> WorkflowServiceResult<WorkItem> {
        let mut item = self.load(item_id).await?;
        item.select_status(title, &*self.clock);
        self.save(&item).await?;
        debug!(%item_id, status_title = item.current_status_title(), "selected status");
        Ok(item)
    }

    /// Applies a PATCH payload to a work item.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::Domain`] when the replacement set has
    /// duplicate titles or identifiers; [`WorkflowServiceError::NotFound`] for unknown
    /// items; [`WorkflowServiceError::Repository`] when the save fails.
    pub async fn apply_patch(
        &self,
        item_id: WorkItemId,
        patch: StatusPatch,
    ) -> WorkflowServiceResult<WorkItem> {
        let mut item = self.load(item_id).await?;
        if let Some(custom_statuses) = patch.custom_statuses {
            let statuses = StatusSet::new(custom_statuses)?;
            item.replace_statuses(statuses, &*self.clock);
        }
        if let Some(status_title) = patch.status_title {
            item.select_status(status_title, &*self.clock);
        }
        self.save(&item).await?;
        debug!(%item_id, "applied status patch");
        Ok(item)
    }

    /// Deletes a work item and its status set.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::Repository`] when the item is unknown
    /// or removal fails.
    pub async fn delete_item(&self, item_id: WorkItemId) -> WorkflowServiceResult<()> {
        self.repository.delete(item_id).await?;
        debug!(%item_id, "deleted work item");
        Ok(())
    }

    async fn load(&self, item_id: WorkItemId) -> WorkflowServiceResult<WorkItem> {
        self.repository
            .find_by_id(item_id)
            .await?
            .ok_or(WorkflowServiceError::NotFound(item_id))
    }

    async fn save(&self, item: &WorkItem) -> WorkflowServiceResult<()> {
        self.repository
            .update(item)
            .await
            .inspect_err(|err| warn!(item_id = %item.id(), %err, "status save failed"))?;
        Ok(())
    }
}
