//! Work item aggregate: a project or task owning its status set.

use super::{
    BoardItem, InsertPosition, NewStatus, NormalizedStatus, ParseWorkItemKindError,
    StatusDefinition, StatusDomainError, StatusId, StatusSet, StatusSetEditor, ThemeBucket,
    WorkItemId, WorkflowConfig, normalize_theme,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkItemKind {
    /// A project.
    Project,
    /// A task, optionally belonging to a project.
    Task,
}

impl WorkItemKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Task => "task",
        }
    }
}

impl TryFrom<&str> for WorkItemKind {
    type Error = ParseWorkItemKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "project" => Ok(Self::Project),
            "task" => Ok(Self::Task),
            _ => Err(ParseWorkItemKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for WorkItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project or task together with its own status set and status pointer.
///
/// The status pointer is free-standing: it may name a status that is absent
/// from the item's own set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    id: WorkItemId,
    kind: WorkItemKind,
    name: String,
    project_id: Option<WorkItemId>,
    statuses: StatusSet,
    status_title: String,
    legacy_status: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Persisted shape of a work item.
///
/// `statuses` may be `null` in storage; such items receive the default set
/// for their kind when loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemRecord {
    /// Work item identifier.
    pub id: WorkItemId,
    /// Project or task.
    pub kind: WorkItemKind,
    /// Display name.
    pub name: String,
    /// Owning project of a task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<WorkItemId>,
    /// Ordered status definitions.
    #[serde(default)]
    pub statuses: Option<StatusSet>,
    /// Current status pointer.
    #[serde(default)]
    pub status_title: String,
    /// Legacy free-text status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl WorkItem {
    /// Creates a project seeded with the configured project statuses.
    #[must_use]
    pub fn new_project(
        name: impl Into<String>,
        config: &WorkflowConfig,
        clock: &impl Clock,
    ) -> Self {
        Self::seeded(WorkItemKind::Project, name.into(), None, config, clock)
    }

    /// Creates a task seeded with the configured task statuses.
    #[must_use]
    pub fn new_task(
        name: impl Into<String>,
        project_id: Option<WorkItemId>,
        config: &WorkflowConfig,
        clock: &impl Clock,
    ) -> Self {
        Self::seeded(WorkItemKind::Task, name.into(), project_id, config, clock)
    }

    fn seeded(
        kind: WorkItemKind,
        name: String,
        project_id: Option<WorkItemId>,
        config: &WorkflowConfig,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: WorkItemId::new(),
            kind,
            name,
            project_id,
            statuses: config.default_statuses(kind).clone(),
            status_title: config.default_title(kind).to_owned(),
            legacy_status: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a work item from its persisted record.
    ///
    /// Missing status sets fall back to the configured defaults for the
    /// item's kind. A blank pointer falls back to the legacy `status` field,
    /// then to the configured default title.
    #[must_use]
    pub fn from_record(record: WorkItemRecord, config: &WorkflowConfig) -> Self {
        let statuses = record
            .statuses
            .unwrap_or_else(|| config.default_statuses(record.kind).clone());
        let status_title = if record.status_title.trim().is_empty() {
            record
                .status
                .as_deref()
                .map(str::trim)
                .filter(|legacy| !legacy.is_empty())
                .unwrap_or_else(|| config.default_title(record.kind))
                .to_owned()
        } else {
            record.status_title
        };
        Self {
            id: record.id,
            kind: record.kind,
            name: record.name,
            project_id: record.project_id,
            statuses,
            status_title,
            legacy_status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    /// Returns the persisted record for this work item.
    #[must_use]
    pub fn to_record(&self) -> WorkItemRecord {
        WorkItemRecord {
            id: self.id,
            kind: self.kind,
            name: self.name.clone(),
            project_id: self.project_id,
            statuses: Some(self.statuses.clone()),
            status_title: self.status_title.clone(),
            status: self.legacy_status.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Returns the work item identifier.
    #[must_use]
    pub const fn id(&self) -> WorkItemId {
        self.id
    }

    /// Returns the work item kind.
    #[must_use]
    pub const fn kind(&self) -> WorkItemKind {
        self.kind
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning project of a task.
    #[must_use]
    pub const fn project_id(&self) -> Option<WorkItemId> {
        self.project_id
    }

    /// Returns the ordered status set.
    #[must_use]
    pub const fn statuses(&self) -> &StatusSet {
        &self.statuses
    }

    /// Returns the current status pointer.
    #[must_use]
    pub fn current_status_title(&self) -> &str {
        &self.status_title
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the status the pointer names, or `None` for an orphan pointer.
    #[must_use]
    pub fn active_status(&self) -> Option<&StatusDefinition> {
        self.statuses.find_by_title(&self.status_title)
    }

    /// Normalizes the pointer for badge theming.
    #[must_use]
    pub fn theme_status(&self) -> NormalizedStatus<ThemeBucket> {
        normalize_theme(Some(self.status_title.as_str()))
    }

    /// Inserts a new status into this item's set.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::DuplicateTitle`] when the title already
    /// exists.
    pub fn add_status(
        &mut self,
        status: NewStatus,
        position: InsertPosition,
        clock: &impl Clock,
    ) -> Result<StatusId, StatusDomainError> {
        let id = self.editor().insert(status, position)?;
        self.touch(clock);
        Ok(id)
    }

    /// Deletes a status from this item's set, re-pointing the item at the
    /// first remaining status when the active one is removed.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::NotDeletable`] or
    /// [`StatusDomainError::StatusNotFound`]; the item is unchanged on error.
    pub fn delete_status(
        &mut self,
        id: StatusId,
        clock: &impl Clock,
    ) -> Result<StatusDefinition, StatusDomainError> {
        let removed = self.editor().delete(id)?;
        self.touch(clock);
        Ok(removed)
    }

    /// Points this item at `title` without checking set membership.
    pub fn select_status(&mut self, title: impl Into<String>, clock: &impl Clock) {
        self.editor().select(title);
        self.touch(clock);
    }

    /// Replaces the whole status set.
    pub fn replace_statuses(&mut self, statuses: StatusSet, clock: &impl Clock) {
        self.statuses = statuses;
        self.touch(clock);
    }

    const fn editor(&mut self) -> StatusSetEditor<'_> {
        StatusSetEditor::new(&mut self.statuses, &mut self.status_title)
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl BoardItem for WorkItem {
    fn status_title(&self) -> Option<&str> {
        Some(self.status_title.as_str())
    }

    fn legacy_status(&self) -> Option<&str> {
        self.legacy_status.as_deref()
    }
}
