//! Workflow configuration: seed status sets, default pointers, title limits.

use super::{StatusDomainError, StatusSet, WorkItemKind};
use serde::{Deserialize, Serialize};

/// Configuration applied when work items are created or edited.
///
/// # Examples
///
/// ```
/// use camp_workflow::status::domain::{WorkItemKind, WorkflowConfig};
///
/// let config = WorkflowConfig::default();
/// assert_eq!(config.default_title(WorkItemKind::Task), "todo");
/// assert_eq!(config.default_title(WorkItemKind::Project), "planning");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkflowConfig {
    /// Statuses seeded into every new task.
    pub task_statuses: StatusSet,
    /// Statuses seeded into every new project.
    pub project_statuses: StatusSet,
    /// Initial status pointer of new tasks.
    pub task_default_title: String,
    /// Initial status pointer of new projects.
    pub project_default_title: String,
    /// Maximum status title length in characters.
    pub max_title_length: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            task_statuses: StatusSet::task_defaults(),
            project_statuses: StatusSet::project_defaults(),
            task_default_title: "todo".to_owned(),
            project_default_title: "planning".to_owned(),
            max_title_length: 50,
        }
    }
}

impl WorkflowConfig {
    /// Parses configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the document is malformed or a
    /// configured status set is invalid.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the seed status set for `kind`.
    #[must_use]
    pub const fn default_statuses(&self, kind: WorkItemKind) -> &StatusSet {
        match kind {
            WorkItemKind::Project => &self.project_statuses,
            WorkItemKind::Task => &self.task_statuses,
        }
    }

    /// Returns the initial status pointer for `kind`.
    #[must_use]
    pub fn default_title(&self, kind: WorkItemKind) -> &str {
        match kind {
            WorkItemKind::Project => &self.project_default_title,
            WorkItemKind::Task => &self.task_default_title,
        }
    }

    /// Checks a status title against the configured length limit.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::TitleTooLong`] when the trimmed title
    /// has more than `max_title_length` characters.
    pub fn check_title(&self, title: &str) -> Result<(), StatusDomainError> {
        let trimmed = title.trim();
        if trimmed.chars().count() > self.max_title_length {
            return Err(StatusDomainError::TitleTooLong {
                title: trimmed.to_owned(),
                max: self.max_title_length,
            });
        }
        Ok(())
    }
}
