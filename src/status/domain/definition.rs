//! Status definitions: one named, coloured workflow state of a work item.

use super::{HexColor, StatusDomainError, StatusId};
use serde::{Deserialize, Serialize};

/// A single status belonging to one project or task.
///
/// Titles are stored verbatim and compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDefinition {
    id: StatusId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    color: HexColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_deletable: Option<bool>,
}

impl StatusDefinition {
    /// Creates a deletable status definition.
    #[must_use]
    pub fn new(id: StatusId, title: impl Into<String>, color: HexColor) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            color,
            is_deletable: None,
        }
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the explicit deletable flag.
    #[must_use]
    pub const fn with_deletable(mut self, deletable: bool) -> Self {
        self.is_deletable = Some(deletable);
        self
    }

    /// Returns the status identifier.
    #[must_use]
    pub const fn id(&self) -> StatusId {
        self.id
    }

    /// Returns the status title as stored.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the display colour.
    #[must_use]
    pub const fn color(&self) -> &HexColor {
        &self.color
    }

    /// Returns the raw deletable flag as persisted.
    #[must_use]
    pub const fn deletable_flag(&self) -> Option<bool> {
        self.is_deletable
    }

    /// Returns `true` unless the status is explicitly marked non-deletable.
    #[must_use]
    pub const fn is_deletable(&self) -> bool {
        !matches!(self.is_deletable, Some(false))
    }

    /// Returns `true` when `title` names this status, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn matches_title(&self, title: &str) -> bool {
        title_key(&self.title) == title_key(title)
    }

    pub(crate) fn seed(id: u64, title: &str, color: &'static str, deletable: bool) -> Self {
        let definition = Self::new(StatusId::new(id), title, HexColor::from_static(color));
        if deletable {
            definition
        } else {
            definition.with_deletable(false)
        }
    }
}

/// A status supplied by a user before it receives an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStatus {
    title: String,
    description: Option<String>,
    color: HexColor,
}

impl NewStatus {
    /// Creates a validated new status.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::EmptyTitle`] when the title is blank.
    pub fn new(title: impl Into<String>, color: HexColor) -> Result<Self, StatusDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StatusDomainError::EmptyTitle);
        }
        Ok(Self {
            title: trimmed.to_owned(),
            description: None,
            color,
        })
    }

    /// Sets the free-text description. Blank descriptions are dropped.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let text = description.into();
        self.description = (!text.trim().is_empty()).then_some(text);
        self
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn into_definition(self, id: StatusId) -> StatusDefinition {
        StatusDefinition {
            id,
            title: self.title,
            description: self.description,
            color: self.color,
            is_deletable: None,
        }
    }
}

/// Case- and whitespace-insensitive comparison key for status titles.
pub(crate) fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}
