//! The ordered status set owned by a single work item.

use super::{NewStatus, StatusDefinition, StatusDomainError, StatusId, definition::title_key};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where a new status is placed within a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before every existing status.
    Start,
    /// After every existing status.
    End,
    /// At a 1-based position, clamped to the set bounds.
    Custom(usize),
}

impl InsertPosition {
    /// Resolves the position to a 0-based index for a set of length `len`.
    #[must_use]
    pub fn resolve(self, len: usize) -> usize {
        match self {
            Self::Start => 0,
            Self::End => len,
            Self::Custom(position) => position.saturating_sub(1).min(len),
        }
    }
}

/// Ordered statuses of one project or task.
///
/// Order defines column order in custom views. Titles are unique
/// case-insensitively. Identifiers are unique only within this set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<StatusDefinition>", into = "Vec<StatusDefinition>")]
pub struct StatusSet {
    statuses: Vec<StatusDefinition>,
}

impl StatusSet {
    /// Creates a set from ordered definitions.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::DuplicateTitle`] when two definitions
    /// share a title, ignoring case, or [`StatusDomainError::DuplicateId`]
    /// when two definitions share an identifier.
    pub fn new(statuses: Vec<StatusDefinition>) -> Result<Self, StatusDomainError> {
        let mut seen_titles = HashSet::with_capacity(statuses.len());
        let mut seen_ids = HashSet::with_capacity(statuses.len());
        for status in &statuses {
            if !seen_titles.insert(title_key(status.title())) {
                return Err(StatusDomainError::DuplicateTitle(status.title().to_owned()));
            }
            if !seen_ids.insert(status.id()) {
                return Err(StatusDomainError::DuplicateId(status.id()));
            }
        }
        Ok(Self { statuses })
    }

    /// Returns the number of statuses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Returns `true` when the set holds no statuses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Iterates statuses in order.
    pub fn iter(&self) -> std::slice::Iter<'_, StatusDefinition> {
        self.statuses.iter()
    }

    /// Returns the statuses as an ordered slice.
    #[must_use]
    pub fn as_slice(&self) -> &[StatusDefinition] {
        &self.statuses
    }

    /// Returns the first status, if any.
    #[must_use]
    pub fn first(&self) -> Option<&StatusDefinition> {
        self.statuses.first()
    }

    /// Returns the titles in order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.statuses.iter().map(StatusDefinition::title)
    }

    /// Finds a status by identifier.
    #[must_use]
    pub fn find_by_id(&self, id: StatusId) -> Option<&StatusDefinition> {
        self.statuses.iter().find(|status| status.id() == id)
    }

    /// Finds a status by title, ignoring case.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&StatusDefinition> {
        self.statuses.iter().find(|status| status.matches_title(title))
    }

    /// Returns `true` when a status with the title exists, ignoring case.
    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.find_by_title(title).is_some()
    }

    /// Returns the identifier the next inserted status receives:
    /// one more than the largest identifier in the set, or `1` when empty.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::IdsExhausted`] when the largest
    /// identifier is already `u64::MAX`.
    pub fn next_id(&self) -> Result<StatusId, StatusDomainError> {
        let max = self
            .statuses
            .iter()
            .map(|status| status.id().value())
            .max()
            .unwrap_or(0);
        max.checked_add(1)
            .map(StatusId::new)
            .ok_or(StatusDomainError::IdsExhausted)
    }

    /// Inserts a new status at `position` and returns its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::DuplicateTitle`] when the title already
    /// exists, ignoring case, or [`StatusDomainError::IdsExhausted`] when no
    /// identifier is left. The set is unchanged on error.
    pub fn insert(
        &mut self,
        status: NewStatus,
        position: InsertPosition,
    ) -> Result<StatusId, StatusDomainError> {
        if self.contains_title(status.title()) {
            return Err(StatusDomainError::DuplicateTitle(status.title().to_owned()));
        }
        let id = self.next_id()?;
        let index = position.resolve(self.statuses.len());
        self.statuses.insert(index, status.into_definition(id));
        Ok(id)
    }

    /// Removes the status with identifier `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::StatusNotFound`] when no status has the
    /// identifier, or [`StatusDomainError::NotDeletable`] when the status is
    /// protected. The set is unchanged on error.
    pub fn remove(&mut self, id: StatusId) -> Result<StatusDefinition, StatusDomainError> {
        let index = self
            .statuses
            .iter()
            .position(|status| status.id() == id)
            .ok_or(StatusDomainError::StatusNotFound(id))?;
        let target = self
            .statuses
            .get(index)
            .ok_or(StatusDomainError::StatusNotFound(id))?;
        if !target.is_deletable() {
            return Err(StatusDomainError::NotDeletable {
                id,
                title: target.title().to_owned(),
            });
        }
        Ok(self.statuses.remove(index))
    }
}

impl TryFrom<Vec<StatusDefinition>> for StatusSet {
    type Error = StatusDomainError;

    fn try_from(value: Vec<StatusDefinition>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StatusSet> for Vec<StatusDefinition> {
    fn from(value: StatusSet) -> Self {
        value.statuses
    }
}

impl<'a> IntoIterator for &'a StatusSet {
    type Item = &'a StatusDefinition;
    type IntoIter = std::slice::Iter<'a, StatusDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl StatusSet {
    /// Returns the seed statuses given to every new task.
    #[must_use]
    pub fn task_defaults() -> Self {
        Self {
            statuses: vec![
                StatusDefinition::seed(1, "todo", "#6B7280", true),
                StatusDefinition::seed(2, "inProgress", "#3B82F6", true),
                StatusDefinition::seed(3, "testing", "#F59E0B", false),
                StatusDefinition::seed(4, "done", "#10B981", false),
            ],
        }
    }

    /// Returns the seed statuses given to every new project.
    #[must_use]
    pub fn project_defaults() -> Self {
        Self {
            statuses: vec![
                StatusDefinition::seed(1, "planning", "#8B5CF6", true),
                StatusDefinition::seed(2, "todo", "#6B7280", true),
                StatusDefinition::seed(3, "inProgress", "#3B82F6", true),
                StatusDefinition::seed(4, "testing", "#F59E0B", false),
                StatusDefinition::seed(5, "done", "#10B981", false),
            ],
        }
    }
}
