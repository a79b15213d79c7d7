//! Editing operations over a status set and its owner's status pointer.

use super::{InsertPosition, NewStatus, StatusDefinition, StatusDomainError, StatusId, StatusSet};

/// Mutates a status set together with the status pointer of the work item
/// that owns it.
///
/// Every operation either succeeds completely or leaves both the set and the
/// pointer untouched.
#[derive(Debug)]
pub struct StatusSetEditor<'a> {
    statuses: &'a mut StatusSet,
    status_title: &'a mut String,
}

impl<'a> StatusSetEditor<'a> {
    /// Creates an editor over a set and its owner's pointer.
    pub const fn new(statuses: &'a mut StatusSet, status_title: &'a mut String) -> Self {
        Self {
            statuses,
            status_title,
        }
    }

    /// Inserts a new status at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::DuplicateTitle`] when the title already
    /// exists in the set.
    pub fn insert(
        &mut self,
        status: NewStatus,
        position: InsertPosition,
    ) -> Result<StatusId, StatusDomainError> {
        self.statuses.insert(status, position)
    }

    /// Deletes a status.
    ///
    /// When the deleted status was the active one and statuses remain, the
    /// pointer moves to the first remaining status. When the set becomes
    /// empty the pointer is kept as is.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::NotDeletable`] for protected statuses and
    /// [`StatusDomainError::StatusNotFound`] for unknown identifiers.
    pub fn delete(&mut self, id: StatusId) -> Result<StatusDefinition, StatusDomainError> {
        let removed = self.statuses.remove(id)?;
        if removed.matches_title(self.status_title.as_str()) {
            if let Some(first) = self.statuses.first() {
                first.title().clone_into(self.status_title);
            }
        }
        Ok(removed)
    }

    /// Points the owner at `title`.
    ///
    /// The title is not required to exist in the set; orphan pointers are
    /// tolerated and render with the fallback bucket.
    pub fn select(&mut self, title: impl Into<String>) {
        *self.status_title = title.into();
    }
}
