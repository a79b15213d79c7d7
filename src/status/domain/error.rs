//! Error types for status set validation and parsing.

use super::StatusId;
use thiserror::Error;

/// Errors returned while editing or constructing status sets.
///
/// These are user-facing validation failures: the edit is aborted and the
/// set is left untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusDomainError {
    /// A status with the same title (compared case-insensitively) already
    /// exists in the owning set.
    #[error("a status titled '{0}' already exists")]
    DuplicateTitle(String),

    /// The status is protected and cannot be removed.
    #[error("status '{title}' ({id}) cannot be deleted")]
    NotDeletable {
        /// Identifier of the protected status.
        id: StatusId,
        /// Title of the protected status.
        title: String,
    },

    /// Two statuses in the same set share an identifier.
    #[error("status id {0} appears more than once")]
    DuplicateId(StatusId),

    /// The set already holds the largest representable identifier.
    #[error("no status identifiers left in this set")]
    IdsExhausted,

    /// No status with the identifier exists in the owning set.
    #[error("status {0} not found")]
    StatusNotFound(StatusId),

    /// The status title is empty after trimming.
    #[error("status title must not be empty")]
    EmptyTitle,

    /// The status title exceeds the configured maximum length.
    #[error("status title '{title}' exceeds {max} characters")]
    TitleTooLong {
        /// Rejected title.
        title: String,
        /// Configured maximum length in characters.
        max: usize,
    },

    /// The colour is not a `#RRGGBB` hex string.
    #[error("invalid status colour '{0}', expected #RRGGBB")]
    InvalidColor(String),
}

/// Error returned while parsing a board column key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown board column: {0}")]
pub struct ParseBoardColumnError(pub String);

/// Error returned while parsing a work item kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown work item kind: {0}")]
pub struct ParseWorkItemKindError(pub String);
