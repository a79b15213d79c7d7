//! Canonicalization of free-text status strings.
//!
//! Stored titles come in many spellings ("Doing", "in progress", "Testing").
//! A single word table maps each known spelling to a canonical category;
//! two projections of that category serve the two consumers:
//!
//! - [`ThemeBucket`] for badge theming (`completed`, `in-progress`,
//!   `review`, `default`)
//! - [`BoardColumn`] for board columns (`todo`, `inProgress`, `testing`,
//!   `completed`)
//!
//! Unknown, empty, and missing input always lands in the fallback bucket.

use super::ParseBoardColumnError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Canonical {
    Todo,
    InProgress,
    Review,
    Testing,
    Completed,
}

const WORDS: &[(&str, Canonical)] = &[
    ("done", Canonical::Completed),
    ("completed", Canonical::Completed),
    ("complete", Canonical::Completed),
    ("finished", Canonical::Completed),
    ("doing", Canonical::InProgress),
    ("in-progress", Canonical::InProgress),
    ("in progress", Canonical::InProgress),
    ("progress", Canonical::InProgress),
    ("inprogress", Canonical::InProgress),
    ("active", Canonical::InProgress),
    ("review", Canonical::Review),
    ("in-review", Canonical::Review),
    ("in review", Canonical::Review),
    ("testing", Canonical::Testing),
    ("test", Canonical::Testing),
    ("todo", Canonical::Todo),
    ("to-do", Canonical::Todo),
    ("backlog", Canonical::Todo),
    ("pending", Canonical::Todo),
    ("planning", Canonical::Todo),
];

static CANONICAL_TABLE: LazyLock<HashMap<&'static str, Canonical>> =
    LazyLock::new(|| WORDS.iter().copied().collect());

/// Lower-cases, trims, and collapses inner whitespace runs.
fn normalize_key(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn canonicalize(raw: Option<&str>) -> Option<Canonical> {
    let key = normalize_key(raw?);
    CANONICAL_TABLE.get(key.as_str()).copied()
}

/// A canonical key paired with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedStatus<K> {
    /// Canonical bucket.
    pub key: K,
    /// Display label for the bucket.
    pub label: &'static str,
}

/// Theming category for project status badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeBucket {
    /// Finished work.
    Completed,
    /// Work underway.
    InProgress,
    /// Work awaiting review.
    Review,
    /// Anything else, including unknown values.
    Default,
}

impl ThemeBucket {
    /// All buckets in display order.
    pub const ALL: [Self; 4] = [Self::Completed, Self::InProgress, Self::Review, Self::Default];

    /// Returns the canonical key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Default => "default",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "done",
            Self::InProgress => "doing",
            Self::Review => "review",
            Self::Default => "todo",
        }
    }

    const fn from_canonical(canonical: Option<Canonical>) -> Self {
        match canonical {
            Some(Canonical::Completed) => Self::Completed,
            Some(Canonical::InProgress) => Self::InProgress,
            Some(Canonical::Review) => Self::Review,
            Some(Canonical::Todo | Canonical::Testing) | None => Self::Default,
        }
    }
}

impl fmt::Display for ThemeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed column of the task board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoardColumn {
    /// Not started.
    Todo,
    /// Underway.
    InProgress,
    /// Being verified.
    Testing,
    /// Finished.
    Completed,
}

impl BoardColumn {
    /// All columns in left-to-right board order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::Testing, Self::Completed];

    /// Returns the column key. This is also the representative title written
    /// to a task's status pointer when it is moved into the column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Testing => "testing",
            Self::Completed => "completed",
        }
    }

    const fn from_canonical(canonical: Option<Canonical>) -> Self {
        match canonical {
            Some(Canonical::Completed) => Self::Completed,
            Some(Canonical::InProgress) => Self::InProgress,
            Some(Canonical::Testing) => Self::Testing,
            Some(Canonical::Todo | Canonical::Review) | None => Self::Todo,
        }
    }
}

impl TryFrom<&str> for BoardColumn {
    type Error = ParseBoardColumnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ParseBoardColumnError(value.to_owned()))
    }
}

impl fmt::Display for BoardColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a raw status string to its theming bucket.
///
/// ```
/// use camp_workflow::status::domain::{ThemeBucket, normalize_theme};
///
/// let status = normalize_theme(Some("In Progress"));
/// assert_eq!(status.key, ThemeBucket::InProgress);
/// assert_eq!(status.label, "doing");
/// ```
#[must_use]
pub fn normalize_theme(raw: Option<&str>) -> NormalizedStatus<ThemeBucket> {
    let key = ThemeBucket::from_canonical(canonicalize(raw));
    NormalizedStatus {
        key,
        label: key.label(),
    }
}

/// Maps a raw status string to its board column.
///
/// ```
/// use camp_workflow::status::domain::{BoardColumn, normalize_board};
///
/// assert_eq!(normalize_board(Some("Doing")).key, BoardColumn::InProgress);
/// assert_eq!(normalize_board(None).label, "todo");
/// ```
#[must_use]
pub fn normalize_board(raw: Option<&str>) -> NormalizedStatus<BoardColumn> {
    let key = BoardColumn::from_canonical(canonicalize(raw));
    NormalizedStatus {
        key,
        label: key.as_str(),
    }
}
