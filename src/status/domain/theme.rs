//! Visual themes for project status badges.

use super::{ThemeBucket, normalize_theme};

/// CSS classes and icon used to render a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTheme {
    /// Background gradient classes.
    pub background: &'static str,
    /// Border classes.
    pub border: &'static str,
    /// Text colour classes.
    pub text: &'static str,
    /// Icon name.
    pub icon: &'static str,
}

static COMPLETED: StatusTheme = StatusTheme {
    background: "bg-gradient-to-r from-green-50 to-emerald-50",
    border: "border-green-200",
    text: "text-green-700",
    icon: "check-circle",
};

static IN_PROGRESS: StatusTheme = StatusTheme {
    background: "bg-gradient-to-r from-blue-50 to-indigo-50",
    border: "border-blue-200",
    text: "text-blue-700",
    icon: "clock",
};

static REVIEW: StatusTheme = StatusTheme {
    background: "bg-gradient-to-r from-amber-50 to-yellow-50",
    border: "border-amber-200",
    text: "text-amber-700",
    icon: "eye",
};

static DEFAULT: StatusTheme = StatusTheme {
    background: "bg-gradient-to-r from-gray-50 to-slate-50",
    border: "border-gray-200",
    text: "text-gray-700",
    icon: "circle",
};

impl StatusTheme {
    /// Returns the theme for a bucket.
    #[must_use]
    pub fn for_bucket(bucket: ThemeBucket) -> &'static Self {
        match bucket {
            ThemeBucket::Completed => &COMPLETED,
            ThemeBucket::InProgress => &IN_PROGRESS,
            ThemeBucket::Review => &REVIEW,
            ThemeBucket::Default => &DEFAULT,
        }
    }

    /// Normalizes `raw` and returns its theme.
    #[must_use]
    pub fn for_status(raw: Option<&str>) -> &'static Self {
        Self::for_bucket(normalize_theme(raw).key)
    }
}
