//! Validated hex colour used to paint status badges and columns.

use super::StatusDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `#RRGGBB` colour string, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Creates a validated colour.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::InvalidColor`] unless the trimmed value is
    /// a `#` followed by exactly six hexadecimal digits.
    pub fn new(value: impl Into<String>) -> Result<Self, StatusDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let is_valid = trimmed.strip_prefix('#').is_some_and(|digits| {
            digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
        });
        if !is_valid {
            return Err(StatusDomainError::InvalidColor(raw));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the colour as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_owned())
    }
}

impl TryFrom<String> for HexColor {
    type Error = StatusDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
