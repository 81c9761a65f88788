use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a Course.
///
/// A short lowercase slug such as `html` or `javascript`. Slugs travel in
/// route paths, so only ascii letters, digits and `-` are accepted.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId(String);

impl CourseId {
    /// Creates a validated `CourseId`.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if the slug is empty after trimming or contains
    /// characters other than lowercase ascii letters, digits and `-`.
    pub fn new(slug: impl Into<String>) -> Result<Self, ParseIdError> {
        let raw = slug.into();
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(ParseIdError::new("CourseId"));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a lesson inside one course: its zero-based position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LessonId(u32);

impl LessonId {
    /// Creates a new `LessonId`
    #[must_use]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the zero-based lesson index
    #[must_use]
    pub fn index(&self) -> u32 {
        self.0
    }

    /// One-based position for display.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.0.saturating_add(1)
    }
}

const LESSON_PREFIX: &str = "lesson-";

impl fmt::Debug for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CourseId({})", self.0)
    }
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LESSON_PREFIX}{}", self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl ParseIdError {
    fn new(kind: &'static str) -> Self {
        Self { kind }
    }
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for CourseId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseId::new(s)
    }
}

impl FromStr for LessonId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(LESSON_PREFIX)
            .and_then(|index| index.parse::<u32>().ok())
            .map(LessonId::new)
            .ok_or(ParseIdError::new("LessonId"))
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
