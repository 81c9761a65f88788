use thiserror::Error;

use crate::model::ids::{CourseId, LessonId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("course must have at least one lesson")]
    NoLessons,

    #[error("lesson {index} has an empty title")]
    EmptyLessonTitle { index: usize },

    #[error("course rating must be between 0 and 5")]
    InvalidRating,

    #[error("too many lessons for a single course: {len}")]
    TooManyLessons { len: usize },
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// A catalog course.
///
/// Courses are built once when the catalog loads and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    duration: String,
    student_count: u32,
    rating: f32,
    image_ref: String,
    lessons: Vec<String>,
}

impl Course {
    /// Creates a validated course.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::EmptyTitle` if the title is blank.
    /// Returns `CourseError::NoLessons` if `lessons` is empty.
    /// Returns `CourseError::EmptyLessonTitle` if any lesson title is blank.
    /// Returns `CourseError::InvalidRating` if `rating` is not a finite value in `0..=5`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: impl Into<String>,
        student_count: u32,
        rating: f32,
        image_ref: impl Into<String>,
        lessons: Vec<String>,
    ) -> Result<Self, CourseError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        if lessons.is_empty() {
            return Err(CourseError::NoLessons);
        }
        if u32::try_from(lessons.len()).is_err() {
            return Err(CourseError::TooManyLessons { len: lessons.len() });
        }
        if let Some(index) = lessons.iter().position(|l| l.trim().is_empty()) {
            return Err(CourseError::EmptyLessonTitle { index });
        }
        if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
            return Err(CourseError::InvalidRating);
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            duration: duration.into(),
            student_count,
            rating,
            image_ref: image_ref.into(),
            lessons,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Human-readable duration label, e.g. "4 weeks".
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn student_count(&self) -> u32 {
        self.student_count
    }

    #[must_use]
    pub fn rating(&self) -> f32 {
        self.rating
    }

    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    /// Lesson titles in curriculum order.
    #[must_use]
    pub fn lessons(&self) -> &[String] {
        &self.lessons
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// Lesson ids paired with their titles, in curriculum order.
    pub fn lesson_ids(&self) -> impl Iterator<Item = (LessonId, &str)> + '_ {
        // Length is bounded by u32 at construction.
        (0_u32..).zip(self.lessons.iter()).map(|(i, t)| (LessonId::new(i), t.as_str()))
    }

    #[must_use]
    pub fn lesson(&self, id: LessonId) -> Option<&str> {
        usize::try_from(id.index())
            .ok()
            .and_then(|i| self.lessons.get(i))
            .map(String::as_str)
    }

    #[must_use]
    pub fn contains_lesson(&self, id: LessonId) -> bool {
        self.lesson(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lessons(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Lesson {i}")).collect()
    }

    fn build(rating: f32, lessons: Vec<String>) -> Result<Course, CourseError> {
        Course::new(
            CourseId::new("html").unwrap(),
            "Complete HTML Mastery",
            "Tags and structure",
            "4 weeks",
            12_500,
            rating,
            "html.jpeg",
            lessons,
        )
    }

    #[test]
    fn exposes_lessons_in_order() {
        let course = build(4.9, lessons(3)).unwrap();
        let ids: Vec<_> = course.lesson_ids().map(|(id, _)| id.to_string()).collect();
        assert_eq!(ids, ["lesson-0", "lesson-1", "lesson-2"]);
        assert_eq!(course.lesson(LessonId::new(1)), Some("Lesson 2"));
        assert!(!course.contains_lesson(LessonId::new(3)));
    }

    #[test]
    fn rejects_empty_curriculum() {
        assert_eq!(build(4.0, Vec::new()).unwrap_err(), CourseError::NoLessons);
    }

    #[test]
    fn rejects_blank_lesson_title() {
        let err = build(4.0, vec!["Intro".into(), "  ".into()]).unwrap_err();
        assert_eq!(err, CourseError::EmptyLessonTitle { index: 1 });
    }

    #[test]
    fn rejects_out_of_range_rating() {
        assert_eq!(build(5.1, lessons(1)).unwrap_err(), CourseError::InvalidRating);
        assert_eq!(build(f32::NAN, lessons(1)).unwrap_err(), CourseError::InvalidRating);
    }

    #[test]
    fn rejects_blank_title() {
        let err = Course::new(
            CourseId::new("css").unwrap(),
            "   ",
            "",
            "6 weeks",
            0,
            4.0,
            "",
            lessons(1),
        )
        .unwrap_err();
        assert_eq!(err, CourseError::EmptyTitle);
    }
}
