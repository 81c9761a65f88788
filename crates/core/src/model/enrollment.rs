use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::{CourseId, LessonId};
use crate::model::{Course, ProgressPercent};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EnrollmentError {
    #[error("{lesson} is outside the {lesson_count} lessons of course {course_id}")]
    LessonOutOfRange {
        course_id: CourseId,
        lesson: LessonId,
        lesson_count: usize,
    },
}

/// A learner's completion state for one course.
///
/// Progress is never stored; it is derived from the completed lesson set on
/// every read. Completed lessons always belong to the enrolled course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRecord {
    course_id: CourseId,
    lesson_count: usize,
    completed: BTreeSet<LessonId>,
    enrolled_at: DateTime<Utc>,
    last_activity_at: DateTime<Utc>,
}

impl EnrollmentRecord {
    /// Starts a fresh enrollment with no lessons completed.
    #[must_use]
    pub fn new(course: &Course, now: DateTime<Utc>) -> Self {
        Self {
            course_id: course.id().clone(),
            lesson_count: course.lesson_count(),
            completed: BTreeSet::new(),
            enrolled_at: now,
            last_activity_at: now,
        }
    }

    /// Marks a lesson complete.
    ///
    /// Returns `true` if the lesson was newly completed and `false` if it
    /// was already complete, in which case the record is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::LessonOutOfRange` if the lesson does not
    /// belong to this course.
    pub fn complete_lesson(
        &mut self,
        lesson: LessonId,
        now: DateTime<Utc>,
    ) -> Result<bool, EnrollmentError> {
        let in_range = usize::try_from(lesson.index()).is_ok_and(|i| i < self.lesson_count);
        if !in_range {
            return Err(EnrollmentError::LessonOutOfRange {
                course_id: self.course_id.clone(),
                lesson,
                lesson_count: self.lesson_count,
            });
        }
        if !self.completed.insert(lesson) {
            return Ok(false);
        }
        self.last_activity_at = now;
        Ok(true)
    }

    #[must_use]
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lesson_count
    }

    /// Completed lessons in curriculum order.
    pub fn completed_lessons(&self) -> impl Iterator<Item = LessonId> + '_ {
        self.completed.iter().copied()
    }

    #[must_use]
    pub fn is_lesson_complete(&self, lesson: LessonId) -> bool {
        self.completed.contains(&lesson)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.lesson_count.saturating_sub(self.completed.len())
    }

    #[must_use]
    pub fn progress(&self) -> ProgressPercent {
        ProgressPercent::from_counts(self.completed.len(), self.lesson_count)
    }

    #[must_use]
    pub fn enrolled_at(&self) -> DateTime<Utc> {
        self.enrolled_at
    }

    #[must_use]
    pub fn last_activity_at(&self) -> DateTime<Utc> {
        self.last_activity_at
    }
}
