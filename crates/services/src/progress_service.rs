use std::sync::Arc;

use learn_core::model::{Course, CourseId, EnrollmentRecord, LessonId, ProgressPercent};
use storage::repository::{CourseRepository, EnrollmentRepository, StorageError};
use tracing::{debug, info, warn};

use crate::Clock;
use crate::catalog_service::CatalogService;
use crate::error::ProgressError;

/// Result of an enroll request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollOutcome {
    pub record: EnrollmentRecord,
    /// `false` when the learner was already enrolled and nothing changed.
    pub created: bool,
}

/// Result of marking a lesson complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCompletion {
    pub record: EnrollmentRecord,
    pub newly_completed: bool,
}

/// An enrollment joined with the course it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseProgress {
    pub course: Course,
    pub record: EnrollmentRecord,
}

/// Totals across every enrollment, for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LearningStats {
    pub courses_enrolled: usize,
    pub total_lessons: usize,
    pub completed_lessons: usize,
    /// `None` until the learner enrolls somewhere.
    pub average_progress: Option<ProgressPercent>,
}

/// Enrollment and lesson-completion operations over the session-scoped store.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    catalog: CatalogService,
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(
        clock: Clock,
        courses: Arc<dyn CourseRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
    ) -> Self {
        Self {
            clock,
            catalog: CatalogService::new(courses),
            enrollments,
        }
    }

    /// Enroll in a course, keeping any existing progress.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownCourse` if the course is not in the catalog.
    /// Returns `ProgressError::Storage` if repository access fails.
    pub async fn enroll(&self, course_id: &CourseId) -> Result<EnrollOutcome, ProgressError> {
        let course = self.catalog.require_course(course_id).await?;

        if let Some(record) = self.enrollments.get_enrollment(course_id).await? {
            debug!(course = %course_id, "already enrolled");
            return Ok(EnrollOutcome {
                record,
                created: false,
            });
        }

        let record = EnrollmentRecord::new(&course, self.clock.now());
        match self.enrollments.insert_enrollment(&record).await {
            Ok(()) => {
                info!(course = %course_id, lessons = record.lesson_count(), "enrolled");
                Ok(EnrollOutcome {
                    record,
                    created: true,
                })
            }
            // Lost a race with another enroll: the stored record wins.
            Err(StorageError::Conflict) => {
                let record = self
                    .enrollments
                    .get_enrollment(course_id)
                    .await?
                    .ok_or(StorageError::NotFound)?;
                Ok(EnrollOutcome {
                    record,
                    created: false,
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Mark one lesson of an enrolled course complete.
    ///
    /// Completing an already-completed lesson succeeds without changes.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NotEnrolled` if there is no enrollment for the course.
    /// Returns `ProgressError::Enrollment` if the lesson is not part of the course.
    /// Returns `ProgressError::Storage` if repository access fails.
    pub async fn mark_lesson_complete(
        &self,
        course_id: &CourseId,
        lesson: LessonId,
    ) -> Result<LessonCompletion, ProgressError> {
        let Some(mut record) = self.enrollments.get_enrollment(course_id).await? else {
            warn!(course = %course_id, %lesson, "lesson completion without enrollment");
            return Err(ProgressError::NotEnrolled(course_id.clone()));
        };

        let newly_completed = record
            .complete_lesson(lesson, self.clock.now())
            .inspect_err(|err| warn!(course = %course_id, %lesson, %err, "lesson rejected"))?;

        if newly_completed {
            self.enrollments.update_enrollment(&record).await?;
            debug!(
                course = %course_id,
                %lesson,
                progress = %record.progress(),
                "lesson completed"
            );
        }

        Ok(LessonCompletion {
            record,
            newly_completed,
        })
    }

    /// Current enrollment for a course, if any.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if repository access fails.
    pub async fn progress_for(
        &self,
        course_id: &CourseId,
    ) -> Result<Option<EnrollmentRecord>, ProgressError> {
        let record = self.enrollments.get_enrollment(course_id).await?;
        Ok(record)
    }

    /// Every enrollment with its course, in enrollment order.
    ///
    /// Records whose course is no longer in the catalog are skipped.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if repository access fails.
    pub async fn list_progress(&self) -> Result<Vec<CourseProgress>, ProgressError> {
        let courses = self.catalog.list_courses().await?;
        let records = self.enrollments.list_enrollments().await?;

        let items = records
            .into_iter()
            .filter_map(|record| {
                let course = courses.iter().find(|c| c.id() == record.course_id())?;
                Some(CourseProgress {
                    course: course.clone(),
                    record,
                })
            })
            .collect();
        Ok(items)
    }

    /// Aggregate totals across all enrollments.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if repository access fails.
    pub async fn learning_stats(&self) -> Result<LearningStats, ProgressError> {
        let items = self.list_progress().await?;
        Ok(stats_from_progress(&items))
    }
}

fn stats_from_progress(items: &[CourseProgress]) -> LearningStats {
    let progress: Vec<ProgressPercent> = items.iter().map(|p| p.record.progress()).collect();
    LearningStats {
        courses_enrolled: items.len(),
        total_lessons: items.iter().map(|p| p.course.lesson_count()).sum(),
        completed_lessons: items.iter().map(|p| p.record.completed_count()).sum(),
        average_progress: ProgressPercent::average(&progress),
    }
}
