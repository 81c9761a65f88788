use std::sync::Arc;

use learn_core::model::{Course, CourseId};
use storage::repository::CourseRepository;

use crate::error::CatalogError;

/// Read access to the course catalog.
#[derive(Clone)]
pub struct CatalogService {
    courses: Arc<dyn CourseRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    /// List courses in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn list_courses(&self) -> Result<Vec<Course>, CatalogError> {
        let courses = self.courses.list_courses().await?;
        Ok(courses)
    }

    /// Fetch a course by ID.
    ///
    /// Returns `Ok(None)` when the course does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn get_course(&self, course_id: &CourseId) -> Result<Option<Course>, CatalogError> {
        let course = self.courses.get_course(course_id).await?;
        Ok(course)
    }

    /// Fetch a course that must exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownCourse` if no course has this ID.
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn require_course(&self, course_id: &CourseId) -> Result<Course, CatalogError> {
        self.get_course(course_id)
            .await?
            .ok_or_else(|| CatalogError::UnknownCourse(course_id.clone()))
    }
}
