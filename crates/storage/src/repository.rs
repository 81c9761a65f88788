use async_trait::async_trait;
use learn_core::model::{Course, CourseId, EnrollmentRecord};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),
}

/// Read-only access to the course catalog.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// List every course in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    async fn list_courses(&self) -> Result<Vec<Course>, StorageError>;

    /// Fetch a course by ID.
    ///
    /// Returns `Ok(None)` when the course does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    async fn get_course(&self, id: &CourseId) -> Result<Option<Course>, StorageError>;
}

/// Repository contract for enrollment records.
///
/// Holds at most one record per course.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Fetch the enrollment for a course.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn get_enrollment(
        &self,
        course_id: &CourseId,
    ) -> Result<Option<EnrollmentRecord>, StorageError>;

    /// Store a new enrollment.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the course already has a record.
    async fn insert_enrollment(&self, record: &EnrollmentRecord) -> Result<(), StorageError>;

    /// Replace an existing enrollment.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the course has no record.
    async fn update_enrollment(&self, record: &EnrollmentRecord) -> Result<(), StorageError>;

    /// List enrollments in the order they were created.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn list_enrollments(&self) -> Result<Vec<EnrollmentRecord>, StorageError>;
}

/// In-memory repository; state lives only as long as the process.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    courses: Arc<Vec<Course>>,
    enrollments: Arc<Mutex<Vec<EnrollmentRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository serving the given catalog, with no enrollments.
    #[must_use]
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Arc::new(courses),
            enrollments: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl CourseRepository for InMemoryRepository {
    async fn list_courses(&self) -> Result<Vec<Course>, StorageError> {
        Ok(self.courses.as_ref().clone())
    }

    async fn get_course(&self, id: &CourseId) -> Result<Option<Course>, StorageError> {
        Ok(self.courses.iter().find(|c| c.id() == id).cloned())
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryRepository {
    async fn get_enrollment(
        &self,
        course_id: &CourseId,
    ) -> Result<Option<EnrollmentRecord>, StorageError> {
        let guard = self
            .enrollments
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.iter().find(|r| r.course_id() == course_id).cloned())
    }

    async fn insert_enrollment(&self, record: &EnrollmentRecord) -> Result<(), StorageError> {
        let mut guard = self
            .enrollments
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.iter().any(|r| r.course_id() == record.course_id()) {
            return Err(StorageError::Conflict);
        }
        guard.push(record.clone());
        Ok(())
    }

    async fn update_enrollment(&self, record: &EnrollmentRecord) -> Result<(), StorageError> {
        let mut guard = self
            .enrollments
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let slot = guard
            .iter_mut()
            .find(|r| r.course_id() == record.course_id())
            .ok_or(StorageError::NotFound)?;
        *slot = record.clone();
        Ok(())
    }

    async fn list_enrollments(&self) -> Result<Vec<EnrollmentRecord>, StorageError> {
        let guard = self
            .enrollments
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }
}

/// Aggregates catalog and enrollment repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub courses: Arc<dyn CourseRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
}

impl Storage {
    /// Empty catalog, empty enrollments.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_catalog(Vec::new())
    }

    #[must_use]
    pub fn with_catalog(courses: Vec<Course>) -> Self {
        let repo = InMemoryRepository::with_courses(courses);
        let courses: Arc<dyn CourseRepository> = Arc::new(repo.clone());
        let enrollments: Arc<dyn EnrollmentRepository> = Arc::new(repo);
        Self {
            courses,
            enrollments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learn_core::catalog::default_catalog;
    use learn_core::model::LessonId;
    use learn_core::time::fixed_now;

    fn course(slug: &str) -> Course {
        default_catalog()
            .unwrap()
            .into_iter()
            .find(|c| c.id().as_str() == slug)
            .unwrap()
    }

    #[tokio::test]
    async fn serves_catalog_in_order() {
        let repo = InMemoryRepository::with_courses(default_catalog().unwrap());
        let courses = repo.list_courses().await.unwrap();
        assert_eq!(courses.len(), 3);
        assert_eq!(courses[0].id().as_str(), "html");

        let css = repo
            .get_course(&CourseId::new("css").unwrap())
            .await
            .unwrap();
        assert_eq!(css.unwrap().title(), "Advanced CSS & Styling");

        let missing = repo
            .get_course(&CourseId::new("rust").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn second_insert_for_course_conflicts() {
        let repo = InMemoryRepository::new();
        let record = EnrollmentRecord::new(&course("html"), fixed_now());
        repo.insert_enrollment(&record).await.unwrap();

        let err = repo.insert_enrollment(&record).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict));
        assert_eq!(repo.list_enrollments().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_replaces_existing_record() {
        let repo = InMemoryRepository::new();
        let mut record = EnrollmentRecord::new(&course("css"), fixed_now());
        repo.insert_enrollment(&record).await.unwrap();

        record.complete_lesson(LessonId::new(1), fixed_now()).unwrap();
        repo.update_enrollment(&record).await.unwrap();

        let fetched = repo
            .get_enrollment(record.course_id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.completed_count(), 1);
    }

    #[tokio::test]
    async fn update_without_record_is_not_found() {
        let repo = InMemoryRepository::new();
        let record = EnrollmentRecord::new(&course("javascript"), fixed_now());
        let err = repo.update_enrollment(&record).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn lists_in_enrollment_order() {
        let repo = InMemoryRepository::new();
        for slug in ["javascript", "html"] {
            let record = EnrollmentRecord::new(&course(slug), fixed_now());
            repo.insert_enrollment(&record).await.unwrap();
        }
        let listed: Vec<String> = repo
            .list_enrollments()
            .await
            .unwrap()
            .iter()
            .map(|r| r.course_id().to_string())
            .collect();
        assert_eq!(listed, ["javascript", "html"]);
    }
}
