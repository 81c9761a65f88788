//! Shared error types for the services crate.

use thiserror::Error;

use learn_core::model::{CourseId, EnrollmentError};
use storage::repository::StorageError;

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("unknown course: {0}")]
    UnknownCourse(CourseId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("unknown course: {0}")]
    UnknownCourse(CourseId),
    #[error("not enrolled in course {0}")]
    NotEnrolled(CourseId),
    #[error(transparent)]
    Enrollment(#[from] EnrollmentError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<CatalogError> for ProgressError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownCourse(id) => Self::UnknownCourse(id),
            CatalogError::Storage(err) => Self::Storage(err),
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] learn_core::Error),
    #[error("invalid course id: {0}")]
    InvalidCourseId(String),
    #[error(transparent)]
    Lookup(#[from] CatalogError),
}
