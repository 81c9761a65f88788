use thiserror::Error;

use crate::model::{CourseError, EnrollmentError, ParseIdError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Enrollment(#[from] EnrollmentError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
