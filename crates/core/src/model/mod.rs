mod course;
mod enrollment;
mod ids;
mod progress;

pub use ids::{CourseId, LessonId, ParseIdError};

pub use course::{Course, CourseError};
pub use enrollment::{EnrollmentError, EnrollmentRecord};
pub use progress::ProgressPercent;
