mod course_vm;
mod dashboard_vm;
mod format;
mod time_fmt;

pub use course_vm::{
    CourseCardVm, CourseDetailVm, EnrollmentSummaryVm, LessonRowVm, map_course_cards,
    map_course_detail,
};
pub use dashboard_vm::{DashboardCourseVm, DashboardVm, LearningStatsVm, map_dashboard};
pub use format::{format_count, format_rating};
pub use time_fmt::format_date;
