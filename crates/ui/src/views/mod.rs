mod course_detail;
mod courses;
mod dashboard;
mod home;
mod not_found;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use course_detail::CourseDetailView;
pub use courses::CoursesView;
pub use dashboard::DashboardView;
pub use home::HomeView;
pub use not_found::NotFoundView;
pub use state::{view_state_from_resource, ViewError, ViewState};
