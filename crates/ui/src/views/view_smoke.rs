use std::sync::Arc;

use learn_core::model::{Course, CourseId, LessonId};
use storage::repository::{CourseRepository, InMemoryRepository, Storage, StorageError};

use super::test_harness::{
    ViewKind, course_id, setup_view_harness, setup_view_harness_with_services,
    setup_view_harness_with_storage,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_featured_courses() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Featured Courses"), "missing heading in {html}");
    for title in ["Complete HTML Mastery", "Styling", "JavaScript Fundamentals"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(html.contains("12,500 students"), "missing student count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_reflects_enrollment() {
    let mut harness = setup_view_harness(ViewKind::Courses);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Enroll Now"), "missing enroll button in {html}");
    assert!(!html.contains("Continue Learning"), "unexpected enrollment in {html}");

    let progress = harness.services.progress();
    let css = course_id("css");
    progress.enroll(&css).await.expect("enroll");
    progress
        .mark_lesson_complete(&css, LessonId::new(0))
        .await
        .expect("complete lesson");

    let mut harness = setup_view_harness_with_services(ViewKind::Courses, harness.services);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Continue Learning"), "missing continue label in {html}");
    assert!(html.contains("17% Complete"), "missing progress badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_shows_lessons_and_summary() {
    let mut harness = setup_view_harness(ViewKind::CourseDetail(course_id("html")));
    let progress = harness.services.progress();
    let html_id = course_id("html");
    progress.enroll(&html_id).await.expect("enroll");
    for index in [0, 2] {
        progress
            .mark_lesson_complete(&html_id, LessonId::new(index))
            .await
            .expect("complete lesson");
    }

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Back to Courses"), "missing back link in {html}");
    assert!(html.contains("Forms and Input Elements"), "missing lesson in {html}");
    assert!(html.contains("2 of 6 lessons completed"), "missing summary in {html}");
    assert!(html.contains("33% Complete"), "missing percent in {html}");
    assert!(html.contains("width: 33%"), "missing progress bar in {html}");
    assert!(html.contains("View Dashboard"), "missing dashboard button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_invites_enrollment() {
    let mut harness = setup_view_harness(ViewKind::CourseDetail(course_id("javascript")));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Ready to Start?"), "missing call to action in {html}");
    assert!(html.contains("Enroll Now"), "missing enroll button in {html}");
    assert!(!html.contains("Mark Complete"), "lesson actions shown before enrolling in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_handles_unknown_course() {
    let mut harness = setup_view_harness(ViewKind::CourseDetail(course_id("rust")));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Course not found"), "missing not found state in {html}");
    assert!(html.contains("Browse Courses"), "missing catalog link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("No courses enrolled yet"), "missing empty state in {html}");
    assert!(html.contains("Browse Courses"), "missing browse link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_stats() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    let progress = harness.services.progress();
    let html_id = course_id("html");
    let css_id = course_id("css");
    progress.enroll(&html_id).await.expect("enroll html");
    progress.enroll(&css_id).await.expect("enroll css");
    for index in [0, 1] {
        progress
            .mark_lesson_complete(&html_id, LessonId::new(index))
            .await
            .expect("complete html lesson");
    }
    for index in [0, 1, 2] {
        progress
            .mark_lesson_complete(&css_id, LessonId::new(index))
            .await
            .expect("complete css lesson");
    }

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Your Courses"), "missing course list in {html}");
    assert!(html.contains("Complete HTML Mastery"), "missing html course in {html}");
    assert!(html.contains("33% Complete"), "missing html percent in {html}");
    assert!(html.contains("50% Complete"), "missing css percent in {html}");
    assert!(html.contains("3 / 6 lessons"), "missing lessons label in {html}");
    assert!(html.contains("Learning Stats"), "missing stats in {html}");
    assert!(html.contains("42%"), "missing average in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_renders_navigation_and_footer() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("LearnTech"), "missing brand in {html}");
    for label in ["Home", "Courses", "Dashboard"] {
        assert!(html.contains(label), "missing nav item {label} in {html}");
    }
    assert!(html.contains("Featured Courses"), "missing home outlet in {html}");
    assert!(html.contains("support@learntech.com"), "missing footer in {html}");
}

struct FailingCourses;

#[async_trait::async_trait]
impl CourseRepository for FailingCourses {
    async fn list_courses(&self) -> Result<Vec<Course>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_course(&self, _id: &CourseId) -> Result<Option<Course>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_renders_error_state() {
    let storage = Storage {
        courses: Arc::new(FailingCourses),
        enrollments: Arc::new(InMemoryRepository::new()),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::Courses, &storage);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}
