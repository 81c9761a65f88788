use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, use_progress_revision};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DashboardCourseVm, LearningStatsVm, map_dashboard};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let revision = use_progress_revision();
    let progress = ctx.progress();

    let resource = use_resource(move || {
        let progress = progress.clone();
        let _ = revision.current();
        async move {
            let items = progress
                .list_progress()
                .await
                .map_err(|err| ViewError::from_progress(&err))?;
            let stats = progress
                .learning_stats()
                .await
                .map_err(|err| ViewError::from_progress(&err))?;
            Ok::<_, ViewError>(map_dashboard(&items, stats))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dashboard-page",
            header { class: "view-header",
                h2 { class: "view-title", "Learning Dashboard" }
                p { class: "view-subtitle", "Track your progress and continue your learning journey" }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    if vm.is_empty() {
                        div { class: "dashboard-empty",
                            h3 { "No courses enrolled yet" }
                            p { "Start your learning journey by enrolling in a course." }
                            Link { class: "btn btn-primary", to: Route::Courses {}, "Browse Courses" }
                        }
                    } else {
                        div { class: "dashboard-grid",
                            section { class: "dashboard-courses",
                                h3 { "Your Courses" }
                                for course in vm.courses {
                                    DashboardCourseRow { key: "{course.id}", course }
                                }
                            }
                            LearningStatsPanel { stats: vm.stats }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn DashboardCourseRow(course: DashboardCourseVm) -> Element {
    let percent = course.progress.value();
    rsx! {
        article { class: "dashboard-course",
            h4 { "{course.title}" }
            span { class: "dashboard-course-progress", "{course.progress} Complete" }
            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {percent}%" }
            }
            div { class: "course-meta",
                span { "{course.lessons_label}" }
                span { "{course.enrolled_label}" }
            }
            Link {
                class: "btn btn-secondary",
                to: Route::CourseDetail { course_id: course.id.clone() },
                "Continue Learning"
            }
        }
    }
}

#[component]
fn LearningStatsPanel(stats: LearningStatsVm) -> Element {
    rsx! {
        aside { class: "learning-stats",
            h3 { "Learning Stats" }
            dl {
                dt { "Courses Enrolled" }
                dd { "{stats.courses_enrolled}" }
                dt { "Total Lessons" }
                dd { "{stats.total_lessons}" }
                dt { "Completed Lessons" }
                dd { "{stats.completed_lessons}" }
                dt { "Average Progress" }
                dd { "{stats.average_label}" }
            }
        }
    }
}
