use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use learn_core::model::{CourseId, LessonId};
use services::CatalogError;

use crate::context::{AppContext, use_progress_revision};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseDetailVm, EnrollmentSummaryVm, LessonRowVm, map_course_detail};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DetailTab {
    Overview,
    Progress,
}

#[component]
pub fn CourseDetailView(course_id: CourseId) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let revision = use_progress_revision();
    let catalog = ctx.catalog();
    let progress = ctx.progress();
    let mut tab = use_signal(|| DetailTab::Overview);
    let action_error = use_signal(|| None::<ViewError>);

    let progress_for_resource = progress.clone();
    let resource = use_resource(use_reactive((&course_id,), move |(course_id,)| {
        let catalog = catalog.clone();
        let progress = progress_for_resource.clone();
        let _ = revision.current();
        async move {
            let course = match catalog.require_course(&course_id).await {
                Ok(course) => course,
                Err(CatalogError::UnknownCourse(_)) => return Ok(None),
                Err(_) => return Err(ViewError::Unknown),
            };
            let record = progress
                .progress_for(&course_id)
                .await
                .map_err(|err| ViewError::from_progress(&err))?;
            Ok::<_, ViewError>(Some(map_course_detail(&course, record.as_ref())))
        }
    }));

    let enroll_progress = progress.clone();
    let on_enroll = use_callback(move |course_id: CourseId| {
        let progress = enroll_progress.clone();
        let mut action_error = action_error;
        spawn(async move {
            match progress.enroll(&course_id).await {
                Ok(_) => {
                    action_error.set(None);
                    revision.bump();
                }
                Err(err) => action_error.set(Some(ViewError::from_progress(&err))),
            }
        });
    });

    let on_complete = use_callback(move |(course_id, lesson): (CourseId, LessonId)| {
        let progress = progress.clone();
        let mut action_error = action_error;
        spawn(async move {
            match progress.mark_lesson_complete(&course_id, lesson).await {
                Ok(completion) => {
                    action_error.set(None);
                    if completion.newly_completed {
                        revision.bump();
                    }
                }
                Err(err) => action_error.set(Some(ViewError::from_progress(&err))),
            }
        });
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page course-detail-page",
            Link { class: "back-link", to: Route::Courses {}, "Back to Courses" }
            if let Some(err) = action_error() {
                p { class: "action-error", "{err.message()}" }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(None) => rsx! {
                    div { class: "course-missing",
                        h2 { "Course not found" }
                        p { "No course matches \"{course_id}\"." }
                        Link { class: "btn btn-primary", to: Route::Courses {}, "Browse Courses" }
                    }
                },
                ViewState::Ready(Some(detail)) => {
                    let id = detail.card.id.clone();
                    let enrolled = detail.enrollment.is_some();
                    let on_primary = move |_: MouseEvent| {
                        if enrolled {
                            let _ = navigator.push(Route::Dashboard {});
                        } else {
                            on_enroll.call(id.clone());
                        }
                    };
                    rsx! {
                        CourseHeader { detail: detail.clone() }
                        nav { class: "detail-tabs",
                            button {
                                class: if tab() == DetailTab::Overview { "tab active" } else { "tab" },
                                r#type: "button",
                                onclick: move |_| tab.set(DetailTab::Overview),
                                "Overview"
                            }
                            button {
                                class: if tab() == DetailTab::Progress { "tab active" } else { "tab" },
                                r#type: "button",
                                onclick: move |_| tab.set(DetailTab::Progress),
                                "Progress Tracker"
                            }
                        }
                        div { class: "detail-body",
                            match tab() {
                                DetailTab::Overview => rsx! {
                                    OverviewTab { detail: detail.clone(), on_complete }
                                },
                                DetailTab::Progress => rsx! {
                                    ProgressTab { detail: detail.clone(), on_complete, on_enroll }
                                },
                            }
                            aside { class: "detail-sidebar",
                                SidebarProgress { enrollment: detail.enrollment.clone() }
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: on_primary,
                                    if enrolled { "View Dashboard" } else { "Enroll Now" }
                                }
                            }
                        }
                    }
                }
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn CourseHeader(detail: CourseDetailVm) -> Element {
    let card = &detail.card;
    rsx! {
        header { class: "detail-header",
            img { src: "{card.image_ref}", alt: "{card.title}" }
            h1 { "{card.title}" }
            p { "{card.description}" }
            div { class: "course-meta",
                span { "{card.duration}" }
                span { "{card.students_label} students" }
                span { "★ {card.rating_label}" }
            }
        }
    }
}

#[component]
fn OverviewTab(detail: CourseDetailVm, on_complete: Callback<(CourseId, LessonId)>) -> Element {
    let enrolled = detail.enrollment.is_some();
    rsx! {
        section { class: "detail-overview",
            h2 { "Course Content" }
            ol { class: "lesson-list",
                for lesson in detail.lessons {
                    LessonItem {
                        key: "{lesson.id}",
                        course_id: detail.card.id.clone(),
                        lesson,
                        enrolled,
                        on_complete,
                    }
                }
            }
        }
    }
}

#[component]
fn LessonItem(
    course_id: CourseId,
    lesson: LessonRowVm,
    enrolled: bool,
    on_complete: Callback<(CourseId, LessonId)>,
) -> Element {
    let lesson_id = lesson.id;
    let completed = lesson.completed;
    rsx! {
        li { class: if completed { "lesson completed" } else { "lesson" },
            span { class: "lesson-number",
                if completed { "✓" } else { "{lesson.number}" }
            }
            span { class: "lesson-title", "{lesson.title}" }
            if enrolled {
                button {
                    class: "btn btn-small",
                    r#type: "button",
                    disabled: completed,
                    onclick: move |_| on_complete.call((course_id.clone(), lesson_id)),
                    "{lesson.action_label()}"
                }
            }
        }
    }
}

#[component]
fn SidebarProgress(enrollment: Option<EnrollmentSummaryVm>) -> Element {
    match enrollment {
        Some(summary) => {
            let percent = summary.progress.value();
            rsx! {
                div { class: "sidebar-progress",
                    h3 { "Your Progress" }
                    div { class: "progress-bar",
                        div { class: "progress-fill", style: "width: {percent}%" }
                    }
                    p { "{summary.progress} Complete" }
                    p { "{summary.summary_label()}" }
                }
            }
        }
        None => rsx! {
            div { class: "sidebar-progress",
                h3 { "Ready to Start?" }
                p { "Enroll to unlock lessons and track your progress." }
            }
        },
    }
}

#[component]
fn ProgressTab(
    detail: CourseDetailVm,
    on_complete: Callback<(CourseId, LessonId)>,
    on_enroll: Callback<CourseId>,
) -> Element {
    let course_id = detail.card.id.clone();
    let Some(summary) = detail.enrollment.clone() else {
        return rsx! {
            section { class: "detail-progress empty",
                h2 { "Enroll to Track Progress" }
                p { "Your lesson-by-lesson progress appears here once you enroll." }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_enroll.call(course_id.clone()),
                    "Enroll Now"
                }
            }
        };
    };

    rsx! {
        section { class: "detail-progress",
            div { class: "progress-stats",
                div {
                    span { class: "stat-label", "Completion Rate" }
                    span { class: "stat-value", "{summary.progress}" }
                }
                div {
                    span { class: "stat-label", "Lessons Completed" }
                    span { class: "stat-value", "{summary.completed}" }
                }
                div {
                    span { class: "stat-label", "Lessons Remaining" }
                    span { class: "stat-value", "{summary.remaining}" }
                }
            }
            h3 { "Lesson Progress" }
            ul { class: "lesson-progress",
                for lesson in detail.lessons {
                    li { key: "{lesson.id}",
                        span { "Lesson {lesson.number}: {lesson.title}" }
                        span { class: "lesson-status", "{lesson.status_label()}" }
                        {
                            let course_id = course_id.clone();
                            let lesson_id = lesson.id;
                            rsx! {
                                button {
                                    class: "btn btn-small",
                                    r#type: "button",
                                    disabled: lesson.completed,
                                    onclick: move |_| on_complete.call((course_id.clone(), lesson_id)),
                                    "{lesson.action_label()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
