use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use learn_core::model::CourseId;

use crate::context::{AppContext, use_progress_revision};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, map_course_cards};

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let revision = use_progress_revision();
    let catalog = ctx.catalog();
    let progress = ctx.progress();
    let action_error = use_signal(|| None::<ViewError>);

    let progress_for_resource = progress.clone();
    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let progress = progress_for_resource.clone();
        let _ = revision.current();
        async move {
            let courses = catalog
                .list_courses()
                .await
                .map_err(|_| ViewError::Unknown)?;
            let records = progress
                .list_progress()
                .await
                .map_err(|err| ViewError::from_progress(&err))?
                .into_iter()
                .map(|item| item.record)
                .collect::<Vec<_>>();
            Ok::<_, ViewError>(map_course_cards(&courses, &records))
        }
    });

    let on_enroll = use_callback(move |course_id: CourseId| {
        let progress = progress.clone();
        let mut action_error = action_error;
        spawn(async move {
            match progress.enroll(&course_id).await {
                Ok(_) => {
                    action_error.set(None);
                    revision.bump();
                    let _ = navigator.push(Route::Dashboard {});
                }
                Err(err) => action_error.set(Some(ViewError::from_progress(&err))),
            }
        });
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page courses-page",
            header { class: "view-header",
                h2 { class: "view-title", "Our Courses" }
                p { class: "view-subtitle", "Choose your path to web development mastery" }
            }
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
                ViewState::Ready(cards) => rsx! {
                    div { class: "course-grid",
                        for card in cards {
                            CatalogCourseCard { key: "{card.id}", card, on_enroll }
                        }
                    }
                },
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
fn CatalogCourseCard(card: CourseCardVm, on_enroll: EventHandler<CourseId>) -> Element {
    let course_id = card.id.clone();
    let badge = card.progress_badge();

    rsx! {
        article { class: "course-card",
            img { src: "{card.image_ref}", alt: "{card.title}" }
            if let Some(badge) = badge {
                span { class: "course-progress-badge", "{badge}" }
            }
            h3 { "{card.title}" }
            p { "{card.description}" }
            div { class: "course-meta",
                span { "{card.duration}" }
                span { "{card.students_label} students" }
                span { "★ {card.rating_label}" }
            }
            div { class: "course-actions",
                Link {
                    class: "btn btn-secondary",
                    to: Route::CourseDetail { course_id: card.id.clone() },
                    "View Details"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_enroll.call(course_id.clone()),
                    "{card.enroll_label()}"
                }
            }
        }
    }
}
