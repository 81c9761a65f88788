use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, map_course_cards};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let courses = catalog
                .list_courses()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_course_cards(&courses, &[]))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h1 { "Master Web Development, One Lesson at a Time" }
                p {
                    "Learn HTML, CSS, and JavaScript with our interactive courses and track your progress in real-time."
                }
                Link { class: "btn btn-primary", to: Route::Courses {}, "Start Learning Now" }
            }

            section { class: "featured",
                h2 { "Featured Courses" }
                p { "Master the essential web technologies with our comprehensive, project-based courses" }

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
                                FeaturedCourseCard { key: "{card.id}", card }
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
}

#[component]
fn FeaturedCourseCard(card: CourseCardVm) -> Element {
    let navigator = use_navigator();
    let course_id = card.id.clone();

    rsx! {
        article {
            class: "course-card",
            onclick: move |_| {
                let _ = navigator.push(Route::CourseDetail { course_id: course_id.clone() });
            },
            img { src: "{card.image_ref}", alt: "{card.title}" }
            span { class: "course-duration", "{card.duration}" }
            h3 { "{card.title}" }
            p { "{card.description}" }
            div { class: "course-meta",
                span { "{card.students_label} students" }
                span { "★ {card.rating_label}" }
            }
            span { class: "btn btn-primary", "View Course" }
        }
    }
}
