use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};
use learn_core::model::CourseId;

use crate::context::AppContext;
use crate::views::{CourseDetailView, CoursesView, DashboardView, HomeView, NotFoundView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/courses", CoursesView)] Courses {},
        #[route("/courses/:course_id", CourseDetailView)] CourseDetail { course_id: CourseId },
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    use_effect(move || {
        if let Some(course_id) = ctx.take_launch_course() {
            let _ = navigator.replace(Route::CourseDetail { course_id });
        }
    });

    rsx! {
        div { class: "app",
            Navigation {}
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

fn nav_items() -> [(&'static str, Route); 3] {
    [
        ("Home", Route::Home {}),
        ("Courses", Route::Courses {}),
        ("Dashboard", Route::Dashboard {}),
    ]
}

#[component]
fn Navigation() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "nav",
            div { class: "nav-brand", "LearnTech" }
            ul { class: "nav-links",
                for (label, route) in nav_items() {
                    li { key: "{label}",
                        Link { to: route, active_class: "active", "{label}" }
                    }
                }
            }
            button {
                class: "nav-menu-toggle",
                r#type: "button",
                aria_expanded: "{menu_open()}",
                onclick: move |_| menu_open.set(!menu_open()),
                if menu_open() { "Close menu" } else { "Menu" }
            }
            if menu_open() {
                ul { class: "nav-mobile",
                    for (label, route) in nav_items() {
                        li { key: "{label}",
                            Link {
                                to: route,
                                onclick: move |_| menu_open.set(false),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    // The catalog never changes, so a failed load simply leaves the list empty.
    let courses = use_resource(move || {
        let catalog = catalog.clone();
        async move { catalog.list_courses().await.unwrap_or_default() }
    });

    let course_links = courses.read().clone().unwrap_or_default();

    rsx! {
        footer { class: "footer",
            section {
                h3 { "Courses" }
                ul {
                    for course in course_links {
                        li { key: "{course.id()}",
                            Link {
                                to: Route::CourseDetail { course_id: course.id().clone() },
                                "{course.title()}"
                            }
                        }
                    }
                }
            }
            section {
                h3 { "Support" }
                ul {
                    li { Link { to: Route::Dashboard {}, "Your Dashboard" } }
                }
            }
            section {
                h3 { "Contact" }
                p { "support@learntech.com" }
                p { "+1 (555) 123-4567" }
                p { "San Francisco, CA" }
            }
            p { class: "footer-legal", "© 2024 LearnTech. All rights reserved." }
        }
    }
}
