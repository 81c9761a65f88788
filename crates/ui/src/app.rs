use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::use_progress_revision_provider;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_progress_revision_provider();

    rsx! {
        document::Title { "LearnTech" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
