use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use learn_core::model::CourseId;
use learn_core::time::fixed_clock;
use services::{AppServices, CatalogService, ProgressService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context, use_progress_revision_provider};
use crate::routes::Route;
use crate::views::{CourseDetailView, CoursesView, DashboardView, HomeView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn launch_course(&self) -> Option<CourseId> {
        None
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    /// Full routed shell: navigation, outlet, footer.
    Shell,
    Home,
    Courses,
    CourseDetail(CourseId),
    Dashboard,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_progress_revision_provider();

    if props.view == ViewKind::Shell {
        rsx! { Router::<Route> {} }
    } else {
        rsx! { Router::<TestRoute> {} }
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Shell | ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::CourseDetail(course_id) => rsx! { CourseDetailView { course_id } },
        ViewKind::Dashboard => rsx! { DashboardView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let services = AppServices::in_memory(fixed_clock()).expect("in-memory services");
    setup_view_harness_with_services(view, services)
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: &Storage) -> ViewHarness {
    setup_view_harness_with_services(view, AppServices::from_storage(fixed_clock(), storage))
}

pub fn setup_view_harness_with_services(view: ViewKind, services: AppServices) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: services.clone(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, services }
}

pub fn course_id(slug: &str) -> CourseId {
    CourseId::new(slug).expect("valid course id")
}
