use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use dioxus::prelude::*;
use learn_core::model::CourseId;
use services::{CatalogService, ProgressService};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CatalogService>;
    fn progress(&self) -> Arc<ProgressService>;

    /// Course whose detail page opens on launch, if any.
    fn launch_course(&self) -> Option<CourseId>;
}

#[derive(Clone)]
pub struct AppContext {
    launch_course: Option<CourseId>,
    launch_course_pending: Arc<AtomicBool>,

    catalog: Arc<CatalogService>,
    progress: Arc<ProgressService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let launch_course = app.launch_course();
        let pending = launch_course.is_some();

        Self {
            launch_course,
            launch_course_pending: Arc::new(AtomicBool::new(pending)),
            catalog: app.catalog(),
            progress: app.progress(),
        }
    }

    /// Returns the launch course the first time only.
    #[must_use]
    pub fn take_launch_course(&self) -> Option<CourseId> {
        if self.launch_course_pending.swap(false, Ordering::AcqRel) {
            self.launch_course.clone()
        } else {
            None
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Counter bumped after every progress mutation.
///
/// Views read it inside their resources so they re-fetch after enroll or
/// lesson completion anywhere in the app.
#[derive(Clone, Copy, PartialEq)]
pub struct ProgressRevision(Signal<u64>);

impl ProgressRevision {
    /// Reads the counter, subscribing the caller.
    #[must_use]
    pub fn current(&self) -> u64 {
        (self.0)()
    }

    pub fn bump(&self) {
        let mut signal = self.0;
        *signal.write() += 1;
    }
}

/// Provide a fresh `ProgressRevision` to descendants.
pub fn use_progress_revision_provider() -> ProgressRevision {
    use_context_provider(|| ProgressRevision(Signal::new(0)))
}

#[must_use]
pub fn use_progress_revision() -> ProgressRevision {
    use_context::<ProgressRevision>()
}
