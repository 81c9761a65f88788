use std::sync::Arc;

use learn_core::catalog::default_catalog;
use learn_core::model::CourseId;
use storage::repository::Storage;

use crate::Clock;
use crate::catalog_service::CatalogService;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;

/// Assembles app-facing services over one session-scoped store.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    progress: Arc<ProgressService>,
}

impl AppServices {
    /// Build services over an in-memory store seeded with the default catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the shipped catalog fails validation.
    pub fn in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::with_catalog(default_catalog()?);
        Ok(Self::from_storage(clock, &storage))
    }

    #[must_use]
    pub fn from_storage(clock: Clock, storage: &Storage) -> Self {
        let catalog = Arc::new(CatalogService::new(Arc::clone(&storage.courses)));
        let progress = Arc::new(ProgressService::new(
            clock,
            Arc::clone(&storage.courses),
            Arc::clone(&storage.enrollments),
        ));
        Self { catalog, progress }
    }

    /// Validate a course slug requested at launch.
    ///
    /// Blank input means "no launch course".
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::InvalidCourseId` if the slug is malformed.
    /// Returns `AppServicesError::Lookup` if no course has this slug.
    pub async fn resolve_launch_course(
        &self,
        raw: Option<&str>,
    ) -> Result<Option<CourseId>, AppServicesError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        let course_id =
            CourseId::new(raw).map_err(|_| AppServicesError::InvalidCourseId(raw.to_owned()))?;
        let course = self.catalog.require_course(&course_id).await?;
        Ok(Some(course.id().clone()))
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
