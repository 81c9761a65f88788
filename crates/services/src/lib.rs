#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod progress_service;

pub use learn_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use error::{AppServicesError, CatalogError, ProgressError};
pub use progress_service::{
    CourseProgress, EnrollOutcome, LearningStats, LessonCompletion, ProgressService,
};
