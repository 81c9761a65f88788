#![forbid(unsafe_code)]

pub mod repository;

pub use repository::{
    CourseRepository, EnrollmentRepository, InMemoryRepository, Storage, StorageError,
};
