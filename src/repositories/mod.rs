pub mod content_repository;
pub mod progress_repository;

pub use content_repository::{ContentRepository, MongoContentRepository};
pub use progress_repository::{MongoProgressRepository, ProgressRepository};

#[cfg(test)]
pub use content_repository::MockContentRepository;
#[cfg(test)]
pub use progress_repository::MockProgressRepository;
