pub mod content_service;
pub mod exam_service;
pub mod progress_service;

pub use content_service::ContentService;
pub use exam_service::ExamService;
pub use progress_service::ProgressService;
