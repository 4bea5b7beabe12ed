pub mod content_unit;
pub mod progress;
pub mod question;

pub use content_unit::{ContentKey, ContentUnit};
pub use progress::{CompletedLesson, ProgressRecord};
pub use question::Question;
