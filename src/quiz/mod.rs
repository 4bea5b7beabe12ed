pub mod parser;
pub mod session;

pub use parser::{parse_quiz_text, QuizParseError, REQUIRED_QUESTION_COUNT};
pub use session::{QuizSession, SessionState};
