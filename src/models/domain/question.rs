use serde::{Deserialize, Serialize};

/// A single multiple-choice question as stored inside a content document.
///
/// Wire names match the historical documents: `correctAnswer` is a 0-based
/// index into `options`, and `justification` is the author's commentary shown
/// during quiz feedback.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i32,
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: usize,
    #[serde(default)]
    pub justification: Option<String>,
}

impl Question {
    pub fn new(id: i32, text: &str) -> Self {
        Question {
            id,
            text: text.to_string(),
            options: Vec::new(),
            correct_answer: 0,
            justification: None,
        }
    }

    /// True when `correct_answer` actually addresses one of the options.
    pub fn has_valid_answer(&self) -> bool {
        self.correct_answer < self.options.len()
    }
}
