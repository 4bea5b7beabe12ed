use serde::Serialize;

use crate::models::domain::{ContentUnit, Question};

/// Read envelope for content lookups: absence is a normal state, reported as
/// `found: false` with a null payload rather than a 404.
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub found: bool,
    pub data: Option<ContentUnit>,
}

impl ContentResponse {
    pub fn found(unit: ContentUnit) -> Self {
        Self {
            found: true,
            data: Some(unit),
        }
    }

    pub fn missing() -> Self {
        Self {
            found: false,
            data: None,
        }
    }
}

/// A sampled exam question. Module exams label each question with its source
/// subject; weekly exams carry no labels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestion {
    #[serde(flatten)]
    pub question: Question,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_module: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ExamData {
    pub questions: Vec<ExamQuestion>,
}

#[derive(Debug, Serialize)]
pub struct ExamResponse {
    pub found: bool,
    pub data: ExamData,
}

impl ExamResponse {
    pub fn new(questions: Vec<ExamQuestion>) -> Self {
        Self {
            found: true,
            data: ExamData { questions },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_content_serializes_with_null_data() {
        let json = serde_json::to_string(&ContentResponse::missing()).expect("should serialize");
        assert_eq!(json, r#"{"found":false,"data":null}"#);
    }

    #[test]
    fn exam_question_flattens_and_skips_absent_labels() {
        let question = ExamQuestion {
            question: Question::new(1, "Q"),
            subject_id: None,
            origin_module: None,
        };
        let json = serde_json::to_string(&question).expect("should serialize");
        assert!(json.contains("\"correctAnswer\":0"));
        assert!(!json.contains("subjectId"));

        let labeled = ExamQuestion {
            subject_id: Some(4),
            origin_module: Some(2),
            ..question
        };
        let json = serde_json::to_string(&labeled).expect("should serialize");
        assert!(json.contains("\"subjectId\":4"));
        assert!(json.contains("\"originModule\":2"));
    }
}
