use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ContentKey, ContentUnit, Question},
    models::dto::request::SaveContentRequest,
    quiz::parser::parse_quiz_text,
    repositories::ContentRepository,
};

pub struct ContentService {
    repository: Arc<dyn ContentRepository>,
}

impl ContentService {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_content(&self, key: &ContentKey) -> AppResult<Option<ContentUnit>> {
        self.repository.find(key).await
    }

    /// Admin save. Parses each non-empty quiz-text tier with the shared
    /// parser; a failure on either tier aborts the whole save before
    /// anything is persisted. An empty standard tier is the explicit
    /// clear-all-questions action, which keeps the unit's other fields.
    pub async fn save_content(&self, request: SaveContentRequest) -> AppResult<ContentUnit> {
        request.validate()?;

        let questions: Vec<Question> = match request.data.quiz_text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => parse_quiz_text(text)?,
            _ => Vec::new(),
        };

        let questions_superior = match request.data.quiz_text_superior.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Some(
                parse_quiz_text(text)
                    .map_err(|e| AppError::ValidationError(format!("nível superior: {e}")))?,
            ),
            _ => None,
        };

        let key = request.key();
        let unit = ContentUnit {
            week_id: key.week_id,
            day_id: key.day_id,
            lesson_id: key.lesson_id,
            video_url: request.data.video_url,
            pdf_name: request.data.pdf_name,
            pdf_url: request.data.pdf_url,
            pdf2_name: request.data.pdf2_name,
            pdf2_url: request.data.pdf2_url,
            questions,
            questions_superior,
            updated_at: Some(Utc::now()),
        };

        self.repository.upsert_merge(&unit).await?;
        Ok(unit)
    }
}
