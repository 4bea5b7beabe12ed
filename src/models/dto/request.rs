use serde::Deserialize;
use validator::Validate;

use crate::models::domain::ContentKey;

fn default_lesson_id() -> i32 {
    1
}

/// Admin save action. Carries the unit address, the media fields and the raw
/// quiz text per tier; parsing happens server-side so every call site shares
/// one algorithm.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveContentRequest {
    #[validate(range(min = 1, max = 200))]
    pub week_id: i32,
    #[validate(range(min = 1, max = 9))]
    pub day_id: i32,
    #[serde(default = "default_lesson_id")]
    #[validate(range(min = 1, max = 9))]
    pub lesson_id: i32,
    #[validate(nested)]
    pub data: ContentPayload,
}

impl SaveContentRequest {
    pub fn key(&self) -> ContentKey {
        ContentKey::new(self.week_id, self.day_id, self.lesson_id)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContentPayload {
    pub video_url: Option<String>,
    pub pdf_name: Option<String>,
    pub pdf_url: Option<String>,
    pub pdf2_name: Option<String>,
    pub pdf2_url: Option<String>,
    /// Raw standard-tier quiz text. Empty or absent means the explicit
    /// clear-all-questions action for this unit.
    #[validate(length(max = 200000))]
    pub quiz_text: Option<String>,
    /// Raw advanced-tier text, contest-prep track only. Absent leaves the
    /// stored tier untouched.
    #[validate(length(max = 200000))]
    pub quiz_text_superior: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentQuery {
    pub week_id: i32,
    pub day_id: i32,
    /// Defaults to 1, matching the historical query behavior.
    pub lesson_id: Option<i32>,
}

impl ContentQuery {
    pub fn key(&self) -> ContentKey {
        ContentKey::new(self.week_id, self.day_id, self.lesson_id.unwrap_or(1))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyExamQuery {
    pub week_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleExamQuery {
    pub module_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailKind {
    Enem,
    Concurso,
}

/// Single-completion progress write recorded after a quiz or exam finishes.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordLessonRequest {
    pub trail: TrailKind,
    #[validate(range(min = 1, max = 200))]
    pub unit: i32,
    #[validate(range(min = 0, max = 10))]
    pub lesson_index: i32,
    #[validate(range(min = 0, max = 100))]
    pub score: i32,
}
