use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

/// Composite address of a content document: `(week, day, lesson)`.
///
/// The contest-prep track reuses the same shape with the module stored as an
/// internal week id (`module + 100`) and the subject as the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentKey {
    pub week_id: i32,
    pub day_id: i32,
    pub lesson_id: i32,
}

impl ContentKey {
    pub fn new(week_id: i32, day_id: i32, lesson_id: i32) -> Self {
        Self {
            week_id,
            day_id,
            lesson_id,
        }
    }

    /// The document id used since the first deployment; existing data depends
    /// on this exact format.
    pub fn doc_id(&self) -> String {
        format!("content_{}_{}_{}", self.week_id, self.day_id, self.lesson_id)
    }
}

/// One lesson's worth of authored content. Overwritten wholesale by the admin
/// save action (merge-upsert at the document level); never versioned.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentUnit {
    pub week_id: i32,
    pub day_id: i32,
    pub lesson_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf2_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf2_url: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Advanced-tier question set, contest-prep track only. Absent fields are
    /// left untouched by the merge-upsert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions_superior: Option<Vec<Question>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContentUnit {
    pub fn key(&self) -> ContentKey {
        ContentKey::new(self.week_id, self.day_id, self.lesson_id)
    }

    /// Questions for the requested tier. An absent advanced tier is a normal
    /// state and yields an empty list, not an error.
    pub fn questions_for_tier(&self, superior: bool) -> &[Question] {
        if superior {
            self.questions_superior.as_deref().unwrap_or(&[])
        } else {
            &self.questions
        }
    }
}
