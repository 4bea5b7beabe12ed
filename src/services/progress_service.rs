use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    curriculum::Trail,
    errors::{AppError, AppResult},
    models::domain::ProgressRecord,
    models::dto::request::{RecordLessonRequest, TrailKind},
    repositories::ProgressRepository,
};

pub struct ProgressService {
    repository: Arc<dyn ProgressRepository>,
    weekly: Trail,
    modules: Trail,
}

impl ProgressService {
    pub fn new(repository: Arc<dyn ProgressRepository>) -> Self {
        Self {
            repository,
            weekly: Trail::weekly(),
            modules: Trail::modules(),
        }
    }

    fn trail(&self, kind: TrailKind) -> &Trail {
        match kind {
            TrailKind::Enem => &self.weekly,
            TrailKind::Concurso => &self.modules,
        }
    }

    /// Absent records read as empty, never as an error.
    pub async fn get_progress(&self, user_id: &str) -> AppResult<ProgressRecord> {
        Ok(self
            .repository
            .find_by_user(user_id)
            .await?
            .unwrap_or_default())
    }

    /// Bulk reconciliation endpoint: full replace of the stored document,
    /// trusting the client to have merged first. Last write wins.
    pub async fn replace_progress(
        &self,
        user_id: &str,
        mut record: ProgressRecord,
    ) -> AppResult<()> {
        record.updated_at = Some(Utc::now());
        self.repository.save(user_id, &record).await
    }

    /// Records one completion server-side. Append-only: a lesson already
    /// recorded keeps its first score. Recording the terminal lesson marks
    /// the containing week or module complete.
    pub async fn record_lesson_completion(
        &self,
        user_id: &str,
        request: RecordLessonRequest,
    ) -> AppResult<ProgressRecord> {
        request.validate()?;

        let trail = self.trail(request.trail);
        let Some(unit) = trail.unit(request.unit) else {
            return Err(AppError::BadRequest(format!(
                "unknown unit {}",
                request.unit
            )));
        };
        if unit.locate(request.lesson_index).is_none() {
            return Err(AppError::BadRequest(format!(
                "unit {} has no lesson index {}",
                request.unit, request.lesson_index
            )));
        }

        let mut record = self.get_progress(user_id).await?;
        let mut changed = record.record_lesson(request.unit, request.lesson_index, request.score);

        if request.lesson_index == unit.terminal_index() {
            changed |= match request.trail {
                TrailKind::Enem => record.record_week(request.unit),
                TrailKind::Concurso => record.record_module(request.unit),
            };
        }

        if changed {
            record.updated_at = Some(Utc::now());
            self.repository.save(user_id, &record).await?;
        }
        Ok(record)
    }
}
