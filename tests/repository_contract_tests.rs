use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use aisim_server::{
    errors::AppResult,
    models::domain::{ContentKey, ContentUnit, ProgressRecord},
    models::dto::request::{ContentPayload, RecordLessonRequest, SaveContentRequest, TrailKind},
    repositories::{ContentRepository, ProgressRepository},
    services::{ContentService, ExamService, ProgressService},
};

struct InMemoryContentRepository {
    units: Arc<RwLock<HashMap<ContentKey, ContentUnit>>>,
}

impl InMemoryContentRepository {
    fn new() -> Self {
        Self {
            units: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn find(&self, key: &ContentKey) -> AppResult<Option<ContentUnit>> {
        let units = self.units.read().await;
        Ok(units.get(key).cloned())
    }

    async fn upsert_merge(&self, unit: &ContentUnit) -> AppResult<()> {
        let mut units = self.units.write().await;
        match units.get_mut(&unit.key()) {
            Some(existing) => {
                // Mirror the $set merge: absent optional fields stay put.
                existing.questions = unit.questions.clone();
                if unit.video_url.is_some() {
                    existing.video_url = unit.video_url.clone();
                }
                if unit.pdf_name.is_some() {
                    existing.pdf_name = unit.pdf_name.clone();
                }
                if unit.pdf_url.is_some() {
                    existing.pdf_url = unit.pdf_url.clone();
                }
                if unit.pdf2_name.is_some() {
                    existing.pdf2_name = unit.pdf2_name.clone();
                }
                if unit.pdf2_url.is_some() {
                    existing.pdf2_url = unit.pdf2_url.clone();
                }
                if unit.questions_superior.is_some() {
                    existing.questions_superior = unit.questions_superior.clone();
                }
                if unit.updated_at.is_some() {
                    existing.updated_at = unit.updated_at;
                }
            }
            None => {
                units.insert(unit.key(), unit.clone());
            }
        }
        Ok(())
    }
}

struct InMemoryProgressRepository {
    records: Arc<RwLock<HashMap<String, ProgressRecord>>>,
}

impl InMemoryProgressRepository {
    fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<ProgressRecord>> {
        let records = self.records.read().await;
        Ok(records.get(user_id).cloned())
    }

    async fn save(&self, user_id: &str, record: &ProgressRecord) -> AppResult<()> {
        let mut records = self.records.write().await;
        records.insert(user_id.to_string(), record.clone());
        Ok(())
    }
}

fn quiz_text(count: usize) -> String {
    (1..=count)
        .map(|n| {
            format!(
                "{n}. Pergunta {n}?\na) Alternativa A\nb) Alternativa B\nc) Alternativa C\nResposta: C\nComentário: Porque sim.\n"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn save_request(week_id: i32, day_id: i32, payload: ContentPayload) -> SaveContentRequest {
    SaveContentRequest {
        week_id,
        day_id,
        lesson_id: 1,
        data: payload,
    }
}

#[tokio::test]
async fn saved_content_round_trips_through_the_repository() {
    let repository = Arc::new(InMemoryContentRepository::new());
    let service = ContentService::new(repository.clone());

    let payload = ContentPayload {
        video_url: Some("https://youtu.be/abc".to_string()),
        quiz_text: Some(quiz_text(15)),
        ..Default::default()
    };
    service
        .save_content(save_request(1, 2, payload))
        .await
        .expect("save should succeed");

    let stored = repository
        .find(&ContentKey::new(1, 2, 1))
        .await
        .expect("find should succeed")
        .expect("unit should exist");

    assert_eq!(stored.questions.len(), 15);
    assert_eq!(stored.questions[0].correct_answer, 2);
    assert_eq!(
        stored.questions[0].justification.as_deref(),
        Some("Porque sim.")
    );
    assert!(stored.updated_at.is_some());
}

#[tokio::test]
async fn clearing_questions_leaves_other_fields_in_place() {
    let repository = Arc::new(InMemoryContentRepository::new());
    let service = ContentService::new(repository.clone());

    let first = ContentPayload {
        video_url: Some("https://youtu.be/abc".to_string()),
        quiz_text: Some(quiz_text(15)),
        ..Default::default()
    };
    service
        .save_content(save_request(1, 1, first))
        .await
        .expect("initial save should succeed");

    let clear = ContentPayload {
        quiz_text: Some(String::new()),
        ..Default::default()
    };
    service
        .save_content(save_request(1, 1, clear))
        .await
        .expect("clear should succeed");

    let stored = repository
        .find(&ContentKey::new(1, 1, 1))
        .await
        .expect("find should succeed")
        .expect("unit should exist");

    assert!(stored.questions.is_empty());
    assert_eq!(stored.video_url.as_deref(), Some("https://youtu.be/abc"));
}

#[tokio::test]
async fn failed_parse_leaves_stored_content_untouched() {
    let repository = Arc::new(InMemoryContentRepository::new());
    let service = ContentService::new(repository.clone());

    let good = ContentPayload {
        quiz_text: Some(quiz_text(15)),
        ..Default::default()
    };
    service
        .save_content(save_request(2, 1, good))
        .await
        .expect("initial save should succeed");

    let bad = ContentPayload {
        quiz_text: Some(quiz_text(4)),
        ..Default::default()
    };
    service
        .save_content(save_request(2, 1, bad))
        .await
        .expect_err("wrong count should fail");

    let stored = repository
        .find(&ContentKey::new(2, 1, 1))
        .await
        .expect("find should succeed")
        .expect("unit should exist");
    assert_eq!(stored.questions.len(), 15);
}

#[tokio::test]
async fn weekly_exam_draws_from_every_stored_lesson() {
    let repository = Arc::new(InMemoryContentRepository::new());
    let content_service = ContentService::new(repository.clone());

    for day in 1..=5 {
        for lesson in 1..=2 {
            let payload = ContentPayload {
                quiz_text: Some(quiz_text(15)),
                ..Default::default()
            };
            let request = SaveContentRequest {
                week_id: 7,
                day_id: day,
                lesson_id: lesson,
                data: payload,
            };
            content_service
                .save_content(request)
                .await
                .expect("seed save should succeed");
        }
    }

    let exam_service = ExamService::new(repository);
    let questions = exam_service
        .assemble_weekly_exam(7)
        .await
        .expect("assembly should succeed");
    assert_eq!(questions.len(), 40);
    assert!(questions.iter().all(|q| q.subject_id.is_none()));
}

#[tokio::test]
async fn module_exam_labels_every_question() {
    let repository = Arc::new(InMemoryContentRepository::new());
    let content_service = ContentService::new(repository.clone());

    // Module 2 lives under internal week 102, one subject per day slot.
    for subject in 1..=9 {
        let payload = ContentPayload {
            quiz_text: Some(quiz_text(15)),
            ..Default::default()
        };
        let request = SaveContentRequest {
            week_id: 102,
            day_id: subject,
            lesson_id: 1,
            data: payload,
        };
        content_service
            .save_content(request)
            .await
            .expect("seed save should succeed");
    }

    let exam_service = ExamService::new(repository);
    let questions = exam_service
        .assemble_module_exam(2)
        .await
        .expect("assembly should succeed");
    assert_eq!(questions.len(), 45);
    assert!(questions
        .iter()
        .all(|q| q.origin_module == Some(2) && q.subject_id.is_some()));
}

#[tokio::test]
async fn first_recorded_score_survives_recompletion() {
    let repository = Arc::new(InMemoryProgressRepository::new());
    let service = ProgressService::new(repository.clone());

    let first = RecordLessonRequest {
        trail: TrailKind::Enem,
        unit: 1,
        lesson_index: 0,
        score: 90,
    };
    service
        .record_lesson_completion("user-1", first)
        .await
        .expect("first completion should record");

    let retry = RecordLessonRequest {
        trail: TrailKind::Enem,
        unit: 1,
        lesson_index: 0,
        score: 10,
    };
    let record = service
        .record_lesson_completion("user-1", retry)
        .await
        .expect("recompletion should be a no-op");

    assert_eq!(record.lesson(1, 0).map(|l| l.score), Some(90));
    assert_eq!(record.completed_lessons.len(), 1);
}

#[tokio::test]
async fn replaced_progress_reads_back_with_timestamp() {
    let repository = Arc::new(InMemoryProgressRepository::new());
    let service = ProgressService::new(repository);

    let mut record = ProgressRecord::default();
    record.record_lesson(3, 4, 55);
    record.record_week(2);

    service
        .replace_progress("user-2", record)
        .await
        .expect("replace should succeed");

    let stored = service
        .get_progress("user-2")
        .await
        .expect("read should succeed");
    assert_eq!(stored.completed_weeks, vec![2]);
    assert_eq!(stored.lesson(3, 4).map(|l| l.score), Some(55));
    assert!(stored.updated_at.is_some());
}

#[tokio::test]
async fn unknown_user_reads_as_empty_progress() {
    let repository = Arc::new(InMemoryProgressRepository::new());
    let service = ProgressService::new(repository);

    let record = service
        .get_progress("nobody")
        .await
        .expect("read should succeed");
    assert!(record.completed_lessons.is_empty());
    assert!(record.completed_weeks.is_empty());
    assert!(record.completed_modules.is_empty());
}
