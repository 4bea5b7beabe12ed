use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::{
    curriculum::{DAYS_PER_WEEK, LESSONS_PER_DAY, MODULE_WEEK_OFFSET, SUBJECTS_PER_MODULE},
    errors::AppResult,
    models::domain::{ContentKey, Question},
    models::dto::response::ExamQuestion,
    repositories::ContentRepository,
};

/// Questions sampled per lesson for the weekly summary exam (10 lessons).
pub const WEEKLY_EXAM_QUOTA: usize = 4;
/// Questions sampled per subject for the module exam (9 subjects).
pub const MODULE_EXAM_QUOTA: usize = 5;

/// Read-only exam assembly over the stored content units. Sampling and the
/// final shuffle are uniform (Fisher–Yates via `rand`); the historical
/// comparator-based shuffle was biased and is intentionally not reproduced.
pub struct ExamService {
    repository: Arc<dyn ContentRepository>,
}

impl ExamService {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    /// Weekly exam: up to 4 questions from each of the week's 10 lessons
    /// (days 1–5, lessons 1–2). Missing or empty lessons contribute nothing.
    pub async fn assemble_weekly_exam(&self, week_id: i32) -> AppResult<Vec<ExamQuestion>> {
        let mut pools: Vec<Vec<Question>> = Vec::new();
        for day in 1..=DAYS_PER_WEEK {
            for lesson in 1..=LESSONS_PER_DAY {
                let key = ContentKey::new(week_id, day, lesson);
                if let Some(unit) = self.repository.find(&key).await? {
                    if !unit.questions.is_empty() {
                        pools.push(unit.questions);
                    }
                }
            }
        }

        let mut rng = rand::thread_rng();
        let mut questions: Vec<ExamQuestion> = pools
            .iter()
            .flat_map(|pool| {
                pool.choose_multiple(&mut rng, WEEKLY_EXAM_QUOTA)
                    .cloned()
                    .map(|question| ExamQuestion {
                        question,
                        subject_id: None,
                        origin_module: None,
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        questions.shuffle(&mut rng);
        Ok(questions)
    }

    /// Module exam: up to 5 standard-tier questions from each of the 9
    /// subjects, labeled with their source subject and module. Content lives
    /// under the internal week id `module + 100`, lesson 1.
    pub async fn assemble_module_exam(&self, module_id: i32) -> AppResult<Vec<ExamQuestion>> {
        let internal_week = module_id + MODULE_WEEK_OFFSET;

        let mut pools: Vec<(i32, Vec<Question>)> = Vec::new();
        for subject in 1..=SUBJECTS_PER_MODULE {
            let key = ContentKey::new(internal_week, subject, 1);
            if let Some(unit) = self.repository.find(&key).await? {
                if !unit.questions.is_empty() {
                    pools.push((subject, unit.questions));
                }
            }
        }

        let mut rng = rand::thread_rng();
        let mut questions: Vec<ExamQuestion> = pools
            .iter()
            .flat_map(|(subject, pool)| {
                pool.choose_multiple(&mut rng, MODULE_EXAM_QUOTA)
                    .cloned()
                    .map(|question| ExamQuestion {
                        question,
                        subject_id: Some(*subject),
                        origin_module: Some(module_id),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        questions.shuffle(&mut rng);
        Ok(questions)
    }
}
