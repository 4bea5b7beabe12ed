use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoContentRepository, MongoProgressRepository},
    services::{ContentService, ExamService, ProgressService},
};

#[derive(Clone)]
pub struct AppState {
    pub content_service: Arc<ContentService>,
    pub exam_service: Arc<ExamService>,
    pub progress_service: Arc<ProgressService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let content_repository = Arc::new(MongoContentRepository::new(&db, &config));
        content_repository.ensure_indexes().await?;

        let progress_repository = Arc::new(MongoProgressRepository::new(&db, &config));
        progress_repository.ensure_indexes().await?;

        let content_service = Arc::new(ContentService::new(content_repository.clone()));
        let exam_service = Arc::new(ExamService::new(content_repository));
        let progress_service = Arc::new(ProgressService::new(progress_repository));

        Ok(Self {
            content_service,
            exam_service,
            progress_service,
            config: Arc::new(config),
        })
    }
}
