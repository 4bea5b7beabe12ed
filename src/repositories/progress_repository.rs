use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    Collection,
};

#[cfg(test)]
use mockall::automock;

use crate::{
    config::Config, db::Database, errors::AppResult, models::domain::ProgressRecord,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Absence is a normal state, not an error; callers default to an empty
    /// record.
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<ProgressRecord>>;
    /// Full replace of the stored document. Concurrent writers from two
    /// devices race; the client-side merge narrows the window but the model
    /// is deliberately last-write-wins.
    async fn save(&self, user_id: &str, record: &ProgressRecord) -> AppResult<()>;
}

pub struct MongoProgressRepository {
    collection: Collection<Document>,
}

impl MongoProgressRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.progress_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for progress collection");

        let user_index = mongodb::IndexModel::builder()
            .keys(doc! { "userId": 1 })
            .options(
                mongodb::options::IndexOptions::builder()
                    .unique(true)
                    .name("user_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_index).await?;

        log::info!("Successfully created indexes for progress collection");
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for MongoProgressRepository {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<ProgressRecord>> {
        let Some(mut document) = self
            .collection
            .find_one(doc! { "userId": user_id })
            .await?
        else {
            return Ok(None);
        };

        document.remove("_id");
        document.remove("userId");
        let record = mongodb::bson::from_document(document)?;
        Ok(Some(record))
    }

    async fn save(&self, user_id: &str, record: &ProgressRecord) -> AppResult<()> {
        let mut document = mongodb::bson::to_document(record)?;
        document.insert("userId", user_id);

        self.collection
            .replace_one(doc! { "userId": user_id }, document)
            .upsert(true)
            .await?;
        Ok(())
    }
}
