use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

#[cfg(test)]
use mockall::automock;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    models::domain::{ContentKey, ContentUnit},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find(&self, key: &ContentKey) -> AppResult<Option<ContentUnit>>;
    /// Document-level merge-upsert: fields present in `unit` overwrite,
    /// absent optional fields are left untouched. Last write wins.
    async fn upsert_merge(&self, unit: &ContentUnit) -> AppResult<()>;
}

pub struct MongoContentRepository {
    collection: Collection<ContentUnit>,
}

impl MongoContentRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.content_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for content collection");

        let address_index = IndexModel::builder()
            .keys(doc! { "weekId": 1, "dayId": 1, "lessonId": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("content_address_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(address_index).await?;

        log::info!("Successfully created indexes for content collection");
        Ok(())
    }
}

#[async_trait]
impl ContentRepository for MongoContentRepository {
    async fn find(&self, key: &ContentKey) -> AppResult<Option<ContentUnit>> {
        let unit = self
            .collection
            .find_one(doc! { "_id": key.doc_id() })
            .await?;
        Ok(unit)
    }

    async fn upsert_merge(&self, unit: &ContentUnit) -> AppResult<()> {
        let update = mongodb::bson::to_document(unit)?;
        self.collection
            .update_one(
                doc! { "_id": unit.key().doc_id() },
                doc! { "$set": update },
            )
            .upsert(true)
            .await?;
        Ok(())
    }
}
