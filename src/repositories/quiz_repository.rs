use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Quiz};

/// Quizzes are written once and never updated or deleted.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn list_newest_first(&self) -> AppResult<Vec<Quiz>>;
    async fn ping(&self) -> AppResult<()>;
}

/// `createdAt` has millisecond resolution; `_id` breaks ties in insertion order.
fn newest_first_sort() -> Document {
    doc! { "createdAt": -1, "_id": -1 }
}

pub struct MongoQuizRepository {
    db: Database,
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection(collection_name);
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(newest_first_sort())
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(created_at_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn list_newest_first(&self) -> AppResult<Vec<Quiz>> {
        let find_options = FindOptions::builder()
            .sort(newest_first_sort())
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let items: Vec<Quiz> = cursor.try_collect().await?;

        Ok(items)
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.ping().await
    }
}
