//! Tweet repository.

use std::sync::Arc;

use crate::entities::{Tweet, tweet};
use chirp_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder,
};

/// Tweet repository for database operations.
#[derive(Clone)]
pub struct TweetRepository {
    db: Arc<DatabaseConnection>,
}

impl TweetRepository {
    /// Create a new tweet repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a tweet by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<tweet::Model>> {
        Tweet::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get all tweets, newest first. The feed is an unbounded full scan.
    pub async fn find_all_desc(&self) -> AppResult<Vec<tweet::Model>> {
        Tweet::find()
            .order_by_desc(tweet::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new tweet.
    pub async fn create(&self, model: tweet::ActiveModel) -> AppResult<tweet::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a tweet. Media rows are removed by the cascade.
    pub async fn delete(&self, tweet: tweet::Model) -> AppResult<()> {
        tweet
            .delete(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_test_tweet(id: i64, content: &str, author_id: i64) -> tweet::Model {
        tweet::Model {
            id,
            content: content.to_string(),
            author_id,
        }
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let tweet = create_test_tweet(1, "hello", 1);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[tweet.clone()]])
                .into_connection(),
        );

        let repo = TweetRepository::new(db);
        let result = repo.find_by_id(1).await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().content, "hello");
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<tweet::Model>::new()])
                .into_connection(),
        );

        let repo = TweetRepository::new(db);
        let result = repo.find_by_id(42).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_all_desc_preserves_order() {
        let tweets = vec![
            create_test_tweet(3, "third", 1),
            create_test_tweet(2, "second", 2),
            create_test_tweet(1, "first", 1),
        ];

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([tweets.clone()])
                .into_connection(),
        );

        let repo = TweetRepository::new(db);
        let result = repo.find_all_desc().await.unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].id, 3);
        assert_eq!(result[2].id, 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let tweet = create_test_tweet(1, "to be removed", 1);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let repo = TweetRepository::new(db);
        repo.delete(tweet).await.unwrap();
    }
}
