//! Like service.

use chirp_common::{AppError, AppResult};
use chirp_db::{
    entities::like,
    repositories::{LikeRepository, TweetRepository},
};
use sea_orm::Set;

/// Like service for business logic.
#[derive(Clone)]
pub struct LikeService {
    like_repo: LikeRepository,
    tweet_repo: TweetRepository,
}

impl LikeService {
    /// Create a new like service.
    #[must_use]
    pub const fn new(like_repo: LikeRepository, tweet_repo: TweetRepository) -> Self {
        Self {
            like_repo,
            tweet_repo,
        }
    }

    /// Like a tweet.
    pub async fn like(&self, tweet_id: i64, user_id: i64) -> AppResult<()> {
        // The tweet must exist
        if self.tweet_repo.find_by_id(tweet_id).await?.is_none() {
            return Err(AppError::NotFound("Tweet not found".to_string()));
        }

        // A like pair is unique
        if self.like_repo.exists(tweet_id, user_id).await? {
            return Err(AppError::Conflict("Already liked".to_string()));
        }

        let model = like::ActiveModel {
            tweet_id: Set(tweet_id),
            user_id: Set(user_id),
        };

        self.like_repo.create(model).await?;

        tracing::debug!(tweet_id, user_id, "Created like edge");

        Ok(())
    }

    /// Remove a like from a tweet.
    pub async fn unlike(&self, tweet_id: i64, user_id: i64) -> AppResult<()> {
        let removed = self.like_repo.delete_pair(tweet_id, user_id).await?;

        if removed == 0 {
            return Err(AppError::NotFound("Like not found".to_string()));
        }

        tracing::debug!(tweet_id, user_id, "Removed like edge");

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chirp_db::entities::tweet;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn create_test_tweet(id: i64, author_id: i64) -> tweet::Model {
        tweet::Model {
            id,
            content: "hello".to_string(),
            author_id,
        }
    }

    fn create_service(db: Arc<sea_orm::DatabaseConnection>) -> LikeService {
        LikeService::new(
            LikeRepository::new(Arc::clone(&db)),
            TweetRepository::new(db),
        )
    }

    #[tokio::test]
    async fn test_like_unknown_tweet() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<tweet::Model>::new()])
                .into_connection(),
        );

        let err = create_service(db).like(42, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_like_duplicate_rejected() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_tweet(7, 2)]])
                .append_query_results([[like::Model {
                    tweet_id: 7,
                    user_id: 1,
                }]])
                .into_connection(),
        );

        let err = create_service(db).like(7, 1).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_like_creates_edge() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_tweet(7, 2)]])
                .append_query_results([Vec::<like::Model>::new()])
                .append_query_results([[like::Model {
                    tweet_id: 7,
                    user_id: 1,
                }]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        create_service(db).like(7, 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_unlike_missing_edge() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                }])
                .into_connection(),
        );

        let err = create_service(db).unlike(7, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unlike_removes_edge() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        create_service(db).unlike(7, 1).await.unwrap();
    }
}
