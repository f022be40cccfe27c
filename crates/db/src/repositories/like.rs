//! Like repository.

use std::sync::Arc;

use crate::entities::{Like, like};
use chirp_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

/// Like repository for database operations.
#[derive(Clone)]
pub struct LikeRepository {
    db: Arc<DatabaseConnection>,
}

impl LikeRepository {
    /// Create a new like repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Check whether a like edge exists.
    pub async fn exists(&self, tweet_id: i64, user_id: i64) -> AppResult<bool> {
        let found = Like::find_by_id((tweet_id, user_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(found.is_some())
    }

    /// Create a new like edge.
    pub async fn create(&self, model: like::ActiveModel) -> AppResult<like::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a like edge. Returns the number of rows removed.
    pub async fn delete_pair(&self, tweet_id: i64, user_id: i64) -> AppResult<u64> {
        let result = Like::delete_many()
            .filter(like::Column::TweetId.eq(tweet_id))
            .filter(like::Column::UserId.eq(user_id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }

    /// Get the like edges on a tweet.
    pub async fn find_by_tweet(&self, tweet_id: i64) -> AppResult<Vec<like::Model>> {
        Like::find()
            .filter(like::Column::TweetId.eq(tweet_id))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
