//! Follower repository.

use std::sync::Arc;

use crate::entities::{Follower, follower};
use chirp_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

/// Follower repository for database operations.
#[derive(Clone)]
pub struct FollowerRepository {
    db: Arc<DatabaseConnection>,
}

impl FollowerRepository {
    /// Create a new follower repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Check whether a follow edge exists.
    pub async fn exists(&self, user_id: i64, following_id: i64) -> AppResult<bool> {
        let found = Follower::find_by_id((user_id, following_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(found.is_some())
    }

    /// Create a new follow edge.
    pub async fn create(&self, model: follower::ActiveModel) -> AppResult<follower::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a follow edge. Returns the number of rows removed.
    pub async fn delete_pair(&self, user_id: i64, following_id: i64) -> AppResult<u64> {
        let result = Follower::delete_many()
            .filter(follower::Column::UserId.eq(user_id))
            .filter(follower::Column::FollowingId.eq(following_id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }

    /// Get the edges for users that `user_id` is following.
    pub async fn find_following(&self, user_id: i64) -> AppResult<Vec<follower::Model>> {
        Follower::find()
            .filter(follower::Column::UserId.eq(user_id))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the edges for users that follow `user_id`.
    pub async fn find_followers(&self, user_id: i64) -> AppResult<Vec<follower::Model>> {
        Follower::find()
            .filter(follower::Column::FollowingId.eq(user_id))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
