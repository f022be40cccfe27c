//! Follow service.

use chirp_common::{AppError, AppResult};
use chirp_db::{
    entities::follower,
    repositories::{FollowerRepository, UserRepository},
};
use sea_orm::Set;

/// Follow service for business logic.
#[derive(Clone)]
pub struct FollowService {
    follower_repo: FollowerRepository,
    user_repo: UserRepository,
}

impl FollowService {
    /// Create a new follow service.
    #[must_use]
    pub const fn new(follower_repo: FollowerRepository, user_repo: UserRepository) -> Self {
        Self {
            follower_repo,
            user_repo,
        }
    }

    /// Follow a user.
    pub async fn follow(&self, user_id: i64, target_id: i64) -> AppResult<()> {
        // Can't follow yourself
        if user_id == target_id {
            return Err(AppError::BadRequest("Cannot follow yourself".to_string()));
        }

        // The followee must exist
        if self.user_repo.find_by_id(target_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        // A follow pair is unique
        if self.follower_repo.exists(user_id, target_id).await? {
            return Err(AppError::Conflict("Already following".to_string()));
        }

        let model = follower::ActiveModel {
            user_id: Set(user_id),
            following_id: Set(target_id),
        };

        self.follower_repo.create(model).await?;

        tracing::debug!(user_id, target_id, "Created follow edge");

        Ok(())
    }

    /// Unfollow a user.
    pub async fn unfollow(&self, user_id: i64, target_id: i64) -> AppResult<()> {
        let removed = self.follower_repo.delete_pair(user_id, target_id).await?;

        if removed == 0 {
            return Err(AppError::NotFound("Follow relation not found".to_string()));
        }

        tracing::debug!(user_id, target_id, "Removed follow edge");

        Ok(())
    }
}
