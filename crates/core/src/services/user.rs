//! User service.

use chirp_common::{AppError, AppResult};
use chirp_db::{
    entities::user,
    repositories::{FollowerRepository, UserRepository},
};
use serde::Serialize;

/// A user reduced to the `{id, name}` pair used in profile collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRef {
    pub id: i64,
    pub name: String,
}

impl From<user::Model> for UserRef {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            name: u.name,
        }
    }
}

/// A user profile with its follower and following collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub followers: Vec<UserRef>,
    pub following: Vec<UserRef>,
}

/// User service for business logic.
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    follower_repo: FollowerRepository,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub const fn new(user_repo: UserRepository, follower_repo: FollowerRepository) -> Self {
        Self {
            user_repo,
            follower_repo,
        }
    }

    /// Authenticate a user by API token.
    ///
    /// The token is compared as plaintext equality against the stored
    /// value; an unknown token means the caller is anonymous.
    pub async fn authenticate_by_token(&self, api_key: &str) -> AppResult<user::Model> {
        self.user_repo
            .find_by_api_key(api_key)
            .await?
            .ok_or(AppError::Unauthorized)
    }

    /// Assemble a user's profile: the user plus who they follow and who
    /// follows them.
    pub async fn get_profile(&self, user_id: i64) -> AppResult<UserProfile> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let following_ids: Vec<i64> = self
            .follower_repo
            .find_following(user_id)
            .await?
            .into_iter()
            .map(|edge| edge.following_id)
            .collect();

        let follower_ids: Vec<i64> = self
            .follower_repo
            .find_followers(user_id)
            .await?
            .into_iter()
            .map(|edge| edge.user_id)
            .collect();

        let following = self
            .user_repo
            .find_by_ids(&following_ids)
            .await?
            .into_iter()
            .map(UserRef::from)
            .collect();

        let followers = self
            .user_repo
            .find_by_ids(&follower_ids)
            .await?
            .into_iter()
            .map(UserRef::from)
            .collect();

        Ok(UserProfile {
            id: user.id,
            name: user.name,
            followers,
            following,
        })
    }
}
