//! Media repository.

use std::sync::Arc;

use crate::entities::{Media, media};
use chirp_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::Expr,
};

/// Media repository for database operations.
#[derive(Clone)]
pub struct MediaRepository {
    db: Arc<DatabaseConnection>,
}

impl MediaRepository {
    /// Create a new media repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Create a new media row. `tweet_id` stays NULL until attachment.
    pub async fn create(&self, model: media::ActiveModel) -> AppResult<media::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the media rows attached to a tweet.
    pub async fn find_by_tweet(&self, tweet_id: i64) -> AppResult<Vec<media::Model>> {
        Media::find()
            .filter(media::Column::TweetId.eq(tweet_id))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Back-fill `tweet_id` on previously uploaded media rows.
    ///
    /// Media is uploaded before its tweet exists, so the tweet id can only
    /// be recorded here, after tweet creation.
    pub async fn attach_to_tweet(&self, media_ids: &[i64], tweet_id: i64) -> AppResult<u64> {
        if media_ids.is_empty() {
            return Ok(0);
        }

        let result = Media::update_many()
            .col_expr(media::Column::TweetId, Expr::value(tweet_id))
            .filter(media::Column::Id.is_in(media_ids.iter().copied()))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
