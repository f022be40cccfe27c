//! Media service.

use chirp_common::{AppResult, MediaStorage};
use chirp_db::{entities::media, repositories::MediaRepository};
use sea_orm::Set;

/// Media service for business logic.
#[derive(Clone)]
pub struct MediaService {
    media_repo: MediaRepository,
    storage: MediaStorage,
}

impl MediaService {
    /// Create a new media service.
    #[must_use]
    pub const fn new(media_repo: MediaRepository, storage: MediaStorage) -> Self {
        Self {
            media_repo,
            storage,
        }
    }

    /// Store an uploaded image and record it.
    ///
    /// The file goes to disk first, then the row is inserted; the row's
    /// `tweet_id` stays NULL until the tweet referencing this media is
    /// created. Returns the new media id.
    pub async fn upload(&self, api_key: &str, data: &[u8]) -> AppResult<i64> {
        let file_path = self.storage.save(api_key, data).await?;

        let model = media::ActiveModel {
            file_path: Set(file_path.clone()),
            ..Default::default()
        };

        let media = self.media_repo.create(model).await?;

        tracing::debug!(media_id = media.id, path = %file_path, "Uploaded media");

        Ok(media.id)
    }
}
