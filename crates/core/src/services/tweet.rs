//! Tweet service.

use chirp_common::{AppError, AppResult, MediaStorage};
use chirp_db::{
    entities::tweet,
    repositories::{LikeRepository, MediaRepository, TweetRepository, UserRepository},
};
use sea_orm::Set;
use serde::Serialize;
use std::collections::HashMap;

/// A tweet's author reduced to `{id, name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TweetAuthor {
    pub id: i64,
    pub name: String,
}

/// A like on a tweet, shaped as `{user_id, name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TweetLike {
    pub user_id: i64,
    pub name: String,
}

/// A tweet assembled for the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TweetView {
    pub id: i64,
    pub content: String,
    pub attachments: Vec<String>,
    pub author: TweetAuthor,
    pub likes: Vec<TweetLike>,
}

/// Tweet service for business logic.
#[derive(Clone)]
pub struct TweetService {
    tweet_repo: TweetRepository,
    media_repo: MediaRepository,
    like_repo: LikeRepository,
    user_repo: UserRepository,
    storage: MediaStorage,
}

impl TweetService {
    /// Create a new tweet service.
    #[must_use]
    pub const fn new(
        tweet_repo: TweetRepository,
        media_repo: MediaRepository,
        like_repo: LikeRepository,
        user_repo: UserRepository,
        storage: MediaStorage,
    ) -> Self {
        Self {
            tweet_repo,
            media_repo,
            like_repo,
            user_repo,
            storage,
        }
    }

    /// Create a new tweet, back-filling any previously uploaded media.
    ///
    /// The insert and the media update are separate committed units; a
    /// crash in between leaves the media rows unattached.
    pub async fn create(
        &self,
        author_id: i64,
        content: String,
        media_ids: &[i64],
    ) -> AppResult<i64> {
        let model = tweet::ActiveModel {
            content: Set(content),
            author_id: Set(author_id),
            ..Default::default()
        };

        let tweet = self.tweet_repo.create(model).await?;

        if !media_ids.is_empty() {
            self.media_repo.attach_to_tweet(media_ids, tweet.id).await?;
        }

        tracing::debug!(tweet_id = tweet.id, author_id, "Created tweet");

        Ok(tweet.id)
    }

    /// Assemble the full feed: every tweet, newest first, with author,
    /// attachments and likes resolved.
    pub async fn feed(&self) -> AppResult<Vec<TweetView>> {
        let tweets = self.tweet_repo.find_all_desc().await?;

        let mut views = Vec::with_capacity(tweets.len());

        for tweet in tweets {
            let author = self
                .user_repo
                .find_by_id(tweet.author_id)
                .await?
                .ok_or_else(|| {
                    AppError::Internal(format!("Tweet {} has no author row", tweet.id))
                })?;

            let attachments = self
                .media_repo
                .find_by_tweet(tweet.id)
                .await?
                .into_iter()
                .map(|m| m.file_path)
                .collect();

            let like_edges = self.like_repo.find_by_tweet(tweet.id).await?;
            let liker_ids: Vec<i64> = like_edges.iter().map(|edge| edge.user_id).collect();
            let likers: HashMap<i64, String> = self
                .user_repo
                .find_by_ids(&liker_ids)
                .await?
                .into_iter()
                .map(|u| (u.id, u.name))
                .collect();

            let likes = like_edges
                .into_iter()
                .filter_map(|edge| {
                    likers.get(&edge.user_id).map(|name| TweetLike {
                        user_id: edge.user_id,
                        name: name.clone(),
                    })
                })
                .collect();

            views.push(TweetView {
                id: tweet.id,
                content: tweet.content,
                attachments,
                author: TweetAuthor {
                    id: author.id,
                    name: author.name,
                },
                likes,
            });
        }

        Ok(views)
    }

    /// Delete a tweet owned by `user_id`.
    ///
    /// The database cascade removes the media rows; the files are removed
    /// from disk afterwards, best-effort for already-missing files.
    pub async fn delete(&self, tweet_id: i64, user_id: i64) -> AppResult<()> {
        let tweet = self
            .tweet_repo
            .find_by_id(tweet_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tweet not found".to_string()))?;

        if tweet.author_id != user_id {
            return Err(AppError::Forbidden(
                "the user is not the author of the tweet".to_string(),
            ));
        }

        let media_paths: Vec<String> = self
            .media_repo
            .find_by_tweet(tweet_id)
            .await?
            .into_iter()
            .map(|m| m.file_path)
            .collect();

        self.tweet_repo.delete(tweet).await?;

        self.storage.remove(&media_paths).await?;

        tracing::debug!(tweet_id, user_id, "Deleted tweet");

        Ok(())
    }
}
