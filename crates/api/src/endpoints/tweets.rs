//! Tweet endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use chirp_common::AppResult;
use chirp_core::TweetView;
use serde::{Deserialize, Serialize};

use crate::{extractors::AuthUser, middleware::AppState, response::OperationResponse};

/// Feed response.
#[derive(Serialize)]
pub struct FeedResponse {
    pub result: bool,
    pub tweets: Vec<TweetView>,
}

/// Create tweet request.
#[derive(Debug, Deserialize)]
pub struct CreateTweetRequest {
    pub tweet_data: String,
    #[serde(default)]
    pub tweet_media_ids: Vec<i64>,
}

/// Create tweet response.
#[derive(Serialize)]
pub struct CreateTweetResponse {
    pub result: bool,
    pub tweet_id: i64,
}

/// Get the feed: all tweets, newest first.
async fn feed(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<FeedResponse>> {
    let tweets = state.tweet_service.feed().await?;
    Ok(Json(FeedResponse {
        result: true,
        tweets,
    }))
}

/// Post a new tweet.
async fn create(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(req): Json<CreateTweetRequest>,
) -> AppResult<Json<CreateTweetResponse>> {
    let tweet_id = state
        .tweet_service
        .create(user.id, req.tweet_data, &req.tweet_media_ids)
        .await?;

    Ok(Json(CreateTweetResponse {
        result: true,
        tweet_id,
    }))
}

/// Delete one of the current user's tweets.
async fn remove(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OperationResponse>> {
    state.tweet_service.delete(id, user.id).await?;
    Ok(Json(OperationResponse::ok()))
}

/// Like a tweet.
async fn like(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OperationResponse>> {
    state.like_service.like(id, user.id).await?;
    Ok(Json(OperationResponse::ok()))
}

/// Remove a like from a tweet.
async fn unlike(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OperationResponse>> {
    state.like_service.unlike(id, user.id).await?;
    Ok(Json(OperationResponse::ok()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tweets", get(feed).post(create))
        .route("/tweets/{id}", delete(remove))
        .route("/tweets/{id}/likes", post(like).delete(unlike))
}
