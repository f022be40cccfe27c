//! User endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use chirp_common::AppResult;
use chirp_core::UserProfile;
use serde::Serialize;

use crate::{extractors::AuthUser, middleware::AppState, response::OperationResponse};

/// User info response.
#[derive(Serialize)]
pub struct UserInfoResponse {
    pub result: bool,
    pub user: UserProfile,
}

impl From<UserProfile> for UserInfoResponse {
    fn from(user: UserProfile) -> Self {
        Self { result: true, user }
    }
}

/// Get the current user's profile.
async fn me(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<UserInfoResponse>> {
    let profile = state.user_service.get_profile(user.id).await?;
    Ok(Json(profile.into()))
}

/// Get any user's profile by id. No authentication required.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UserInfoResponse>> {
    let profile = state.user_service.get_profile(id).await?;
    Ok(Json(profile.into()))
}

/// Follow a user.
async fn follow(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OperationResponse>> {
    state.follow_service.follow(user.id, id).await?;
    Ok(Json(OperationResponse::ok()))
}

/// Unfollow a user.
async fn unfollow(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OperationResponse>> {
    state.follow_service.unfollow(user.id, id).await?;
    Ok(Json(OperationResponse::ok()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(me))
        .route("/users/{id}", get(show))
        .route("/users/{id}/follow", post(follow).delete(unfollow))
}
