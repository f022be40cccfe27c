//! API middleware.

use axum::{
    body::Body, extract::State, http::Request, middleware::Next, response::Response,
};
use chirp_core::{FollowService, LikeService, MediaService, TweetService, UserService};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub tweet_service: TweetService,
    pub media_service: MediaService,
    pub follow_service: FollowService,
    pub like_service: LikeService,
}

/// Authentication middleware.
///
/// Looks up the `api-key` header and, when it matches a user, stores the
/// user model in the request extensions. Handlers that require auth reject
/// requests where no user was stored.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(header) = req.headers().get("api-key")
        && let Ok(api_key) = header.to_str()
        && let Ok(user) = state.user_service.authenticate_by_token(api_key).await
    {
        req.extensions_mut().insert(user);
    }

    next.run(req).await
}
