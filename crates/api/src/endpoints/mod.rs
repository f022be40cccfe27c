//! API endpoints.

mod medias;
mod tweets;
mod users;

use axum::Router;

use crate::middleware::AppState;

/// Create the API router.
///
/// All routes live under `/api`; the caller nests this router there.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(tweets::router())
        .merge(medias::router())
}
