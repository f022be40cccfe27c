//! API integration tests.
//!
//! These tests drive the assembled router against a mock database and
//! verify the wire contracts: status codes and the
//! `{result, ...}` / `{result: false, error_type, error_message}` bodies.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use chirp_api::{middleware::AppState, router as api_router};
use chirp_common::MediaStorage;
use chirp_core::{FollowService, LikeService, MediaService, TweetService, UserService};
use chirp_db::entities::{follower, tweet, user};
use chirp_db::repositories::{
    FollowerRepository, LikeRepository, MediaRepository, TweetRepository, UserRepository,
};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_user(id: i64, name: &str, api_key: &str) -> user::Model {
    user::Model {
        id,
        name: name.to_string(),
        api_key: api_key.to_string(),
    }
}

fn create_test_tweet(id: i64, content: &str, author_id: i64) -> tweet::Model {
    tweet::Model {
        id,
        content: content.to_string(),
        author_id,
    }
}

/// Assemble the app the way the server binary does: the API router nested
/// under `/api` with the auth middleware on top.
fn build_app(db: DatabaseConnection, storage: MediaStorage) -> Router {
    let db = Arc::new(db);

    let user_repo = UserRepository::new(Arc::clone(&db));
    let tweet_repo = TweetRepository::new(Arc::clone(&db));
    let media_repo = MediaRepository::new(Arc::clone(&db));
    let follower_repo = FollowerRepository::new(Arc::clone(&db));
    let like_repo = LikeRepository::new(Arc::clone(&db));

    let state = AppState {
        user_service: UserService::new(user_repo.clone(), follower_repo.clone()),
        tweet_service: TweetService::new(
            tweet_repo.clone(),
            media_repo.clone(),
            like_repo.clone(),
            user_repo.clone(),
            storage.clone(),
        ),
        media_service: MediaService::new(media_repo, storage),
        follow_service: FollowService::new(follower_repo, user_repo),
        like_service: LikeService::new(like_repo, tweet_repo),
    };

    Router::new()
        .nest("/api", api_router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            chirp_api::middleware::auth_middleware,
        ))
        .with_state(state)
}

fn temp_storage() -> (tempfile::TempDir, MediaStorage) {
    let dir = tempfile::tempdir().unwrap();
    let storage = MediaStorage::new(dir.path().to_path_buf());
    (dir, storage)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_unknown_token_gets_fixed_authentication_error() {
    let (_dir, storage) = temp_storage();

    // One query: the auth middleware's token lookup, which finds nothing.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    let app = build_app(db, storage);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/tweets")
                .header("api-key", "unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["result"], false);
    assert_eq!(body["error_type"], "AuthenticationError");
    assert_eq!(body["error_message"], "User is not found");
}

#[tokio::test]
async fn test_missing_token_header_is_unauthorized() {
    let (_dir, storage) = temp_storage();

    // No header, so the middleware never queries at all.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let app = build_app(db, storage);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error_type"], "AuthenticationError");
}

#[tokio::test]
async fn test_show_unknown_user_is_not_found() {
    let (_dir, storage) = temp_storage();

    // /api/users/{id} needs no auth; the only query is the profile lookup.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    let app = build_app(db, storage);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["result"], false);
    assert_eq!(body["error_type"], "NotFound");
}

#[tokio::test]
async fn test_me_returns_profile_with_empty_collections() {
    let (_dir, storage) = temp_storage();

    let me = create_test_user(1, "Test", "test");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // auth middleware token lookup
        .append_query_results([[me.clone()]])
        // profile: user by id, following edges, follower edges
        .append_query_results([[me.clone()]])
        .append_query_results([Vec::<follower::Model>::new()])
        .append_query_results([Vec::<follower::Model>::new()])
        .into_connection();

    let app = build_app(db, storage);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/me")
                .header("api-key", "test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["result"], true);
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["name"], "Test");
    assert_eq!(body["user"]["followers"], serde_json::json!([]));
    assert_eq!(body["user"]["following"], serde_json::json!([]));
}

#[tokio::test]
async fn test_follow_self_is_rejected() {
    let (_dir, storage) = temp_storage();

    let me = create_test_user(1, "Test", "test");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[me.clone()]])
        .into_connection();

    let app = build_app(db, storage);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users/1/follow")
                .header("api-key", "test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error_type"], "BadRequest");
}

#[tokio::test]
async fn test_delete_foreign_tweet_is_forbidden() {
    let (_dir, storage) = temp_storage();

    let me = create_test_user(1, "Test", "test");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // auth middleware token lookup
        .append_query_results([[me.clone()]])
        // tweet lookup: authored by someone else
        .append_query_results([[create_test_tweet(9, "not yours", 2)]])
        .into_connection();

    let app = build_app(db, storage);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/tweets/9")
                .header("api-key", "test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["result"], false);
    assert_eq!(body["error_type"], "UserError");
    assert_eq!(body["error_message"], "the user is not the author of the tweet");
}

#[tokio::test]
async fn test_create_tweet_returns_new_id() {
    let (_dir, storage) = temp_storage();

    let me = create_test_user(1, "Test", "test");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // auth middleware token lookup
        .append_query_results([[me.clone()]])
        // insert returning the new tweet row
        .append_query_results([[create_test_tweet(5, "hello world", 1)]])
        .into_connection();

    let app = build_app(db, storage);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/tweets")
                .header("api-key", "test")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"tweet_data": "hello world"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["result"], true);
    assert_eq!(body["tweet_id"], 5);
}

/// Build a `multipart/form-data` body with a single field.
fn multipart_body(boundary: &str, field_name: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"pic.jpg\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

#[tokio::test]
async fn test_upload_media_stores_file_and_returns_id() {
    let (dir, storage) = temp_storage();

    let me = create_test_user(1, "Test", "test");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // auth middleware token lookup
        .append_query_results([[me.clone()]])
        // insert returning the new media row
        .append_query_results([[chirp_db::entities::media::Model {
            id: 1,
            file_path: "user_post_images/test/abc.jpg".to_string(),
            tweet_id: None,
        }]])
        .into_connection();

    let app = build_app(db, storage);

    let boundary = "chirp-test-boundary";
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/medias")
                .header("api-key", "test")
                .header(
                    CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(multipart_body(boundary, "file", b"image bytes")))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["result"], true);
    assert_eq!(body["media_id"], 1);

    // The bytes landed in the uploader's directory.
    let user_dir = dir.path().join("user_post_images/test");
    assert_eq!(std::fs::read_dir(user_dir).unwrap().count(), 1);
}

#[tokio::test]
async fn test_upload_media_without_file_field_is_bad_request() {
    let (_dir, storage) = temp_storage();

    let me = create_test_user(1, "Test", "test");

    // Only the auth lookup runs; the handler rejects before touching the db.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[me.clone()]])
        .into_connection();

    let app = build_app(db, storage);

    let boundary = "chirp-test-boundary";
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/medias")
                .header("api-key", "test")
                .header(
                    CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(multipart_body(boundary, "other", b"image bytes")))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["result"], false);
    assert_eq!(body["error_type"], "BadRequest");
    assert_eq!(body["error_message"], "No file provided");
}

#[tokio::test]
async fn test_feed_shapes_tweets() {
    let (_dir, storage) = temp_storage();

    let me = create_test_user(1, "Test", "test");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // auth middleware token lookup
        .append_query_results([[me.clone()]])
        // feed: tweets, then per-tweet author / media / likes
        .append_query_results([[create_test_tweet(3, "newest", 1)]])
        .append_query_results([[me.clone()]])
        .append_query_results([Vec::<chirp_db::entities::media::Model>::new()])
        .append_query_results([Vec::<chirp_db::entities::like::Model>::new()])
        .into_connection();

    let app = build_app(db, storage);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/tweets")
                .header("api-key", "test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["result"], true);
    assert_eq!(body["tweets"][0]["id"], 3);
    assert_eq!(body["tweets"][0]["content"], "newest");
    assert_eq!(body["tweets"][0]["author"]["name"], "Test");
    assert_eq!(body["tweets"][0]["attachments"], serde_json::json!([]));
    assert_eq!(body["tweets"][0]["likes"], serde_json::json!([]));
}
