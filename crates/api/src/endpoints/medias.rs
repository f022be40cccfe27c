//! Media upload endpoint.

use axum::{
    Json, Router,
    extract::{Multipart, State},
    routing::post,
};
use chirp_common::{AppError, AppResult};
use serde::Serialize;

use crate::{extractors::AuthUser, middleware::AppState};

/// Media upload response.
#[derive(Serialize)]
pub struct MediaUploadResponse {
    pub result: bool,
    pub media_id: i64,
}

/// Upload an image via multipart form.
///
/// The client uploads media before posting the tweet it belongs to and
/// references the returned id in the tweet-creation call.
async fn upload(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<MediaUploadResponse>> {
    let mut file_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            file_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
                    .to_vec(),
            );
        }
    }

    let data = file_data.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

    let media_id = state.media_service.upload(&user.api_key, &data).await?;

    Ok(Json(MediaUploadResponse {
        result: true,
        media_id,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/medias", post(upload))
}
