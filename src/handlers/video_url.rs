use crate::{
    app_state::AppState,
    types::{VideoUrlQuery, VideoUrlResponse, error::ApiError},
};
use axum::{
    Json,
    extract::{RawQuery, State},
};

/// GET /api/video-url?key={key} - Issue a signed download URL for a video
pub async fn video_url(
    RawQuery(query): RawQuery,
    State(app_state): State<AppState>,
) -> Result<Json<VideoUrlResponse>, ApiError> {
    let params = VideoUrlQuery::from_raw(query.as_deref())?;
    tracing::debug!("GET video url: key={:?}", params.key);

    let signed = app_state
        .video_urls
        .issue_signed_url(params.key.as_deref())
        .await?;

    Ok(Json(VideoUrlResponse { url: signed.url }))
}
