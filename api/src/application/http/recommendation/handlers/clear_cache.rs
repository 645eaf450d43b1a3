use axum::{Extension, extract::State};
use mealmint_core::domain::{
    recommendation::ports::RecommendationService,
    recommendation_cache::value_objects::SessionKey,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClearCacheResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/cache",
    tag = "recommendation",
    summary = "Forget the last recommendation",
    responses(
        (status = 200, body = ClearCacheResponse)
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Client session identifier"),
    ),
)]
pub async fn clear_cache(
    State(state): State<AppState>,
    Extension(session): Extension<SessionKey>,
) -> Result<Response<ClearCacheResponse>, ApiError> {
    state
        .service
        .clear_cache(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearCacheResponse {
        message: "Recommendation cache cleared".to_string(),
    }))
}
