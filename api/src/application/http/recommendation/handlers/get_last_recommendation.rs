use axum::{Extension, extract::State};
use mealmint_core::domain::{
    recommendation::ports::RecommendationService,
    recommendation_cache::{entities::CacheEntry, value_objects::SessionKey},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LastRecommendationResponse {
    pub data: CacheEntry,
}

#[utoipa::path(
    get,
    path = "/last",
    tag = "recommendation",
    summary = "Last recommendation",
    responses(
        (status = 200, body = LastRecommendationResponse),
        (status = 404, body = ApiErrorResponse)
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Client session identifier"),
    ),
)]
pub async fn get_last_recommendation(
    State(state): State<AppState>,
    Extension(session): Extension<SessionKey>,
) -> Result<Response<LastRecommendationResponse>, ApiError> {
    let entry = state
        .service
        .last_recommendation(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LastRecommendationResponse { data: entry }))
}
