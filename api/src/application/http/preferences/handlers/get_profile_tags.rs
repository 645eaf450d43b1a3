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
pub struct ProfileTagsResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/tags",
    tag = "preferences",
    summary = "Saved dietary tags",
    description = "Tags used by recommendations that do not send their own. Empty when none are saved.",
    responses(
        (status = 200, body = ProfileTagsResponse)
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Client session identifier"),
    ),
)]
pub async fn get_profile_tags(
    State(state): State<AppState>,
    Extension(session): Extension<SessionKey>,
) -> Result<Response<ProfileTagsResponse>, ApiError> {
    let tags = state
        .service
        .get_profile_tags(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProfileTagsResponse { data: tags }))
}
