use axum::{Extension, extract::State};
use mealmint_core::domain::{
    recommendation::ports::RecommendationService,
    recommendation_cache::value_objects::SessionKey,
};

use crate::application::http::{
    preferences::{
        handlers::get_profile_tags::ProfileTagsResponse, validators::SetProfileTagsValidator,
    },
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/tags",
    tag = "preferences",
    summary = "Save dietary tags",
    description = "Normalizes and stores the tags for the session. An empty list clears them.",
    request_body = SetProfileTagsValidator,
    responses(
        (status = 200, body = ProfileTagsResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Client session identifier"),
    ),
)]
pub async fn set_profile_tags(
    State(state): State<AppState>,
    Extension(session): Extension<SessionKey>,
    ValidateJson(payload): ValidateJson<SetProfileTagsValidator>,
) -> Result<Response<ProfileTagsResponse>, ApiError> {
    let tags = state
        .service
        .set_profile_tags(session, payload.tags)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProfileTagsResponse { data: tags }))
}
