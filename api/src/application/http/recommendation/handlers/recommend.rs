use axum::{
    Extension,
    extract::{Multipart, State},
};
use mealmint_core::domain::{
    recommendation::{ports::RecommendationService, value_objects::{RecommendInput, RecommendOutput}},
    recommendation_cache::value_objects::SessionKey,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recommendation::validators::{RecommendForm, RecommendMultipart},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendResponse {
    pub data: RecommendOutput,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recommendation",
    summary = "Recommend from a menu photo",
    description = "Extracts the menu, removes items that break the diner's dietary constraints, \
    and plans an order within the budget. The result is cached for the session; the same photo \
    skips extraction and an identical request is answered from the cache.",
    request_body(content = RecommendMultipart, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = RecommendResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Client session identifier"),
    ),
)]
pub async fn recommend(
    State(state): State<AppState>,
    Extension(session): Extension<SessionKey>,
    mut multipart: Multipart,
) -> Result<Response<RecommendResponse>, ApiError> {
    let form =
        RecommendForm::from_multipart(&mut multipart, state.args.server.max_image_bytes).await?;
    form.require_image()?;

    let output = state
        .service
        .recommend(
            session,
            RecommendInput {
                image_buffer: form.image,
                image_mime_type: form.image_mime_type,
                budget: form.budget,
                user_note: form.user_note,
                tags: form.tags,
                ignore_profile_tags: form.ignore_profile_tags,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendResponse { data: output }))
}
