use axum::extract::{Multipart, State};
use mealmint_core::domain::recommendation::{
    ports::RecommendationService,
    value_objects::{BasicRecommendation, HandleRecommendInput},
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
pub struct BasicRecommendResponse {
    pub data: BasicRecommendation,
}

#[utoipa::path(
    post,
    path = "/basic",
    tag = "recommendation",
    summary = "Recommend without dietary filtering",
    description = "Extracts the menu and plans an order over every item. Nothing is cached.",
    request_body(content = RecommendMultipart, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = BasicRecommendResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn recommend_basic(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<BasicRecommendResponse>, ApiError> {
    let form =
        RecommendForm::from_multipart(&mut multipart, state.args.server.max_image_bytes).await?;
    form.require_image()?;

    let result = state
        .service
        .handle_recommend(HandleRecommendInput {
            image_buffer: form.image,
            image_mime_type: form.image_mime_type,
            budget: form.budget,
            user_note: form.user_note,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BasicRecommendResponse { data: result }))
}
