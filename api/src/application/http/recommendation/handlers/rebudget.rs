use axum::{Extension, extract::State};
use mealmint_core::domain::{
    recommendation::{ports::RecommendationService, value_objects::RebudgetInput},
    recommendation_cache::value_objects::SessionKey,
};

use crate::application::http::{
    recommendation::{handlers::recommend::RecommendResponse, validators::RebudgetValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/rebudget",
    tag = "recommendation",
    summary = "Re-plan the last menu",
    description = "Plans the session's cached menu again for a new budget, optionally with new tags.",
    request_body = RebudgetValidator,
    responses(
        (status = 200, body = RecommendResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Client session identifier"),
    ),
)]
pub async fn rebudget(
    State(state): State<AppState>,
    Extension(session): Extension<SessionKey>,
    ValidateJson(payload): ValidateJson<RebudgetValidator>,
) -> Result<Response<RecommendResponse>, ApiError> {
    let output = state
        .service
        .rebudget(
            session,
            RebudgetInput {
                budget: payload.budget_amount(),
                user_note: payload.user_note,
                tags: payload.tags,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendResponse { data: output }))
}
