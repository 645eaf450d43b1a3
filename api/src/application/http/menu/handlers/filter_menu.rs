use axum::extract::State;
use mealmint_core::domain::{
    hard_filter::value_objects::FilterResult, recommendation::ports::RecommendationService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    menu::validators::FilterMenuValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FilterMenuResponse {
    pub data: FilterResult,
}

#[utoipa::path(
    post,
    path = "/filter",
    tag = "menu",
    summary = "Apply dietary constraints to a menu",
    description = "Removes items that violate the hard constraints among the given tags. \
    Tags default to the standard dietary set when absent or empty.",
    request_body = FilterMenuValidator,
    responses(
        (status = 200, body = FilterMenuResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn filter_menu(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FilterMenuValidator>,
) -> Result<Response<FilterMenuResponse>, ApiError> {
    let result = state
        .service
        .filter_menu(&payload.menu, payload.tags.as_ref());

    Ok(Response::OK(FilterMenuResponse { data: result }))
}
