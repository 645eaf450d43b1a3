use super::handlers::filter_menu::{__path_filter_menu, filter_menu};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(filter_menu))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/menu/filter", state.args.server.root_path),
        post(filter_menu),
    )
}
