use super::handlers::{
    get_profile_tags::{__path_get_profile_tags, get_profile_tags},
    set_profile_tags::{__path_set_profile_tags, set_profile_tags},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_profile_tags, set_profile_tags))]
pub struct PreferencesApiDoc;

pub fn preferences_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/preferences/tags", state.args.server.root_path),
            get(get_profile_tags).put(set_profile_tags),
        )
        .layer(middleware::from_fn(session_middleware))
}
