use super::handlers::{
    clear_cache::{__path_clear_cache, clear_cache},
    get_last_recommendation::{__path_get_last_recommendation, get_last_recommendation},
    rebudget::{__path_rebudget, rebudget},
    recommend::{__path_recommend, recommend},
    recommend_basic::{__path_recommend_basic, recommend_basic},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    recommend,
    recommend_basic,
    rebudget,
    get_last_recommendation,
    clear_cache
))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recommend", state.args.server.root_path),
            post(recommend),
        )
        .route(
            &format!("{}/recommend/basic", state.args.server.root_path),
            post(recommend_basic),
        )
        .route(
            &format!("{}/recommend/rebudget", state.args.server.root_path),
            post(rebudget),
        )
        .route(
            &format!("{}/recommend/last", state.args.server.root_path),
            get(get_last_recommendation),
        )
        .route(
            &format!("{}/recommend/cache", state.args.server.root_path),
            delete(clear_cache),
        )
        .layer(middleware::from_fn(session_middleware))
}
