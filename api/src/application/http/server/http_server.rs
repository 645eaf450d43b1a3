use std::sync::Arc;

use crate::application::http::{
    health::health_routes,
    menu::router::menu_routes,
    preferences::router::preferences_routes,
    recommendation::router::recommendation_routes,
    server::{api_entities::api_error::ApiError, app_state::AppState, openapi::ApiDoc},
};
use crate::args::Args;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use mealmint_core::{application::create_service, domain::common::MealMintConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::session_middleware::SESSION_HEADER;

/// Room left in the request body for the non-image multipart fields.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Builds the shared state. Must run inside a Tokio runtime when a cache TTL
/// is configured, since expired sessions are swept in the background.
pub fn state(args: Arc<Args>) -> AppState {
    let mealmint_config = MealMintConfig::from(args.as_ref().clone());
    let service = create_service(mealmint_config);

    if let Some(ttl) = service.recommendation_cache.ttl() {
        service.recommendation_cache.spawn_sweeper(ttl);
    }

    AppState::new(args, service)
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            HeaderName::from_static(SESSION_HEADER),
        ])
        .allow_credentials(true);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);
    let body_limit = state.args.server.max_image_bytes + MULTIPART_OVERHEAD_BYTES;
    let metrics_enabled = state.args.server.metrics_enabled;

    let mut router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .merge(recommendation_routes(state.clone()))
        .merge(menu_routes(state.clone()))
        .merge(preferences_routes(state.clone()))
        .merge(health_routes(&root_path))
        .fallback(|| async { ApiError::NotFound("Route not found".to_string()) });

    if metrics_enabled {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    let router = router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
