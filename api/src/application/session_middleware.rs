use axum::{extract::Request, middleware::Next, response::Response};
use mealmint_core::domain::recommendation_cache::value_objects::SessionKey;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const SESSION_HEADER: &str = "x-session-id";

/// Resolves the caller's session from the `x-session-id` header and stores it
/// in the request extensions. Requests without the header share the
/// anonymous session.
pub async fn session_middleware(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let session = match req.headers().get(SESSION_HEADER) {
        Some(value) => {
            let raw = value
                .to_str()
                .map_err(|_| ApiError::BadRequest("Invalid x-session-id header".to_string()))?;
            SessionKey::parse(raw)?
        }
        None => SessionKey::anonymous(),
    };

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
