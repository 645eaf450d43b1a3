use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealmint_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Core(core) => match core {
                CoreError::NoMenuItems => StatusCode::UNPROCESSABLE_ENTITY,
                CoreError::MissingImage
                | CoreError::InvalidMimeType(_)
                | CoreError::InvalidBudget
                | CoreError::MissingImageBuffer
                | CoreError::InvalidId(_) => StatusCode::BAD_REQUEST,
                CoreError::ImageTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                CoreError::NoCache => StatusCode::NOT_FOUND,
                CoreError::VisionApiError(_)
                | CoreError::BudgetApiError(_)
                | CoreError::ExternalServiceError(_)
                | CoreError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Core(core) => core.code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = self.code(), "{}", self);
        }

        let body = ApiErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that also runs the payload's `validator` rules.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_statuses() {
        let cases = [
            (CoreError::NoMenuItems, StatusCode::UNPROCESSABLE_ENTITY),
            (CoreError::MissingImage, StatusCode::BAD_REQUEST),
            (
                CoreError::InvalidMimeType("text/plain".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::ImageTooLarge { max_bytes: 1 },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (CoreError::InvalidBudget, StatusCode::BAD_REQUEST),
            (CoreError::MissingImageBuffer, StatusCode::BAD_REQUEST),
            (CoreError::NoCache, StatusCode::NOT_FOUND),
            (
                CoreError::VisionApiError("x".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CoreError::BudgetApiError("x".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (CoreError::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
            (CoreError::InvalidId("?".to_string()), StatusCode::BAD_REQUEST),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).status_code(), status);
        }
    }

    #[test]
    fn test_codes() {
        assert_eq!(ApiError::from(CoreError::NoCache).code(), "NO_CACHE");
        assert_eq!(ApiError::BadRequest("bad".to_string()).code(), "BAD_REQUEST");
        assert_eq!(ApiError::NotFound("gone".to_string()).code(), "NOT_FOUND");
    }
}
