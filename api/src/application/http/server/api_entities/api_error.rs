use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use validator::Validate;

use comidas_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    TooManyRequests(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ApiErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::LlmThrottled(msg) => ApiError::TooManyRequests(msg),
            CoreError::LlmUnauthorized(msg) => ApiError::Unauthorized(msg),
            CoreError::Invalid(msg) => ApiError::ValidationError(msg),
            other => ApiError::InternalServerError(other.to_string()),
        }
    }
}

/// Json extractor that also runs `validator::Validate` on the payload.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::ValidationError(rejection.body_text()))?;

        payload
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateJson(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttled_maps_to_429() {
        let api_error = ApiError::from(CoreError::LlmThrottled("quota".to_string()));
        assert!(matches!(api_error, ApiError::TooManyRequests(_)));
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let api_error = ApiError::from(CoreError::LlmUnauthorized("bad key".to_string()));
        assert!(matches!(api_error, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_other_core_errors_map_to_500() {
        let api_error = ApiError::from(CoreError::ExternalServiceError("boom".to_string()));
        assert!(matches!(api_error, ApiError::InternalServerError(_)));

        let api_error = ApiError::from(CoreError::InternalServerError);
        assert!(matches!(api_error, ApiError::InternalServerError(_)));
    }

    #[test]
    fn test_detail_message_is_preserved() {
        let api_error = ApiError::from(CoreError::LlmThrottled("quota exceeded".to_string()));
        assert_eq!(api_error.to_string(), "quota exceeded");
    }
}
