//! Ошибки REST API и их JSON-представление `{error, message}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::api::ErrorResponse;

/// Ошибки предметной области, которые сервисы возвращают внутри `anyhow::Error`.
///
/// Обработчик различает их через downcast и отдаёт 400/404 вместо 500.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> anyhow::Error {
        DomainError::Validation(msg.into()).into()
    }

    pub fn not_found(what: impl Into<String>) -> anyhow::Error {
        DomainError::NotFound(what.into()).into()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    InternalError(String),
}

impl ApiError {
    /// Разбор идентификатора из пути
    pub fn parse_id(id: &str) -> Result<uuid::Uuid, ApiError> {
        uuid::Uuid::parse_str(id).map_err(|_| ApiError::BadRequest(format!("Invalid id: {}", id)))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<DomainError>() {
            Some(DomainError::Validation(msg)) => ApiError::ValidationError(msg.clone()),
            Some(e @ DomainError::NotFound(_)) => ApiError::NotFound(e.to_string()),
            None => {
                tracing::error!("Internal error: {:#}", err);
                ApiError::InternalError(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = ApiError::NotFound("Course not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_of(response).await;
        assert_eq!(body.error, "not_found");
        assert_eq!(body.message, "Course not found");
    }

    #[tokio::test]
    async fn test_domain_validation_maps_to_bad_request() {
        let err = DomainError::validation("Discount price must not exceed the price");
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_of(response).await;
        assert_eq!(body.error, "validation_error");
        assert_eq!(body.message, "Discount price must not exceed the price");
    }

    #[tokio::test]
    async fn test_domain_not_found_survives_context() {
        let err = DomainError::not_found("Publication").context("loading publication");
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_other_errors_are_internal() {
        let response = ApiError::from(anyhow::anyhow!("disk I/O error")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_parse_id() {
        assert!(ApiError::parse_id("not-a-uuid").is_err());
        assert!(ApiError::parse_id("6f1c1e8e-3b1a-4f4e-9f61-0a3f3f7c2b10").is_ok());
    }
}
