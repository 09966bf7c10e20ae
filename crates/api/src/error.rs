use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{ActionError, ActionResult};
use serde::Serialize;
use thiserror::Error;

/// Failures raised by the HTTP layer itself, before or around an action.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Uniform failure body, identical to a failed action result.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        let body = ErrorBody {
            success: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", field))
                })
            })
            .collect();
        messages.sort();

        let message = match messages.len() {
            0 => "Invalid request".to_string(),
            1 => messages.remove(0),
            n => format!("{} validation errors: {}", n, messages.join("; ")),
        };

        ApiError::Validation(message)
    }
}

/// HTTP status for a failed action.
pub fn action_status(err: &ActionError) -> StatusCode {
    match err {
        ActionError::NotFound(_) => StatusCode::NOT_FOUND,
        ActionError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        ActionError::NothingToUpdate => StatusCode::BAD_REQUEST,
        ActionError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders an [`ActionResult`] as JSON, choosing the status from its failure kind.
pub struct ActionReply<T> {
    result: ActionResult<T>,
    success_status: StatusCode,
}

impl<T> ActionReply<T> {
    pub fn ok(result: ActionResult<T>) -> Self {
        Self {
            result,
            success_status: StatusCode::OK,
        }
    }

    /// Replies `201 Created` on success.
    pub fn created(result: ActionResult<T>) -> Self {
        Self {
            result,
            success_status: StatusCode::CREATED,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.success
    }
}

impl<T> From<ActionResult<T>> for ActionReply<T> {
    fn from(result: ActionResult<T>) -> Self {
        Self::ok(result)
    }
}

impl<T: Serialize> IntoResponse for ActionReply<T> {
    fn into_response(self) -> Response {
        let status = match &self.result.failure {
            None => self.success_status,
            Some(err) => action_status(err),
        };
        (status, Json(self.result)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_api_error_uniform_body() {
        let response = ApiError::Unauthorized("Admin session required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"success": false, "error": "Admin session required"})
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response = ApiError::Internal("pool exhausted".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "An internal error occurred");
    }

    #[test]
    fn test_api_error_statuses() {
        assert_eq!(
            ApiError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Validation("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ServiceUnavailable("x".into()).into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_action_status_mapping() {
        assert_eq!(action_status(&ActionError::NotFound("Order")), StatusCode::NOT_FOUND);
        assert_eq!(action_status(&ActionError::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(action_status(&ActionError::NothingToUpdate), StatusCode::BAD_REQUEST);
        assert_eq!(
            action_status(&ActionError::Storage("Failed to get orders")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_action_reply_created_and_failed() {
        let created = ActionReply::created(ActionResult::ok(5)).into_response();
        assert_eq!(created.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(created).await,
            serde_json::json!({"success": true, "data": 5})
        );

        let failed: ActionReply<i32> =
            ActionReply::created(ActionResult::fail(ActionError::Storage("Failed to create order")));
        let response = failed.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"success": false, "error": "Failed to create order"})
        );
    }

    #[test]
    fn test_validation_errors_single_message() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(range(min = 1, message = "Quantity must be at least 1"))]
            quantity: i32,
        }

        let err: ApiError = Probe { quantity: 0 }.validate().unwrap_err().into();
        assert_eq!(err.to_string(), "Validation error: Quantity must be at least 1");
    }
}
