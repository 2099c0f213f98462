use crate::utils::error::ShopError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error returned by every handler. Renders as
/// `{"error": kind, "message": text, "status": code}`.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
    pub path: Option<String>,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            kind: "not_found",
            message: message.into(),
            path: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: "bad_request",
            message: message.into(),
            path: None,
        }
    }

    pub fn payload_too_large() -> Self {
        Self {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            kind: "payload_too_large",
            message: "request body exceeds the configured limit".to_string(),
            path: None,
        }
    }

    pub fn request_timeout() -> Self {
        Self {
            status: StatusCode::REQUEST_TIMEOUT,
            kind: "request_timeout",
            message: "request took too long to complete".to_string(),
            path: None,
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            kind: "internal",
            message: "internal server error".to_string(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl From<ShopError> for ApiError {
    fn from(err: ShopError) -> Self {
        match &err {
            ShopError::NotFoundError { .. } => ApiError::not_found(err.to_string()),
            ShopError::InvalidQueryError { .. } | ShopError::ValidationError { .. } => {
                ApiError::bad_request(err.to_string())
            }
            _ => {
                // 內部錯誤細節只寫入日誌，不回傳給客戶端
                tracing::error!(
                    "Request failed: {} (Category: {:?}, Severity: {:?})",
                    err,
                    err.category(),
                    err.severity()
                );
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "error": self.kind,
            "message": self.message,
            "status": self.status.as_u16(),
        });
        if let Some(path) = self.path {
            body["path"] = json!(path);
        }
        (self.status, Json(body)).into_response()
    }
}
