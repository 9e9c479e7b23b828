use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tradedesk_views::ViewError;

pub enum ApiError {
    View(ViewError),
    BadRequest(String),
    NotFound(String),
}

impl ApiError {
    pub fn view_not_found(key: &str) -> Self {
        ApiError::NotFound(format!("view not found: {key}"))
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl From<ViewError> for ApiError {
    fn from(e: ViewError) -> Self {
        ApiError::View(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::View(e) => (e.status_code(), e.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
