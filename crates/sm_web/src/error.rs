use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use sm_core::Error;
use tracing::{error, warn};

/// An error response rendered as `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            // Upstream failures only surface from the fetch stage and read as "nothing found"
            Error::NotFound(_) | Error::UpstreamUnavailable { .. } => StatusCode::NOT_FOUND,
            Error::NoContent(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("❌ {} {}", self.status.as_u16(), self.detail);
        } else {
            warn!("{} {}", self.status.as_u16(), self.detail);
        }
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
