use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::tago_service::types::tago_service_error::TagoServiceError;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
    pub upstream_status: Option<u16>,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
            upstream_status: None,
        }
    }

    pub fn with_upstream_status(mut self, status: u16) -> Self {
        self.upstream_status = Some(status);
        self
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponseJson {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ErrorResponseJson {
                error: self.message,
                status: self.upstream_status,
            }),
        )
            .into_response()
    }
}

impl From<TagoServiceError> for AppError {
    fn from(e: TagoServiceError) -> Self {
        match e {
            TagoServiceError::MissingServiceKey => AppError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "TAGO_SERVICE_KEY is not configured on the server",
            ),
            TagoServiceError::Status(status) => AppError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Transit API returned an error",
            )
            .with_upstream_status(status),
            TagoServiceError::Request(ref err) if err.is_timeout() => AppError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Transit API timed out",
            ),
            _ => AppError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch data from the transit API",
            ),
        }
    }
}
