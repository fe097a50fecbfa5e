use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use labsight_core::error::AnalyzeError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    PayloadTooLarge(String),
    UnsupportedMediaType(String),
    /// An external service failed; the message is logged, not returned.
    BadGateway { public: String, detail: String },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            ApiError::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            ApiError::BadGateway { public, detail } => {
                tracing::error!("upstream error: {detail}");
                (StatusCode::BAD_GATEWAY, public)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<AnalyzeError> for ApiError {
    fn from(e: AnalyzeError) -> Self {
        match e {
            AnalyzeError::EmptyDocument => ApiError::BadRequest(e.to_string()),
            AnalyzeError::Extraction(_) => ApiError::BadGateway {
                public: "document analysis failed".to_string(),
                detail: e.to_string(),
            },
            AnalyzeError::Generation { .. } => ApiError::BadGateway {
                public: "answer generation failed".to_string(),
                detail: e.to_string(),
            },
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(e.body_text())
        } else {
            ApiError::BadRequest(e.body_text())
        }
    }
}
