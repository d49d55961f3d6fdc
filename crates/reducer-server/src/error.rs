//! Boundary errors and their HTTP mapping.
//!
//! Clients only ever see a generic one-line message. The underlying error,
//! which may carry codec-specific detail, goes to the log.

use axum::extract::multipart::MultipartError;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use reducer_core::{DecodeError, EncodeError, ImageFormat, ParamError, ReduceError};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The `image` part is absent or the request is not multipart.
    #[error("missing form field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    InvalidParameter(#[from] ParamError),

    /// The upload could not be read off the wire.
    #[error("failed to read upload: {0}")]
    Upload(#[from] MultipartError),

    #[error("unrecognized image format")]
    UnrecognizedFormat,

    #[error("decode failed: {0}")]
    DecodeFailure(DecodeError),

    #[error("no encoder for format: {0}")]
    UnsupportedFormat(ImageFormat),

    #[error("encode failed: {0}")]
    EncodeFailure(EncodeError),

    /// The blocking reduction task panicked or was cancelled.
    #[error("reduction task failed: {0}")]
    Internal(String),
}

impl From<ReduceError> for ApiError {
    fn from(err: ReduceError) -> Self {
        match err {
            ReduceError::UnrecognizedFormat => ApiError::UnrecognizedFormat,
            ReduceError::Decode(e) => ApiError::DecodeFailure(e),
            ReduceError::UnsupportedFormat(format) => ApiError::UnsupportedFormat(format),
            ReduceError::Encode(e) => ApiError::EncodeFailure(e),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Upload(e) => e.status(),
            ApiError::UnrecognizedFormat
            | ApiError::DecodeFailure(_)
            | ApiError::UnsupportedFormat(_)
            | ApiError::EncodeFailure(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::MissingField(_) => "Failed to get image from form data".to_string(),
            ApiError::InvalidParameter(e) => format!("Invalid {} value", e.field()),
            ApiError::Upload(_) => "Failed to read image from request".to_string(),
            ApiError::UnrecognizedFormat => "Failed to determine image format".to_string(),
            ApiError::DecodeFailure(_)
            | ApiError::UnsupportedFormat(_)
            | ApiError::EncodeFailure(_)
            | ApiError::Internal(_) => "Failed to resize image".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n", self.public_message()),
        )
            .into_response()
    }
}
