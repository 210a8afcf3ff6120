use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("unprocessable: {0}")]
    Unprocessable(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable(_) | ApiError::Database(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad request",
            ApiError::NotFound(_) => "resource not found",
            ApiError::MethodNotAllowed => "method not allowed",
            ApiError::Unprocessable(_) | ApiError::Database(_) => "unprocessible request",
        }
    }
}

/// Payload for envelopes that carry nothing besides the status fields.
#[derive(Serialize, Debug)]
pub struct NoPayload {}

/// JSON wrapper shared by every response.
#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    success: bool,
    status: u16,
    message: &'static str,
    #[serde(flatten)]
    payload: T,
    #[serde(skip)]
    code: StatusCode,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(message: &'static str, payload: T) -> Self {
        Self::with_status(StatusCode::OK, message, payload)
    }

    pub fn created(message: &'static str, payload: T) -> Self {
        Self::with_status(StatusCode::CREATED, message, payload)
    }

    fn with_status(code: StatusCode, message: &'static str, payload: T) -> Self {
        Envelope {
            success: code.is_success(),
            status: code.as_u16(),
            message,
            payload,
            code,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.code, Json(self)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Unprocessable(_) | ApiError::Database(_) => {
                tracing::error!(error = %self, "Request failed")
            }
            _ => tracing::debug!(error = %self, "Request rejected"),
        }
        Envelope::with_status(self.status(), self.message(), NoPayload {}).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // well-formed JSON with the wrong shape
            JsonRejection::JsonDataError(err) => ApiError::Unprocessable(err.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::NotFound(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
