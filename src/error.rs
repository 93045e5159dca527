use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::db::PersistenceError;
use crate::models::ErrorResponse;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Client supplied a payload or path of the wrong shape or value
    #[error("{0}")]
    InvalidInput(String),

    #[error("Item not found")]
    NotFound,

    /// Storage failure. Only `context` is shown to the caller.
    #[error("{context}")]
    Persistence {
        context: &'static str,
        #[source]
        source: PersistenceError,
    },

    /// Anything that escapes a handler
    #[error("Something went wrong!")]
    Unhandled,
}

impl ApiError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ApiError::InvalidInput(message.into())
    }

    /// Wrap a storage failure behind a fixed message
    pub fn persistence(context: &'static str) -> impl FnOnce(PersistenceError) -> Self {
        move |source| ApiError::Persistence { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Persistence { .. } | ApiError::Unhandled => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Persistence { context, source } = &self {
            error!("{}: {}", context, source);
        }

        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
