//! Mapping of failures to HTML responses.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use super::view;
use crate::error::Error;

/// Plain-text body sent when a customer cannot be deleted.
pub const DELETE_FAILED_MESSAGE: &str =
    "Delete failed due to existing relationship. Press [BACK] and try again";

/// Failure of a page-rendering handler.
#[derive(Debug)]
pub enum PageError {
    /// Unknown id or malformed path segment.
    NotFound,
    /// Store or connection failure.
    Internal(Error),
}

impl From<Error> for PageError {
    fn from(err: Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, Html(view::page::not_found())).into_response(),
            Self::Internal(err) => {
                error!(error = %err, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(view::page::server_error()),
                )
                    .into_response()
            }
        }
    }
}

/// Result of a page-rendering handler.
pub type PageResult<T> = std::result::Result<T, PageError>;
