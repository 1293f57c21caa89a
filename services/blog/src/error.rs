//! Custom error types for the blog service

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::views;

/// Errors surfaced on the server-rendered page routes
#[derive(Error, Debug)]
pub enum AppError {
    /// Post lookup failed (missing or malformed id)
    #[error("Post not found")]
    PostNotFound,

    /// No route matched the request
    #[error("Page not found")]
    PageNotFound,

    /// Unexpected failure; detail is logged, never shown
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::PostNotFound => (StatusCode::NOT_FOUND, "Post not found"),
            AppError::PageNotFound => (StatusCode::NOT_FOUND, "Page not found"),
            AppError::Internal(err) => {
                error!("Unhandled error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!")
            }
        };

        (status, Html(views::error_page(message))).into_response()
    }
}

/// Errors surfaced on the JSON routes
#[derive(Error, Debug)]
pub enum ApiError {
    /// Post lookup failed (missing or malformed id)
    #[error("Post not found")]
    PostNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::PostNotFound => (StatusCode::NOT_FOUND, "Post not found"),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
