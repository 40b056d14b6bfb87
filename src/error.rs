//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.
//!
//! Failures of the live trend provider are deliberately absent here: they never reach
//! the caller and are modelled by `ProviderError` / `LiveFetchError` instead.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// The caller supplied a missing or unparseable request parameter.
    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// The hosting-provider (GitHub) client could not be constructed.
    #[error("GitHub Client Error: {0}")]
    GitHubClient(String),

    /// Error related to accessing environment variables.
    #[error("Environment Error: {0}")]
    Env(#[from] std::env::VarError),

    /// Invalid startup configuration (e.g. an unparseable numeric setting).
    #[error("Configuration Error: {0}")]
    Config(String),

    /// Error related to standard I/O operations (binding or running the server).
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// JSON body rendered for every error response.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad_request",
            AppError::GitHubClient(_) => "github_client_error",
            AppError::Env(_) | AppError::Config(_) => "configuration_error",
            AppError::Io(_) => "io_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        })
    }
}

// --- From implementations ---

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}
