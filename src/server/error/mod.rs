//! Error types for the EduPortal server application.
//!
//! This module provides the error handling system for the application, with
//! specialized error types for authentication, configuration, and request
//! validation. All errors implement `IntoResponse` for Axum HTTP responses and
//! use `thiserror` for ergonomic error definitions.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Main error type for the EduPortal server application.
///
/// Aggregates the domain-specific error types and external library errors into
/// a single unified error type, with `#[from]` conversions enabling the `?`
/// operator throughout controllers, services, and repositories. The
/// `IntoResponse` implementation maps each error kind to one HTTP status:
/// 422 for field validation, 404 for missing records, 409 for operations
/// blocked by a business invariant, 401/404 for authentication failures, and
/// 500 for everything unexpected.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (bad credentials, missing session user).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Field-level request validation failure.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// The requested record does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    /// The operation is blocked by a business invariant (duplicate business
    /// key, dependent records, last remaining admin).
    #[error("{0}")]
    Conflict(String),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Password hashing or verification failure.
    #[error("Password hash error: {0}")]
    PasswordHashError(String),
    /// Internal error indicating a bug in EduPortal's code.
    #[error("Internal error with EduPortal's code: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl Error {
    /// Shorthand used by services when a path or payload id has no row.
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Shorthand for invariant-conflict rejections.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFound { entity } => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{} not found", entity),
                }),
            )
                .into_response(),
            Self::Conflict(message) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server
/// Error response.
///
/// Logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
