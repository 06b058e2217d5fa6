//! Error types and HTTP response handling.
//!
//! The `AppError` enum is the top-level error type returned by every fallible
//! layer of the server. It implements `IntoResponse` so handlers can bubble
//! errors with `?` and still produce well-formed JSON error bodies.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Internal errors are
/// logged with full details server-side while clients receive a generic
/// message, to avoid leaking implementation details.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or filesystem error during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Field validation failure. Results in 400 with one detail entry per
    /// violated rule.
    #[error("invalid request data")]
    Validation(Vec<String>),

    /// Internal server error with custom message. The message is logged but a
    /// generic body is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: msg,
                    details: None,
                }),
            )
                .into_response(),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: msg,
                    details: None,
                }),
            )
                .into_response(),
            Self::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Invalid request data".to_string(),
                    details: Some(details),
                }),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                        details: None,
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a generic 500 response.
///
/// Logs the full error message for debugging but returns a generic body to
/// the client. Fallback for errors without a specific HTTP mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
                details: None,
            }),
        )
            .into_response()
    }
}
