#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::contact::mailer::MailError;
use crate::portfolio::store::StoreError;
use crate::validation::FieldError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Response bodies are always `{ "success": false, "error": <text> }`;
/// form failures additionally carry a `fieldErrors` array. Detailed causes
/// go to the server log, generic text to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid form data")]
    Form(Vec<FieldError>),

    #[error("SMTP is not configured")]
    MailNotConfigured,

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Form(errors) => {
                tracing::warn!("Form validation failed: {errors:?}");
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid data provided. Please check your input.".to_string(),
                )
            }
            AppError::MailNotConfigured => {
                tracing::error!("SMTP environment variables are not properly configured.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error for sending email.".to_string(),
                )
            }
            AppError::Mail(e) => {
                tracing::error!("Error sending email: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    e.user_message().to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An AI processing error occurred. Please try again later.".to_string(),
                )
            }
            AppError::Store(e) => {
                tracing::error!("Profile store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to persist portfolio data.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let mut body = json!({
            "success": false,
            "error": message,
        });
        if let AppError::Form(errors) = &self {
            body["fieldErrors"] = json!(errors);
        }

        (status, Json(body)).into_response()
    }
}
