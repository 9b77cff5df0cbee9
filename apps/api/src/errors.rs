use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::proposal::request::{LanguageMode, RequiredField};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// The body is always `{ "error": "<localized message>" }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Missing required field: {field:?}")]
    MissingField {
        field: RequiredField,
        language: LanguageMode,
    },

    #[error("Internal server error: {message}")]
    Internal {
        message: String,
        language: LanguageMode,
    },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) | AppError::MissingField { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the user, in the language the form asked for.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidBody(_) => LanguageMode::Both.localize(
                "Nieprawidłowe dane formularza",
                "Invalid form data received",
            ),
            AppError::MissingField { field, language } => field.message(*language),
            AppError::Internal { language, .. } => language.localize(
                "Błąd podczas generowania propozycji - sprawdź wprowadzone dane",
                "Error generating proposal - please check your input",
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidBody(detail) => tracing::warn!("Rejected request body: {detail}"),
            AppError::MissingField { field, .. } => {
                tracing::info!("Rejected submission, missing {field:?}")
            }
            AppError::Internal { message, .. } => tracing::error!("Internal error: {message}"),
        }

        let body = Json(json!({ "error": self.user_message() }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_bad_request() {
        let err = AppError::MissingField {
            field: RequiredField::CompanyName,
            language: LanguageMode::En,
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Company name is required");
    }

    #[test]
    fn test_internal_error_is_localized() {
        let err = AppError::Internal {
            message: "boom".to_string(),
            language: LanguageMode::Pl,
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.user_message().starts_with("Błąd podczas generowania"));
    }

    #[test]
    fn test_invalid_body_message_is_bilingual() {
        let err = AppError::InvalidBody("expected value".to_string());
        assert_eq!(
            err.user_message(),
            "Nieprawidłowe dane formularza / Invalid form data received"
        );
    }
}
