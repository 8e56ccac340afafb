use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{field}: {message}")]
    Conflict {
        field: &'static str,
        message: String,
    },

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            // Registration conflicts name the offending field so the client
            // can highlight it.
            AppError::Conflict { field, message } => (
                StatusCode::CONFLICT,
                json!({ "field": field, "error": message }),
            ),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Database error" }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Unwraps a required request field, turning its absence into a 400 that
/// names the field.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing {field}")))
}

/// Like [`require`], but an empty string counts as missing too.
pub fn require_nonempty(field: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("Missing {field}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_passes_through_present_values() {
        assert_eq!(require("court", Some("Court 1")).unwrap(), "Court 1");
    }

    #[test]
    fn require_reports_the_missing_field() {
        let err = require::<String>("user_id", None).unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, "Missing user_id"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn require_nonempty_rejects_empty_strings() {
        assert!(require_nonempty("date", Some(String::new())).is_err());
        assert!(require_nonempty("date", None).is_err());
        assert_eq!(
            require_nonempty("date", Some("2026-09-01".to_string())).unwrap(),
            "2026-09-01"
        );
    }

    #[tokio::test]
    async fn conflict_response_names_the_field() {
        let response = AppError::Conflict {
            field: "username",
            message: "Username is taken".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({ "field": "username", "error": "Username is taken" })
        );
    }
}
