//! Application error types with HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::services::Envelope;

/// Application-level errors for the catalogue.
#[derive(Error, Debug)]
pub enum AppError {
    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    // Lookup errors
    #[error("Unknown app: {0}")]
    UnknownApp(String),

    #[error("Component not found: {app}/{path}")]
    ComponentNotFound { app: String, path: String },

    // Filesystem errors
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Scan errors
    #[error("Failed to scan components: {0}")]
    Scan(String),
}

impl AppError {
    /// HTTP status and stable short code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::UnknownApp(_) => (StatusCode::NOT_FOUND, "UNKNOWN_APP"),
            AppError::ComponentNotFound { .. } => (StatusCode::NOT_FOUND, "COMPONENT_NOT_FOUND"),
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            AppError::Io { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
            AppError::Scan(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SCAN_ERROR"),
        }
    }

    /// True for lookups that found nothing, as opposed to failures.
    pub fn is_not_found(&self) -> bool {
        self.status_and_code().0 == StatusCode::NOT_FOUND
    }

    /// Client-facing message: `[CODE] message`.
    pub fn client_message(&self) -> String {
        let (_, code) = self.status_and_code();
        format!("[{}] {}", code, self)
    }
}

impl IntoResponse for AppError {
    /// Not-found lookups answer with a bare 404; failures carry the envelope.
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        if self.is_not_found() {
            tracing::debug!(error = %self, "Lookup found nothing");
            return status.into_response();
        }
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(Envelope::<()>::failure(self.client_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants() {
        assert!(AppError::UnknownApp("web".to_string()).is_not_found());
        assert!(AppError::ComponentNotFound {
            app: "core".to_string(),
            path: "ui/x.tsx".to_string(),
        }
        .is_not_found());
        assert!(!AppError::Scan("boom".to_string()).is_not_found());
    }

    #[test]
    fn test_not_found_response_has_no_envelope() {
        let response = AppError::UnknownApp("web".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("content-type").is_none());

        let response = AppError::Scan("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_client_message_carries_code() {
        let err = AppError::Scan("task panicked".to_string());
        assert_eq!(
            err.client_message(),
            "[SCAN_ERROR] Failed to scan components: task panicked"
        );
    }
}
