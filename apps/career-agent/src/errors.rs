use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so JSON handlers can return `Result<T, AppError>`;
/// HTML pages use `user_message()` to render the same failure as a banner.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Data source error: {0}")]
    DataSource(#[from] sqlx::Error),

    #[error("AI service error: {0}")]
    AiService(String),

    #[error("File IO error: {0}")]
    FileIo(#[from] std::io::Error),

    #[error("PDF render error: {0}")]
    Pdf(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DataSource(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::AiService(_) => StatusCode::BAD_GATEWAY,
            AppError::FileIo(_) | AppError::Pdf(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DataSource(_) => "DATA_SOURCE_ERROR",
            AppError::AiService(_) => "AI_SERVICE_ERROR",
            AppError::FileIo(_) => "FILE_IO_ERROR",
            AppError::Pdf(_) => "PDF_RENDER_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the user. Collaborator details are logged instead.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::DataSource(e) => {
                tracing::error!("Data source error: {e}");
                "Job listings are unavailable right now. Please try again later.".to_string()
            }
            AppError::AiService(msg) => {
                tracing::error!("AI service error: {msg}");
                "The AI service could not complete the request. Please try again.".to_string()
            }
            AppError::FileIo(e) => {
                tracing::error!("File IO error: {e}");
                "The uploaded file could not be processed.".to_string()
            }
            AppError::Pdf(msg) => {
                tracing::error!("PDF render error: {msg}");
                "The resume PDF could not be generated.".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.user_message()
            }
        }));

        (status, body).into_response()
    }
}
