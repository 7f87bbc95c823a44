//! Axum route handlers for the resume PDF API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;
use crate::resume::form::read_submission;
use crate::resume::{build_resume_pdf, PDF_FILENAME};
use crate::state::AppState;

/// Wraps PDF bytes as a download.
pub fn pdf_attachment(bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PDF_FILENAME}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// POST /api/v1/resume/pdf
///
/// Multipart resume form (text fields plus optional `photo`) → `application/pdf`.
pub async fn handle_render_pdf(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let submission = read_submission(multipart, state.config.max_photo_bytes).await?;
    let bytes = build_resume_pdf(&state.config.upload_dir, submission).await?;
    Ok(pdf_attachment(bytes))
}
