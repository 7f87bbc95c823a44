// Resume builder: form intake, transient photo storage and PDF rendering.

pub mod form;
pub mod handlers;
pub mod pdf;
pub mod upload;

use std::path::Path;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::resume::form::ResumeSubmission;
use crate::resume::pdf::render_resume;
use crate::resume::upload::TempPhoto;

pub const PDF_FILENAME: &str = "resume.pdf";

/// Validates a submission and renders it to PDF bytes.
///
/// The photo, if any, is written under `upload_dir` before rendering and
/// removed afterwards whether or not rendering succeeded.
pub async fn build_resume_pdf(
    upload_dir: &Path,
    submission: ResumeSubmission,
) -> Result<Vec<u8>, AppError> {
    submission.form.validate()?;

    let photo = submission
        .photo
        .as_ref()
        .map(|upload| TempPhoto::write(upload_dir, upload))
        .transpose()?;
    let photo_path = photo.as_ref().map(|p| p.path().to_path_buf());

    let form = submission.form;
    let rendered =
        tokio::task::spawn_blocking(move || render_resume(&form, photo_path.as_deref())).await;

    if let Some(photo) = photo {
        if let Err(e) = photo.remove() {
            warn!("Failed to remove temporary photo: {e}");
        }
    }

    let bytes = rendered.map_err(|e| AppError::Internal(e.into()))??;
    info!(bytes = bytes.len(), "Rendered resume PDF");
    Ok(bytes)
}
