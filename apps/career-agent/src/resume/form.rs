//! Resume form submission: field collection, photo sniffing and validation.

use axum::extract::multipart::{Multipart, MultipartError};
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// One resume submission's text fields. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct ResumeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub role: String,
    pub summary: String,
    pub experience: String,
    pub education: String,
    /// Raw comma-separated skills, as typed.
    pub skills: String,
}

impl ResumeForm {
    /// Assigns a multipart text field by its form name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        let slot = match name {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "linkedin" => &mut self.linkedin,
            "role" => &mut self.role,
            "summary" => &mut self.summary,
            "experience" => &mut self.experience,
            "education" => &mut self.education,
            "skills" => &mut self.skills,
            other => {
                debug!(field = other, "Ignoring unknown resume form field");
                return;
            }
        };
        *slot = value.trim().to_string();
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required.".to_string()));
        }
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err(AppError::Validation(format!(
                "'{}' is not a valid email address.",
                self.email
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoKind {
    Png,
    Jpeg,
}

impl PhotoKind {
    pub fn extension(self) -> &'static str {
        match self {
            PhotoKind::Png => ".png",
            PhotoKind::Jpeg => ".jpg",
        }
    }
}

/// An uploaded photo whose content has been sniffed as PNG or JPEG.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub kind: PhotoKind,
    pub bytes: Bytes,
}

impl PhotoUpload {
    /// Browsers send an empty part when no file was chosen; that is `Ok(None)`.
    pub fn from_bytes(bytes: Bytes, max_bytes: usize) -> Result<Option<Self>, AppError> {
        if bytes.is_empty() {
            return Ok(None);
        }
        if bytes.len() > max_bytes {
            return Err(AppError::Validation(format!(
                "Photo is too large ({} KiB, limit {} KiB).",
                bytes.len() / 1024,
                max_bytes / 1024
            )));
        }

        let kind = match infer::get(&bytes).map(|t| t.mime_type()) {
            Some("image/png") => PhotoKind::Png,
            Some("image/jpeg") => PhotoKind::Jpeg,
            _ => {
                return Err(AppError::Validation(
                    "Photo must be a JPG or PNG image.".to_string(),
                ))
            }
        };

        Ok(Some(Self { kind, bytes }))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResumeSubmission {
    pub form: ResumeForm,
    pub photo: Option<PhotoUpload>,
}

fn malformed(e: MultipartError) -> AppError {
    AppError::Validation(format!("Malformed form submission: {e}"))
}

/// Reads a `multipart/form-data` resume submission. The file part is named `photo`.
pub async fn read_submission(
    mut multipart: Multipart,
    max_photo_bytes: usize,
) -> Result<ResumeSubmission, AppError> {
    let mut submission = ResumeSubmission::default();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "photo" {
            let bytes = field.bytes().await.map_err(malformed)?;
            submission.photo = PhotoUpload::from_bytes(bytes, max_photo_bytes)?;
        } else {
            let value = field.text().await.map_err(malformed)?;
            submission.form.set_field(&name, value);
        }
    }

    Ok(submission)
}
