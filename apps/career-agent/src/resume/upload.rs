use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::errors::AppError;
use crate::resume::form::PhotoUpload;

/// An uploaded photo on disk for the duration of one render.
///
/// The file is removed when the guard drops, so every exit path (including
/// a failed or panicking render) cleans up. `remove` does the same but
/// reports deletion failures.
pub struct TempPhoto {
    file: NamedTempFile,
}

impl TempPhoto {
    pub fn write(dir: &Path, photo: &PhotoUpload) -> Result<Self, AppError> {
        let mut file = tempfile::Builder::new()
            .prefix("photo-")
            .suffix(photo.kind.extension())
            .tempfile_in(dir)?;
        file.write_all(&photo.bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn remove(self) -> Result<(), AppError> {
        self.file.close()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::form::PhotoKind;
    use crate::test_support::TINY_PNG;
    use bytes::Bytes;

    fn png_upload() -> PhotoUpload {
        PhotoUpload {
            kind: PhotoKind::Png,
            bytes: Bytes::from_static(TINY_PNG),
        }
    }

    #[test]
    fn test_write_then_remove_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let photo = TempPhoto::write(dir.path(), &png_upload()).unwrap();
        let path = photo.path().to_path_buf();
        assert_eq!(std::fs::read(&path).unwrap(), TINY_PNG);
        assert_eq!(path.extension().unwrap(), "png");

        photo.remove().unwrap();
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_drop_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = {
            let photo = TempPhoto::write(dir.path(), &png_upload()).unwrap();
            photo.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_directory_is_file_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = TempPhoto::write(&missing, &png_upload()).err().unwrap();
        assert!(matches!(err, AppError::FileIo(_)));
    }
}
