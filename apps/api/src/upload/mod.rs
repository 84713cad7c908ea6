//! Multipart upload collection and scoped temporary storage.

use std::io::Write;
use std::path::Path;

use axum::extract::Multipart;
use bytes::Bytes;
use tempfile::NamedTempFile;

use crate::errors::AppError;

const DEFAULT_FILENAME: &str = "resume.pdf";

/// A file part received under the expected form field.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

/// Collects every file part named `field`, in submission order.
/// Other fields, and plain text parts under `field` (no filename), are skipped unread.
pub async fn collect_files(
    mut multipart: Multipart,
    field: &str,
) -> Result<Vec<UploadedFile>, AppError> {
    let mut files = Vec::new();

    while let Some(part) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))?
    {
        if part.name() != Some(field) {
            continue;
        }
        let Some(filename) = part.file_name() else {
            continue;
        };

        let filename = if filename.is_empty() {
            DEFAULT_FILENAME.to_string()
        } else {
            filename.to_string()
        };
        let data = part
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read file data: {e}")))?;

        files.push(UploadedFile { filename, data });
    }

    Ok(files)
}

/// An upload copied to a uniquely named file in the upload directory.
/// The file is removed when this value is dropped, on every exit path.
pub struct ScopedUpload {
    file: NamedTempFile,
}

impl ScopedUpload {
    pub fn write(dir: &Path, upload: &UploadedFile) -> std::io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".pdf")
            .tempfile_in(dir)?;
        file.write_all(&upload.data)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Deletes the file now, surfacing any removal error.
    pub fn close(self) -> std::io::Result<()> {
        self.file.close()
    }
}
