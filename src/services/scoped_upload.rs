use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::errors::{AppError, AppResult};

/// An uploaded document persisted to a uniquely named temporary file.
/// The file is removed when the guard is dropped, whichever way the request ends.
pub struct ScopedUpload {
    file: NamedTempFile,
}

impl ScopedUpload {
    pub fn write(bytes: &[u8]) -> AppResult<Self> {
        if bytes.is_empty() {
            return Err(AppError::ValidationError(
                "Uploaded document is empty".to_string(),
            ));
        }

        let mut file = tempfile::Builder::new()
            .prefix("pdf2mcq-upload-")
            .suffix(".pdf")
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;

        log::debug!("Stored {} byte upload at {:?}", bytes.len(), file.path());
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
