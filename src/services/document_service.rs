use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{
    errors::{AppError, AppResult},
    services::text_splitter::TextSplitter,
};

/// Turns a document on disk into ordered text chunks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self, path: &Path) -> AppResult<Vec<String>>;
}

pub struct PdfDocumentLoader {
    splitter: TextSplitter,
}

impl PdfDocumentLoader {
    pub fn new(splitter: TextSplitter) -> Self {
        Self { splitter }
    }
}

#[async_trait]
impl DocumentLoader for PdfDocumentLoader {
    async fn load(&self, path: &Path) -> AppResult<Vec<String>> {
        let owned: PathBuf = path.to_path_buf();
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text(&owned))
            .await
            .map_err(|e| AppError::DocumentLoadError(format!("PDF extraction aborted: {}", e)))?
            .map_err(|e| AppError::DocumentLoadError(format!("Failed to read PDF: {}", e)))?;

        if text.trim().is_empty() {
            return Err(AppError::DocumentLoadError(
                "PDF contains no extractable text".to_string(),
            ));
        }

        let chunks = self.splitter.split(&text);
        log::info!(
            "Loaded {} characters from {:?} into {} chunk(s)",
            text.chars().count(),
            path.file_name().unwrap_or_default(),
            chunks.len()
        );
        Ok(chunks)
    }
}
