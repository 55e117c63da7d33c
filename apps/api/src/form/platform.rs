//! Host services the form relies on: clipboard, file download, user notices.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

#[async_trait]
pub trait PlatformServices: Send + Sync {
    async fn write_clipboard(&self, text: &str) -> Result<(), PlatformError>;

    /// Offers `content` to the user as a `text/plain` file named `filename`.
    async fn save_text_file(&self, filename: &str, content: &str) -> Result<(), PlatformError>;

    /// Transient user-facing message.
    fn notify(&self, message: &str);
}

/// Platform for running the form outside a browser.
/// Downloads land in `download_dir`; the clipboard is process-local.
#[derive(Debug)]
pub struct LocalPlatform {
    download_dir: PathBuf,
    clipboard: Mutex<Option<String>>,
}

impl LocalPlatform {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
            clipboard: Mutex::new(None),
        }
    }

    pub fn clipboard_contents(&self) -> Option<String> {
        self.clipboard
            .lock()
            .ok()
            .and_then(|clipboard| clipboard.clone())
    }
}

#[async_trait]
impl PlatformServices for LocalPlatform {
    async fn write_clipboard(&self, text: &str) -> Result<(), PlatformError> {
        let mut clipboard = self
            .clipboard
            .lock()
            .map_err(|e| PlatformError::Clipboard(e.to_string()))?;
        *clipboard = Some(text.to_string());
        Ok(())
    }

    async fn save_text_file(&self, filename: &str, content: &str) -> Result<(), PlatformError> {
        tokio::fs::create_dir_all(&self.download_dir).await?;
        let path = self.download_dir.join(filename);
        tokio::fs::write(&path, content).await?;
        info!("Saved {}", path.display());
        Ok(())
    }

    fn notify(&self, message: &str) {
        info!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_text_file_writes_into_download_dir() {
        let dir = tempfile::tempdir().unwrap();
        let platform = LocalPlatform::new(dir.path().join("downloads"));

        platform
            .save_text_file("cv_optimise.txt", "Jean Dupont")
            .await
            .unwrap();

        let saved = std::fs::read_to_string(dir.path().join("downloads/cv_optimise.txt")).unwrap();
        assert_eq!(saved, "Jean Dupont");
    }

    #[tokio::test]
    async fn test_clipboard_keeps_last_write() {
        let platform = LocalPlatform::new("unused");
        assert_eq!(platform.clipboard_contents(), None);

        platform.write_clipboard("first").await.unwrap();
        platform.write_clipboard("second").await.unwrap();
        assert_eq!(platform.clipboard_contents().as_deref(), Some("second"));
    }
}
