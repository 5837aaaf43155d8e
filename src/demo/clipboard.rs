//! Clipboard collaborator — the export target for `copy_text`.
//!
//! The real clipboard belongs to the caller (a browser, a native shell); the
//! service only hands text across this seam.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ClipboardError;

/// Receives exported demo text. Failures are non-fatal notices.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard, keeps every write. Used in development and tests.
#[derive(Default)]
pub struct MemoryClipboard {
    writes: RwLock<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent write, if any.
    pub async fn last(&self) -> Option<String> {
        self.writes.read().await.last().cloned()
    }

    pub async fn write_count(&self) -> usize {
        self.writes.read().await.len()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.write().await.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_clipboard_records_writes() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.last().await.is_none());

        clipboard.write_text("first").await.unwrap();
        clipboard.write_text("second").await.unwrap();

        assert_eq!(clipboard.write_count().await, 2);
        assert_eq!(clipboard.last().await.as_deref(), Some("second"));
    }
}
