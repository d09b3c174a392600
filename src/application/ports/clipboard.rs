//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("No text provided to copy to clipboard")]
    EmptyText,

    #[error("Clipboard tool '{0}' not available")]
    Unavailable(String),

    #[error("Failed to copy to clipboard: {0}")]
    CopyFailed(String),

    #[error("All clipboard mechanisms failed: {0}")]
    AllMechanismsFailed(String),
}

/// Port for one clipboard copy mechanism.
///
/// Mechanisms are composed into an ordered fallback chain; each one only
/// answers "did this attempt succeed".
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Copy text to the system clipboard.
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;

    /// Mechanism name used in diagnostics
    fn name(&self) -> &str;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().copy(text).await
    }

    fn name(&self) -> &str {
        self.as_ref().name()
    }
}
