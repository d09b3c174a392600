//! Subprocess clipboard mechanisms

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;

use crate::application::ports::{Clipboard, ClipboardError};

/// Ceiling on one copy attempt
const COPY_TIMEOUT: Duration = Duration::from_secs(5);

/// One platform clipboard tool: a program and its fixed argument list,
/// receiving the text on standard input. Exit code zero is success.
pub struct CommandClipboard {
    name: &'static str,
    program: &'static str,
    args: &'static [&'static str],
}

impl CommandClipboard {
    const fn new(name: &'static str, program: &'static str, args: &'static [&'static str]) -> Self {
        Self {
            name,
            program,
            args,
        }
    }

    /// wl-copy (Wayland)
    pub const fn wl_copy() -> Self {
        Self::new("wl-copy", "wl-copy", &[])
    }

    /// xclip (X11)
    pub const fn xclip() -> Self {
        Self::new("xclip", "xclip", &["-selection", "clipboard"])
    }

    /// xsel (X11)
    pub const fn xsel() -> Self {
        Self::new("xsel", "xsel", &["--clipboard", "--input"])
    }

    /// pbcopy (macOS)
    pub const fn pbcopy() -> Self {
        Self::new("pbcopy", "pbcopy", &[])
    }

    /// clip.exe (Windows clipboard reached from WSL)
    pub const fn clip_exe() -> Self {
        Self::new("clip.exe", "clip.exe", &[])
    }

    /// clip (native Windows)
    pub const fn clip() -> Self {
        Self::new("clip", "clip", &[])
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::Unavailable(self.name.to_string())
                } else {
                    ClipboardError::CopyFailed(e.to_string())
                }
            })?;

        // Write text to stdin; dropping the handle closes the pipe so
        // the tool sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;
        }

        let status = timeout(COPY_TIMEOUT, child.wait())
            .await
            .map_err(|_| ClipboardError::CopyFailed(format!("{} timed out", self.name)))?
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::CopyFailed(format!(
                "{} exited with status: {}",
                self.name, status
            )));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_argument_tables() {
        assert_eq!(CommandClipboard::xclip().args, ["-selection", "clipboard"]);
        assert_eq!(CommandClipboard::xsel().args, ["--clipboard", "--input"]);
        assert!(CommandClipboard::wl_copy().args.is_empty());
        assert!(CommandClipboard::pbcopy().args.is_empty());
    }

    #[tokio::test]
    async fn missing_tool_is_unavailable() {
        let tool = CommandClipboard::new("missing-tool", "voxclip-no-such-tool", &[]);
        let err = tool.copy("text").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable(_)));
    }
}
