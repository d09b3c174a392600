//! Clipboard infrastructure module
//!
//! Clipboard access has no portable primitive, so delivery is an
//! ordered chain of platform tools with the arboard library as the
//! final fallback.

mod arboard;
mod command;
mod fallback;

pub use arboard::ArboardClipboard;
pub use command::CommandClipboard;
pub use fallback::FallbackClipboard;

use crate::application::ports::Clipboard;

/// True when running under WSL (Linux kernel built by Microsoft)
#[cfg(target_os = "linux")]
fn is_wsl() -> bool {
    std::fs::read_to_string("/proc/version")
        .map(|v| v.to_lowercase().contains("microsoft"))
        .unwrap_or(false)
}

/// Assemble the clipboard fallback chain for the current platform.
///
/// Under WSL the Windows-side clipboard is tried before the Linux
/// tools; arboard is always the last entry.
pub fn create_clipboard() -> FallbackClipboard {
    let mut mechanisms: Vec<Box<dyn Clipboard>> = Vec::new();

    #[cfg(target_os = "linux")]
    {
        if is_wsl() {
            mechanisms.push(Box::new(CommandClipboard::clip_exe()));
        }
        mechanisms.push(Box::new(CommandClipboard::wl_copy()));
        mechanisms.push(Box::new(CommandClipboard::xclip()));
        mechanisms.push(Box::new(CommandClipboard::xsel()));
    }

    #[cfg(target_os = "macos")]
    mechanisms.push(Box::new(CommandClipboard::pbcopy()));

    #[cfg(target_os = "windows")]
    mechanisms.push(Box::new(CommandClipboard::clip()));

    mechanisms.push(Box::new(ArboardClipboard::new()));

    FallbackClipboard::new(mechanisms)
}
