//! whisper.cpp binary and model discovery
//!
//! Candidate locations are plain data evaluated in a fixed order, so a
//! new install layout is an added table entry, not a new branch.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

use crate::application::ports::TranscriptionError;
use crate::domain::transcription::ModelSize;

/// Candidate binary locations relative to each search root, in
/// preference order: new simplified layout first, then the legacy
/// whisper.cpp build tree.
const BINARY_CANDIDATES: &[&str] = &[
    "whisper/bin/whisper-cli.exe",
    "whisper/bin/main.exe",
    "whisper/bin/whisper-cli",
    "whisper/bin/main",
    "whisper.cpp/build/bin/whisper-cli.exe",
    "whisper.cpp/build/bin/main.exe",
    "whisper.cpp/build/bin/whisper-cli",
    "whisper.cpp/build/bin/main",
];

/// Candidate model directories relative to each search root
const MODEL_DIRS: &[&str] = &["whisper/models", "whisper.cpp/models"];

/// Names tried on PATH when no candidate location exists
#[cfg(windows)]
const PATH_LOOKUPS: &[&str] = &["whisper-cli.exe"];
#[cfg(not(windows))]
const PATH_LOOKUPS: &[&str] = &["whisper-cli", "whisper-cpp"];

/// Install roots: the executable's directory and its parent.
/// Covers both `<root>/bin/voxclip` installs and cargo target layouts.
pub fn search_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            roots.push(dir.to_path_buf());
            if let Some(parent) = dir.parent() {
                roots.push(parent.to_path_buf());
            }
        }
    }

    roots
}

/// First existing binary candidate under the given roots, in table order
pub fn find_binary_in(roots: &[PathBuf]) -> Option<PathBuf> {
    for root in roots {
        for candidate in BINARY_CANDIDATES {
            let path = root.join(candidate);
            if path.is_file() {
                return Some(path);
            }
        }
    }

    None
}

/// Well-known user install location
fn user_install_candidate() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".local").join("bin").join("whisper-cpp"))
}

/// Resolve the first PATH hit for the platform's lookup names
async fn lookup_in_path() -> Option<PathBuf> {
    let finder = if cfg!(windows) { "where" } else { "which" };

    for name in PATH_LOOKUPS {
        let output = Command::new(finder)
            .arg(name)
            .stdin(Stdio::null())
            .output()
            .await;

        if let Ok(output) = output {
            if output.status.success() {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let first = stdout.lines().next().map(str::trim).unwrap_or("");
                if !first.is_empty() {
                    return Some(PathBuf::from(first));
                }
            }
        }
    }

    None
}

/// Locate the transcription binary: candidate table, then the user
/// install dir, then PATH.
pub async fn locate_binary() -> Result<PathBuf, TranscriptionError> {
    if let Some(path) = find_binary_in(&search_roots()) {
        return Ok(path);
    }

    if let Some(path) = user_install_candidate().filter(|p| p.is_file()) {
        return Ok(path);
    }

    lookup_in_path()
        .await
        .ok_or(TranscriptionError::BinaryNotFound)
}

/// First existing model weight file under the given roots, in table order
pub fn find_model_in(roots: &[PathBuf], model: ModelSize) -> Option<PathBuf> {
    let file = model.weight_file_name();

    for root in roots {
        for dir in MODEL_DIRS {
            let path = root.join(dir).join(&file);
            if path.is_file() {
                return Some(path);
            }
        }
    }

    None
}

/// Locate the model weight file for the given model size
pub fn locate_model(model: ModelSize) -> Result<PathBuf, TranscriptionError> {
    let roots = search_roots();

    if let Some(path) = find_model_in(&roots, model) {
        return Ok(path);
    }

    let file = model.weight_file_name();
    let expected = roots
        .first()
        .map(|root| root.join(MODEL_DIRS[0]).join(&file))
        .unwrap_or_else(|| PathBuf::from(MODEL_DIRS[0]).join(&file));

    Err(TranscriptionError::ModelNotFound { file, expected })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn find_binary_in_empty_root_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_binary_in(&[dir.path().to_path_buf()]), None);
    }

    #[test]
    fn find_binary_prefers_new_layout_over_legacy() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();

        let legacy = root.join("whisper.cpp/build/bin/whisper-cli");
        let new = root.join("whisper/bin/whisper-cli");
        touch(&legacy);
        touch(&new);

        assert_eq!(find_binary_in(&[root]), Some(new));
    }

    #[test]
    fn find_binary_prefers_whisper_cli_over_main() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();

        touch(&root.join("whisper/bin/main"));
        touch(&root.join("whisper/bin/whisper-cli"));

        assert_eq!(
            find_binary_in(&[root.clone()]),
            Some(root.join("whisper/bin/whisper-cli"))
        );
    }

    #[test]
    fn find_binary_checks_roots_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();

        let in_second = second.path().join("whisper/bin/whisper-cli");
        touch(&in_second);

        let roots = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(find_binary_in(&roots), Some(in_second));
    }

    #[test]
    fn find_model_uses_naming_convention() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();

        let tiny = root.join("whisper/models/ggml-tiny.bin");
        touch(&tiny);

        assert_eq!(find_model_in(&[root.clone()], ModelSize::Tiny), Some(tiny));
        assert_eq!(find_model_in(&[root], ModelSize::Medium), None);
    }

    #[test]
    fn find_model_prefers_new_layout() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();

        touch(&root.join("whisper.cpp/models/ggml-base.bin"));
        let new = root.join("whisper/models/ggml-base.bin");
        touch(&new);

        assert_eq!(find_model_in(&[root], ModelSize::Base), Some(new));
    }
}
