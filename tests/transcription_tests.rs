//! Transcription invoker integration tests
//!
//! Exercise the whisper.cpp subprocess protocol against stub
//! executables instead of the real binary.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use voxclip::application::ports::{Transcriber, TranscriptionError};
use voxclip::infrastructure::WhisperCppTranscriber;

/// Write an executable stub script
fn write_stub(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("whisper-stub");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// Create dummy model and audio files
fn fixture(dir: &Path) -> (PathBuf, PathBuf) {
    let model = dir.join("ggml-medium.bin");
    fs::write(&model, b"weights").unwrap();
    let audio = dir.join("recording.wav");
    fs::write(&audio, b"RIFF").unwrap();
    (model, audio)
}

#[tokio::test]
async fn stdout_is_normalized_into_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let (model, audio) = fixture(dir.path());
    let stub = write_stub(dir.path(), "echo ' [BLANK_AUDIO] hello from stub '");

    let transcriber = WhisperCppTranscriber::with_paths(stub, model, "en");
    let transcript = transcriber.transcribe(&audio).await.unwrap();

    assert_eq!(transcript.as_str(), "hello from stub");
}

#[tokio::test]
async fn invoker_passes_protocol_flags() {
    let dir = tempfile::tempdir().unwrap();
    let (model, audio) = fixture(dir.path());
    let args_file = dir.path().join("args.txt");
    let body = format!(
        "printf '%s\\n' \"$@\" > \"{}\"\necho ok",
        args_file.display()
    );
    let stub = write_stub(dir.path(), &body);

    let transcriber = WhisperCppTranscriber::with_paths(stub, model.clone(), "pt");
    transcriber.transcribe(&audio).await.unwrap();

    let recorded = fs::read_to_string(&args_file).unwrap();
    let args: Vec<&str> = recorded.lines().collect();
    assert_eq!(
        args,
        vec![
            "-m",
            model.to_str().unwrap(),
            "-f",
            audio.to_str().unwrap(),
            "-l",
            "pt",
            "-nt",
            "-np",
        ]
    );
}

#[tokio::test]
async fn non_zero_exit_is_failure() {
    let dir = tempfile::tempdir().unwrap();
    let (model, audio) = fixture(dir.path());
    let stub = write_stub(dir.path(), "echo 'model load failed' >&2\nexit 3");

    let transcriber = WhisperCppTranscriber::with_paths(stub, model, "en");
    let err = transcriber.transcribe(&audio).await.unwrap_err();

    match err {
        TranscriptionError::InvocationFailed(message) => {
            assert!(message.contains("model load failed"), "got: {}", message);
        }
        other => panic!("Expected InvocationFailed, got: {}", other),
    }
}

#[tokio::test]
async fn blank_audio_only_is_no_speech() {
    let dir = tempfile::tempdir().unwrap();
    let (model, audio) = fixture(dir.path());
    let stub = write_stub(dir.path(), "echo ' [BLANK_AUDIO] '");

    let transcriber = WhisperCppTranscriber::with_paths(stub, model, "en");
    let err = transcriber.transcribe(&audio).await.unwrap_err();

    assert!(matches!(err, TranscriptionError::NoSpeech));
}

#[tokio::test]
async fn probe_succeeds_with_runnable_binary() {
    let dir = tempfile::tempdir().unwrap();
    let (model, _) = fixture(dir.path());
    let stub = write_stub(dir.path(), "exit 0");

    let transcriber = WhisperCppTranscriber::with_paths(stub, model, "en");
    assert!(transcriber.probe().await.is_ok());
}

#[tokio::test]
async fn probe_fails_when_binary_cannot_run() {
    let dir = tempfile::tempdir().unwrap();
    let (model, _) = fixture(dir.path());
    let stub = write_stub(dir.path(), "exit 1");

    let transcriber = WhisperCppTranscriber::with_paths(stub, model, "en");
    let err = transcriber.probe().await.unwrap_err();

    assert!(matches!(err, TranscriptionError::InvocationFailed(_)));
}
