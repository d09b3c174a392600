//! Main app runner for one-shot capture

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};

use crate::application::ports::ConfigStore;
use crate::application::{
    CaptureCallbacks, CaptureError, CaptureInput, CaptureUseCase, Delivery,
};
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    create_clipboard, CpalRecorder, WhisperCppTranscriber, XdgConfigStore,
};

use super::args::CaptureOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Fixed directory for WAV recordings
pub const RECORDINGS_DIR: &str = "./recordings";

/// Run the one-shot capture
pub async fn run_capture(options: CaptureOptions) -> ExitCode {
    let presenter = Presenter::new();

    if options.sample_rate == 0 {
        presenter.error("Sample rate must be greater than zero");
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    // Timestamp names both artifacts of this run
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let audio_path = PathBuf::from(RECORDINGS_DIR).join(format!("recording_{}.wav", timestamp));

    let delivery = if options.clipboard {
        Delivery::Clipboard
    } else {
        Delivery::File(
            options
                .output_dir
                .join(format!("transcript_{}.txt", timestamp)),
        )
    };

    // Create adapters
    let recorder = CpalRecorder::new();
    let transcriber = WhisperCppTranscriber::new(options.model, options.lang.clone());
    let clipboard = create_clipboard();

    let use_case = CaptureUseCase::new(recorder, transcriber, clipboard);

    let input = CaptureInput {
        sample_rate: options.sample_rate,
        audio_path,
        delivery,
    };

    let callbacks = make_callbacks(&presenter);

    match use_case.execute(input, callbacks).await {
        Ok(output) => {
            match output.saved_to {
                None => {
                    presenter.success("Transcription copied to clipboard");
                    presenter.output(output.transcript.as_str());
                }
                Some(path) => {
                    presenter.output(output.transcript.as_str());
                    presenter.success(&format!("Saved to: {}", path.display()));
                }
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(CaptureError::Clipboard { source, transcript }) => {
            // The transcript still exists; show it so the run is not a total loss
            presenter.error(&format!("Failed to copy to clipboard: {}", source));
            eprintln!("Transcription:");
            eprintln!("{}", transcript);
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Phase callbacks: recording start notice, transcription spinner
fn make_callbacks(presenter: &Presenter) -> CaptureCallbacks {
    let spinner = ProgressBar::hidden();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );

    let recording_presenter = presenter.clone();
    let start_spinner = spinner.clone();
    let end_spinner = spinner;

    CaptureCallbacks {
        on_recording_start: Some(Box::new(move || {
            recording_presenter.info("Starting audio recording...");
        })),
        on_transcribing_start: Some(Box::new(move || {
            start_spinner.set_draw_target(indicatif::ProgressDrawTarget::stderr());
            start_spinner.set_message("Transcribing audio...");
            start_spinner.enable_steady_tick(Duration::from_millis(80));
        })),
        on_transcribing_end: Some(Box::new(move || {
            end_spinner.finish_and_clear();
        })),
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig, presenter: &Presenter) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
