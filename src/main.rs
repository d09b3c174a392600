//! voxclip CLI entry point

use std::process::ExitCode;

use clap::Parser;

use voxclip::cli::{
    app::{load_merged_config, run_capture, EXIT_ERROR},
    args::{CaptureOptions, Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use voxclip::domain::config::AppConfig;
use voxclip::domain::transcription::ModelSize;
use voxclip::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        lang: cli.lang.clone(),
        model: cli.model.map(|m| ModelSize::from(m).to_string()),
        output_dir: cli.output_dir.clone(),
        sample_rate: cli.sample_rate,
        clipboard: if cli.no_clipboard { Some(false) } else { None },
    };

    // Merge config: defaults < file < cli
    let config = load_merged_config(cli_config, &presenter).await;

    let options = CaptureOptions {
        lang: config.lang_or_default(),
        model: config.model_or_default(),
        output_dir: config.output_dir_or_default(),
        sample_rate: config.sample_rate_or_default(),
        clipboard: config.clipboard_or_default(),
    };

    run_capture(options).await
}
