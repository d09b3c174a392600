//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::transcription::ModelSize;

/// voxclip - speech-to-text capture using whisper.cpp
#[derive(Parser, Debug)]
#[command(name = "voxclip")]
#[command(version = "1.0.0")]
#[command(about = "Record speech, transcribe it with whisper.cpp, copy the text")]
#[command(long_about = None)]
pub struct Cli {
    /// Save to file and print to stdout instead of copying to clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Language code for transcription (e.g. en, pt, es)
    #[arg(short = 'l', long, value_name = "CODE", env = "VOXCLIP_LANG")]
    pub lang: Option<String>,

    /// Whisper model size
    #[arg(short = 'm', long, value_name = "SIZE")]
    pub model: Option<ModelArg>,

    /// Output directory for transcript files
    #[arg(short = 'o', long, value_name = "DIR", env = "VOXCLIP_OUTPUT_DIR")]
    pub output_dir: Option<String>,

    /// Audio sample rate in Hz
    #[arg(long, value_name = "HZ")]
    pub sample_rate: Option<u32>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Model argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    Tiny,
    Base,
    Small,
    Medium,
    Large,
}

impl From<ModelArg> for ModelSize {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Tiny => ModelSize::Tiny,
            ModelArg::Base => ModelSize::Base,
            ModelArg::Small => ModelSize::Small,
            ModelArg::Medium => ModelSize::Medium,
            ModelArg::Large => ModelSize::Large,
        }
    }
}

impl From<ModelSize> for ModelArg {
    fn from(size: ModelSize) -> Self {
        match size {
            ModelSize::Tiny => ModelArg::Tiny,
            ModelSize::Base => ModelArg::Base,
            ModelSize::Small => ModelArg::Small,
            ModelSize::Medium => ModelArg::Medium,
            ModelSize::Large => ModelArg::Large,
        }
    }
}

/// Resolved capture options
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    pub lang: String,
    pub model: ModelSize,
    pub output_dir: PathBuf,
    pub sample_rate: u32,
    pub clipboard: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] =
    &["lang", "model", "output_dir", "sample_rate", "clipboard"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["voxclip"]);
        assert!(!cli.no_clipboard);
        assert!(cli.model.is_none());
        assert!(cli.sample_rate.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_no_clipboard() {
        let cli = Cli::parse_from(["voxclip", "--no-clipboard"]);
        assert!(cli.no_clipboard);
    }

    #[test]
    fn cli_parses_lang() {
        let cli = Cli::parse_from(["voxclip", "--lang", "pt"]);
        assert_eq!(cli.lang, Some("pt".to_string()));
    }

    #[test]
    fn cli_parses_model() {
        let cli = Cli::parse_from(["voxclip", "-m", "small"]);
        assert_eq!(cli.model, Some(ModelArg::Small));
    }

    #[test]
    fn cli_parses_output_dir_and_sample_rate() {
        let cli = Cli::parse_from(["voxclip", "-o", "/tmp/out", "--sample-rate", "44100"]);
        assert_eq!(cli.output_dir, Some("/tmp/out".to_string()));
        assert_eq!(cli.sample_rate, Some(44_100));
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["voxclip", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["voxclip", "config", "set", "lang", "pt"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "lang");
            assert_eq!(value, "pt");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn model_arg_converts_to_model_size() {
        assert_eq!(ModelSize::from(ModelArg::Tiny), ModelSize::Tiny);
        assert_eq!(ModelSize::from(ModelArg::Large), ModelSize::Large);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("lang"));
        assert!(is_valid_config_key("model"));
        assert!(is_valid_config_key("sample_rate"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
