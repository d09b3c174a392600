//! voxclip - speech-to-text capture CLI
//!
//! This crate provides the core functionality for recording audio from the
//! microphone, transcribing it with a whisper.cpp binary, and delivering
//! the text to the clipboard or a timestamped file.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core value objects, entities, and errors
//! - **Application**: The capture use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (cpal, whisper.cpp, clipboard tools, config file)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
