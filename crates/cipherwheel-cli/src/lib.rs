//! CLI logic for the cipherwheel tool.

mod args;
mod config;

pub use args::{Args, Profile};

use std::io;

use log::info;
use miette::Diagnostic;
use thiserror::Error;

use cipherwheel_core::export::Svg;

/// Errors surfaced by the CLI layer.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse configuration file: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error(transparent)]
    Wheel(#[from] cipherwheel_core::Error),
}

/// Run the cipherwheel CLI application.
///
/// Resolves the wheel configuration (built-in profile or TOML file),
/// renders the SVG document, and writes it to the output file.
///
/// # Errors
///
/// Returns [`CliError`] for:
/// - Configuration file I/O or parse errors
/// - Configuration validation errors
/// - Output file I/O errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(output_path = args.output; "Rendering cipher wheel");

    let wheel_config = config::load_config(args)?;
    let doc = cipherwheel_core::render(&wheel_config)?;
    Svg::new(&args.output).write_document(&doc)?;

    info!(output_file = args.output; "SVG exported successfully");
    println!("Wrote {}", args.output);

    Ok(())
}
