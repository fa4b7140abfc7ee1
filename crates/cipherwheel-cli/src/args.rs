//! Command-line argument definitions for the cipherwheel CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control the output path, which
//! built-in profile to render, configuration file selection, and
//! logging verbosity.

use clap::{Parser, ValueEnum};

/// Built-in wheel profiles.
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum Profile {
    /// Single-ring dial on an auto-sized pixel canvas
    #[default]
    Dial,
    /// Three-ring disk on a fixed A4 page, in millimeters
    A4,
}

/// Command-line arguments for the cipherwheel tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output SVG file
    #[arg(short, long, default_value = "cipher_dial.svg")]
    pub output: String,

    /// Built-in wheel profile to render when no config file is given
    #[arg(short, long, value_enum, default_value_t = Profile::Dial)]
    pub profile: Profile,

    /// Path to a wheel configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
