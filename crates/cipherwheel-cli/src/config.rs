//! Wheel configuration loading for the CLI.
//!
//! With `--config`, a complete [`WheelConfig`] is deserialized from a
//! TOML file; otherwise the selected built-in profile is used.

use std::fs;

use log::debug;

use cipherwheel_core::config::WheelConfig;

use crate::{
    CliError,
    args::{Args, Profile},
};

/// Resolves the wheel configuration for this invocation.
pub fn load_config(args: &Args) -> Result<WheelConfig, CliError> {
    match &args.config {
        Some(path) => {
            debug!(path; "Loading wheel configuration");
            let raw = fs::read_to_string(path)?;
            Ok(toml::from_str(&raw)?)
        }
        None => {
            debug!(profile:? = args.profile; "Using built-in profile");
            Ok(match args.profile {
                Profile::Dial => WheelConfig::dial(),
                Profile::A4 => WheelConfig::a4(),
            })
        }
    }
}
