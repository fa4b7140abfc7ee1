//! Cipherwheel Core
//!
//! Layout and SVG rendering for printable cipher-wheel disks:
//! concentric annular rings, each divided into equal angular sectors
//! holding one character per sector, forming a rotatable
//! substitution-cipher disk.
//!
//! - **Geometry**: polar projection onto the SVG plane ([`geometry`])
//! - **Layout**: ring partitioning and annulus-sector outlines
//!   ([`layout`])
//! - **Glyphs**: per-character anchors, rotation, and the small-glyph
//!   exception ([`glyph`])
//! - **Notch**: the decorative home-position marker ([`notch`])
//! - **Composition**: rings to ordered SVG elements ([`compose`])
//! - **Export**: document envelope and file sink ([`export`])
//!
//! # Quick Start
//!
//! ```no_run
//! use cipherwheel_core::{config::WheelConfig, export::Svg, render};
//!
//! let config = WheelConfig::dial();
//! let doc = render(&config).expect("valid built-in config");
//! Svg::new("cipher_dial.svg").write_document(&doc).unwrap();
//! ```

pub mod compose;
pub mod config;
pub mod export;
pub mod geometry;
pub mod glyph;
pub mod layout;
pub mod notch;

mod error;

pub use error::Error;

use svg::Document;

/// Renders a wheel configuration into a complete SVG document.
///
/// Validates the configuration, composes the ring elements, and wraps
/// them in the document envelope for the configured canvas.
///
/// # Errors
///
/// Returns any validation error from
/// [`WheelConfig::validate`](config::WheelConfig::validate).
pub fn render(config: &config::WheelConfig) -> Result<Document, Error> {
    let elements = compose::compose(config)?;
    Ok(export::assemble(config, elements))
}
