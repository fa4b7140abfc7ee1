//! Error types for cipher-wheel generation.

use std::io;

use thiserror::Error;

/// The main error type for cipher-wheel operations.
///
/// Configuration problems are reported before any output is produced;
/// the only error that can occur after composition starts is an I/O
/// failure at the output sink, which never leaves a partial file
/// behind silently.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(
        "ring {ordinal} is wider than the remaining radius: inner radius would be {inner_radius:.3}"
    )]
    RingTooWide { ordinal: usize, inner_radius: f64 },

    #[error(
        "ring {ordinal} holds a single character; its sector would span the full circle, \
         which the arc outline cannot represent"
    )]
    SingleCharRing { ordinal: usize },

    #[error("character {ch:?} (U+{code:04X}) is outside Latin-1 and cannot be placed on a ring")]
    CharOutOfRange { ch: char, code: u32 },
}
