//! Error types shared across the conversion pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the conversion pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not exist or cannot be read.
    #[error("cannot read {path}: {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input bytes do not decode as any recognized image encoding.
    #[error("{path} is not a supported image format: {source}")]
    UnsupportedFormat {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The decoded image has a degenerate shape (e.g. zero height).
    #[error("invalid image: {reason}")]
    InvalidImage { reason: String },

    /// A caller-supplied parameter is malformed or out of range.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A luminance bucket resolved to no palette character. The palette
    /// covers every bucket by construction, so this is an internal invariant
    /// breach surfaced as an error rather than a panic.
    #[error("no palette character defined for bucket {bucket}")]
    PaletteGap { bucket: u8 },

    /// Failed to write the output file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
