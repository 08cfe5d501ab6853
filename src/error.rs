//! Error types for torviz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in torviz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A model parameter violated its precondition (e.g. zero step counts).
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// The offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// The raster grid could not be (re)allocated.
    #[error("failed to allocate raster grid of {cells} cells")]
    Allocation {
        /// Requested cell count.
        cells: usize,
    },

    /// The terminal is too small to fit the grid with minimum padding.
    /// Recoverable: skip the frame and retry after a resize.
    #[error("terminal {width}x{height} too small for {need_width}x{need_height}")]
    TermTooSmall {
        /// Current terminal width in character cells.
        width: u16,
        /// Current terminal height in character cells.
        height: u16,
        /// Required width including minimum padding. Wider than `u16`:
        /// pathological padding values must report, not wrap.
        need_width: u32,
        /// Required height including minimum padding.
        need_height: u32,
    },

    /// A row or cell index was out of bounds. Programmer error.
    #[error("index {index} out of range (length {len})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The valid length.
        len: usize,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: &'static str,
        /// Why the value is invalid.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Terminal initialization, drawing, or restoration error.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
