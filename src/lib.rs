//! # torviz
//!
//! Depth-buffered ASCII torus renderer for the terminal.
//!
//! Samples a torus surface into a 3D point cloud, rotates it every frame,
//! projects it orthographically into a character grid with a per-cell
//! z-buffer, and draws the grid centered in a raw-mode terminal. The
//! result is the classic spinning-donut illusion, driven by a
//! frame-rate-independent stepper.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use torviz::prelude::*;
//!
//! # fn main() -> torviz::Result<()> {
//! let config = Config::default();
//! let mut app = App::new(config)?;
//! app.run()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! Each frame runs, in fixed order: rotate the cloud (X → Y → Z), rasterize
//! depths (nearest sample wins per cell), map depths onto the brightness
//! ramp, draw rows. Layout against the current terminal size is recomputed
//! every frame so resizes take effect immediately.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Torus point cloud generation and rotation.
pub mod cloud;

/// Depth-buffered character raster.
pub mod raster;

/// Terminal layout: centering and grid fitting.
pub mod layout;

/// Frame stepper tying cloud and raster together.
pub mod sim;

// ============================================================================
// Plumbing Modules
// ============================================================================

/// Configuration loading and validation.
pub mod config;

/// Key event handling.
pub mod input;

/// Render loop and terminal session.
pub mod app;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for torviz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust,ignore
/// use torviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::App;
    pub use crate::cloud::{Point3, PointCloud};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::layout::{self, Padding};
    pub use crate::raster::{RasterGrid, BLANK, GLYPH_RAMP};
    pub use crate::sim::Simulation;
}
