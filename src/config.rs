//! Configuration for the torus renderer.
//!
//! YAML configuration with every field defaulted, so an absent or partial
//! file still yields a runnable setup.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use std::time::Duration;

/// Renderer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Distance from the revolution axis to the tube center (R).
    #[serde(default = "default_major_radius")]
    pub major_radius: f64,

    /// Tube radius (r).
    #[serde(default = "default_minor_radius")]
    pub minor_radius: f64,

    /// Samples around the revolution axis (φ).
    #[serde(default = "default_major_steps")]
    pub major_steps: u32,

    /// Samples around the tube cross-section (θ).
    #[serde(default = "default_minor_steps")]
    pub minor_steps: u32,

    /// Rotation about X per integration step, radians.
    #[serde(default = "default_x_step_angle")]
    pub x_step_angle: f64,

    /// Rotation about Y per integration step, radians.
    #[serde(default = "default_y_step_angle")]
    pub y_step_angle: f64,

    /// Rotation about Z per integration step, radians.
    #[serde(default = "default_z_step_angle")]
    pub z_step_angle: f64,

    /// Logical window width, in the same units as the radii. Only the
    /// ratio to the radii matters for visual scale.
    #[serde(default = "default_window_width")]
    pub window_width: f64,

    /// Logical window height.
    #[serde(default = "default_window_height")]
    pub window_height: f64,

    /// Fixed integration delta in milliseconds.
    #[serde(default = "default_step_ms")]
    pub step_ms: f64,

    /// Minimum interval between rendered frames, milliseconds.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,

    /// Minimum horizontal padding around the grid, columns.
    #[serde(default = "default_min_h_pad")]
    pub min_h_pad: u16,

    /// Minimum vertical padding around the grid, rows.
    #[serde(default = "default_min_v_pad")]
    pub min_v_pad: u16,
}

fn default_major_radius() -> f64 {
    2.0
}
fn default_minor_radius() -> f64 {
    0.8
}
fn default_major_steps() -> u32 {
    96
}
fn default_minor_steps() -> u32 {
    48
}
fn default_x_step_angle() -> f64 {
    0.010
}
fn default_y_step_angle() -> f64 {
    0.007
}
fn default_z_step_angle() -> f64 {
    0.004
}
fn default_window_width() -> f64 {
    7.0
}
fn default_window_height() -> f64 {
    7.0
}
fn default_step_ms() -> f64 {
    10.0
}
fn default_frame_ms() -> u64 {
    16
}
fn default_min_h_pad() -> u16 {
    1
}
fn default_min_v_pad() -> u16 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            major_radius: default_major_radius(),
            minor_radius: default_minor_radius(),
            major_steps: default_major_steps(),
            minor_steps: default_minor_steps(),
            x_step_angle: default_x_step_angle(),
            y_step_angle: default_y_step_angle(),
            z_step_angle: default_z_step_angle(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            step_ms: default_step_ms(),
            frame_ms: default_frame_ms(),
            min_h_pad: default_min_h_pad(),
            min_v_pad: default_min_v_pad(),
        }
    }
}

impl Config {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] when the file does not exist,
    /// [`Error::Terminal`] for other I/O failures (permissions, encoding),
    /// or a parse/validation error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::ConfigNotFound(path.display().to_string())
            } else {
                Error::Terminal(e)
            }
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or a
    /// [`Error::ConfigInvalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would break the pipeline downstream.
    pub fn validate(&self) -> Result<()> {
        if self.major_steps == 0 {
            return Err(Error::ConfigInvalid {
                key: "major_steps",
                message: "must be at least 1".to_string(),
            });
        }
        if self.minor_steps == 0 {
            return Err(Error::ConfigInvalid {
                key: "minor_steps",
                message: "must be at least 1".to_string(),
            });
        }
        for (key, value) in [
            ("major_radius", self.major_radius),
            ("minor_radius", self.minor_radius),
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("step_ms", self.step_ms),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::ConfigInvalid {
                    key,
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the minimum frame interval as a Duration.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
