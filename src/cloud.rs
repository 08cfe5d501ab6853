//! Torus point cloud: parametric surface sampling and in-place rotation.
//!
//! The cloud is generated once from the four torus parameters and mutated
//! every frame by [`PointCloud::rotate`]; its point count never changes.

use crate::error::{Error, Result};
use std::f64::consts::TAU;

/// A 3D point with double-precision coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate (toward the viewer when positive).
    pub z: f64,
}

impl Point3 {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// An ordered collection of points sampling a torus surface.
///
/// Sampling order is outer loop over the revolution angle φ
/// (`major_steps` samples), inner loop over the tube angle θ
/// (`minor_steps` samples). The order is stable after generation.
#[derive(Debug, Clone)]
pub struct PointCloud {
    points: Vec<Point3>,
    major_radius: f64,
    minor_radius: f64,
}

impl PointCloud {
    /// Sample a torus surface into a point cloud.
    ///
    /// `major_radius` (R) is the distance from the revolution axis to the
    /// tube center; `minor_radius` (r) is the tube radius. Produces exactly
    /// `major_steps * minor_steps` points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either step count is zero,
    /// which would make the angular step size undefined.
    pub fn generate(
        major_radius: f64,
        major_steps: u32,
        minor_radius: f64,
        minor_steps: u32,
    ) -> Result<Self> {
        if major_steps == 0 {
            return Err(Error::InvalidParameter {
                name: "major_steps",
                message: "must be at least 1".to_string(),
            });
        }
        if minor_steps == 0 {
            return Err(Error::InvalidParameter {
                name: "minor_steps",
                message: "must be at least 1".to_string(),
            });
        }

        let d_phi = TAU / f64::from(major_steps);
        let d_theta = TAU / f64::from(minor_steps);

        let mut points = Vec::with_capacity(major_steps as usize * minor_steps as usize);
        for phi_i in 0..major_steps {
            let phi = f64::from(phi_i) * d_phi;
            let (sin_phi, cos_phi) = phi.sin_cos();
            for theta_i in 0..minor_steps {
                let theta = f64::from(theta_i) * d_theta;
                let ring = major_radius + minor_radius * theta.sin();
                points.push(Point3::new(
                    ring * cos_phi,
                    ring * sin_phi,
                    minor_radius * theta.cos(),
                ));
            }
        }

        Ok(Self {
            points,
            major_radius,
            minor_radius,
        })
    }

    /// Rotate every point in place, about the X axis, then Y, then Z.
    ///
    /// The axis order is a fixed contract: the three 2D rotations do not
    /// commute, and all consumers (and tests) assume X → Y → Z.
    pub fn rotate(&mut self, x_angle: f64, y_angle: f64, z_angle: f64) {
        let (sin_a, cos_a) = x_angle.sin_cos();
        let (sin_b, cos_b) = y_angle.sin_cos();
        let (sin_g, cos_g) = z_angle.sin_cos();

        for p in &mut self.points {
            // About X: rotates (y, z).
            let y = p.y * cos_a - p.z * sin_a;
            let z = p.y * sin_a + p.z * cos_a;
            p.y = y;
            p.z = z;

            // About Y: rotates (z, x).
            let z = p.z * cos_b - p.x * sin_b;
            let x = p.z * sin_b + p.x * cos_b;
            p.z = z;
            p.x = x;

            // About Z: rotates (x, y).
            let x = p.x * cos_g - p.y * sin_g;
            let y = p.x * sin_g + p.y * cos_g;
            p.x = x;
            p.y = y;
        }
    }

    /// The points, in generation order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Number of points (`major_steps * minor_steps`, fixed after generation).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cloud is empty. Only possible via [`PointCloud::empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The major radius (R).
    #[must_use]
    pub const fn major_radius(&self) -> f64 {
        self.major_radius
    }

    /// The minor radius (r).
    #[must_use]
    pub const fn minor_radius(&self) -> f64 {
        self.minor_radius
    }

    /// Range of representable depth: `2R + 2r`, centered on zero.
    #[must_use]
    pub fn z_extent(&self) -> f64 {
        2.0 * self.major_radius + 2.0 * self.minor_radius
    }

    /// An empty cloud. Useful for rasterizer tests; never produced by
    /// [`PointCloud::generate`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            major_radius: 0.0,
            minor_radius: 0.0,
        }
    }
}
