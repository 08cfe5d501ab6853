//! Frame stepper: advances the rotating torus one tick.
//!
//! Owns the point cloud and raster grid for their whole lifetime; the
//! render loop only borrows rows out of it. Rotation is integrated against
//! wall-clock time so animation speed does not depend on frame rate.

use crate::cloud::PointCloud;
use crate::config::Config;
use crate::error::Result;
use crate::raster::RasterGrid;

/// The complete simulation state for one rotating torus.
#[derive(Debug)]
pub struct Simulation {
    cloud: PointCloud,
    grid: RasterGrid,
    /// Per-axis rotation per integration step, radians.
    step_angles: [f64; 3],
    /// Fixed integration delta, milliseconds.
    step_ms: f64,
}

impl Simulation {
    /// Build a simulation from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidParameter`] for zero step counts.
    pub fn new(config: &Config) -> Result<Self> {
        let cloud = PointCloud::generate(
            config.major_radius,
            config.major_steps,
            config.minor_radius,
            config.minor_steps,
        )?;
        let grid = RasterGrid::new(config.window_width, config.window_height);
        Ok(Self {
            cloud,
            grid,
            step_angles: [config.x_step_angle, config.y_step_angle, config.z_step_angle],
            step_ms: config.step_ms,
        })
    }

    /// Advance the simulation by `elapsed_ms` of wall-clock time.
    ///
    /// Scales the per-step angles by `elapsed_ms / step_ms`, then runs the
    /// fixed pipeline: rotate, rasterize depth, map depth to glyphs.
    /// Skipping or reordering the stages would desync the glyph plane from
    /// the rotated geometry.
    pub fn step(&mut self, elapsed_ms: f64) {
        let n_steps = elapsed_ms / self.step_ms;
        self.cloud.rotate(
            self.step_angles[0] * n_steps,
            self.step_angles[1] * n_steps,
            self.step_angles[2] * n_steps,
        );
        self.grid.calculate_cell_depth(&self.cloud);
        self.grid.calculate_cell_chars(self.cloud.z_extent());
    }

    /// The raster grid, for row reads and layout decisions.
    #[must_use]
    pub const fn grid(&self) -> &RasterGrid {
        &self.grid
    }

    /// Mutable raster grid, for window/cell resizes.
    pub fn grid_mut(&mut self) -> &mut RasterGrid {
        &mut self.grid
    }

    /// The point cloud.
    #[must_use]
    pub const fn cloud(&self) -> &PointCloud {
        &self.cloud
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{BLANK, GLYPH_RAMP};
    use approx::assert_abs_diff_eq;

    fn sim() -> Simulation {
        let mut sim = Simulation::new(&Config::default()).unwrap();
        sim.grid_mut().set_window_cells(30, 10).unwrap();
        sim
    }

    #[test]
    fn test_step_scales_rotation_by_elapsed_time() {
        let config = Config::default();
        let mut fast = Simulation::new(&config).unwrap();

        // A 40ms tick at step_ms=10 applies each axis angle scaled by 4.
        fast.step(40.0);

        let mut expected = PointCloud::generate(
            config.major_radius,
            config.major_steps,
            config.minor_radius,
            config.minor_steps,
        )
        .unwrap();
        let n = 40.0 / config.step_ms;
        expected.rotate(
            config.x_step_angle * n,
            config.y_step_angle * n,
            config.z_step_angle * n,
        );
        for (p, q) in fast.cloud().points().iter().zip(expected.points()) {
            assert_abs_diff_eq!(p.x, q.x, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, q.y, epsilon = 1e-9);
            assert_abs_diff_eq!(p.z, q.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_step_zero_elapsed_keeps_geometry() {
        let mut sim = sim();
        let before = sim.cloud().points().to_vec();
        sim.step(0.0);
        for (p, q) in sim.cloud().points().iter().zip(&before) {
            assert_abs_diff_eq!(p.x, q.x, epsilon = 1e-12);
            assert_abs_diff_eq!(p.y, q.y, epsilon = 1e-12);
            assert_abs_diff_eq!(p.z, q.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_step_fills_glyph_plane() {
        let mut sim = sim();
        sim.step(16.0);
        let mut lit = 0usize;
        for row in 0..sim.grid().cells_y() {
            for &c in sim.grid().row(row).unwrap() {
                assert!(c == BLANK || GLYPH_RAMP.contains(&c));
                if c != BLANK {
                    lit += 1;
                }
            }
        }
        assert!(lit > 0, "a centered torus must light some cells");
    }

    #[test]
    fn test_point_count_stable_across_steps() {
        let mut sim = sim();
        let count = sim.cloud().len();
        for _ in 0..50 {
            sim.step(16.0);
        }
        assert_eq!(sim.cloud().len(), count);
    }
}
