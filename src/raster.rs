//! Depth-buffered character raster.
//!
//! Projects a point cloud orthographically into a row-major cell grid,
//! keeping the nearest-to-viewer (maximum z) sample per cell, then maps
//! depths onto a fixed brightness ramp of glyphs. The depth and glyph
//! planes always have identical length and are resized together.

use crate::cloud::PointCloud;
use crate::error::{Error, Result};

/// Brightness ramp from dim to bright (12 levels).
///
/// Depth buckets index into this ramp; cells no point landed in render as
/// [`BLANK`].
pub const GLYPH_RAMP: &[char] = &['.', '"', '+', '=', '*', 'i', 'l', 'a', 'p', 'b', '&', '@'];

/// Background glyph for cells with no projected sample.
pub const BLANK: char = ' ';

/// A 2D grid of depth-resolved display glyphs.
///
/// The grid maps a logical window of `window_width x window_height` world
/// units onto `cells_x x cells_y` character cells. The window extent is a
/// ratio knob: only its proportion to the torus radii affects the picture.
#[derive(Debug, Clone)]
pub struct RasterGrid {
    window_width: f64,
    window_height: f64,
    cells_x: usize,
    cells_y: usize,
    /// Best (maximum) z per cell this frame; `-inf` where nothing landed.
    depth: Vec<f64>,
    glyphs: Vec<char>,
    resizes: u64,
}

impl RasterGrid {
    /// Create a grid with no cells. Call [`RasterGrid::set_window_cells`]
    /// before rasterizing.
    #[must_use]
    pub fn new(window_width: f64, window_height: f64) -> Self {
        Self {
            window_width,
            window_height,
            cells_x: 0,
            cells_y: 0,
            depth: Vec::new(),
            glyphs: Vec::new(),
            resizes: 0,
        }
    }

    /// Set the logical extent the grid maps onto. No allocation.
    pub fn set_window_size(&mut self, width: f64, height: f64) {
        self.window_width = width;
        self.window_height = height;
    }

    /// Resize the cell grid.
    ///
    /// No-op when both dimensions already match, preserving existing cell
    /// content. Otherwise both planes are reallocated to
    /// `cells_x * cells_y` entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the planes cannot be allocated.
    pub fn set_window_cells(&mut self, cells_x: usize, cells_y: usize) -> Result<()> {
        if cells_x == self.cells_x && cells_y == self.cells_y {
            return Ok(());
        }

        let cells = cells_x * cells_y;
        let mut depth = Vec::new();
        let mut glyphs = Vec::new();
        depth
            .try_reserve_exact(cells)
            .map_err(|_| Error::Allocation { cells })?;
        glyphs
            .try_reserve_exact(cells)
            .map_err(|_| Error::Allocation { cells })?;
        depth.resize(cells, f64::NEG_INFINITY);
        glyphs.resize(cells, BLANK);

        self.cells_x = cells_x;
        self.cells_y = cells_y;
        self.depth = depth;
        self.glyphs = glyphs;
        self.resizes += 1;
        Ok(())
    }

    /// Rasterize the cloud into the depth plane.
    ///
    /// Every cell is reset to `-inf`, then each point is translated into
    /// window space (`x + w/2`, `h/2 - y`; the vertical axis flips because
    /// screen rows grow downward) and bucketed into a cell. Points outside
    /// the window are silently culled, like a viewport clip. Each cell
    /// keeps the maximum z seen, i.e. the sample nearest the viewer.
    pub fn calculate_cell_depth(&mut self, cloud: &PointCloud) {
        self.depth.fill(f64::NEG_INFINITY);
        if self.cells_x == 0 || self.cells_y == 0 {
            return;
        }

        let cell_width = self.window_width / self.cells_x as f64;
        let cell_height = self.window_height / self.cells_y as f64;

        for p in cloud.points() {
            let wx = p.x + self.window_width / 2.0;
            let wy = self.window_height / 2.0 - p.y;
            if wx < 0.0 || wy < 0.0 {
                continue;
            }
            let cx = (wx / cell_width) as usize;
            let cy = (wy / cell_height) as usize;
            if cx >= self.cells_x || cy >= self.cells_y {
                continue;
            }
            let idx = cy * self.cells_x + cx;
            if p.z > self.depth[idx] {
                self.depth[idx] = p.z;
            }
        }
    }

    /// Map each cell's depth to a ramp glyph.
    ///
    /// `z_range` is the span of representable depth, centered on zero
    /// (for a torus, `2R + 2r`). Cells still at `-inf` render as [`BLANK`];
    /// depths whose bucket falls outside the ramp also render as [`BLANK`]
    /// so a frame never leaks glyphs from the previous one.
    pub fn calculate_cell_chars(&mut self, z_range: f64) {
        let step = z_range / GLYPH_RAMP.len() as f64;
        for (glyph, &z) in self.glyphs.iter_mut().zip(&self.depth) {
            *glyph = if z.is_finite() && step > 0.0 {
                let bucket = ((z + z_range / 2.0) / step).floor();
                if bucket >= 0.0 && (bucket as usize) < GLYPH_RAMP.len() {
                    GLYPH_RAMP[bucket as usize]
                } else {
                    BLANK
                }
            } else {
                BLANK
            };
        }
    }

    /// One row of the glyph plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `row >= cells_y`.
    pub fn row(&self, row: usize) -> Result<&[char]> {
        debug_assert!(row < self.cells_y, "row {row} out of range {}", self.cells_y);
        if row >= self.cells_y {
            return Err(Error::IndexOutOfRange {
                index: row,
                len: self.cells_y,
            });
        }
        let start = row * self.cells_x;
        Ok(&self.glyphs[start..start + self.cells_x])
    }

    /// Horizontal cell count.
    #[must_use]
    pub const fn cells_x(&self) -> usize {
        self.cells_x
    }

    /// Vertical cell count.
    #[must_use]
    pub const fn cells_y(&self) -> usize {
        self.cells_y
    }

    /// Logical window extent `(width, height)`.
    #[must_use]
    pub const fn window_size(&self) -> (f64, f64) {
        (self.window_width, self.window_height)
    }

    /// Number of reallocations performed so far. The no-op fast path of
    /// [`RasterGrid::set_window_cells`] leaves this unchanged.
    #[must_use]
    pub const fn resize_count(&self) -> u64 {
        self.resizes
    }

    /// The depth plane, row-major.
    #[must_use]
    pub fn depths(&self) -> &[f64] {
        &self.depth
    }
}
