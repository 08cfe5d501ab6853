//! Terminal layout: centering a cell grid and fitting one to the screen.
//!
//! Pure functions over character-cell dimensions; recomputed every frame
//! because the terminal can resize at any time.

use crate::error::{Error, Result};

/// Horizontal:vertical cell aspect used when deriving grid dimensions from
/// a terminal size. Terminal cells are roughly twice as tall as wide, so a
/// wide ratio keeps the torus round on screen.
pub const CELL_ASPECT: u16 = 3;

/// Padding that centers a grid inside the terminal.
///
/// Asymmetric by at most one cell when the leftover space is odd, favoring
/// the left/top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    /// Rows above the grid.
    pub top: u16,
    /// Rows below the grid.
    pub bottom: u16,
    /// Columns left of the grid.
    pub left: u16,
    /// Columns right of the grid.
    pub right: u16,
}

/// Center a `grid_width x grid_height` cell grid in the terminal.
///
/// # Errors
///
/// Returns [`Error::TermTooSmall`] when the grid plus twice the minimum
/// padding exceeds the terminal on either axis. Recoverable: retry after
/// the user resizes.
pub fn center(
    term_width: u16,
    term_height: u16,
    min_h_pad: u16,
    min_v_pad: u16,
    grid_width: u16,
    grid_height: u16,
) -> Result<Padding> {
    // Widened arithmetic: `2 * pad + grid` can exceed u16 for
    // config-supplied pads, and that case must report TermTooSmall, not
    // overflow.
    let need_width = 2 * u32::from(min_h_pad) + u32::from(grid_width);
    let need_height = 2 * u32::from(min_v_pad) + u32::from(grid_height);
    if need_width > u32::from(term_width) || need_height > u32::from(term_height) {
        return Err(Error::TermTooSmall {
            width: term_width,
            height: term_height,
            need_width,
            need_height,
        });
    }

    let left = (term_width - grid_width) / 2;
    let top = (term_height - grid_height) / 2;
    Ok(Padding {
        top,
        bottom: term_height - top - grid_height,
        left,
        right: term_width - left - grid_width,
    })
}

/// Derive grid cell counts from the terminal size at a fixed
/// [`CELL_ASPECT`]:1 ratio, leaving room for the minimum padding.
///
/// Maximizes cells along whichever axis binds first. Returns `(0, 0)` when
/// nothing fits; the caller renders a too-small notice instead of a grid.
#[must_use]
pub fn fit_cells(term_width: u16, term_height: u16, min_h_pad: u16, min_v_pad: u16) -> (u16, u16) {
    // Same widening as `center`: doubling a u16 pad must not overflow.
    let avail_w = u32::from(term_width).saturating_sub(2 * u32::from(min_h_pad));
    let avail_h = u32::from(term_height).saturating_sub(2 * u32::from(min_v_pad));

    let cells_y = avail_h.min(avail_w / u32::from(CELL_ASPECT));
    if cells_y == 0 {
        return (0, 0);
    }
    // Both fit in u16: bounded by the terminal dimensions.
    ((cells_y * u32::from(CELL_ASPECT)) as u16, cells_y as u16)
}
