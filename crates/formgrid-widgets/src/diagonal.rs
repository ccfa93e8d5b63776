#![forbid(unsafe_code)]

//! Secondary-diagonal painting.

use formgrid_core::color::Rgb;

use crate::grid::Grid;

/// Paint the secondary (anti-) diagonal: for a grid with `R` rows, the cell
/// at (i, R-1-i) for every row index `i`. Rows too short to contain that
/// column are skipped silently; under normal construction this never
/// triggers.
pub fn paint_secondary_diagonal(grid: &mut Grid, color: Rgb) {
    let rows = grid.rows();
    for i in 0..rows {
        let column = rows - 1 - i;
        if let Some(cell) = grid.cell_mut(i, column) {
            cell.set_background(color);
        }
    }
}
