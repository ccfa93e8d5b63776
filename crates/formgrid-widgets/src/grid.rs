#![forbid(unsafe_code)]

//! Interactive grid of serial-numbered cells.
//!
//! The grid is built once, row-major, and lives for the page's lifetime;
//! only cell backgrounds change afterwards. Exactly one cell — the one
//! whose serial number equals the configured distinguished serial — carries
//! the interactive behaviors (hover, click, double click). Events landing
//! on any other cell are ignored.

use formgrid_core::color::Rgb;
use formgrid_core::event::EventOutcome;
use rand::Rng;

use crate::diagonal;

/// Serial number of the cell that carries the interactive behaviors.
pub const DISTINGUISHED_SERIAL: u32 = 4;

/// Grid shape and the distinguished-cell selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Serial number of the distinguished cell.
    pub distinguished_serial: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 6,
            distinguished_serial: DISTINGUISHED_SERIAL,
        }
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    row: usize,
    column: usize,
    serial: u32,
    distinguished: bool,
    background: Option<Rgb>,
}

impl GridCell {
    /// Row index (0-based).
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column index (0-based).
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// (row, column) pair.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Displayed serial number (`row * columns + column + 1`).
    #[must_use]
    pub const fn serial(&self) -> u32 {
        self.serial
    }

    /// Whether this is the distinguished cell.
    #[must_use]
    pub const fn is_distinguished(&self) -> bool {
        self.distinguished
    }

    /// Current background, `None` meaning the page default.
    #[must_use]
    pub const fn background(&self) -> Option<Rgb> {
        self.background
    }

    /// Set the background color.
    pub fn set_background(&mut self, color: Rgb) {
        self.background = Some(color);
    }
}

/// Row-major grid of cells.
#[derive(Debug, Clone)]
pub struct Grid {
    config: GridConfig,
    rows: Vec<Vec<GridCell>>,
}

impl Grid {
    /// Build the grid: serials assigned 1.. in row-major order, the
    /// distinguished flag set on the cell whose serial matches the config.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        let mut rows = Vec::with_capacity(config.rows);
        for i in 0..config.rows {
            let mut row = Vec::with_capacity(config.columns);
            for j in 0..config.columns {
                let serial = (i * config.columns + j + 1) as u32;
                row.push(GridCell {
                    row: i,
                    column: j,
                    serial,
                    distinguished: serial == config.distinguished_serial,
                    background: None,
                });
            }
            rows.push(row);
        }
        Self { config, rows }
    }

    /// The configuration the grid was built from.
    #[must_use]
    pub const fn config(&self) -> GridConfig {
        self.config
    }

    /// Number of rows actually present.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Configured number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.config.columns
    }

    /// The cell at (row, column), if present.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&GridCell> {
        self.rows.get(row)?.get(column)
    }

    /// Mutable access to the cell at (row, column), if present.
    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut GridCell> {
        self.rows.get_mut(row)?.get_mut(column)
    }

    /// Look a cell up by its serial number.
    #[must_use]
    pub fn cell_by_serial(&self, serial: u32) -> Option<&GridCell> {
        self.cells().find(|cell| cell.serial == serial)
    }

    /// The distinguished cell, if the configured serial is in range.
    #[must_use]
    pub fn distinguished(&self) -> Option<&GridCell> {
        self.cells().find(|cell| cell.distinguished)
    }

    /// Iterate all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    #[cfg(test)]
    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<GridCell>> {
        &mut self.rows
    }

    // --- Behaviors (distinguished cell only) ---

    /// Hover: recolor with a fresh random color on every enter event.
    pub fn hover(&mut self, row: usize, column: usize, rng: &mut impl Rng) -> EventOutcome {
        if let Some(cell) = self.cell_mut(row, column) {
            if cell.distinguished {
                let color = Rgb::random(rng);
                cell.background = Some(color);
                tracing::trace!(serial = cell.serial, color = %color, "hover recolor");
            }
        }
        EventOutcome::ignored()
    }

    /// Primary click: paint with the currently picked color.
    pub fn click(&mut self, row: usize, column: usize, picker: Rgb) -> EventOutcome {
        if let Some(cell) = self.cell_mut(row, column) {
            if cell.distinguished {
                cell.background = Some(picker);
                tracing::trace!(serial = cell.serial, color = %picker, "click recolor");
            }
        }
        EventOutcome::ignored()
    }

    /// Double click: paint the secondary diagonal with the picked color
    /// while keeping the distinguished cell's own background, even when the
    /// cell lies on the diagonal. Suppresses the default double-click
    /// action and stops the event from bubbling further.
    pub fn double_click(&mut self, row: usize, column: usize, picker: Rgb) -> EventOutcome {
        let saved = match self.cell(row, column) {
            Some(cell) if cell.distinguished => cell.background,
            _ => return EventOutcome::ignored(),
        };

        diagonal::paint_secondary_diagonal(self, picker);
        if let Some(cell) = self.cell_mut(row, column) {
            cell.background = saved;
        }
        tracing::debug!(color = %picker, "secondary diagonal painted");
        EventOutcome::PREVENT_DEFAULT | EventOutcome::STOP_PROPAGATION
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
