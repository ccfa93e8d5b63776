#![forbid(unsafe_code)]

//! Page wiring: routes events on named entities to the form and the grid.
//!
//! The form and the grid are independent; the page only holds them side by
//! side and routes (target, event) pairs the way the original page wired
//! its listeners. Pairs nothing listens for return the ignored outcome —
//! never a panic, never an error.

use formgrid_core::color::Rgb;
use formgrid_core::event::{Event, EventOutcome, PointerButton, PointerKind};
use rand::Rng;

use crate::form::{FormController, ModalTarget};
use crate::grid::{Grid, GridConfig};
use crate::validate::{Field, FieldPatterns, PatternError};

/// Default color-picker value (black, matching an untouched picker input).
pub const DEFAULT_PICKER_COLOR: Rgb = Rgb::new(0, 0, 0);

/// A named page entity an event can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// One of the five form inputs.
    FormField(Field),
    /// The form's submit control.
    SubmitControl,
    /// The form's clear button.
    ClearControl,
    /// A part of the result modal.
    Modal(ModalTarget),
    /// A grid cell, by position.
    Cell {
        /// Row index (0-based).
        row: usize,
        /// Column index (0-based).
        column: usize,
    },
    /// The color-picker input.
    ColorPicker,
}

/// The whole page: the validated form, the interactive grid, and the
/// shared color picker.
#[derive(Debug, Clone)]
pub struct Page {
    form: FormController,
    grid: Grid,
    picker: Rgb,
}

impl Page {
    /// Build the default page: empty form, 6x6 grid.
    pub fn new() -> Result<Self, PatternError> {
        Self::with_config(GridConfig::default())
    }

    /// Build a page with a custom grid shape.
    pub fn with_config(config: GridConfig) -> Result<Self, PatternError> {
        Ok(Self {
            form: FormController::new(FieldPatterns::compile()?),
            grid: Grid::new(config),
            picker: DEFAULT_PICKER_COLOR,
        })
    }

    /// The form.
    #[must_use]
    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Mutable access to the form.
    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    /// The grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the grid.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The currently picked color.
    #[must_use]
    pub const fn picker(&self) -> Rgb {
        self.picker
    }

    /// Route one event to its handler and return the handler's outcome.
    pub fn dispatch(
        &mut self,
        target: Target,
        event: Event,
        rng: &mut impl Rng,
    ) -> EventOutcome {
        match (target, event) {
            (Target::FormField(field), Event::Input(value)) => {
                self.form.set_value(field, value);
                EventOutcome::ignored()
            }
            (Target::SubmitControl, Event::Submit) => self.form.submit(),
            (Target::ClearControl, Event::Clear)
            | (Target::ClearControl, Event::Pointer(PointerKind::Click(PointerButton::Primary))) => {
                self.form.clear();
                EventOutcome::ignored()
            }
            (Target::Modal(part), Event::Pointer(PointerKind::Click(PointerButton::Primary))) => {
                self.form.modal_mut().handle_click(part);
                EventOutcome::ignored()
            }
            (Target::ColorPicker, Event::PickColor(color)) => {
                self.picker = color;
                EventOutcome::ignored()
            }
            (Target::Cell { row, column }, Event::Pointer(kind)) => match kind {
                PointerKind::Enter => self.grid.hover(row, column, rng),
                PointerKind::Click(PointerButton::Primary) => {
                    self.grid.click(row, column, self.picker)
                }
                PointerKind::DoubleClick => self.grid.double_click(row, column, self.picker),
                _ => EventOutcome::ignored(),
            },
            _ => EventOutcome::ignored(),
        }
    }
}
