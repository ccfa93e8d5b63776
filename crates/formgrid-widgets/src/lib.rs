#![forbid(unsafe_code)]

//! Page behaviors for the formgrid kit: the validated form, the interactive
//! grid, and the wiring that routes events to them.

pub mod diagonal;
pub mod form;
pub mod grid;
pub mod page;
pub mod validate;

pub use diagonal::paint_secondary_diagonal;
pub use form::{ERROR_MESSAGE, FormController, FormSnapshot, ModalTarget, ResultModal};
pub use grid::{DISTINGUISHED_SERIAL, Grid, GridCell, GridConfig};
pub use page::{DEFAULT_PICKER_COLOR, Page, Target};
pub use validate::{Field, FieldPatterns, PatternError};
