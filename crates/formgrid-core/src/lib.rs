#![forbid(unsafe_code)]

//! Core primitives for the formgrid page kit.
//!
//! This crate holds the types that everything else is written against:
//! the event model ([`event`]) and RGB color values ([`color`]). It knows
//! nothing about forms or grids.

pub mod color;
pub mod event;

pub use color::Rgb;
pub use event::{Event, EventOutcome, PointerButton, PointerKind};
