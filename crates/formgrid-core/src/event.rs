#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Events are plain values dispatched synchronously to named page entities;
//! each handler runs to completion before the next event is processed.
//! The outcome flags model the two suppressions a handler can request:
//! skipping the default follow-on action and stopping further propagation.

use bitflags::bitflags;

use crate::color::Rgb;

/// Pointer button for click events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (usually left) button.
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button.
    Middle,
}

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Pointer entered the entity.
    Enter,
    /// Pointer left the entity.
    Leave,
    /// Single click with the given button.
    Click(PointerButton),
    /// Double click (primary button).
    DoubleClick,
}

/// An input event dispatched to a page entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A pointer interaction.
    Pointer(PointerKind),

    /// Text typed into an input.
    Input(String),

    /// Form submission was requested.
    Submit,

    /// The clear control was activated.
    Clear,

    /// A new color was chosen in the color picker.
    PickColor(Rgb),
}

impl Event {
    /// Convenience constructor for a primary-button click.
    #[must_use]
    pub const fn click() -> Self {
        Self::Pointer(PointerKind::Click(PointerButton::Primary))
    }

    /// Convenience constructor for a double click.
    #[must_use]
    pub const fn double_click() -> Self {
        Self::Pointer(PointerKind::DoubleClick)
    }

    /// Convenience constructor for a pointer-enter event.
    #[must_use]
    pub const fn enter() -> Self {
        Self::Pointer(PointerKind::Enter)
    }
}

bitflags! {
    /// Suppressions requested by an event handler.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventOutcome: u8 {
        /// Skip the default follow-on action for this event.
        const PREVENT_DEFAULT = 0b01;
        /// Do not propagate the event beyond this handler.
        const STOP_PROPAGATION = 0b10;
    }
}

impl EventOutcome {
    /// Outcome of an event nothing was listening for.
    #[must_use]
    pub const fn ignored() -> Self {
        Self::empty()
    }

    /// Check whether the default action was suppressed.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        self.contains(Self::PREVENT_DEFAULT)
    }

    /// Check whether propagation was stopped.
    #[must_use]
    pub const fn stops_propagation(self) -> bool {
        self.contains(Self::STOP_PROPAGATION)
    }
}

impl Default for EventOutcome {
    fn default() -> Self {
        Self::ignored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Outcome flags --

    #[test]
    fn ignored_requests_nothing() {
        let outcome = EventOutcome::ignored();
        assert!(!outcome.prevents_default());
        assert!(!outcome.stops_propagation());
    }

    #[test]
    fn flags_combine() {
        let outcome = EventOutcome::PREVENT_DEFAULT | EventOutcome::STOP_PROPAGATION;
        assert!(outcome.prevents_default());
        assert!(outcome.stops_propagation());
    }

    #[test]
    fn prevent_default_alone_does_not_stop_propagation() {
        let outcome = EventOutcome::PREVENT_DEFAULT;
        assert!(outcome.prevents_default());
        assert!(!outcome.stops_propagation());
    }

    #[test]
    fn default_outcome_is_ignored() {
        assert_eq!(EventOutcome::default(), EventOutcome::ignored());
    }

    // -- Event constructors --

    #[test]
    fn click_is_primary_button() {
        assert_eq!(
            Event::click(),
            Event::Pointer(PointerKind::Click(PointerButton::Primary))
        );
    }

    #[test]
    fn enter_and_double_click_map_to_pointer_kinds() {
        assert_eq!(Event::enter(), Event::Pointer(PointerKind::Enter));
        assert_eq!(Event::double_click(), Event::Pointer(PointerKind::DoubleClick));
    }
}
