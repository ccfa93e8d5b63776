#![forbid(unsafe_code)]

//! Form controller: per-field validation state, clearing, and the result
//! modal.
//!
//! Each field is in one of two visible states: Valid (no error shown) or
//! Invalid (input marked, fixed message shown next to it). Transitions
//! happen only on submit. When every field validates, the trimmed values
//! are captured as a [`FormSnapshot`] and rendered into the modal.

use formgrid_core::event::EventOutcome;
use unicode_width::UnicodeWidthStr;

use crate::validate::{Field, FieldPatterns};

/// Fixed per-field validation failure message. Never aggregated.
pub const ERROR_MESSAGE: &str = "Некоректний формат";

/// Editable state of a single input.
#[derive(Debug, Clone, Default)]
struct FieldState {
    value: String,
    invalid: bool,
}

/// Trimmed field values captured at a single successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    values: [String; 5],
}

impl FormSnapshot {
    /// The captured value for one field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Iterate fields and values in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.iter().map(|&field| (field, self.get(field)))
    }
}

/// Part of the modal surface a pointer event can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    /// The overlay backdrop around the content box.
    Backdrop,
    /// The explicit close control.
    CloseControl,
    /// The inner content box.
    Content,
}

/// Modal overlay showing the captured form values.
#[derive(Debug, Clone, Default)]
pub struct ResultModal {
    visible: bool,
    rows: Vec<String>,
}

impl ResultModal {
    /// Render the snapshot into labelled rows and show the modal.
    ///
    /// The label column is padded to a uniform display width so the values
    /// line up; Cyrillic labels make byte-length padding wrong here, hence
    /// `unicode-width`.
    pub fn open(&mut self, snapshot: &FormSnapshot) {
        let label_width = Field::ALL
            .iter()
            .map(|field| field.label().width())
            .max()
            .unwrap_or(0);
        self.rows = snapshot
            .iter()
            .map(|(field, value)| {
                let label = field.label();
                let pad = " ".repeat(label_width - label.width());
                format!("{label}{pad} {value}")
            })
            .collect();
        self.visible = true;
    }

    /// Hide the modal. The rendered rows are kept until the next open.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Whether the modal is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The rendered rows, in display order.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Dismissal rule: the backdrop and the close control dismiss the
    /// modal; clicks on the content box do not.
    pub fn handle_click(&mut self, target: ModalTarget) {
        match target {
            ModalTarget::Backdrop | ModalTarget::CloseControl => self.close(),
            ModalTarget::Content => {}
        }
    }
}

/// The validated form: five inputs, their error state, and the modal.
#[derive(Debug, Clone)]
pub struct FormController {
    fields: [FieldState; 5],
    patterns: FieldPatterns,
    modal: ResultModal,
}

impl FormController {
    /// Create an empty form using the given compiled patterns.
    #[must_use]
    pub fn new(patterns: FieldPatterns) -> Self {
        Self {
            fields: Default::default(),
            patterns,
            modal: ResultModal::default(),
        }
    }

    /// Set the raw value of one input. Validation runs on submit, not here.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.fields[field.index()].value = value.into();
    }

    /// The raw value of one input.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        &self.fields[field.index()].value
    }

    /// Whether the field is in the Invalid state.
    #[must_use]
    pub fn is_invalid(&self, field: Field) -> bool {
        self.fields[field.index()].invalid
    }

    /// The message shown next to the field, if any.
    #[must_use]
    pub fn error_message(&self, field: Field) -> Option<&'static str> {
        self.is_invalid(field).then_some(ERROR_MESSAGE)
    }

    /// The result modal.
    #[must_use]
    pub fn modal(&self) -> &ResultModal {
        &self.modal
    }

    /// Mutable access to the result modal.
    pub fn modal_mut(&mut self) -> &mut ResultModal {
        &mut self.modal
    }

    /// Validate every field against its pattern, updating per-field error
    /// state. Iff all five pass, capture a snapshot and open the modal.
    ///
    /// Always suppresses the default submit action.
    pub fn submit(&mut self) -> EventOutcome {
        let mut all_valid = true;
        let mut values: [String; 5] = std::array::from_fn(|_| String::new());

        for field in Field::ALL {
            let trimmed = self.fields[field.index()].value.trim().to_string();
            let valid = self.patterns.validate(field, &trimmed);
            self.fields[field.index()].invalid = !valid;
            if !valid {
                all_valid = false;
                tracing::debug!(field = field.name(), "validation failed");
            }
            values[field.index()] = trimmed;
        }

        if all_valid {
            let snapshot = FormSnapshot { values };
            self.modal.open(&snapshot);
            tracing::info!("form accepted");
        }
        EventOutcome::PREVENT_DEFAULT
    }

    /// Reset every input to empty and clear all error state, regardless of
    /// prior validity. Does not touch the modal.
    pub fn clear(&mut self) {
        for state in &mut self.fields {
            state.value.clear();
            state.invalid = false;
        }
        tracing::debug!("form cleared");
    }
}
