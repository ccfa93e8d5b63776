//! End-to-end flows through `Page::dispatch`: the submit/clear/modal cycle
//! and the grid interactions, driven the way the page wires them.

use formgrid_core::color::Rgb;
use formgrid_core::event::Event;
use formgrid_widgets::form::{ERROR_MESSAGE, ModalTarget};
use formgrid_widgets::page::{Page, Target};
use formgrid_widgets::validate::Field;
use rand::SeedableRng;
use rand::rngs::StdRng;

const VALID: [(Field, &str); 5] = [
    (Field::FullName, "Петренко П.І."),
    (Field::Phone, "(067)-123-45-67"),
    (Field::IdCard, "МС №123456"),
    (Field::BirthDate, "01.01.2000"),
    (Field::Email, "petrenko@example.com"),
];

fn rng() -> StdRng {
    StdRng::seed_from_u64(99)
}

fn fill(page: &mut Page, values: &[(Field, &str)]) {
    let mut rng = rng();
    for &(field, value) in values {
        page.dispatch(Target::FormField(field), Event::Input(value.into()), &mut rng);
    }
}

#[test]
fn valid_submit_opens_the_modal_with_five_labelled_rows() {
    let mut page = Page::new().unwrap();
    fill(&mut page, &VALID);

    let outcome = page.dispatch(Target::SubmitControl, Event::Submit, &mut rng());
    assert!(outcome.prevents_default());

    let modal = page.form().modal();
    assert!(modal.is_visible());
    assert_eq!(modal.rows().len(), 5);
    for (row, (field, value)) in modal.rows().iter().zip(VALID) {
        assert!(row.starts_with(field.label()));
        assert!(row.ends_with(value));
    }
}

#[test]
fn invalid_submit_marks_the_offending_field_and_keeps_the_modal_closed() {
    let mut page = Page::new().unwrap();
    fill(&mut page, &VALID);
    fill(&mut page, &[(Field::Phone, "067-123-45-67")]);

    page.dispatch(Target::SubmitControl, Event::Submit, &mut rng());

    assert!(!page.form().modal().is_visible());
    assert_eq!(page.form().error_message(Field::Phone), Some(ERROR_MESSAGE));
    for field in Field::ALL {
        assert_eq!(page.form().is_invalid(field), field == Field::Phone);
    }
}

#[test]
fn fixing_the_field_and_resubmitting_succeeds() {
    let mut page = Page::new().unwrap();
    fill(&mut page, &VALID);
    fill(&mut page, &[(Field::Phone, "067-123-45-67")]);
    page.dispatch(Target::SubmitControl, Event::Submit, &mut rng());

    fill(&mut page, &[(Field::Phone, "(067)-123-45-67")]);
    page.dispatch(Target::SubmitControl, Event::Submit, &mut rng());

    assert!(page.form().modal().is_visible());
    assert!(!page.form().is_invalid(Field::Phone));
}

#[test]
fn modal_dismissal_rules() {
    let mut page = Page::new().unwrap();
    fill(&mut page, &VALID);
    page.dispatch(Target::SubmitControl, Event::Submit, &mut rng());

    // Content clicks keep it open; the backdrop closes it.
    page.dispatch(Target::Modal(ModalTarget::Content), Event::click(), &mut rng());
    assert!(page.form().modal().is_visible());
    page.dispatch(Target::Modal(ModalTarget::Backdrop), Event::click(), &mut rng());
    assert!(!page.form().modal().is_visible());

    // Reopen and use the close control.
    page.dispatch(Target::SubmitControl, Event::Submit, &mut rng());
    assert!(page.form().modal().is_visible());
    page.dispatch(
        Target::Modal(ModalTarget::CloseControl),
        Event::click(),
        &mut rng(),
    );
    assert!(!page.form().modal().is_visible());
}

#[test]
fn clear_resets_inputs_and_errors_whatever_the_prior_state() {
    let mut page = Page::new().unwrap();
    fill(&mut page, &VALID);
    fill(&mut page, &[(Field::Email, "broken")]);
    page.dispatch(Target::SubmitControl, Event::Submit, &mut rng());
    assert!(page.form().is_invalid(Field::Email));

    page.dispatch(Target::ClearControl, Event::Clear, &mut rng());
    for field in Field::ALL {
        assert_eq!(page.form().value(field), "");
        assert!(!page.form().is_invalid(field));
    }
}

#[test]
fn grid_interactions_through_dispatch() {
    let mut page = Page::new().unwrap();
    let mut rng = rng();
    let distinguished = Target::Cell { row: 0, column: 3 };

    // Hover picks a random color.
    page.dispatch(distinguished, Event::enter(), &mut rng);
    assert!(page.grid().cell(0, 3).unwrap().background().is_some());

    // Click paints with the picker; double-click paints the diagonal but
    // leaves the distinguished cell's own color alone.
    let green = Rgb::new(0, 200, 0);
    let purple = Rgb::new(128, 0, 128);
    page.dispatch(Target::ColorPicker, Event::PickColor(green), &mut rng);
    page.dispatch(distinguished, Event::click(), &mut rng);
    assert_eq!(page.grid().cell(0, 3).unwrap().background(), Some(green));

    page.dispatch(Target::ColorPicker, Event::PickColor(purple), &mut rng);
    let outcome = page.dispatch(distinguished, Event::double_click(), &mut rng);
    assert!(outcome.prevents_default());
    assert!(outcome.stops_propagation());

    for i in 0..6 {
        assert_eq!(page.grid().cell(i, 5 - i).unwrap().background(), Some(purple));
    }
    assert_eq!(page.grid().cell(0, 3).unwrap().background(), Some(green));

    // Plain cells never react.
    page.dispatch(Target::Cell { row: 2, column: 2 }, Event::enter(), &mut rng);
    page.dispatch(Target::Cell { row: 2, column: 2 }, Event::click(), &mut rng);
    assert!(page.grid().cell(2, 2).unwrap().background().is_none());
}
