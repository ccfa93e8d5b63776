#![forbid(unsafe_code)]

//! Headless demo: drives the page through the same event sequence a user
//! would produce — a failed submit, a fix, a successful submit, and a tour
//! of the grid interactions. Set `RUST_LOG=debug` to watch the handlers.

use formgrid::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut page = match Page::new() {
        Ok(page) => page,
        Err(err) => {
            eprintln!("page init failed: {err}");
            std::process::exit(1);
        }
    };
    let mut rng = rand::thread_rng();
    tracing::info!("page ready");

    // Fill the form, with the phone in the wrong shape.
    let entries = [
        (Field::FullName, "Петренко П.І."),
        (Field::Phone, "067-123-45-67"),
        (Field::IdCard, "МС №123456"),
        (Field::BirthDate, "01.01.2000"),
        (Field::Email, "petrenko@example.com"),
    ];
    for (field, value) in entries {
        page.dispatch(Target::FormField(field), Event::Input(value.into()), &mut rng);
    }

    page.dispatch(Target::SubmitControl, Event::Submit, &mut rng);
    println!("-- first submit --");
    for field in Field::ALL {
        if let Some(message) = page.form().error_message(field) {
            println!("{}: {message}", field.label());
        }
    }

    // Fix the phone and resubmit.
    page.dispatch(
        Target::FormField(Field::Phone),
        Event::Input("(067)-123-45-67".into()),
        &mut rng,
    );
    page.dispatch(Target::SubmitControl, Event::Submit, &mut rng);

    println!("-- second submit --");
    for row in page.form().modal().rows() {
        println!("{row}");
    }
    page.dispatch(Target::Modal(ModalTarget::Backdrop), Event::click(), &mut rng);

    // Grid tour: the distinguished cell sits at row 0, column 3 by default.
    let cell = Target::Cell { row: 0, column: 3 };
    for _ in 0..3 {
        page.dispatch(cell, Event::enter(), &mut rng);
    }
    page.dispatch(
        Target::ColorPicker,
        Event::PickColor(Rgb::new(0, 128, 255)),
        &mut rng,
    );
    page.dispatch(cell, Event::click(), &mut rng);
    page.dispatch(cell, Event::double_click(), &mut rng);

    println!("-- grid --");
    print_grid(&page);

    page.dispatch(Target::ClearControl, Event::Clear, &mut rng);
}

fn print_grid(page: &Page) {
    let grid = page.grid();
    for i in 0..grid.rows() {
        let mut line = String::new();
        for j in 0..grid.columns() {
            let Some(cell) = grid.cell(i, j) else { continue };
            match cell.background() {
                Some(color) => line.push_str(&format!("{:>8}", color.to_hex())),
                None => line.push_str(&format!("{:>8}", cell.serial())),
            }
        }
        println!("{line}");
    }
}
