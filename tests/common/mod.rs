//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use regform::config::Config;
use regform::form::Field;
use regform::ui::app::App;
use regform::ui::form::{Focus, FormIntent};
use regform::ui::input::handle_key;

/// Year used wherever a test needs a fixed "now".
pub const YEAR: i32 = 2026;

pub fn make_app() -> App {
    App::with_reference_year(&Config::default(), YEAR)
}

pub fn make_app_with(config: &Config) -> App {
    App::with_reference_year(config, YEAR)
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn ctrl(app: &mut App, ch: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Move focus forward until it lands on `target`.
pub fn focus(app: &mut App, target: Focus) {
    for _ in 0..16 {
        if app.state().focus == target {
            return;
        }
        press(app, KeyCode::Tab);
    }
    panic!("focus never reached {:?}", target);
}

/// Valid value for every text field of the form.
pub fn valid_text(field: Field) -> &'static str {
    match field {
        Field::FirstName => "Asha",
        Field::LastName => "Menon",
        Field::Address => "12 Lake Road, Kochi",
        Field::Mobile => "9876543210",
        Field::Email => "asha.menon@example.com",
        Field::Dob => "2008-04-15",
        Field::Gender => "female",
        Field::Course => "Biology",
    }
}

/// Fill every field with a valid value through the same intents the
/// keyboard produces.
pub fn fill_valid(app: &mut App) {
    for field in Field::ALL {
        app.dispatch(FormIntent::Edit {
            field,
            value: valid_text(field).to_string(),
        });
    }
}
