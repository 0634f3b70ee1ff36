use crate::config::{Config, SchoolConfig};
use crate::form::{Field, InputKind, SubmissionOutcome};
use crate::ui::form::{FormIntent, FormReducer, FormScreenState};
use crate::ui::mvi::Store;
use chrono::{Datelike, Local};
use std::cell::Cell;
use std::rc::Rc;

pub struct App {
    should_quit: bool,
    /// Form screen state (MVI pattern).
    store: Store<FormReducer>,
    /// Raised by the store subscriber; cleared when a frame is drawn.
    needs_redraw: Rc<Cell<bool>>,
    school: SchoolConfig,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_reference_year(config, Local::now().year())
    }

    /// Build with a fixed "current year" for the date-of-birth rule.
    pub fn with_reference_year(config: &Config, reference_year: i32) -> Self {
        let state = FormScreenState::new(
            config.form.courses.clone(),
            config.form.cancel_policy(),
            reference_year,
        );
        let mut store: Store<FormReducer> = Store::new(state);

        let needs_redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&needs_redraw);
        store.subscribe(move |_| flag.set(true));
        store.subscribe(|state: &FormScreenState| {
            tracing::debug!(
                focus = ?state.focus,
                invalid = ?state.model.errors.invalid_fields(),
                "form state changed"
            );
        });

        Self {
            should_quit: false,
            store,
            needs_redraw,
            school: config.school.clone(),
        }
    }

    pub fn state(&self) -> &FormScreenState {
        self.store.state()
    }

    pub fn school(&self) -> &SchoolConfig {
        &self.school
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    pub fn on_resize(&mut self) {
        self.needs_redraw.set(true);
    }

    pub fn dispatch(&mut self, intent: FormIntent) {
        let had_notice = self.state().notice_visible();
        self.store.dispatch(intent);
        if had_notice {
            return;
        }
        if let Some(outcome) = self.state().notice {
            self.log_submission(outcome);
        }
    }

    /// Bracketed paste into the focused text field. Line breaks survive only
    /// in the address field.
    pub fn on_paste(&mut self, text: &str) {
        let Some(field) = self.state().focus.field() else {
            return;
        };
        let pasted: String = match field.kind() {
            InputKind::Choice => return,
            InputKind::Multiline => text.replace("\r\n", "\n"),
            InputKind::Text | InputKind::Date => {
                text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
            }
        };
        if pasted.is_empty() {
            return;
        }
        let value = format!("{}{}", self.state().model.values.get(field), pasted);
        self.dispatch(FormIntent::Edit { field, value });
    }

    fn log_submission(&self, outcome: SubmissionOutcome) {
        let model = &self.state().model;
        match outcome {
            SubmissionOutcome::Accepted => {
                tracing::info!(fields = Field::ALL.len(), "registration accepted");
            }
            SubmissionOutcome::Rejected => {
                tracing::info!(
                    invalid = ?model.errors.invalid_fields(),
                    blank = ?model.values.blank_fields(),
                    "registration rejected"
                );
            }
        }
    }
}
