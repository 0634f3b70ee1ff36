use chrono::{Datelike, Local};

use crate::form::{
    CancelPolicy, Field, FormModel, SubmissionOutcome, DEFAULT_COURSES, GENDER_OPTIONS,
};
use crate::ui::mvi::UiState;

/// Focusable element of the form screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Register,
    Cancel,
}

impl Focus {
    pub const FIRST: Focus = Focus::Field(Field::FirstName);

    fn position(self) -> usize {
        match self {
            Focus::Field(field) => field.index(),
            Focus::Register => Field::ALL.len(),
            Focus::Cancel => Field::ALL.len() + 1,
        }
    }

    fn at(position: usize) -> Focus {
        match Field::ALL.get(position) {
            Some(field) => Focus::Field(*field),
            None if position == Field::ALL.len() => Focus::Register,
            None => Focus::Cancel,
        }
    }

    const COUNT: usize = Field::ALL.len() + 2;

    pub fn next(self) -> Focus {
        Focus::at((self.position() + 1) % Self::COUNT)
    }

    pub fn prev(self) -> Focus {
        Focus::at((self.position() + Self::COUNT - 1) % Self::COUNT)
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Field(field) => Some(field),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormScreenState {
    pub model: FormModel,
    pub focus: Focus,
    /// Outcome of the last submit while its notice is on screen.
    pub notice: Option<SubmissionOutcome>,
    /// Selectable courses, without the leading "None" entry.
    pub courses: Vec<String>,
    pub cancel_policy: CancelPolicy,
    /// Year the date-of-birth rule treats as "now".
    pub reference_year: i32,
}

impl UiState for FormScreenState {}

impl Default for FormScreenState {
    fn default() -> Self {
        Self::new(
            DEFAULT_COURSES.iter().map(|c| c.to_string()).collect(),
            CancelPolicy::default(),
            Local::now().year(),
        )
    }
}

impl FormScreenState {
    pub fn new(courses: Vec<String>, cancel_policy: CancelPolicy, reference_year: i32) -> Self {
        Self {
            model: FormModel::default(),
            focus: Focus::FIRST,
            notice: None,
            courses,
            cancel_policy,
            reference_year,
        }
    }

    pub fn notice_visible(&self) -> bool {
        self.notice.is_some()
    }

    /// Options a choice field steps through. Course starts with an empty
    /// "None" entry.
    pub fn choices(&self, field: Field) -> Vec<&str> {
        match field {
            Field::Course => std::iter::once("")
                .chain(self.courses.iter().map(String::as_str))
                .collect(),
            Field::Gender => GENDER_OPTIONS.to_vec(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_fields_and_buttons() {
        let mut focus = Focus::FIRST;
        let mut visited = Vec::new();
        for _ in 0..Focus::COUNT {
            visited.push(focus);
            focus = focus.next();
        }
        assert_eq!(focus, Focus::FIRST);
        assert_eq!(visited[8], Focus::Register);
        assert_eq!(visited[9], Focus::Cancel);
    }

    #[test]
    fn prev_wraps_to_cancel() {
        assert_eq!(Focus::FIRST.prev(), Focus::Cancel);
        assert_eq!(Focus::Register.prev(), Focus::Field(Field::Course));
    }

    #[test]
    fn course_choices_start_with_none() {
        let state = FormScreenState::new(vec!["Biology".into()], CancelPolicy::default(), 2026);
        assert_eq!(state.choices(Field::Course), vec!["", "Biology"]);
        assert!(state.choices(Field::Email).is_empty());
    }
}
