use crate::form::{evaluate, Field, InputKind};
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{Focus, FormScreenState};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormScreenState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // The notice is modal.
        if state.notice_visible() {
            return match intent {
                FormIntent::DismissNotice => FormScreenState {
                    notice: None,
                    ..state
                },
                _ => state,
            };
        }

        match intent {
            FormIntent::Edit { field, value } => edit(state, field, value),
            FormIntent::InsertChar(ch) => match focused_text_field(&state) {
                Some(field) => {
                    let mut value = state.model.values.get(field).to_string();
                    value.push(ch);
                    edit(state, field, value)
                }
                None => state,
            },
            FormIntent::Backspace => match focused_text_field(&state) {
                Some(field) => {
                    let mut value = state.model.values.get(field).to_string();
                    if value.pop().is_none() {
                        return state;
                    }
                    edit(state, field, value)
                }
                None => state,
            },
            FormIntent::Newline => newline(state),
            FormIntent::FocusNext => FormScreenState {
                focus: state.focus.next(),
                ..state
            },
            FormIntent::FocusPrev => FormScreenState {
                focus: state.focus.prev(),
                ..state
            },
            FormIntent::ChoiceNext => step_choice(state, true),
            FormIntent::ChoicePrev => step_choice(state, false),
            FormIntent::Activate => match state.focus {
                Focus::Register => submit(state),
                Focus::Cancel => cancel(state),
                Focus::Field(Field::Address) => newline(state),
                Focus::Field(_) => FormScreenState {
                    focus: state.focus.next(),
                    ..state
                },
            },
            FormIntent::Submit => submit(state),
            FormIntent::Cancel => cancel(state),
            FormIntent::DismissNotice => state,
        }
    }
}

fn edit(state: FormScreenState, field: Field, value: String) -> FormScreenState {
    let model = state.model.edit(field, value, state.reference_year);
    FormScreenState { model, ..state }
}

fn focused_text_field(state: &FormScreenState) -> Option<Field> {
    state
        .focus
        .field()
        .filter(|field| field.kind() != InputKind::Choice)
}

fn newline(state: FormScreenState) -> FormScreenState {
    if state.focus != Focus::Field(Field::Address) {
        return state;
    }
    let mut value = state.model.values.get(Field::Address).to_string();
    value.push('\n');
    edit(state, Field::Address, value)
}

fn step_choice(state: FormScreenState, forward: bool) -> FormScreenState {
    let Some(field) = state.focus.field() else {
        return state;
    };
    let choices = state.choices(field);
    if choices.is_empty() {
        return state;
    }
    let len = choices.len();
    let current = choices
        .iter()
        .position(|choice| *choice == state.model.values.get(field));
    let next = match (current, forward) {
        (Some(idx), true) => (idx + 1) % len,
        (Some(idx), false) => (idx + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    let value = choices[next].to_string();
    edit(state, field, value)
}

fn submit(state: FormScreenState) -> FormScreenState {
    let outcome = evaluate(&state.model.values, &state.model.errors);
    FormScreenState {
        notice: Some(outcome),
        ..state
    }
}

fn cancel(state: FormScreenState) -> FormScreenState {
    FormScreenState {
        model: state.model.cancel(state.cancel_policy),
        focus: Focus::FIRST,
        ..state
    }
}
