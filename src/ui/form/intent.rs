use crate::form::Field;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// Replace a field's value wholesale (paste, programmatic fill).
    Edit { field: Field, value: String },
    /// Append a character to the focused text field.
    InsertChar(char),
    /// Remove the last character of the focused text field.
    Backspace,
    /// Line break; only the address field accepts it.
    Newline,
    FocusNext,
    FocusPrev,
    /// Step the focused choice field (gender, course) forward.
    ChoiceNext,
    ChoicePrev,
    /// Enter: press the focused button, or move on from a field.
    Activate,
    Submit,
    Cancel,
    DismissNotice,
}

impl Intent for FormIntent {}
