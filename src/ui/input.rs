use crate::ui::app::App;
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Any other key only closes the notice.
    if app.state().notice_visible() {
        app.dispatch(FormIntent::DismissNotice);
        return;
    }

    if matches!(key.code, KeyCode::Esc) {
        app.request_quit();
        return;
    }

    if let Some(intent) = key_to_intent(key) {
        app.dispatch(intent);
    }
}

/// Map a key press to a form intent. Quit keys are handled by the caller.
pub fn key_to_intent(key: KeyEvent) -> Option<FormIntent> {
    if is_ctrl_char(key, 's') {
        return Some(FormIntent::Submit);
    }
    if is_ctrl_char(key, 'r') {
        return Some(FormIntent::Cancel);
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(FormIntent::FocusPrev),
        KeyCode::Left => Some(FormIntent::ChoicePrev),
        KeyCode::Right => Some(FormIntent::ChoiceNext),
        KeyCode::Enter => Some(FormIntent::Activate),
        KeyCode::Backspace => Some(FormIntent::Backspace),
        KeyCode::Char(ch) => Some(FormIntent::InsertChar(ch)),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
