use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{
    msg::{form::FormMsg, system::SystemMsg, Msg},
    raw_msg::RawMsg,
    state::{form::Field, AppState},
};
use crate::presentation::config::keybindings::{normalize_key, Action};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on focus and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => {
            if state.form.focus == Field::Value {
                vec![Msg::Form(FormMsg::PasteValue(text))]
            } else {
                vec![]
            }
        }

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError {
            label: "Terminal".to_string(),
            message: error,
        })],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    let key = normalize_key(key);

    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    if state.form.focus == Field::Value {
        if let Some(msg) = translate_value_keys(key) {
            return vec![msg];
        }
    }

    match state.config.config.keybindings.action_for(key) {
        Some(action) => translate_action_to_msg(action),
        None => vec![], // No matching keybinding found
    }
}

/// Keys that edit the value while it has focus
fn translate_value_keys(key: KeyEvent) -> Option<Msg> {
    if key.modifiers != KeyModifiers::NONE {
        return None;
    }
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            Some(Msg::Form(FormMsg::InputChar(c)))
        }
        KeyCode::Backspace => Some(Msg::Form(FormMsg::DeleteChar)),
        _ => None,
    }
}

fn translate_action_to_msg(action: Action) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::FocusNext => vec![Msg::Form(FormMsg::FocusNext)],
        Action::FocusPrev => vec![Msg::Form(FormMsg::FocusPrev)],
        Action::SelectNext => vec![Msg::Form(FormMsg::SelectNext)],
        Action::SelectPrev => vec![Msg::Form(FormMsg::SelectPrev)],
        Action::Convert => vec![Msg::Form(FormMsg::Submit)],
        Action::ClearResult => vec![Msg::Form(FormMsg::ClearResult)],
    }
}
