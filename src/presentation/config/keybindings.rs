use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de, Deserialize, Deserializer, Serialize};
use strum::Display;

/// User-facing actions that keys can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    Suspend,
    FocusNext,
    FocusPrev,
    SelectNext,
    SelectPrev,
    Convert,
    ClearResult,
}

/// Flat mapping from key sequences to actions
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl KeyBindings {
    /// Looks up the action bound to a single key press.
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        self.get(&vec![normalize_key(key)]).copied()
    }

    /// Single keys bound to `action`, plain keys before modified ones and
    /// named keys before characters. Up and Down come before Left and Right.
    pub fn keys_for(&self, action: Action) -> Vec<KeyEvent> {
        let mut keys: Vec<KeyEvent> = self
            .iter()
            .filter(|(seq, bound)| **bound == action && seq.len() == 1)
            .map(|(seq, _)| seq[0])
            .collect();
        keys.sort_by_key(|key| {
            (
                !key.modifiers.is_empty(),
                matches!(key.code, KeyCode::Char(_)),
                matches!(key.code, KeyCode::Left | KeyCode::Right),
                key_label(key),
            )
        });
        keys
    }
}

/// Short display name of a key, e.g. `Ctrl-d`, `S-Tab` or `q`.
pub fn key_label(key: &KeyEvent) -> String {
    let mut label = String::new();
    for (modifier, prefix) in [
        (KeyModifiers::CONTROL, "Ctrl-"),
        (KeyModifiers::ALT, "Alt-"),
        (KeyModifiers::SHIFT, "Shift-"),
    ] {
        if key.modifiers.contains(modifier) {
            label.push_str(prefix);
        }
    }
    match key.code {
        KeyCode::Char(' ') => label.push_str("Space"),
        KeyCode::Char(c) => label.push(c),
        KeyCode::BackTab => label.push_str("S-Tab"),
        KeyCode::F(n) => label.push_str(&format!("F{n}")),
        code => label.push_str(&format!("{code:?}")),
    }
    label
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|seq| (seq, action))
                    .map_err(<D::Error as de::Error>::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Drops modifiers that terminals report redundantly.
///
/// Uppercase characters and BackTab arrive with SHIFT set; the character or
/// code already carries that information.
pub fn normalize_key(key: KeyEvent) -> KeyEvent {
    let modifiers = match key.code {
        KeyCode::Char(_) | KeyCode::BackTab => key.modifiers - KeyModifiers::SHIFT,
        _ => key.modifiers,
    };
    KeyEvent::new(key.code, modifiers)
}

/// Parses `"<Ctrl-c>"`, `"<q>"` or `"<g><g>"` into key events.
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        raw.strip_suffix('>').unwrap_or(raw)
    } else {
        raw
    };
    raw.split("><")
        .map(|seq| {
            let seq = seq.strip_prefix('<').unwrap_or(seq);
            seq.strip_suffix('>').unwrap_or(seq)
        })
        .map(parse_key_event)
        .collect()
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&lower);
    let code = parse_key_code(remaining, raw)?;
    let (code, modifiers) = match code {
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::SHIFT) => (
            KeyCode::Char(c.to_ascii_uppercase()),
            modifiers - KeyModifiers::SHIFT,
        ),
        code => (code, modifiers),
    };
    Ok(normalize_key(KeyEvent::new(code, modifiers)))
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code(lower: &str, original: &str) -> Result<KeyCode, String> {
    let code = match lower {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        c if c.len() == 1 => {
            // Keep the user's case for plain characters, e.g. <G>
            let ch = original.chars().last().unwrap_or_default();
            KeyCode::Char(ch)
        }
        f if f.starts_with('f') && f.len() > 1 => f[1..]
            .parse::<u8>()
            .map(KeyCode::F)
            .map_err(|_| format!("Unable to parse `{original}`"))?,
        _ => return Err(format!("Unable to parse `{original}`")),
    };
    Ok(code)
}
