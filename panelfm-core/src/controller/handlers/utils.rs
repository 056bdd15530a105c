//! Key construction helpers and key labels for the help menu.

use compact_str::{CompactString, format_compact};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn arrow_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

pub fn back_tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
}

pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

pub fn escape_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Strip press/release kind, lock state and the shift on characters so
/// terminal events compare equal to the bindings built above.
pub fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_)) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(event.code, modifiers)
}

/// Label shown in the help menu, e.g. `ctrl+n`, `up`, `?`.
pub fn describe_key(event: &KeyEvent) -> CompactString {
    let code: CompactString = match event.code {
        KeyCode::Char(' ') => "space".into(),
        KeyCode::Char(c) => format_compact!("{c}"),
        KeyCode::Up => "up".into(),
        KeyCode::Down => "down".into(),
        KeyCode::Left => "left".into(),
        KeyCode::Right => "right".into(),
        KeyCode::Enter => "enter".into(),
        KeyCode::Esc => "esc".into(),
        KeyCode::Tab => "tab".into(),
        KeyCode::BackTab => "shift+tab".into(),
        KeyCode::Backspace => "backspace".into(),
        KeyCode::Home => "home".into(),
        KeyCode::End => "end".into(),
        KeyCode::F(n) => format_compact!("f{n}"),
        other => format_compact!("{other:?}").to_lowercase().into(),
    };

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        format_compact!("ctrl+{code}")
    } else if event.modifiers.contains(KeyModifiers::ALT) {
        format_compact!("alt+{code}")
    } else {
        code
    }
}
