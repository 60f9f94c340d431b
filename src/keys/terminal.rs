//! Crossterm key events normalized to raw key codes.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{
    char_raw_code, RawKeyEvent, KEY_DOWN, KEY_END, KEY_ENTER, KEY_ESCAPE, KEY_HOME, KEY_LEFT,
    KEY_PAGE_DOWN, KEY_PAGE_UP, KEY_RIGHT, KEY_UP,
};

const KEY_BACKSPACE: u32 = 8;
const KEY_TAB: u32 = 9;
const KEY_INSERT: u32 = 45;
const KEY_DELETE: u32 = 46;
const KEY_F1: u32 = 112;

/// Map a crossterm key event to a raw key event.
///
/// Only presses are reported; releases, repeats and keys without a code
/// (media keys, lone modifiers) yield `None`.
pub fn raw_key_from_crossterm(event: &KeyEvent) -> Option<RawKeyEvent> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let (raw_code, key_char) = match event.code {
        KeyCode::Enter => (KEY_ENTER, None),
        KeyCode::Esc => (KEY_ESCAPE, None),
        KeyCode::PageUp => (KEY_PAGE_UP, None),
        KeyCode::PageDown => (KEY_PAGE_DOWN, None),
        KeyCode::End => (KEY_END, None),
        KeyCode::Home => (KEY_HOME, None),
        KeyCode::Left => (KEY_LEFT, None),
        KeyCode::Up => (KEY_UP, None),
        KeyCode::Right => (KEY_RIGHT, None),
        KeyCode::Down => (KEY_DOWN, None),
        KeyCode::Backspace => (KEY_BACKSPACE, None),
        KeyCode::Tab | KeyCode::BackTab => (KEY_TAB, None),
        KeyCode::Insert => (KEY_INSERT, None),
        KeyCode::Delete => (KEY_DELETE, None),
        KeyCode::F(n) if (1..=24).contains(&n) => (KEY_F1 + u32::from(n) - 1, None),
        KeyCode::Char(ch) => (char_raw_code(ch), Some(ch)),
        _ => return None,
    };
    let modifiers = event.modifiers;
    Some(RawKeyEvent {
        raw_code,
        key_char,
        shift: modifiers.contains(KeyModifiers::SHIFT) || matches!(event.code, KeyCode::BackTab),
        ctrl: modifiers.contains(KeyModifiers::CONTROL),
        alt: modifiers.contains(KeyModifiers::ALT),
        meta: modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    })
}
