//! Key-event classification so every key source drives the menu the same way.
//!
//! Raw codes follow the virtual-key numbering of desktop key hooks: letters
//! use their upper-case ASCII code, digits their ASCII code, and navigation
//! keys the small fixed codes below.

mod terminal;

pub use terminal::raw_key_from_crossterm;

pub const KEY_ENTER: u32 = 13;
pub const KEY_ESCAPE: u32 = 27;
pub const KEY_PAGE_UP: u32 = 33;
pub const KEY_PAGE_DOWN: u32 = 34;
pub const KEY_END: u32 = 35;
pub const KEY_HOME: u32 = 36;
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;
/// `C`, which cancels the menu together with Ctrl.
pub const KEY_C: u32 = 67;
/// Punctuation and non-ASCII characters are shifted above this base so they
/// never collide with the navigation codes.
pub const CHAR_CODE_BASE: u32 = 0x1000;

/// Raw code a key source reports for a typed character.
pub fn char_raw_code(ch: char) -> u32 {
    if ch.is_ascii_alphabetic() {
        ch.to_ascii_uppercase() as u32
    } else if ch.is_ascii_digit() || ch == ' ' {
        ch as u32
    } else {
        CHAR_CODE_BASE + ch as u32
    }
}

/// Inverse of [`char_raw_code`]. Codes it never produces (function keys,
/// Insert, Delete and the like) carry no character.
fn literal_from_code(code: u32) -> Option<char> {
    if code >= CHAR_CODE_BASE {
        return char::from_u32(code - CHAR_CODE_BASE);
    }
    char::from_u32(code).filter(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || *ch == ' ')
}

/// One key press as delivered by a key source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawKeyEvent {
    pub raw_code: u32,
    /// Character produced by the key, when the source knows it.
    pub key_char: Option<char>,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl RawKeyEvent {
    pub fn new(raw_code: u32) -> Self {
        Self {
            raw_code,
            ..Self::default()
        }
    }

    /// Event for a typed character, keeping its case in `key_char`.
    pub fn from_char(ch: char) -> Self {
        Self {
            raw_code: char_raw_code(ch),
            key_char: Some(ch),
            shift: ch.is_ascii_uppercase(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }
}

/// Logical meaning of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Enter,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Cancel,
    /// Horizontal arrows have no menu effect but are labelled for diagnostics.
    Left,
    Right,
    /// Any other key: a possible hotkey.
    Literal(Option<char>),
}

impl KeyCommand {
    /// Enter and Cancel are handled by the menu itself and never reach item actions.
    pub fn is_reserved(self) -> bool {
        matches!(self, KeyCommand::Enter | KeyCommand::Cancel)
    }

    /// Short label shown in the keypress diagnostics panel.
    pub fn label(self) -> String {
        match self {
            KeyCommand::Enter => "↵".to_string(),
            KeyCommand::Up => "↑".to_string(),
            KeyCommand::Down => "↓".to_string(),
            KeyCommand::PageUp => "⇞".to_string(),
            KeyCommand::PageDown => "⇟".to_string(),
            KeyCommand::Home => "⇱".to_string(),
            KeyCommand::End => "⇲".to_string(),
            KeyCommand::Cancel => "ESC".to_string(),
            KeyCommand::Left => "←".to_string(),
            KeyCommand::Right => "→".to_string(),
            KeyCommand::Literal(Some(ch)) => ch.to_string(),
            KeyCommand::Literal(None) => "?".to_string(),
        }
    }
}

/// Classify a raw event. Never fails: unknown codes become literals.
pub fn classify(event: &RawKeyEvent) -> KeyCommand {
    if event.raw_code == KEY_ESCAPE || (event.ctrl && event.raw_code == KEY_C) {
        return KeyCommand::Cancel;
    }
    match event.raw_code {
        KEY_ENTER => KeyCommand::Enter,
        KEY_UP => KeyCommand::Up,
        KEY_DOWN => KeyCommand::Down,
        KEY_PAGE_UP => KeyCommand::PageUp,
        KEY_PAGE_DOWN => KeyCommand::PageDown,
        KEY_END => KeyCommand::End,
        KEY_HOME => KeyCommand::Home,
        KEY_LEFT => KeyCommand::Left,
        KEY_RIGHT => KeyCommand::Right,
        code => KeyCommand::Literal(
            event
                .key_char
                .or_else(|| literal_from_code(code))
                .filter(|ch| !ch.is_control()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_navigation_table() {
        let cases = [
            (KEY_ENTER, KeyCommand::Enter),
            (KEY_UP, KeyCommand::Up),
            (KEY_DOWN, KeyCommand::Down),
            (KEY_PAGE_UP, KeyCommand::PageUp),
            (KEY_PAGE_DOWN, KeyCommand::PageDown),
            (KEY_END, KeyCommand::End),
            (KEY_HOME, KeyCommand::Home),
            (KEY_ESCAPE, KeyCommand::Cancel),
            (KEY_LEFT, KeyCommand::Left),
            (KEY_RIGHT, KeyCommand::Right),
        ];
        for (code, expected) in cases {
            assert_eq!(classify(&RawKeyEvent::new(code)), expected, "code {code}");
        }
    }

    #[test]
    fn ctrl_c_cancels_but_plain_c_is_a_literal() {
        assert_eq!(
            classify(&RawKeyEvent::new(KEY_C).with_ctrl()),
            KeyCommand::Cancel
        );
        assert_eq!(
            classify(&RawKeyEvent::new(KEY_C)),
            KeyCommand::Literal(Some('C'))
        );
        assert_eq!(
            classify(&RawKeyEvent::from_char('c')),
            KeyCommand::Literal(Some('c'))
        );
    }

    #[test]
    fn literal_prefers_key_char_over_raw_code() {
        let event = RawKeyEvent::from_char('x');
        assert_eq!(event.raw_code, 'X' as u32);
        assert_eq!(classify(&event), KeyCommand::Literal(Some('x')));
        assert_eq!(
            classify(&RawKeyEvent::new('7' as u32)),
            KeyCommand::Literal(Some('7'))
        );
    }

    #[test]
    fn punctuation_never_collides_with_navigation() {
        let ampersand = RawKeyEvent::from_char('&');
        assert_ne!(ampersand.raw_code, KEY_UP);
        assert_eq!(classify(&ampersand), KeyCommand::Literal(Some('&')));
        assert_eq!(
            classify(&RawKeyEvent::new(char_raw_code('?'))),
            KeyCommand::Literal(Some('?'))
        );
        assert_eq!(char_raw_code(' '), 32);
    }

    #[test]
    fn control_codes_have_no_literal() {
        assert_eq!(classify(&RawKeyEvent::new(8)), KeyCommand::Literal(None));
        // Delete and F1 share codes with '.' and 'p'.
        assert_eq!(classify(&RawKeyEvent::new(46)), KeyCommand::Literal(None));
        assert_eq!(classify(&RawKeyEvent::new(112)), KeyCommand::Literal(None));
        assert_eq!(
            classify(&RawKeyEvent::new(CHAR_CODE_BASE + 0x11_0000)),
            KeyCommand::Literal(None)
        );
    }

    #[test]
    fn reserved_commands_are_enter_and_cancel() {
        assert!(KeyCommand::Enter.is_reserved());
        assert!(KeyCommand::Cancel.is_reserved());
        assert!(!KeyCommand::Down.is_reserved());
        assert!(!KeyCommand::Literal(Some('a')).is_reserved());
    }

    #[test]
    fn labels_are_short() {
        assert_eq!(KeyCommand::Cancel.label(), "ESC");
        assert_eq!(KeyCommand::Literal(Some('q')).label(), "q");
        assert_eq!(KeyCommand::Enter.label().chars().count(), 1);
    }
}
