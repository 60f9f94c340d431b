use super::item::Text;
use crate::glyphs::Design;

pub const DEFAULT_HELP_MESSAGE: &str =
    "Type a hotkey or use Down/Up arrows then Enter to choose an item.";

/// Presentation options shared by every item of a menu.
#[derive(Debug, Clone)]
pub struct MenuOptions {
    pub header: Option<String>,
    pub border: bool,
    /// Visible rows; 0 shows every entry and never scrolls.
    pub page_size: usize,
    /// Footer shown when the current item has no override.
    pub help_message: Text,
    /// Draw the last key event below the menu.
    pub show_keypress: bool,
    pub design: Design,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            header: None,
            border: false,
            page_size: 0,
            help_message: Text::from(DEFAULT_HELP_MESSAGE),
            show_keypress: false,
            design: Design::default(),
        }
    }
}

impl MenuOptions {
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn help_message(mut self, text: impl Into<Text>) -> Self {
        self.help_message = text.into();
        self
    }

    pub fn show_keypress(mut self, show: bool) -> Self {
        self.show_keypress = show;
        self
    }

    pub fn design(mut self, design: Design) -> Self {
        self.design = design;
        self
    }
}
