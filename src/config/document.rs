//! JSON menu documents for the `--menu` flag.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::glyphs::Design;
use crate::menu::{MenuEntry, MenuItem, MenuOptions};

/// Options plus items, as read from a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default)]
    pub border: bool,
    #[serde(default)]
    pub page_size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_message: Option<String>,
    #[serde(default)]
    pub show_keypress: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_id: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_string: Option<String>,
    pub items: Vec<ItemDocument>,
}

/// One entry of a [`MenuDocument`]. Unrecognized fields are kept in `extras`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<char>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub separator: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_message: Option<String>,
    #[serde(default)]
    pub prevent: bool,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl ItemDocument {
    fn into_entry(self) -> MenuEntry {
        if self.separator {
            return MenuEntry::Separator;
        }
        let mut item = MenuItem::new(self.title);
        item.hotkey = self.hotkey;
        item.selected = self.selected;
        item.help_message = self.help_message.map(Into::into);
        item.prevent = self.prevent;
        item.extras = self.extras;
        MenuEntry::Item(item)
    }
}

impl MenuDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid menu document")
    }

    pub fn design(&self) -> Result<Design> {
        match (self.design_id, &self.design_string) {
            (Some(_), Some(_)) => bail!("menu document sets both design_id and design_string"),
            (Some(id), None) => Ok(Design::Id(id)),
            (None, Some(text)) => Ok(Design::Literal(text.clone())),
            (None, None) => Ok(Design::default()),
        }
    }

    pub fn into_menu(self) -> Result<(Vec<MenuEntry>, MenuOptions)> {
        let mut options = MenuOptions::default()
            .border(self.border)
            .page_size(self.page_size)
            .show_keypress(self.show_keypress)
            .design(self.design()?);
        options.header = self.header;
        if let Some(help) = self.help_message {
            options.help_message = help.into();
        }
        let entries = self.items.into_iter().map(ItemDocument::into_entry).collect();
        Ok((entries, options))
    }
}
