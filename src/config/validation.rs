use super::document::MenuDocument;
use super::PickerConfig;
use crate::glyphs::{design_count, Design, GLYPH_TABLE_LEN};
use crate::menu::{MenuEntry, MenuItem, MenuOptions};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;

/// Largest accepted `--page-size`.
pub const MAX_PAGE_SIZE: usize = 200;

/// Parse one positional `ITEM`: `-` is a separator, `k=title` binds hotkey `k`.
pub fn parse_item_arg(arg: &str) -> Result<MenuEntry> {
    if arg == "-" {
        return Ok(MenuEntry::Separator);
    }
    let mut chars = arg.chars();
    let item = match (chars.next(), chars.next()) {
        (Some(hotkey), Some('=')) => {
            let title = chars.as_str();
            if title.is_empty() {
                bail!("item {arg:?} binds hotkey {hotkey:?} but has no title");
            }
            MenuItem::new(title).hotkey(hotkey)
        }
        _ => MenuItem::new(arg),
    };
    Ok(MenuEntry::Item(item))
}

impl PickerConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let mut config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values before anything touches the terminal.
    pub fn validate(&mut self) -> Result<()> {
        if let Some(page_size) = self.page_size {
            if page_size > MAX_PAGE_SIZE {
                bail!("--page-size must be between 0 and {MAX_PAGE_SIZE}, got {page_size}");
            }
        }

        if let Some(id) = self.design_id {
            let available = design_count();
            if !(1..=available).contains(&id) {
                bail!("--design-id must be between 1 and {available}, got {id}");
            }
        }

        if let Some(design) = &self.design_string {
            let actual = design.chars().count();
            if actual != GLYPH_TABLE_LEN {
                bail!("--design-string must be exactly {GLYPH_TABLE_LEN} characters, got {actual}");
            }
        }

        if self.list_designs || self.demo {
            return Ok(());
        }

        match &self.menu {
            Some(_) if !self.items.is_empty() => {
                bail!("--menu cannot be combined with ITEM arguments");
            }
            Some(path) if !path.is_file() => {
                bail!("--menu file not found: {}", path.display());
            }
            Some(_) => {}
            None if self.items.is_empty() => {
                bail!("nothing to show: pass ITEM arguments, --menu <FILE> or --demo");
            }
            None => {
                for item in &self.items {
                    parse_item_arg(item)?;
                }
            }
        }
        Ok(())
    }

    /// Design chosen on the command line, if any.
    pub fn design_override(&self) -> Option<Design> {
        self.design_string
            .clone()
            .map(Design::Literal)
            .or(self.design_id.map(Design::Id))
    }

    /// Apply explicit CLI flags on top of options from a document or defaults.
    pub fn apply_overrides(&self, options: &mut MenuOptions) {
        if let Some(header) = &self.header {
            options.header = Some(header.clone());
        }
        if self.border {
            options.border = true;
        }
        if let Some(page_size) = self.page_size {
            options.page_size = page_size;
        }
        if let Some(help) = &self.help_message {
            options.help_message = help.as_str().into();
        }
        if self.show_keypress {
            options.show_keypress = true;
        }
        if let Some(design) = self.design_override() {
            options.design = design;
        }
    }

    /// Build the menu the flags describe, reading `--menu` when given.
    pub fn load_menu(&self) -> Result<(Vec<MenuEntry>, MenuOptions)> {
        let (entries, mut options) = match &self.menu {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read menu file {}", path.display()))?;
                MenuDocument::from_json(&text)?.into_menu()?
            }
            None => {
                let entries = self
                    .items
                    .iter()
                    .map(|arg| parse_item_arg(arg))
                    .collect::<Result<Vec<_>>>()?;
                (entries, MenuOptions::default())
            }
        };
        self.apply_overrides(&mut options);
        Ok((entries, options))
    }
}
