//! Command-line parsing and validation helpers.

mod document;
mod validation;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub use document::{ItemDocument, MenuDocument};
pub use validation::{parse_item_arg, MAX_PAGE_SIZE};

/// CLI options for the termpick binary. Validated values always build a menu.
#[derive(Debug, Parser, Clone)]
#[command(
    about = "termpick: choose one item from a keyboard-driven terminal menu",
    author,
    version
)]
pub struct PickerConfig {
    /// Menu entries: "title", "k=title" to bind hotkey k, or "-" for a separator
    #[arg(value_name = "ITEM", action = ArgAction::Append)]
    pub items: Vec<String>,

    /// JSON menu document with options and items
    #[arg(long = "menu", value_name = "FILE")]
    pub menu: Option<PathBuf>,

    /// Text shown above the items
    #[arg(long)]
    pub header: Option<String>,

    /// Draw a box around the menu
    #[arg(long, default_value_t = false)]
    pub border: bool,

    /// Rows visible at once (0 shows every entry)
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,

    /// Footer text shown under the menu
    #[arg(long = "help-message")]
    pub help_message: Option<String>,

    /// Show the last key event below the menu
    #[arg(long = "show-keypress", default_value_t = false)]
    pub show_keypress: bool,

    /// Built-in border design (1-based, see --list-designs)
    #[arg(long = "design-id", conflicts_with = "design_string")]
    pub design_id: Option<usize>,

    /// Literal 25-character border design, read as 5 rows of 5
    #[arg(long = "design-string")]
    pub design_string: Option<String>,

    /// Print every built-in design and exit
    #[arg(long = "list-designs", default_value_t = false)]
    pub list_designs: bool,

    /// Run the cascading demo menus
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Enable JSON trace logging to a file
    #[arg(long = "logs", env = "TERMPICK_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all logging (overrides --logs)
    #[arg(long = "no-logs", env = "TERMPICK_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,
}
