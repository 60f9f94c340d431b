//! Keyboard-driven single-select menus for text terminals.
//!
//! Build a list of [`MenuEntry`] values, pick [`MenuOptions`], and call
//! [`show_menu`] to draw it on the terminal, or drive a [`Menu`] yourself with
//! any [`KeyEventSource`] and [`OutputSink`].

pub mod config;
pub mod error;
pub mod glyphs;
pub mod input;
pub mod keys;
mod lock;
pub mod menu;
pub mod output;
mod telemetry;
pub mod terminal_restore;

pub use error::{ConfigurationError, MenuError, Result};
pub use glyphs::{design_count, glyph_table, Design, GlyphTable};
pub use input::{KeyEventSource, KeyInjector, ScriptedKeySource, Subscription, TerminalKeySource};
pub use keys::{classify, KeyCommand, RawKeyEvent};
pub use menu::{
    show_menu, Menu, MenuEntry, MenuItem, MenuOptions, Outcome, PendingSelection, RenderContext,
    Selected, Text,
};
pub use output::{ClearDirection, OutputSink, TerminalSink, VirtualTerminal};
pub use telemetry::{init_tracing, tracing_log_path};
