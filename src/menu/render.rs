//! Frame layout so menu state maps to stable terminal output.

use super::item::{MenuEntry, RenderContext};
use super::options::MenuOptions;
use crate::glyphs::GlyphTable;
use crate::keys::{classify, RawKeyEvent};

/// Hotkey shown for items without one.
const MISSING_HOTKEY: char = '*';

/// Width of the bullet, hotkey, bullet and space in front of a title.
const ITEM_PREFIX_WIDTH: usize = 4;

const KEYPRESS_COLUMNS: [(&str, usize); 7] = [
    ("char", 4),
    ("shift", 5),
    ("ctrl", 5),
    ("alt", 5),
    ("meta", 5),
    ("raw", 5),
    ("keychar", 7),
];

/// One rendered menu plus where the cursor goes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
    /// Lines up to and including the help message.
    pub body_height: usize,
    park_column: usize,
    park_row: usize,
}

impl Frame {
    /// From column 0 below the last line onto the hotkey of the selected row.
    pub fn park_delta(&self) -> (i32, i32) {
        (
            self.park_column as i32,
            self.park_row as i32 - self.lines.len() as i32,
        )
    }

    /// From the parked position back to the frame origin.
    pub fn rewind_delta(&self) -> (i32, i32) {
        (-(self.park_column as i32), -(self.park_row as i32))
    }

    /// From the parked position to column 0 right below the help message.
    pub fn release_delta(&self) -> (i32, i32) {
        (
            -(self.park_column as i32),
            self.body_height as i32 - self.park_row as i32,
        )
    }
}

fn repeat(glyph: char, count: usize) -> String {
    std::iter::repeat(glyph).take(count).collect()
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", repeat(' ', width.saturating_sub(len)))
}

/// Horizontal rule, optionally carrying a two-glyph scroll indicator.
fn rule(left: char, fill: char, right: char, width: usize, indicator: Option<[char; 2]>) -> String {
    match indicator {
        Some([first, second]) => format!(
            "{left}{fill}{fill}{first}{second}{}{right}",
            repeat(fill, width.saturating_sub(2))
        ),
        None => format!("{left}{}{right}", repeat(fill, width + 2)),
    }
}

/// Draw the menu as it looks with `current` selected and the viewport at `scroll`.
pub fn render(
    entries: &[MenuEntry],
    options: &MenuOptions,
    current: usize,
    scroll: usize,
    glyphs: &GlyphTable,
    last_key: Option<&RawKeyEvent>,
) -> Frame {
    let titles: Vec<Option<String>> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry.as_item().map(|item| {
                let context = RenderContext {
                    index,
                    current: index == current,
                };
                item.title.resolve(item, options, context)
            })
        })
        .collect();

    let header = options.header.as_deref();
    let width = titles
        .iter()
        .flatten()
        .map(|title| title.chars().count() + ITEM_PREFIX_WIDTH)
        .chain(header.map(|text| text.chars().count()))
        .max()
        .unwrap_or(ITEM_PREFIX_WIDTH);

    let (row_start, row_end) = if options.border {
        (format!("{} ", glyphs.vertical_left()), format!(" {}", glyphs.vertical_right()))
    } else {
        (" ".to_string(), String::new())
    };

    let visible_end = if options.page_size == 0 {
        entries.len()
    } else {
        (scroll + options.page_size).min(entries.len())
    };
    let scrolled = scroll > 0;
    let more_below = visible_end < entries.len();

    let mut lines = Vec::new();
    if options.border {
        let indicator = (scrolled && header.is_none()).then(|| glyphs.scroll_up());
        lines.push(rule(
            glyphs.top_left(),
            glyphs.horizontal(),
            glyphs.top_right(),
            width,
            indicator,
        ));
    }
    if let Some(header) = header {
        lines.push(format!("{row_start}{}{row_end}", pad(header, width)));
        if options.border {
            lines.push(rule(
                glyphs.header_left(),
                glyphs.inner_horizontal(),
                glyphs.header_right(),
                width,
                scrolled.then(|| glyphs.scroll_up()),
            ));
        }
    }

    let top_rows = lines.len();
    for (index, entry) in entries.iter().enumerate().take(visible_end).skip(scroll) {
        let row = match (entry, &titles[index]) {
            (MenuEntry::Item(item), Some(title)) => {
                let [open, close] = if index == current {
                    glyphs.selected()
                } else {
                    glyphs.unselected()
                };
                let hotkey = item.hotkey.unwrap_or(MISSING_HOTKEY);
                format!(
                    "{row_start}{open}{hotkey}{close} {}{row_end}",
                    pad(title, width - ITEM_PREFIX_WIDTH)
                )
            }
            _ => format!("{row_start}{}{row_end}", repeat(' ', width)),
        };
        lines.push(row);
    }

    if options.border {
        lines.push(rule(
            glyphs.bottom_left(),
            glyphs.horizontal(),
            glyphs.bottom_right(),
            width,
            more_below.then(|| glyphs.scroll_down()),
        ));
    }

    let help = entries
        .get(current)
        .and_then(MenuEntry::as_item)
        .map(|item| {
            let context = RenderContext {
                index: current,
                current: true,
            };
            item.help_message
                .as_ref()
                .unwrap_or(&options.help_message)
                .resolve(item, options, context)
        })
        .unwrap_or_default();
    lines.extend(help.split('\n').map(str::to_string));
    let body_height = lines.len();

    if options.show_keypress {
        lines.push(String::new());
        lines.push(String::new());
        lines.extend(keypress_panel(glyphs, last_key));
    }

    Frame {
        lines,
        body_height,
        park_column: row_start.chars().count() + 1,
        park_row: top_rows + current.saturating_sub(scroll),
    }
}

fn keypress_panel(glyphs: &GlyphTable, event: Option<&RawKeyEvent>) -> Vec<String> {
    let flag = |on: bool| (if on { "yes" } else { "no" }).to_string();
    let values: [String; 7] = match event {
        Some(event) => [
            classify(event).label(),
            flag(event.shift),
            flag(event.ctrl),
            flag(event.alt),
            flag(event.meta),
            event.raw_code.to_string(),
            event.key_char.map(String::from).unwrap_or_default(),
        ],
        None => Default::default(),
    };

    let separator = glyphs.vertical_left();
    let row = |cells: [&str; 7]| {
        let body: Vec<String> = KEYPRESS_COLUMNS
            .iter()
            .zip(cells)
            .map(|((_, width), cell)| format!(" {} ", pad(cell, *width)))
            .collect();
        format!("{separator}{}{separator}", body.join(&separator.to_string()))
    };
    let header = row(KEYPRESS_COLUMNS.map(|(name, _)| name));
    let value_row = row(std::array::from_fn(|idx| values[idx].as_str()));
    let inner = header.chars().count() - 2;

    vec![
        format!("{}{}{}", glyphs.top_left(), repeat(glyphs.horizontal(), inner), glyphs.top_right()),
        header,
        value_row,
        format!(
            "{}{}{}",
            glyphs.bottom_left(),
            repeat(glyphs.horizontal(), inner),
            glyphs.bottom_right()
        ),
    ]
}
