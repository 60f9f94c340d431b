//! termpick entrypoint: show one menu from flags or a JSON document and print
//! the chosen item as a JSON line.

mod demo;

use anyhow::Result;
use std::process::ExitCode;
use termpick::config::PickerConfig;
use termpick::menu::render;
use termpick::{design_count, glyph_table, init_tracing, show_menu, MenuEntry, MenuItem, MenuOptions};

fn main() -> Result<ExitCode> {
    let config = PickerConfig::parse_args()?;
    init_tracing(config.logs, config.no_logs);

    if config.list_designs {
        list_designs()?;
        return Ok(ExitCode::SUCCESS);
    }
    if config.demo {
        demo::run()?;
        return Ok(ExitCode::SUCCESS);
    }

    let (entries, options) = config.load_menu()?;
    tracing::info!(entries = entries.len(), "showing menu");
    match show_menu(entries, options)?.wait()? {
        Some(selected) => {
            println!("{}", selected.to_json());
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("cancelled");
            Ok(ExitCode::from(1))
        }
    }
}

/// Draw a small sample menu with every catalog design.
fn list_designs() -> Result<()> {
    let entries: Vec<MenuEntry> = vec![
        MenuItem::new("Selected row").hotkey('s').into(),
        MenuItem::new("Other row").hotkey('o').into(),
    ];
    for id in 1..=design_count() {
        let glyphs = glyph_table(id)?;
        let options = MenuOptions::default()
            .header(format!("Design {id}"))
            .border(true)
            .help_message(format!("--design-string '{}'", glyphs.preview().replace('\n', "")));
        let frame = render(&entries, &options, 0, 0, &glyphs, None);
        for line in &frame.lines {
            println!("{line}");
        }
        println!();
    }
    Ok(())
}
