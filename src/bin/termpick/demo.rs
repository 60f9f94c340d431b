//! Cascading demo: separators, paging, hotkeys, prevented items and item actions.

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use serde_json::{json, Value};
use std::io;
use termpick::OutputSink;
use termpick::keys::{KEY_LEFT, KEY_RIGHT};
use termpick::{design_count, show_menu, Design, MenuEntry, MenuItem, MenuOptions, Selected, Text};

const MAX_VOLUME: u64 = 10;

fn volume_item() -> MenuItem {
    let adjust = |delta: i64| {
        move |item: &mut MenuItem, _: &mut MenuOptions, _: &mut dyn OutputSink| -> io::Result<()> {
            let volume = item.extras.get("volume").and_then(Value::as_u64).unwrap_or(0) as i64;
            let volume = (volume + delta).clamp(0, MAX_VOLUME as i64);
            item.extras.insert("volume".to_string(), json!(volume));
            Ok(())
        }
    };
    MenuItem::new(Text::computed(|item, _, _| {
        let volume = item.extras.get("volume").and_then(Value::as_u64).unwrap_or(0);
        let filled = "#".repeat(volume as usize);
        let empty = ".".repeat((MAX_VOLUME - volume.min(MAX_VOLUME)) as usize);
        format!("Volume {filled}{empty}")
    }))
    .hotkey('v')
    .prevent()
    .extra("volume", 5)
    .help_message("Left/Right changes the volume.")
    .on_key(KEY_LEFT, adjust(-1))
    .on_key(KEY_RIGHT, adjust(1))
}

fn design_item() -> MenuItem {
    let cycle = |forward: bool| {
        move |_: &mut MenuItem, options: &mut MenuOptions, _: &mut dyn OutputSink| -> io::Result<()> {
            let count = design_count();
            let id = match options.design {
                Design::Id(id) => id,
                Design::Literal(_) => 1,
            };
            let next = if forward { id % count + 1 } else { (id + count - 2) % count + 1 };
            options.design = Design::Id(next);
            Ok(())
        }
    };
    MenuItem::new(Text::computed(|_, options, _| match &options.design {
        Design::Id(id) => format!("Border design {id}"),
        Design::Literal(_) => "Border design (custom)".to_string(),
    }))
    .hotkey('d')
    .prevent()
    .help_message("Left/Right cycles through the border designs.")
    .on_key(KEY_LEFT, cycle(false))
    .on_key(KEY_RIGHT, cycle(true))
}

fn main_menu() -> (Vec<MenuEntry>, MenuOptions) {
    let entries: Vec<MenuEntry> = vec![
        MenuEntry::Separator,
        MenuItem::new("One").hotkey('1').into(),
        MenuItem::new("Two").hotkey('2').selected().into(),
        MenuItem::new("Three").hotkey('3').into(),
        MenuItem::new("Four").hotkey('4').into(),
        MenuEntry::Separator,
        MenuItem::new("Do something else...")
            .hotkey('0')
            .extra("cascade", true)
            .into(),
        volume_item().into(),
        design_item().into(),
        MenuEntry::Separator,
        MenuItem::new("Help").hotkey('?').into(),
        MenuItem::new("Clear Console").hotkey('C').into(),
        MenuItem::new("Exit loop").hotkey('X').into(),
    ];
    (entries, MenuOptions::default().header("Test menu").border(true))
}

fn sub_menu() -> (Vec<MenuEntry>, MenuOptions) {
    let entries: Vec<MenuEntry> = ('a'..='j')
        .map(|hotkey| {
            MenuItem::new(format!("Item {}", hotkey.to_ascii_uppercase()))
                .hotkey(hotkey)
                .extra("subitem", true)
                .into()
        })
        .collect();
    let options = MenuOptions::default()
        .header("Another menu")
        .border(true)
        .page_size(5);
    (entries, options)
}

fn choose(menu: (Vec<MenuEntry>, MenuOptions)) -> Result<Option<Selected>> {
    let (entries, options) = menu;
    Ok(show_menu(entries, options)?.wait()?)
}

fn confirm_exit() -> Result<bool> {
    let entries: Vec<MenuEntry> = vec![
        MenuItem::new("Stay").into(),
        MenuItem::new("Exit").hotkey('X').into(),
    ];
    let choice = choose((entries, MenuOptions::default()))?;
    Ok(choice.is_some_and(|selected| selected.item.hotkey == Some('X')))
}

fn clear_console() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

pub fn run() -> Result<()> {
    loop {
        let Some(mut choice) = choose(main_menu())? else {
            println!("You cancelled the menu.");
            return Ok(());
        };
        if choice.item.extras.contains_key("cascade") {
            println!("You chose: {}", choice.to_json());
            match choose(sub_menu())? {
                Some(sub) => choice = sub,
                None => {
                    println!("You cancelled the menu.");
                    continue;
                }
            }
        }
        println!("You chose: {}", choice.to_json());
        tracing::debug!(index = choice.index, "demo choice");
        match choice.item.hotkey {
            Some('C') => clear_console()?,
            Some('X') if confirm_exit()? => return Ok(()),
            _ => {}
        }
    }
}
