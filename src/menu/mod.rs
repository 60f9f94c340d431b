//! Interactive single-select menu engine.
//!
//! A [`Menu`] owns the entries and options for one invocation. Each key event
//! is classified, applied to the selection state, and the frame is redrawn in
//! place through an [`OutputSink`]: the cursor is rewound to the frame origin
//! and every line is overwritten, so there is never a full-screen clear.

mod item;
mod options;
mod render;
mod scroll;
mod state;

pub use item::{ItemAction, MenuEntry, MenuItem, RenderContext, Selected, Text, TextFn};
pub use options::{MenuOptions, DEFAULT_HELP_MESSAGE};
pub use render::{render, Frame};
pub use scroll::scroll;

use crossbeam_channel::{bounded, Receiver};
use std::thread;

use crate::error::{MenuError, Result};
use crate::glyphs::GlyphTable;
use crate::input::{KeyEventSource, TerminalKeySource};
use crate::keys::{classify, KeyCommand, RawKeyEvent};
use crate::output::{OutputSink, TerminalSink};

/// Result of feeding one key event to a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    /// The menu is done: the chosen entry index, or `None` when cancelled.
    Resolved(Option<usize>),
}

/// Selection state of one menu invocation.
#[derive(Debug)]
pub struct Menu {
    entries: Vec<MenuEntry>,
    options: MenuOptions,
    current: usize,
    scroll: usize,
    last_key: Option<RawKeyEvent>,
    drawn: Option<Frame>,
}

impl Menu {
    /// Validate the entries and pick the initial selection.
    pub fn new(entries: Vec<MenuEntry>, options: MenuOptions) -> Result<Self> {
        if entries.is_empty() {
            return Err(MenuError::Usage("a menu needs at least one entry".to_string()));
        }
        let current = state::initial_index(&entries).ok_or(MenuError::EmptyMenu)?;
        let scroll = scroll::settle(0, current, options.page_size, entries.len());
        tracing::debug!(
            entries = entries.len(),
            current,
            scroll,
            page_size = options.page_size,
            "menu created"
        );
        Ok(Self {
            entries,
            options,
            current,
            scroll,
            last_key: None,
            drawn: None,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn options(&self) -> &MenuOptions {
        &self.options
    }

    /// Render the current state without drawing it.
    pub fn frame(&self) -> Result<Frame> {
        let glyphs = GlyphTable::for_design(&self.options.design)?;
        Ok(render(
            &self.entries,
            &self.options,
            self.current,
            self.scroll,
            &glyphs,
            self.last_key.as_ref(),
        ))
    }

    /// Draw the current state, replacing the previously drawn frame.
    pub fn draw(&mut self, sink: &mut dyn OutputSink) -> Result<()> {
        let frame = self.frame()?;
        if let Some(previous) = self.drawn.take() {
            let (dx, dy) = previous.rewind_delta();
            sink.move_cursor(dx, dy)?;
        }
        for line in &frame.lines {
            sink.writeln(line)?;
        }
        sink.clear_screen_down()?;
        let (dx, dy) = frame.park_delta();
        sink.move_cursor(dx, dy)?;
        sink.flush()?;
        tracing::trace!(lines = frame.lines.len(), "menu drawn");
        self.drawn = Some(frame);
        Ok(())
    }

    /// Apply one key event. Redraws when anything visible changed.
    ///
    /// Once this returns [`Outcome::Resolved`], stop feeding events and call
    /// [`Menu::finish`].
    pub fn handle_key(&mut self, event: &RawKeyEvent, sink: &mut dyn OutputSink) -> Result<Outcome> {
        let command = classify(event);
        let mut redraw = self.options.show_keypress;
        if self.options.show_keypress {
            self.last_key = Some(*event);
        }

        if !command.is_reserved() && self.run_action(event.raw_code, sink)? {
            redraw = true;
        }

        let candidate = match command {
            KeyCommand::Cancel => {
                tracing::debug!("menu cancelled");
                return Ok(Outcome::Resolved(None));
            }
            KeyCommand::Enter => Some(self.current),
            KeyCommand::Literal(Some(key)) => state::find_hotkey(&self.entries, key),
            _ => None,
        };

        if let Some(index) = candidate {
            if !self.is_prevented(index) {
                tracing::debug!(index, "menu resolved");
                return Ok(Outcome::Resolved(Some(index)));
            }
        }

        let next = match command {
            KeyCommand::Literal(_) => candidate,
            KeyCommand::Enter => None,
            nav => state::navigate(&self.entries, self.current, nav, self.options.page_size),
        };
        match next.filter(|&index| index != self.current) {
            Some(index) => {
                let offset = scroll(
                    self.scroll,
                    index,
                    self.options.page_size,
                    self.entries.len(),
                    command,
                );
                self.scroll = scroll::settle(
                    offset,
                    index,
                    self.options.page_size,
                    self.entries.len(),
                );
                tracing::debug!(from = self.current, to = index, scroll = self.scroll, "selection moved");
                self.current = index;
                redraw = true;
            }
            None if redraw => {
                // Actions may have changed the page size.
                self.scroll = scroll::settle(
                    self.scroll,
                    self.current,
                    self.options.page_size,
                    self.entries.len(),
                );
            }
            None => {}
        }

        if redraw {
            self.draw(sink)?;
        }
        Ok(Outcome::Pending)
    }

    fn is_prevented(&self, index: usize) -> bool {
        self.entries[index]
            .as_item()
            .map_or(true, |item| item.prevent)
    }

    fn run_action(&mut self, raw_code: u32, sink: &mut dyn OutputSink) -> Result<bool> {
        let Some(item) = self.entries[self.current].as_item_mut() else {
            return Ok(false);
        };
        let ran = item.dispatch_action(raw_code, &mut self.options, sink)?;
        if ran {
            tracing::debug!(index = self.current, raw_code, "item action ran");
        }
        Ok(ran)
    }

    /// Move the cursor from the drawn frame to the line below the help
    /// message and clear what follows.
    pub fn release(&mut self, sink: &mut dyn OutputSink) -> Result<()> {
        if let Some(frame) = self.drawn.take() {
            let (dx, dy) = frame.release_delta();
            sink.move_cursor(dx, dy)?;
            sink.clear_screen_down()?;
            sink.flush()?;
        }
        Ok(())
    }

    /// Release the cursor and hand back the chosen item.
    pub fn finish(mut self, index: Option<usize>, sink: &mut dyn OutputSink) -> Result<Option<Selected>> {
        self.release(sink)?;
        let Some(index) = index else {
            return Ok(None);
        };
        let context = RenderContext {
            index,
            current: true,
        };
        let options = self.options;
        Ok(self
            .entries
            .into_iter()
            .nth(index)
            .and_then(|entry| match entry {
                MenuEntry::Item(item) => Some(item),
                MenuEntry::Separator => None,
            })
            .map(|item| Selected {
                index,
                title: item.title.resolve(&item, &options, context),
                item,
            }))
    }

    /// Draw the first frame, then drive the menu from `source` until it resolves.
    pub fn run(
        mut self,
        source: &mut dyn KeyEventSource,
        sink: &mut dyn OutputSink,
    ) -> Result<Option<Selected>> {
        self.draw(sink)?;
        self.listen(source, sink)
    }

    /// Drive an already drawn menu.
    fn listen(
        mut self,
        source: &mut dyn KeyEventSource,
        sink: &mut dyn OutputSink,
    ) -> Result<Option<Selected>> {
        source.start()?;
        let subscription = source.subscribe();
        loop {
            let outcome = match subscription.events().recv() {
                Ok(event) => self.handle_key(&event, sink),
                Err(_) => Err(MenuError::InputClosed),
            };
            match outcome {
                Ok(Outcome::Pending) => continue,
                Ok(Outcome::Resolved(index)) => {
                    source.unsubscribe(subscription);
                    let result = self.finish(index, sink);
                    source.stop();
                    return result;
                }
                Err(err) => {
                    tracing::debug!(error = %err, "menu aborted");
                    source.unsubscribe(subscription);
                    if let Err(release_err) = self.release(sink) {
                        tracing::debug!(error = %release_err, "cursor release failed");
                    }
                    source.stop();
                    return Err(err);
                }
            }
        }
    }
}

/// Result of [`show_menu`], fulfilled once the user picks or cancels.
pub struct PendingSelection {
    result: Receiver<Result<Option<Selected>>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl PendingSelection {
    pub fn is_ready(&self) -> bool {
        !self.result.is_empty()
    }

    /// Block until the menu resolves.
    pub fn wait(mut self) -> Result<Option<Selected>> {
        let result = self.result.recv();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("menu worker panicked");
            }
        }
        result.unwrap_or(Err(MenuError::InputClosed))
    }
}

/// Show a menu on the terminal.
///
/// Validation and the first frame happen before this returns, so usage and
/// configuration errors surface here. Key handling then runs on a worker
/// thread with raw mode enabled until the menu resolves.
pub fn show_menu(entries: Vec<MenuEntry>, options: MenuOptions) -> Result<PendingSelection> {
    let mut menu = Menu::new(entries, options)?;
    let mut sink = TerminalSink::stdout();
    menu.draw(&mut sink)?;

    let (tx, rx) = bounded(1);
    let worker = thread::spawn(move || {
        let mut source = TerminalKeySource::new();
        let result = menu.listen(&mut source, &mut sink);
        let _ = tx.send(result);
    });
    Ok(PendingSelection {
        result: rx,
        worker: Some(worker),
    })
}
