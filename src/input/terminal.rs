use crossterm::event::{self, Event};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::{KeyEventSource, SubscriberHub, Subscription};
use crate::keys::raw_key_from_crossterm;
use crate::terminal_restore::TerminalRestoreGuard;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Keyboard source backed by crossterm raw mode and a polling thread.
pub struct TerminalKeySource {
    hub: SubscriberHub,
    stop_flag: Arc<AtomicBool>,
    reader: Option<thread::JoinHandle<()>>,
    guard: Option<TerminalRestoreGuard>,
}

impl TerminalKeySource {
    pub fn new() -> Self {
        Self {
            hub: SubscriberHub::default(),
            stop_flag: Arc::new(AtomicBool::new(false)),
            reader: None,
            guard: None,
        }
    }
}

impl Default for TerminalKeySource {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_reader_thread(hub: SubscriberHub, stop_flag: Arc<AtomicBool>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while !stop_flag.load(Ordering::SeqCst) {
            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(err) => {
                    tracing::debug!(error = %err, "terminal poll failed");
                    break;
                }
            }
            let key = match event::read() {
                Ok(Event::Key(key)) => key,
                Ok(_) => continue,
                Err(err) => {
                    tracing::debug!(error = %err, "terminal read failed");
                    break;
                }
            };
            if let Some(raw) = raw_key_from_crossterm(&key) {
                tracing::trace!(raw_code = raw.raw_code, "key event");
                hub.broadcast(raw);
            }
        }
        // Readers see a closed channel once the thread is gone.
        hub.clear();
    })
}

impl KeyEventSource for TerminalKeySource {
    fn start(&mut self) -> io::Result<()> {
        if self.reader.is_some() {
            return Ok(());
        }
        let guard = TerminalRestoreGuard::new();
        guard.enable_raw_mode()?;
        self.guard = Some(guard);
        self.stop_flag.store(false, Ordering::SeqCst);
        self.reader = Some(spawn_reader_thread(
            self.hub.clone(),
            Arc::clone(&self.stop_flag),
        ));
        Ok(())
    }

    fn subscribe(&mut self) -> Subscription {
        self.hub.subscribe()
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        self.hub.unsubscribe(subscription.id());
    }

    fn stop(&mut self) {
        self.stop_flag.store(true, Ordering::SeqCst);
        if let Some(reader) = self.reader.take() {
            if reader.join().is_err() {
                tracing::warn!("terminal reader thread panicked");
            }
        }
        self.hub.clear();
        if let Some(guard) = self.guard.take() {
            guard.restore();
        }
    }
}

impl Drop for TerminalKeySource {
    fn drop(&mut self) {
        self.stop();
    }
}
