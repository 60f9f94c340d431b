//! Key-event sources the menu subscribes to.
//!
//! A source broadcasts [`RawKeyEvent`]s to every live [`Subscription`].
//! Unsubscribing drops the sending half, so nothing is delivered to a
//! handler once its menu has resolved.

mod scripted;
mod terminal;

pub use scripted::{KeyInjector, ScriptedKeySource};
pub use terminal::TerminalKeySource;

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::keys::RawKeyEvent;
use crate::lock::lock_or_recover;

/// Lifecycle of something that produces key events.
pub trait KeyEventSource {
    /// Begin capturing keys. Calling it twice is harmless.
    fn start(&mut self) -> io::Result<()>;

    fn subscribe(&mut self) -> Subscription;

    fn unsubscribe(&mut self, subscription: Subscription);

    /// Stop capturing and release the terminal.
    fn stop(&mut self);
}

/// Receiving end of one subscriber.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    events: Receiver<RawKeyEvent>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn events(&self) -> &Receiver<RawKeyEvent> {
        &self.events
    }
}

/// Shared list of subscribers, cloned into producer threads.
#[derive(Debug, Clone, Default)]
pub(crate) struct SubscriberHub {
    senders: Arc<Mutex<Vec<(u64, Sender<RawKeyEvent>)>>>,
    next_id: Arc<AtomicU64>,
}

impl SubscriberHub {
    pub(crate) fn subscribe(&self) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = unbounded();
        lock_or_recover(&self.senders, "subscriber hub").push((id, tx));
        Subscription { id, events: rx }
    }

    pub(crate) fn unsubscribe(&self, id: u64) {
        lock_or_recover(&self.senders, "subscriber hub").retain(|(sub_id, _)| *sub_id != id);
    }

    /// Deliver to every subscriber; returns how many received the event.
    pub(crate) fn broadcast(&self, event: RawKeyEvent) -> usize {
        let mut senders = lock_or_recover(&self.senders, "subscriber hub");
        senders.retain(|(_, tx)| tx.send(event).is_ok());
        senders.len()
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        lock_or_recover(&self.senders, "subscriber hub").len()
    }

    pub(crate) fn clear(&self) {
        lock_or_recover(&self.senders, "subscriber hub").clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn broadcast_reaches_every_subscriber() {
        let hub = SubscriberHub::default();
        let first = hub.subscribe();
        let second = hub.subscribe();
        assert_ne!(first.id(), second.id());

        assert_eq!(hub.broadcast(RawKeyEvent::new(13)), 2);
        for sub in [&first, &second] {
            let event = sub
                .events()
                .recv_timeout(Duration::from_millis(200))
                .expect("event delivered");
            assert_eq!(event.raw_code, 13);
        }
    }

    #[test]
    fn unsubscribed_receivers_see_a_closed_channel() {
        let hub = SubscriberHub::default();
        let sub = hub.subscribe();
        hub.unsubscribe(sub.id());
        assert_eq!(hub.broadcast(RawKeyEvent::new(40)), 0);
        assert!(sub.events().recv().is_err());
    }

    #[test]
    fn dropped_receivers_are_pruned_on_broadcast() {
        let hub = SubscriberHub::default();
        let kept = hub.subscribe();
        drop(hub.subscribe());
        assert_eq!(hub.subscriber_count(), 2);
        assert_eq!(hub.broadcast(RawKeyEvent::new(38)), 1);
        assert_eq!(hub.subscriber_count(), 1);
        drop(kept);
        hub.clear();
        assert_eq!(hub.subscriber_count(), 0);
    }
}
