use std::collections::VecDeque;
use std::io;

use super::{KeyEventSource, SubscriberHub, Subscription};
use crate::keys::RawKeyEvent;

/// Key source fed from code instead of a keyboard.
///
/// Built with [`ScriptedKeySource::new`] it replays a fixed list to the first
/// subscriber and then closes that subscription, so a menu that never
/// resolves ends with [`crate::MenuError::InputClosed`] instead of hanging.
/// Built with [`ScriptedKeySource::live`] it stays open and events are pushed
/// through a [`KeyInjector`].
#[derive(Debug, Default)]
pub struct ScriptedKeySource {
    hub: SubscriberHub,
    pending: VecDeque<RawKeyEvent>,
    live: bool,
    started: bool,
    stopped: bool,
}

/// Handle that pushes events into a live [`ScriptedKeySource`].
#[derive(Debug, Clone)]
pub struct KeyInjector {
    hub: SubscriberHub,
}

impl KeyInjector {
    /// Returns `false` when nobody is subscribed any more.
    pub fn send(&self, event: RawKeyEvent) -> bool {
        self.hub.broadcast(event) > 0
    }

    /// Close every subscription.
    pub fn close(&self) {
        self.hub.clear();
    }
}

impl ScriptedKeySource {
    pub fn new(events: impl IntoIterator<Item = RawKeyEvent>) -> Self {
        Self {
            pending: events.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn live() -> Self {
        Self {
            live: true,
            ..Self::default()
        }
    }

    pub fn injector(&self) -> KeyInjector {
        KeyInjector {
            hub: self.hub.clone(),
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn subscriber_count(&self) -> usize {
        self.hub.subscriber_count()
    }
}

impl KeyEventSource for ScriptedKeySource {
    fn start(&mut self) -> io::Result<()> {
        self.started = true;
        self.stopped = false;
        Ok(())
    }

    fn subscribe(&mut self) -> Subscription {
        let subscription = self.hub.subscribe();
        for event in self.pending.drain(..) {
            self.hub.broadcast(event);
        }
        if !self.live {
            // Buffered events stay readable after the sender is gone.
            self.hub.unsubscribe(subscription.id());
        }
        subscription
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        self.hub.unsubscribe(subscription.id());
    }

    fn stop(&mut self) {
        self.stopped = true;
        self.hub.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_then_disconnects() {
        let mut source = ScriptedKeySource::new([RawKeyEvent::new(40), RawKeyEvent::new(13)]);
        source.start().expect("start");
        let sub = source.subscribe();
        let codes: Vec<u32> = sub.events().iter().map(|event| event.raw_code).collect();
        assert_eq!(codes, vec![40, 13]);
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn live_source_forwards_injected_events_until_unsubscribed() {
        let mut source = ScriptedKeySource::live();
        let injector = source.injector();
        let sub = source.subscribe();
        assert!(injector.send(RawKeyEvent::from_char('a')));
        assert_eq!(
            sub.events().recv().expect("injected").key_char,
            Some('a')
        );
        source.unsubscribe(sub);
        assert!(!injector.send(RawKeyEvent::from_char('b')));
    }

    #[test]
    fn stop_closes_subscriptions() {
        let mut source = ScriptedKeySource::live();
        source.start().expect("start");
        let sub = source.subscribe();
        source.stop();
        assert!(source.is_started());
        assert!(source.is_stopped());
        assert!(sub.events().recv().is_err());
    }
}
