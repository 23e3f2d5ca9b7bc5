// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Lifecycle notifications emitted by an authentication provider.

use std::fmt;

use tokio::sync::mpsc;

use crate::blockchain::ConnectedProvider;

/// Authentication lifecycle notification.
pub enum LifecycleEvent {
    /// Login started
    Connecting,
    /// Login finished; carries the provider for the new session
    Connected(ConnectedProvider),
    /// Session ended
    Disconnected,
    /// Login failed or was cancelled
    Errored(String),
}

impl LifecycleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::Connecting => "connecting",
            LifecycleEvent::Connected(_) => "connected",
            LifecycleEvent::Disconnected => "disconnected",
            LifecycleEvent::Errored(_) => "errored",
        }
    }
}

impl fmt::Debug for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleEvent::Errored(message) => f.debug_tuple("Errored").field(message).finish(),
            other => f.write_str(other.name()),
        }
    }
}

pub type EventSender = mpsc::UnboundedSender<LifecycleEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<LifecycleEvent>;

/// Fan-out point an auth provider emits through.
///
/// Events sent before anyone subscribes are dropped.
#[derive(Debug, Default)]
pub struct EventEmitter {
    subscribers: Vec<EventSender>,
}

impl EventEmitter {
    pub fn subscribe(&mut self) -> EventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver to every live subscriber, forgetting closed ones.
    pub fn emit(&mut self, event: impl Fn() -> LifecycleEvent) {
        self.subscribers.retain(|tx| tx.send(event()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_to_all_subscribers() {
        let mut emitter = EventEmitter::default();
        let mut a = emitter.subscribe();
        let mut b = emitter.subscribe();

        emitter.emit(|| LifecycleEvent::Connecting);

        assert_eq!(a.try_recv().unwrap().name(), "connecting");
        assert_eq!(b.try_recv().unwrap().name(), "connecting");
    }

    #[test]
    fn closed_subscribers_are_dropped() {
        let mut emitter = EventEmitter::default();
        let rx = emitter.subscribe();
        drop(rx);

        emitter.emit(|| LifecycleEvent::Disconnected);
        assert!(emitter.subscribers.is_empty());
    }

    #[test]
    fn debug_hides_provider() {
        let event = LifecycleEvent::Errored("user closed the modal".into());
        assert_eq!(format!("{:?}", event), "Errored(\"user closed the modal\")");
        assert_eq!(format!("{:?}", LifecycleEvent::Disconnected), "disconnected");
    }
}
