// Typed in-session signaling.
//
// The web client used to coordinate cross-component state through ambient
// channels: a localStorage activation flag, storage events, and custom DOM
// events. This replaces all of that with one injectable hub carrying a
// defined message schema, so components (and tests) subscribe to typed
// signals instead of string event names.
//
// Single-threaded by construction: one hub per session, subscribers run
// synchronously in subscription order, no locking.

use crate::model::Notification;

/// A signal published within one client session.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// The DotSpark activation flag changed.
    Activation { active: bool },
    /// A validated notification arrived from the backend.
    Notification(Notification),
    /// The user asked for a fresh cloud (positions will re-roll).
    RefreshRequested,
}

type Subscriber = Box<dyn FnMut(&Signal)>;

/// Session-scoped publish/subscribe hub with the activation flag as its one
/// piece of retained state.
#[derive(Default)]
pub struct SignalHub {
    activated: bool,
    subscribers: Vec<Subscriber>,
}

impl SignalHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current activation flag (retained across publishes).
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Register a subscriber. It sees every signal published afterwards.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Signal) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Update retained state, then deliver the signal to all subscribers in
    /// subscription order.
    pub fn publish(&mut self, signal: Signal) {
        if let Signal::Activation { active } = signal {
            self.activated = active;
        }
        for subscriber in &mut self.subscribers {
            subscriber(&signal);
        }
    }
}

impl std::fmt::Debug for SignalHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalHub")
            .field("activated", &self.activated)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
