//! Scoped shake-event delivery from the sensor path to the session.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tracing::debug;

use crate::motion::shake::ShakeEvent;

struct Slot {
    generation: u64,
    sender: Option<mpsc::UnboundedSender<ShakeEvent>>,
}

/// Single-slot registration point the sensor thread publishes into.
///
/// At most one subscriber is registered at a time. Events published while no
/// subscriber holds the slot are dropped, not queued: the session only cares
/// about shakes while it is waiting for one.
#[derive(Clone)]
pub struct ShakeRouter {
    slot: Arc<Mutex<Slot>>,
}

impl Default for ShakeRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShakeRouter {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                generation: 0,
                sender: None,
            })),
        }
    }

    /// Publishes a shake event to the current subscriber, if any.
    ///
    /// Non-blocking; safe to call from the sensor delivery path.
    pub fn publish(&self, event: ShakeEvent) {
        let Ok(slot) = self.slot.lock() else {
            return;
        };
        match &slot.sender {
            Some(sender) => {
                // A closed receiver means the subscriber is being torn down;
                // the event is dropped just as if nobody was registered.
                let _ = sender.send(event);
            }
            None => debug!(impulse = event.impulse, "shake with no subscriber, dropped"),
        }
    }

    /// Registers a subscriber, replacing any previous one.
    ///
    /// Returns the guard that owns the registration together with the
    /// receiving end. Dropping the guard releases the slot on every exit
    /// path; a stale guard from an earlier registration cannot clobber a
    /// newer one.
    pub fn subscribe(&self) -> (ShakeSubscription, mpsc::UnboundedReceiver<ShakeEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let generation = {
            let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
            slot.generation += 1;
            slot.sender = Some(tx);
            slot.generation
        };
        (
            ShakeSubscription {
                slot: self.slot.clone(),
                generation,
            },
            rx,
        )
    }
}

/// Guard representing an active shake subscription.
pub struct ShakeSubscription {
    slot: Arc<Mutex<Slot>>,
    generation: u64,
}

impl Drop for ShakeSubscription {
    fn drop(&mut self) {
        let Ok(mut slot) = self.slot.lock() else {
            return;
        };
        if slot.generation == self.generation {
            slot.sender = None;
        }
    }
}
