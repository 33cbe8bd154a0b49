//! Notification channel from the message bar to the host.
//!
//! Hosts call [`crate::MessageBar::subscribe`] and get a crossbeam
//! [`Receiver`]; every subscriber sees every event. Subscribers whose
//! receiver was dropped are pruned on the next send.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::buffer::EntryId;

/// Events the message bar emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarEvent {
    /// A timed message finished its display time.
    Expired(EntryId),
    /// The wait queue went from non-empty to empty.
    WaitQueueEmptied,
    /// The buffer was full and its oldest message was dropped.
    Evicted(EntryId),
}

/// Fan-out of [`BarEvent`]s to any number of subscribers.
#[derive(Debug, Default)]
pub struct EventHub {
    subscribers: Vec<Sender<BarEvent>>,
}

impl EventHub {
    /// Create a hub with no subscribers.
    pub const fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a new subscriber.
    pub fn subscribe(&mut self) -> Receiver<BarEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Send `event` to every live subscriber.
    pub fn emit(&mut self, event: BarEvent) {
        tracing::trace!(?event, subscribers = self.subscribers.len(), "emit");
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    /// Number of live subscribers (as of the last send).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subscriber_gets_every_event() {
        let mut hub = EventHub::new();
        let a = hub.subscribe();
        let b = hub.subscribe();

        hub.emit(BarEvent::WaitQueueEmptied);

        assert_eq!(a.try_recv(), Ok(BarEvent::WaitQueueEmptied));
        assert_eq!(b.try_recv(), Ok(BarEvent::WaitQueueEmptied));
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let mut hub = EventHub::new();
        let keep = hub.subscribe();
        drop(hub.subscribe());
        assert_eq!(hub.subscriber_count(), 2);

        hub.emit(BarEvent::WaitQueueEmptied);
        assert_eq!(hub.subscriber_count(), 1);
        assert!(keep.try_recv().is_ok());
    }
}
