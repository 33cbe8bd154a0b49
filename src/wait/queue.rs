//! Wait queue: Timed messages pending sequential display.
//!
//! Only the head item counts down; the items behind it wait their turn in
//! strict FIFO order. The queue owns no timer. The host drives it through
//! [`WaitQueue::tick`] from whatever periodic callback it already has.

use std::collections::VecDeque;
use std::time::Duration;

use super::countdown::Countdown;
use crate::buffer::EntryId;

/// A buffered entry waiting for its display time to run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitItem {
    /// The buffer entry being displayed.
    pub entry: EntryId,
    /// Full display time.
    pub total: Duration,
    /// Display time left.
    pub remaining: Duration,
}

impl WaitItem {
    /// Create an item with its full timeout remaining.
    pub const fn new(entry: EntryId, timeout: Duration) -> Self {
        Self {
            entry,
            total: timeout,
            remaining: timeout,
        }
    }
}

/// Notifications produced by the wait queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitEvent {
    /// The head item's display time ran out.
    Expired(EntryId),
    /// The queue went from non-empty to empty.
    Emptied,
}

/// FIFO of timed messages.
#[derive(Debug, Default)]
pub struct WaitQueue {
    items: VecDeque<WaitItem>,
}

impl WaitQueue {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Add an item at the back.
    pub fn enqueue(&mut self, item: WaitItem) {
        tracing::debug!(entry = %item.entry, timeout = ?item.total, depth = self.items.len() + 1, "wait queued");
        self.items.push_back(item);
    }

    /// Number of items still waiting, including the head.
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item currently counting down.
    pub fn head(&self) -> Option<&WaitItem> {
        self.items.front()
    }

    /// Countdown state of the head item.
    pub fn countdown(&self) -> Option<Countdown> {
        self.items.front().map(|item| Countdown {
            total: item.total,
            remaining: item.remaining,
        })
    }

    /// Advance the head item's countdown by `elapsed`.
    ///
    /// Time left over after the head expires carries into the next item, so
    /// a single late tick can expire several items in order.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<WaitEvent> {
        let mut events = Vec::new();
        let mut budget = elapsed;

        while !budget.is_zero() {
            let Some(head) = self.items.front_mut() else {
                break;
            };
            if head.remaining > budget {
                head.remaining -= budget;
                break;
            }
            budget -= head.remaining;
            let entry = head.entry;
            self.items.pop_front();
            tracing::debug!(%entry, depth = self.items.len(), "wait item expired");
            events.push(WaitEvent::Expired(entry));
            if self.items.is_empty() {
                events.push(WaitEvent::Emptied);
            }
        }

        events
    }

    /// Drop the item for `entry`, if any (its buffer entry went away).
    pub fn remove(&mut self, entry: EntryId) -> Vec<WaitEvent> {
        let before = self.items.len();
        self.items.retain(|item| item.entry != entry);
        if before > 0 && self.items.is_empty() {
            vec![WaitEvent::Emptied]
        } else {
            Vec::new()
        }
    }

    /// Drop every item.
    pub fn clear(&mut self) -> Vec<WaitEvent> {
        if self.items.is_empty() {
            return Vec::new();
        }
        self.items.clear();
        vec![WaitEvent::Emptied]
    }
}
