//! Message Bar: Buffer, navigator, wait queue, and persistence behind one API.
//!
//! # Display rules
//!
//! - A new message is displayed at once if no timed message is counting
//!   down. Otherwise it is buffered and held back until the wait queue
//!   drains.
//! - When the head of the wait queue expires, the next waiting message is
//!   displayed. When the queue drains, the newest message is displayed if it
//!   arrived after the expired one, otherwise the display is cleared.
//! - Navigation always displays something (unless the buffer is empty).

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;

use super::command::{Command, Outcome};
use super::events::{BarEvent, EventHub};
use super::indicator::Indicator;
use crate::buffer::{Appended, BufferEntry, BufferStore, EntryId, Navigator, PageDirection};
use crate::config::BarConfig;
use crate::error::BarError;
use crate::input::keymap::{self, KeyAction, KeyPress};
use crate::message::{Message, Rgb};
use crate::persist::PersistenceGateway;
use crate::wait::{WaitEvent, WaitItem, WaitQueue};

/// Buffered status-bar message service.
///
/// Everything runs synchronously on the caller's thread. Timed messages
/// advance only when the host calls [`MessageBar::tick`] or
/// [`MessageBar::tick_at`].
#[derive(Debug)]
pub struct MessageBar {
    store: BufferStore,
    navigator: Navigator,
    waiting: WaitQueue,
    gateway: PersistenceGateway,
    events: EventHub,
    /// Whether the entry under the cursor is on screen.
    displaying: bool,
    gauge_threshold: Duration,
    countdown_color: Rgb,
    last_tick: Option<Instant>,
}

impl Default for MessageBar {
    fn default() -> Self {
        Self::new(&BarConfig::default())
    }
}

impl MessageBar {
    /// Create a message bar from configuration.
    pub fn new(config: &BarConfig) -> Self {
        Self {
            store: BufferStore::with_capacity(config.buffer_size),
            navigator: Navigator::new(),
            waiting: WaitQueue::new(),
            gateway: PersistenceGateway::new(config.save_dir.clone()),
            events: EventHub::new(),
            displaying: false,
            gauge_threshold: config.countdown_threshold(),
            countdown_color: config.countdown_color,
            last_tick: None,
        }
    }

    /// Create a message bar with default settings and the given capacity.
    pub fn with_capacity(buffer_size: usize) -> Self {
        Self::new(&BarConfig {
            buffer_size,
            ..BarConfig::default()
        })
    }

    /// Subscribe to [`BarEvent`] notifications.
    pub fn subscribe(&mut self) -> Receiver<BarEvent> {
        self.events.subscribe()
    }

    /// Buffer a message and display it (or hold it behind timed messages).
    pub fn show(&mut self, message: impl Into<Message>) -> EntryId {
        let message = message.into();
        let timeout = message.timeout();

        let Appended { id, evicted } = self.store.append(message);
        if let Some(entry) = evicted {
            self.handle_eviction(&entry);
        }

        let busy = !self.waiting.is_empty();
        if let Some(timeout) = timeout {
            self.waiting.enqueue(WaitItem::new(id, timeout));
        }
        if busy {
            tracing::debug!(%id, depth = self.waiting.depth(), "held behind wait queue");
        } else {
            self.navigator.move_to_end(self.store.len());
            self.displaying = true;
        }
        id
    }

    /// Show a yellow-on-red bold message.
    pub fn show_error(&mut self, text: impl Into<String>) -> EntryId {
        self.show(Message::error(text))
    }

    /// Show a black-on-yellow bold message.
    pub fn show_warning(&mut self, text: impl Into<String>) -> EntryId {
        self.show(Message::warning(text))
    }

    /// Show a white-on-green bold message.
    pub fn show_ask_for_input(&mut self, text: impl Into<String>) -> EntryId {
        self.show(Message::ask_for_input(text))
    }

    /// Run a host command.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, BarError> {
        tracing::debug!(?command, "execute");
        match command {
            Command::MovePrevious => {
                // Nothing on screen: re-show the cursor entry instead of moving.
                let delta = if self.displaying { -1 } else { 0 };
                Ok(self.navigate(|nav, len| nav.move_relative(delta, len)))
            }
            Command::MoveNext => Ok(self.navigate(|nav, len| nav.move_relative(1, len))),
            Command::MoveToOldest => Ok(self.navigate(Navigator::move_to_start)),
            Command::MoveToNewest => Ok(self.navigate(Navigator::move_to_end)),
            Command::PageUp => Ok(self.navigate(|nav, len| nav.page(PageDirection::Up, len))),
            Command::PageDown => {
                Ok(self.navigate(|nav, len| nav.page(PageDirection::Down, len)))
            }
            Command::DeleteCurrent => self.delete_current(),
            Command::DeleteAll => Ok(self.delete_all()),
            Command::SaveToDefaultDir => {
                let (path, lines) = self.gateway.save_to_default_dir(&self.store)?;
                Ok(Outcome::Saved { path, lines })
            }
            Command::SaveToChosenPath(path) => {
                let lines = self.gateway.save_all(&self.store, &path)?;
                Ok(Outcome::Saved { path, lines })
            }
        }
    }

    /// Resolve a key press against the bindings, honoring whether saving is enabled.
    pub fn key_action(&self, key: KeyPress) -> Option<KeyAction> {
        keymap::resolve(key, self.gateway.is_enabled())
    }

    /// Advance timed messages by `elapsed`. Returns how many expired.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        let mut last_expired = None;
        let mut expired = 0;
        for event in self.waiting.tick(elapsed) {
            if let WaitEvent::Expired(id) = event {
                expired += 1;
                last_expired = Some(id);
            }
            self.forward(event);
        }
        if let Some(id) = last_expired {
            self.after_expiry(id);
        }
        expired
    }

    /// Advance timed messages by the wall-clock time since the previous call.
    ///
    /// The first call only records `now`.
    pub fn tick_at(&mut self, now: Instant) -> usize {
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);
        self.tick(elapsed)
    }

    /// Take the displayed message off screen without deleting it.
    pub fn clear_display(&mut self) {
        self.displaying = false;
    }

    /// Position of the displayed message.
    pub const fn current_position(&self) -> Option<usize> {
        if self.displaying {
            self.navigator.cursor()
        } else {
            None
        }
    }

    /// The displayed entry.
    pub fn current_entry(&self) -> Option<&BufferEntry> {
        self.current_position().and_then(|pos| self.store.entry_at(pos))
    }

    /// The displayed message.
    pub fn current_message(&self) -> Option<&Message> {
        self.current_entry().map(|entry| &entry.message)
    }

    /// Number of timed messages still waiting.
    pub fn wait_depth(&self) -> usize {
        self.waiting.depth()
    }

    /// Check if no timed message is waiting.
    pub fn is_wait_queue_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    /// Snapshot of the position label and countdown.
    pub fn indicator(&self) -> Indicator {
        Indicator {
            position: self.current_position(),
            last: self.store.len().checked_sub(1),
            wait_depth: self.waiting.depth(),
            width: Indicator::width_for(self.store.capacity()),
            countdown: self
                .waiting
                .countdown()
                .filter(|c| c.is_gauge_worthy(self.gauge_threshold)),
        }
    }

    /// Color hosts should draw the countdown gauge in.
    pub const fn countdown_color(&self) -> Rgb {
        self.countdown_color
    }

    /// Number of buffered messages.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if no messages are buffered.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Maximum number of buffered messages.
    pub const fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Copy of all buffered messages, oldest first.
    pub fn snapshot(&self) -> Vec<Message> {
        self.store.snapshot()
    }

    /// Read-only access to the buffer store.
    pub const fn store(&self) -> &BufferStore {
        &self.store
    }

    /// Check if [`Command::SaveToDefaultDir`] can succeed.
    pub const fn can_save(&self) -> bool {
        self.gateway.is_enabled()
    }

    /// Default path to offer in a host save dialog.
    pub fn suggested_save_path(&self) -> Option<PathBuf> {
        self.gateway.suggested_path()
    }

    fn navigate(&mut self, step: impl FnOnce(&mut Navigator, usize) -> Option<usize>) -> Outcome {
        let len = self.store.len();
        let target = step(&mut self.navigator, len)
            .and_then(|pos| self.store.entry_at(pos).map(|entry| (pos, entry.id)));
        match target {
            Some((position, id)) => {
                self.displaying = true;
                Outcome::Displayed { position, id }
            }
            None => {
                self.displaying = false;
                Outcome::Empty
            }
        }
    }

    fn delete_current(&mut self) -> Result<Outcome, BarError> {
        let Some(pos) = self.navigator.cursor() else {
            return Ok(Outcome::Empty);
        };
        let Some(id) = self.store.entry_at(pos).map(|entry| entry.id) else {
            return Ok(Outcome::Empty);
        };

        let removed = self.store.delete_one(id)?;
        tracing::debug!(%id, position = pos, text = removed.message.text(), "deleted message");

        self.navigator.on_removed(pos, self.store.len());
        self.displaying = !self.store.is_empty();
        self.drop_waiting(id);

        Ok(Outcome::Deleted {
            id,
            position: self.current_position(),
        })
    }

    fn delete_all(&mut self) -> Outcome {
        let count = self.store.delete_all();
        tracing::debug!(count, "deleted entire message buffer");

        self.navigator.reset();
        self.displaying = false;
        for event in self.waiting.clear() {
            self.forward(event);
        }
        Outcome::Cleared { count }
    }

    fn handle_eviction(&mut self, entry: &BufferEntry) {
        // The new entry is already pushed; the evicted one was at position 0.
        self.navigator.on_removed(0, self.store.len() - 1);
        self.drop_waiting(entry.id);
        self.events.emit(BarEvent::Evicted(entry.id));
    }

    /// Remove `id` from the wait queue; if it was counting down, show the next head.
    fn drop_waiting(&mut self, id: EntryId) {
        let was_head = self.waiting.head().is_some_and(|head| head.entry == id);
        for event in self.waiting.remove(id) {
            self.forward(event);
        }
        if was_head {
            self.display_head();
        }
    }

    fn after_expiry(&mut self, expired: EntryId) {
        if !self.waiting.is_empty() {
            self.display_head();
            return;
        }
        let newest = self.store.len().checked_sub(1);
        match (self.store.position(expired), newest) {
            (Some(pos), Some(newest)) if pos < newest => {
                self.navigator.move_to_end(self.store.len());
                self.displaying = true;
            }
            _ => self.displaying = false,
        }
    }

    fn display_head(&mut self) {
        let Some(head) = self.waiting.head() else {
            return;
        };
        if let Some(pos) = self.store.position(head.entry) {
            self.navigator.jump_to(pos, self.store.len());
            self.displaying = true;
        }
    }

    fn forward(&mut self, event: WaitEvent) {
        let event = match event {
            WaitEvent::Expired(id) => BarEvent::Expired(id),
            WaitEvent::Emptied => BarEvent::WaitQueueEmptied,
        };
        self.events.emit(event);
    }
}
