//! Buffer store: Bounded ring buffer of displayed messages.
//!
//! Entries keep insertion order. Each entry gets an [`EntryId`] from a
//! monotonically increasing sequence, so ids stay valid across deletions
//! and are never handed out twice. Positions (`0..len`) are physical and
//! shift when earlier entries are removed.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};

use crate::error::BarError;
use crate::message::Message;

/// Default number of messages retained before the oldest is evicted.
pub const DEFAULT_BUFFER_SIZE: usize = 100;

/// Stable identifier of a buffered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u64);

impl EntryId {
    /// The raw sequence number.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A message plus the bookkeeping the store attaches to it.
#[derive(Debug, Clone)]
pub struct BufferEntry {
    /// Sequence id assigned on append.
    pub id: EntryId,
    /// The buffered message.
    pub message: Message,
    /// Local time the message was buffered.
    pub buffered_at: DateTime<Local>,
}

/// Result of [`BufferStore::append`].
#[derive(Debug)]
pub struct Appended {
    /// Id of the new entry.
    pub id: EntryId,
    /// Oldest entry, if it had to be dropped to make room.
    pub evicted: Option<BufferEntry>,
}

/// Ring buffer of messages with a fixed capacity.
#[derive(Debug)]
pub struct BufferStore {
    /// Entries, oldest first. Ids are strictly increasing front to back.
    entries: VecDeque<BufferEntry>,
    /// Maximum number of entries to retain.
    capacity: usize,
    /// Next id to hand out.
    next_id: u64,
}

impl Default for BufferStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE)
    }
}

impl BufferStore {
    /// Create a store that retains at most `capacity` messages.
    ///
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    /// Number of buffered messages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no messages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of messages retained.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a message, evicting the oldest entry when full.
    pub fn append(&mut self, message: Message) -> Appended {
        let evicted = if self.entries.len() >= self.capacity {
            let oldest = self.entries.pop_front();
            if let Some(ref entry) = oldest {
                tracing::warn!(
                    id = %entry.id,
                    text = entry.message.text(),
                    "message buffer full, evicting oldest entry"
                );
            }
            oldest
        } else {
            None
        };

        let id = EntryId(self.next_id);
        self.next_id += 1;

        tracing::debug!(
            %id,
            text = message.text(),
            timeout = ?message.timeout(),
            fg = ?message.fg(),
            bg = ?message.bg(),
            bold = message.is_bold(),
            "buffered message"
        );

        self.entries.push_back(BufferEntry {
            id,
            message,
            buffered_at: Local::now(),
        });

        Appended { id, evicted }
    }

    /// Look up a message by id.
    pub fn get(&self, id: EntryId) -> Result<&Message, BarError> {
        self.position(id)
            .map(|pos| &self.entries[pos].message)
            .ok_or(BarError::NotFound(id))
    }

    /// Remove a single entry by id.
    pub fn delete_one(&mut self, id: EntryId) -> Result<BufferEntry, BarError> {
        let pos = self.position(id).ok_or(BarError::NotFound(id))?;
        self.entries.remove(pos).ok_or(BarError::NotFound(id))
    }

    /// Remove every entry, returning how many were removed.
    ///
    /// Ids are not reset; the next append continues the sequence.
    pub fn delete_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Copy of all messages, oldest first.
    pub fn snapshot(&self) -> Vec<Message> {
        self.entries.iter().map(|e| e.message.clone()).collect()
    }

    /// Physical position of an entry, if it is still buffered.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.binary_search_by_key(&id, |e| e.id).ok()
    }

    /// Entry at a physical position.
    pub fn entry_at(&self, pos: usize) -> Option<&BufferEntry> {
        self.entries.get(pos)
    }

    /// Iterate over entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &BufferEntry> {
        self.entries.iter()
    }
}
