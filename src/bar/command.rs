//! Commands the host sends to the message bar, and what they did.

use std::path::PathBuf;

use crate::buffer::EntryId;

/// A command from the host UI, usually produced by a key binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the previous (older) message.
    MovePrevious,
    /// Show the next (newer) message.
    MoveNext,
    /// Show the oldest message.
    MoveToOldest,
    /// Show the newest message.
    MoveToNewest,
    /// Move one page towards the oldest message.
    PageUp,
    /// Move one page towards the newest message.
    PageDown,
    /// Delete the displayed message.
    DeleteCurrent,
    /// Delete every buffered message.
    DeleteAll,
    /// Save the buffer to a timestamped file in the save directory.
    SaveToDefaultDir,
    /// Save the buffer to a path the host chose.
    SaveToChosenPath(PathBuf),
}

/// Result of a successfully executed [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The buffer is empty; nothing happened.
    Empty,
    /// The message at `position` is now displayed.
    Displayed {
        /// Physical position in the buffer.
        position: usize,
        /// Id of the displayed entry.
        id: EntryId,
    },
    /// The displayed message was deleted.
    Deleted {
        /// Id of the deleted entry.
        id: EntryId,
        /// Position displayed afterwards, if any messages remain.
        position: Option<usize>,
    },
    /// Every message was deleted.
    Cleared {
        /// Number of messages removed.
        count: usize,
    },
    /// The buffer was written to a file.
    Saved {
        /// File written.
        path: PathBuf,
        /// Number of message lines written.
        lines: usize,
    },
}
