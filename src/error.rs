//! Error types for message bar operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::buffer::EntryId;

/// Errors returned by the buffer store, persistence gateway, and message bar.
///
/// None of these leave the message bar in a changed state. An empty buffer
/// is not an error; commands on it report [`crate::bar::Outcome::Empty`].
#[derive(Debug, Error)]
pub enum BarError {
    /// The id does not refer to a buffered message.
    #[error("no buffered message with id {0}")]
    NotFound(EntryId),

    /// Writing the saved buffer failed.
    #[error("failed to write message buffer to '{path}': {source}")]
    Io {
        /// Destination file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A default-directory save was requested without a save directory.
    #[error("saving is disabled: no save directory configured")]
    SaveDisabled,
}
