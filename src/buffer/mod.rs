//! Buffer module: Message storage and recall.
//!
//! This module contains:
//! - [`BufferStore`]: bounded, insertion-ordered message buffer
//! - [`Navigator`]: clamped cursor for keyboard recall

mod navigator;
mod store;

pub use navigator::{Navigator, PageDirection, PAGE_SIZE};
pub use store::{Appended, BufferEntry, BufferStore, EntryId, DEFAULT_BUFFER_SIZE};
