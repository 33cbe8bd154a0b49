//! # msgbar
//!
//! The non-visual core of a status-bar message widget: messages are buffered
//! for keyboard recall, timed messages take turns on screen through a wait
//! queue with a countdown, and the buffer can be saved to a text file.
//!
//! ## Core Concepts
//!
//! - **Buffer store**: bounded, insertion-ordered messages with stable ids
//! - **Navigator**: clamped cursor for Up/Down/Home/End/PageUp/PageDown
//! - **Wait queue**: FIFO of timed messages, advanced by host ticks
//! - **Persistence gateway**: one line per message, oldest first
//! - **Notifications**: typed events on crossbeam channels instead of
//!   toolkit signals
//!
//! Rendering is left to the host. It draws [`MessageBar::current_message`]
//! and [`MessageBar::indicator`], forwards keys through
//! [`MessageBar::key_action`], and calls [`MessageBar::tick`] from its timer.
//!
//! ## Example
//!
//! ```rust
//! use msgbar::{Command, Message, MessageBar, Outcome};
//! use std::time::Duration;
//!
//! let mut bar = MessageBar::default();
//! let events = bar.subscribe();
//!
//! bar.show("Ready");
//! bar.show(Message::new("Copied 3 files").with_timeout(Duration::from_secs(3)));
//! assert_eq!(bar.indicator().to_string(), "001/001 [1]");
//!
//! bar.tick(Duration::from_secs(3));
//! assert_eq!(events.try_iter().count(), 2); // expired + wait queue emptied
//!
//! let outcome = bar.execute(Command::MoveToOldest).unwrap();
//! assert!(matches!(outcome, Outcome::Displayed { position: 0, .. }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod bar;
pub mod buffer;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod message;
pub mod persist;
pub mod wait;

// Re-exports for convenience
pub use bar::{BarEvent, Command, Indicator, MessageBar, Outcome};
pub use buffer::{BufferEntry, BufferStore, EntryId, Navigator, PageDirection, PAGE_SIZE};
pub use config::{BarConfig, ConfigError};
pub use error::BarError;
pub use input::{KeyAction, KeyCode, KeyModifiers, KeyPress, Tick, Ticker};
pub use message::{Message, Rgb};
pub use persist::PersistenceGateway;
pub use wait::{Countdown, WaitEvent, WaitItem, WaitQueue};
