//! Input module: What the host feeds into the message bar.
//!
//! - [`keymap`]: key presses to [`crate::bar::Command`]s
//! - [`Ticker`]: optional periodic tick source for hosts without a timer

pub mod keymap;
mod ticker;

pub use keymap::{KeyAction, KeyCode, KeyModifiers, KeyPress};
pub use ticker::{Tick, Ticker};
