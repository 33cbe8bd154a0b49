//! Message module: What gets buffered and displayed.
//!
//! - [`Message`]: text plus optional colors, bold flag, and timeout
//! - [`Rgb`]: True-color representation

mod color;
#[allow(clippy::module_inception)]
mod message;

pub use color::{ParseRgbError, Rgb};
pub use message::Message;
