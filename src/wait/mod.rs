//! Wait module: Timed display of buffered messages.
//!
//! - [`WaitQueue`]: FIFO of [`WaitItem`]s, driven by [`WaitQueue::tick`]
//! - [`Countdown`]: remaining display time of the head item

mod countdown;
mod queue;

pub use countdown::{Countdown, DEFAULT_GAUGE_THRESHOLD};
pub use queue::{WaitEvent, WaitItem, WaitQueue};
