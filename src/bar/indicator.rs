//! Indicator: The `pos/last [depth]` label shown next to the message.
//!
//! With a 100-message buffer the label reads `005/012 [2]` while a message is
//! displayed and `----/---- [-]` when nothing is.

use std::fmt;

use crate::wait::Countdown;

/// Read-only view of the display position and wait queue depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// Displayed position, `None` when nothing is displayed.
    pub position: Option<usize>,
    /// Position of the newest buffered message.
    pub last: Option<usize>,
    /// Number of timed messages still waiting.
    pub wait_depth: usize,
    /// Digits reserved for each position (digits of the buffer capacity).
    pub width: usize,
    /// Head countdown, present only when long enough to draw a gauge.
    pub countdown: Option<Countdown>,
}

impl Indicator {
    /// Digits needed to print `capacity`.
    pub fn width_for(capacity: usize) -> usize {
        capacity.to_string().len()
    }

    /// Check if a message is being displayed.
    pub const fn is_displaying(&self) -> bool {
        self.position.is_some()
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width;
        match (self.position, self.last) {
            (Some(pos), Some(last)) => {
                write!(f, "{pos:0width$}/{last:0width$} [{}]", self.wait_depth)
            }
            _ => {
                let dashes = "-".repeat(width + 1);
                write!(f, "{dashes}/{dashes} [-]")
            }
        }
    }
}
