//! Countdown: Remaining display time of the message at the head of the wait queue.
//!
//! Hosts render this as a draining gauge next to the buffer indicator. Short
//! timeouts are not worth a gauge, so [`Countdown::is_gauge_worthy`] lets the
//! host skip them.

use std::time::Duration;

/// Default minimum timeout for which a countdown gauge is shown.
pub const DEFAULT_GAUGE_THRESHOLD: Duration = Duration::from_secs(2);

/// Total and remaining display time of one wait item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    /// Full timeout of the item.
    pub total: Duration,
    /// Time left before the item expires.
    pub remaining: Duration,
}

impl Countdown {
    /// Fraction of the timeout still remaining, from 1.0 (fresh) to 0.0.
    #[allow(clippy::cast_possible_truncation)]
    pub fn fraction_remaining(&self) -> f32 {
        if self.total.is_zero() {
            return 0.0;
        }
        (self.remaining.as_secs_f64() / self.total.as_secs_f64()).clamp(0.0, 1.0) as f32
    }

    /// Whether the timeout is long enough to show a gauge for.
    pub fn is_gauge_worthy(&self, threshold: Duration) -> bool {
        self.total > threshold
    }

    /// Render a text gauge `width` cells wide that starts full and empties.
    ///
    /// Filled cells are `▓`, drained cells `░`.
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    pub fn gauge(&self, width: usize) -> String {
        let filled = (self.fraction_remaining() * width as f32).round() as usize;
        let filled = filled.min(width);
        let mut out = String::with_capacity(width * 3);
        out.extend(std::iter::repeat('▓').take(filled));
        out.extend(std::iter::repeat('░').take(width - filled));
        out
    }
}
