use std::time::Duration;

/// Delay between polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    Fixed(Duration),
    /// Doubles every attempt starting at `initial`, never above `max`
    Exponential { initial: Duration, max: Duration },
}

impl Backoff {
    /// Delay to sleep after the given (1-based) attempt
    pub fn delay(&self, attempt: u32) -> Duration {
        match *self {
            Backoff::Fixed(interval) => interval,
            Backoff::Exponential { initial, max } => {
                let exp = attempt.saturating_sub(1).min(31);
                initial
                    .checked_mul(2_u32.pow(exp))
                    .map_or(max, |d| d.min(max))
            }
        }
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Backoff::Exponential {
            initial: Duration::from_millis(100),
            max: Duration::from_secs(10),
        }
    }
}
