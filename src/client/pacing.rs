//! Request pacing for the member listing fan-out
//!
//! Each organization expansion waits a fixed delay before its request. The
//! pause is unconditional; it does not adapt to response times or errors.

use std::time::Duration;

use log::debug;

/// Default pause before each member listing request
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(500);

/// Fixed-delay pacer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    delay: Duration,
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_DELAY)
    }
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Pacer that never sleeps.
    #[cfg(test)]
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Wait out the configured delay.
    pub async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        debug!("Pacing next request by {:?}", self.delay);
        tokio::time::sleep(self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        assert_eq!(Pacer::default(), Pacer::new(Duration::from_millis(500)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_sleeps_for_delay() {
        let pacer = Pacer::new(Duration::from_secs(2));
        let start = tokio::time::Instant::now();
        pacer.pause().await;
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_pacer_returns_immediately() {
        let start = tokio::time::Instant::now();
        Pacer::disabled().pause().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
