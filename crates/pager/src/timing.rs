//! Deadline-based timers. Nothing here sleeps: callers feed the current
//! `Instant` and poll for expiry, so the host decides how to wake up.

use std::time::{Duration, Instant};

/// Holds back the most recent value of a burst until `delay` has passed
/// without a newer one arriving.
#[derive(Debug, Clone)]
pub struct TrailingDebounce<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> TrailingDebounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Replaces any pending value and restarts the window.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Releases the pending value once its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending.take() {
            Some((due, value)) if now >= due => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }
}

/// Rejects new work for `duration` after each accepted action. Engaging the
/// latch never cancels anything already running.
#[derive(Debug, Clone)]
pub struct CooldownLatch {
    duration: Duration,
    until: Option<Instant>,
}

impl CooldownLatch {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            until: None,
        }
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn is_engaged(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    pub fn engage(&mut self, now: Instant) {
        self.until = Some(now + self.duration);
    }

    /// Engages and returns `true` if the latch was free at `now`.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if self.is_engaged(now) {
            return false;
        }
        self.engage(now);
        true
    }

    pub fn release_at(&self) -> Option<Instant> {
        self.until
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn debounce_keeps_only_last_value_of_burst() {
        let t0 = Instant::now();
        let mut d = TrailingDebounce::new(ms(100));
        d.push(1, t0);
        d.push(2, t0 + ms(20));
        d.push(3, t0 + ms(40));

        assert_eq!(d.poll(t0 + ms(100)), None);
        assert_eq!(d.deadline(), Some(t0 + ms(140)));
        assert_eq!(d.poll(t0 + ms(140)), Some(3));
        assert!(!d.is_pending());
        assert_eq!(d.poll(t0 + ms(500)), None);
    }

    #[test]
    fn debounce_fires_each_separated_event() {
        let t0 = Instant::now();
        let mut d = TrailingDebounce::new(ms(100));
        d.push('a', t0);
        assert_eq!(d.poll(t0 + ms(100)), Some('a'));
        d.push('b', t0 + ms(150));
        assert_eq!(d.poll(t0 + ms(260)), Some('b'));
    }

    #[test]
    fn cancel_drops_pending_value() {
        let t0 = Instant::now();
        let mut d = TrailingDebounce::new(ms(100));
        d.push(7, t0);
        assert_eq!(d.cancel(), Some(7));
        assert_eq!(d.poll(t0 + ms(200)), None);
    }

    #[test]
    fn cooldown_suppresses_until_expiry() {
        let t0 = Instant::now();
        let mut latch = CooldownLatch::new(ms(500));
        assert!(latch.try_acquire(t0));
        assert!(!latch.try_acquire(t0 + ms(10)));
        assert!(latch.is_engaged(t0 + ms(499)));
        assert!(!latch.is_engaged(t0 + ms(500)));
        assert!(latch.try_acquire(t0 + ms(500)));
    }

    #[test]
    fn rejected_attempt_does_not_extend_cooldown() {
        let t0 = Instant::now();
        let mut latch = CooldownLatch::new(ms(500));
        latch.engage(t0);
        assert!(!latch.try_acquire(t0 + ms(400)));
        assert_eq!(latch.release_at(), Some(t0 + ms(500)));
    }
}
