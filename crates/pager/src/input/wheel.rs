use super::NavAction;
use crate::timing::TrailingDebounce;
use std::time::{Duration, Instant};

/// Collapses a burst of wheel events into one page step, decided by the
/// last event in the burst.
#[derive(Debug, Clone)]
pub struct WheelNavigator {
    debounce: TrailingDebounce<f64>,
}

impl WheelNavigator {
    pub fn new(delay: Duration) -> Self {
        Self {
            debounce: TrailingDebounce::new(delay),
        }
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.debounce.set_delay(delay);
    }

    pub fn on_wheel(&mut self, delta_y: f64, now: Instant) {
        self.debounce.push(delta_y, now);
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    pub fn poll(&mut self, now: Instant) -> Option<NavAction> {
        self.debounce.poll(now).map(action_for)
    }
}

/// Downward scroll pages forward; anything else, including a zero vertical
/// delta, pages back.
fn action_for(delta_y: f64) -> NavAction {
    if delta_y > 0.0 {
        NavAction::Next
    } else {
        NavAction::Prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn burst_yields_single_action() {
        let t0 = Instant::now();
        let mut wheel = WheelNavigator::new(ms(100));
        wheel.on_wheel(3.0, t0);
        wheel.on_wheel(4.0, t0 + ms(25));
        wheel.on_wheel(1.0, t0 + ms(50));

        assert_eq!(wheel.poll(t0 + ms(149)), None);
        assert_eq!(wheel.poll(t0 + ms(150)), Some(NavAction::Next));
        assert_eq!(wheel.poll(t0 + ms(400)), None);
    }

    #[test]
    fn last_event_decides_direction() {
        let t0 = Instant::now();
        let mut wheel = WheelNavigator::new(ms(100));
        wheel.on_wheel(5.0, t0);
        wheel.on_wheel(-2.0, t0 + ms(10));
        assert_eq!(wheel.poll(t0 + ms(110)), Some(NavAction::Prev));
    }

    #[test]
    fn zero_delta_pages_back() {
        let t0 = Instant::now();
        let mut wheel = WheelNavigator::new(ms(100));
        wheel.on_wheel(0.0, t0);
        assert_eq!(wheel.poll(t0 + ms(100)), Some(NavAction::Prev));
    }
}
