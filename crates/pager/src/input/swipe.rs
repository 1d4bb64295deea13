use super::NavAction;
use crate::config::NavigationConfig;
use crate::geometry::Point;
use crate::timing::CooldownLatch;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    pub threshold: f64,
    pub lock_distance: f64,
    pub cooldown: Duration,
}

impl From<&NavigationConfig> for SwipeConfig {
    fn from(cfg: &NavigationConfig) -> Self {
        Self {
            threshold: cfg.swipe_threshold,
            lock_distance: cfg.swipe_lock_distance,
            cooldown: cfg.swipe_cooldown,
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::from(&NavigationConfig::default())
    }
}

/// Tracks one touch interaction at a time and turns a mostly-horizontal
/// drag into a page step.
#[derive(Debug, Clone)]
pub struct SwipeRecognizer {
    config: SwipeConfig,
    start: Option<Point>,
    swiping: bool,
    cooldown: CooldownLatch,
}

impl SwipeRecognizer {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
            swiping: false,
            cooldown: CooldownLatch::new(config.cooldown),
        }
    }

    pub fn reconfigure(&mut self, config: SwipeConfig) {
        self.config = config;
        self.cooldown.set_duration(config.cooldown);
    }

    pub fn is_swiping(&self) -> bool {
        self.swiping
    }

    pub fn touch_start(&mut self, at: Point) {
        self.start = Some(at);
        self.swiping = false;
    }

    /// Returns `true` while the touch should be claimed as a horizontal
    /// swipe, i.e. the host should stop it from scrolling.
    pub fn touch_move(&mut self, at: Point) -> bool {
        let Some(start) = self.start else {
            return false;
        };
        let (dx, dy) = start.delta_from(at);
        if dx.abs() > dy.abs() && dx.abs() > self.config.lock_distance {
            self.swiping = true;
        }
        self.swiping
    }

    pub fn touch_end(&mut self, at: Point, now: Instant) -> Option<NavAction> {
        let start = self.start.take();
        self.swiping = false;

        let start = start?;
        if self.cooldown.is_engaged(now) {
            log::debug!("Swipe suppressed by cooldown");
            return None;
        }

        let (dx, dy) = start.delta_from(at);
        if dx.abs() <= dy.abs() || dx.abs() <= self.config.threshold {
            return None;
        }

        self.cooldown.engage(now);
        // Finger travelling left reveals the next page.
        Some(if dx > 0.0 {
            NavAction::Next
        } else {
            NavAction::Prev
        })
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.swiping = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn swipe(r: &mut SwipeRecognizer, from: (f64, f64), to: (f64, f64), now: Instant) -> Option<NavAction> {
        r.touch_start(Point::new(from.0, from.1));
        r.touch_move(Point::new(to.0, to.1));
        r.touch_end(Point::new(to.0, to.1), now)
    }

    #[test]
    fn leftward_swipe_goes_forward() {
        let mut r = SwipeRecognizer::new(SwipeConfig::default());
        let out = swipe(&mut r, (300.0, 200.0), (240.0, 195.0), Instant::now());
        assert_eq!(out, Some(NavAction::Next));
    }

    #[test]
    fn rightward_swipe_goes_back() {
        let mut r = SwipeRecognizer::new(SwipeConfig::default());
        let out = swipe(&mut r, (100.0, 200.0), (160.0, 205.0), Instant::now());
        assert_eq!(out, Some(NavAction::Prev));
    }

    #[test]
    fn short_or_vertical_drags_are_ignored() {
        let now = Instant::now();
        let mut r = SwipeRecognizer::new(SwipeConfig::default());
        assert_eq!(swipe(&mut r, (100.0, 100.0), (150.0, 100.0), now), None);
        assert_eq!(swipe(&mut r, (100.0, 100.0), (180.0, 190.0), now), None);
        // Neither attempt engaged the cooldown.
        assert_eq!(swipe(&mut r, (100.0, 100.0), (30.0, 100.0), now), Some(NavAction::Next));
    }

    #[test]
    fn second_swipe_within_cooldown_is_suppressed() {
        let t0 = Instant::now();
        let mut r = SwipeRecognizer::new(SwipeConfig::default());
        assert!(swipe(&mut r, (300.0, 200.0), (240.0, 195.0), t0).is_some());
        assert_eq!(swipe(&mut r, (300.0, 200.0), (240.0, 195.0), t0 + ms(100)), None);
        assert!(swipe(&mut r, (300.0, 200.0), (240.0, 195.0), t0 + ms(500)).is_some());
    }

    #[test]
    fn move_claims_touch_once_horizontal() {
        let mut r = SwipeRecognizer::new(SwipeConfig::default());
        r.touch_start(Point::new(100.0, 100.0));
        assert!(!r.touch_move(Point::new(95.0, 100.0)));
        assert!(!r.touch_move(Point::new(100.0, 130.0)));
        assert!(r.touch_move(Point::new(85.0, 102.0)));
        assert!(r.is_swiping());
        r.touch_end(Point::new(85.0, 102.0), Instant::now());
        assert!(!r.is_swiping());
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut r = SwipeRecognizer::new(SwipeConfig::default());
        assert!(!r.touch_move(Point::new(10.0, 10.0)));
        assert_eq!(r.touch_end(Point::new(500.0, 10.0), Instant::now()), None);
    }

    #[test]
    fn touch_at_screen_origin_still_counts() {
        let mut r = SwipeRecognizer::new(SwipeConfig::default());
        let out = swipe(&mut r, (0.0, 0.0), (80.0, 0.0), Instant::now());
        assert_eq!(out, Some(NavAction::Prev));
    }
}
