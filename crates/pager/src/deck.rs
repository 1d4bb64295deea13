use crate::config::NavigationConfig;
use crate::controller::{NavOutcome, PageController};
use crate::error::PagerError;
use crate::geometry::Point;
use crate::input::{KeyMap, NavAction, NavKey, SwipeConfig, SwipeRecognizer, WheelNavigator};
use crate::surface::Surface;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Key(NavKey),
    Wheel { delta_y: f64 },
    TouchStart(Point),
    TouchMove(Point),
    TouchEnd(Point),
    TouchCancel,
    IndicatorClick(usize),
    Action(NavAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    pub outcome: Option<NavOutcome>,
    /// The host should keep this touch from scrolling.
    pub capture_touch: bool,
}

impl Response {
    fn navigated(outcome: NavOutcome) -> Self {
        Self {
            outcome: Some(outcome),
            capture_touch: false,
        }
    }
}

/// The page controller together with every input adapter that feeds it.
/// Built once and handed to the host's event handlers by reference.
pub struct Deck<S: Surface> {
    controller: PageController<S>,
    keys: KeyMap,
    wheel: WheelNavigator,
    swipe: SwipeRecognizer,
}

impl<S: Surface> Deck<S> {
    pub fn new(surface: S, config: &NavigationConfig, keys: KeyMap) -> Result<Self, PagerError> {
        let mut controller = PageController::new(surface, config.start_page, config.transition)?;
        controller.initialize();

        Ok(Self {
            controller,
            keys,
            wheel: WheelNavigator::new(config.wheel_debounce),
            swipe: SwipeRecognizer::new(SwipeConfig::from(config)),
        })
    }

    pub fn controller(&self) -> &PageController<S> {
        &self.controller
    }

    pub fn current(&self) -> usize {
        self.controller.current()
    }

    pub fn total(&self) -> usize {
        self.controller.total()
    }

    pub fn surface(&self) -> &S {
        self.controller.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.controller.surface_mut()
    }

    /// Applies new timings and bindings. The page count and current page are kept.
    pub fn reconfigure(&mut self, config: &NavigationConfig, keys: KeyMap) {
        self.controller.set_transition(config.transition);
        self.wheel.set_delay(config.wheel_debounce);
        self.swipe.reconfigure(SwipeConfig::from(config));
        self.keys = keys;
    }

    pub fn handle(&mut self, input: Input, now: Instant) -> Response {
        match input {
            Input::Key(key) => self
                .keys
                .resolve(key)
                .map(|action| Response::navigated(self.apply(action, now)))
                .unwrap_or_default(),
            Input::Wheel { delta_y } => {
                self.wheel.on_wheel(delta_y, now);
                Response::default()
            }
            Input::TouchStart(at) => {
                self.swipe.touch_start(at);
                Response::default()
            }
            Input::TouchMove(at) => Response {
                outcome: None,
                capture_touch: self.swipe.touch_move(at),
            },
            Input::TouchEnd(at) => self
                .swipe
                .touch_end(at, now)
                .map(|action| Response::navigated(self.apply(action, now)))
                .unwrap_or_default(),
            Input::TouchCancel => {
                self.swipe.cancel();
                Response::default()
            }
            Input::IndicatorClick(index) => {
                let target = i64::try_from(index).unwrap_or(i64::MAX);
                Response::navigated(self.controller.go_to_page(target, now))
            }
            Input::Action(action) => Response::navigated(self.apply(action, now)),
        }
    }

    pub fn apply(&mut self, action: NavAction, now: Instant) -> NavOutcome {
        match action {
            NavAction::Next => self.controller.next_page(now),
            NavAction::Prev => self.controller.prev_page(now),
            NavAction::First => self.controller.go_to_page(0, now),
            NavAction::Last => {
                let last = self.controller.total() as i64 - 1;
                self.controller.go_to_page(last, now)
            }
            NavAction::GoTo(target) => self.controller.go_to_page(target, now),
        }
    }

    /// Fires debounced wheel navigation and due transition cleanups.
    pub fn poll(&mut self, now: Instant) -> Option<NavOutcome> {
        let outcome = self.wheel.poll(now).map(|action| self.apply(action, now));
        self.controller.poll(now);
        outcome
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        [self.wheel.deadline(), self.controller.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::IgnoreReason;
    use crate::surface::fake::FakeSurface;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn deck(pages: usize) -> Deck<FakeSurface> {
        Deck::new(
            FakeSurface::new(pages),
            &NavigationConfig::default(),
            KeyMap::default(),
        )
        .unwrap()
    }

    fn moves(outcomes: &[Option<NavOutcome>]) -> usize {
        outcomes.iter().flatten().filter(|o| o.moved()).count()
    }

    #[test]
    fn starts_on_configured_page() {
        let cfg = NavigationConfig {
            start_page: 3,
            ..NavigationConfig::default()
        };
        let d = Deck::new(FakeSurface::new(5), &cfg, KeyMap::default()).unwrap();
        assert_eq!(d.current(), 3);
        assert_eq!(d.surface().active_pages(), vec![3]);
        assert_eq!(d.surface().active_indicators(), vec![3]);
    }

    #[test]
    fn arrow_keys_navigate() {
        let now = Instant::now();
        let mut d = deck(5);
        d.handle(Input::Key(NavKey::ArrowRight), now);
        d.handle(Input::Key(NavKey::ArrowDown), now);
        d.handle(Input::Key(NavKey::ArrowLeft), now);
        assert_eq!(d.current(), 1);
        d.handle(Input::Key(NavKey::ArrowUp), now);
        d.handle(Input::Key(NavKey::ArrowUp), now);
        assert_eq!(d.current(), 0);
        assert_eq!(d.handle(Input::Key(NavKey::Home), now), Response::default());
    }

    #[test]
    fn wheel_burst_pages_once() {
        let t0 = Instant::now();
        let mut d = deck(5);
        let mut outcomes = Vec::new();
        for at in [0, 25, 50] {
            let now = t0 + ms(at);
            outcomes.push(d.handle(Input::Wheel { delta_y: 40.0 }, now).outcome);
            outcomes.push(d.poll(now));
        }
        assert_eq!(d.next_deadline(), Some(t0 + ms(150)));
        outcomes.push(d.poll(t0 + ms(150)));
        outcomes.push(d.poll(t0 + ms(2000)));

        assert_eq!(moves(&outcomes), 1);
        assert_eq!(d.current(), 1);
    }

    fn swipe_left(d: &mut Deck<FakeSurface>, now: Instant) -> Option<NavOutcome> {
        d.handle(Input::TouchStart(Point::new(300.0, 400.0)), now);
        let claimed = d.handle(Input::TouchMove(Point::new(240.0, 395.0)), now);
        assert!(claimed.capture_touch);
        d.handle(Input::TouchEnd(Point::new(240.0, 395.0)), now).outcome
    }

    #[test]
    fn swipe_then_immediate_swipe_is_suppressed() {
        let t0 = Instant::now();
        let mut d = deck(5);
        assert!(swipe_left(&mut d, t0).is_some_and(|o| o.moved()));
        assert_eq!(d.current(), 1);
        assert_eq!(swipe_left(&mut d, t0 + ms(200)), None);
        assert_eq!(d.current(), 1);
        assert!(swipe_left(&mut d, t0 + ms(600)).is_some_and(|o| o.moved()));
        assert_eq!(d.current(), 2);
    }

    #[test]
    fn indicator_clicks_select_directly() {
        let now = Instant::now();
        let mut d = deck(4);
        let outcome = d.handle(Input::IndicatorClick(3), now).outcome;
        assert!(outcome.is_some_and(|o| o.moved()));
        assert_eq!(d.current(), 3);

        let missing = d.handle(Input::IndicatorClick(9), now).outcome;
        assert_eq!(missing, Some(NavOutcome::Ignored(IgnoreReason::OutOfRange(9))));
        assert_eq!(d.surface().active_indicators(), vec![3]);
    }

    #[test]
    fn first_and_last_actions() {
        let now = Instant::now();
        let mut d = deck(6);
        d.apply(NavAction::Last, now);
        assert_eq!(d.current(), 5);
        d.apply(NavAction::First, now);
        assert_eq!(d.current(), 0);
        d.apply(NavAction::GoTo(-4), now);
        assert_eq!(d.current(), 0);
    }

    #[test]
    fn reconfigure_rebinds_keys_and_timings() {
        let t0 = Instant::now();
        let mut d = deck(3);
        let cfg = NavigationConfig {
            wheel_debounce: ms(300),
            ..NavigationConfig::default()
        };
        let keys = KeyMap {
            last: vec![NavKey::End],
            ..KeyMap::default()
        };
        d.reconfigure(&cfg, keys);

        d.handle(Input::Key(NavKey::End), t0);
        assert_eq!(d.current(), 2);

        d.handle(Input::Wheel { delta_y: -1.0 }, t0);
        assert_eq!(d.poll(t0 + ms(100)), None);
        assert!(d.poll(t0 + ms(300)).is_some_and(|o| o.moved()));
        assert_eq!(d.current(), 1);
    }

    #[test]
    fn poll_runs_transition_cleanup() {
        let t0 = Instant::now();
        let mut d = deck(3);
        d.apply(NavAction::Next, t0);
        assert!(d.surface().outgoing[0]);
        assert_eq!(d.next_deadline(), Some(t0 + ms(800)));
        d.poll(t0 + ms(800));
        assert!(!d.surface().outgoing[0]);
        assert_eq!(d.next_deadline(), None);
    }
}
