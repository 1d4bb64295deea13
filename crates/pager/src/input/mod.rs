//! Adapters that turn raw host input into navigation actions.

pub mod keyboard;
pub mod swipe;
pub mod wheel;

pub use keyboard::{KeyMap, NavKey};
pub use swipe::{SwipeConfig, SwipeRecognizer};
pub use wheel::WheelNavigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Prev,
    First,
    Last,
    GoTo(i64),
}
