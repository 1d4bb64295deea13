use crate::geometry::Insets;
use serde::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};
use std::time::Duration;

pub const DEFAULT_TRANSITION_MS: u64 = 800;
pub const DEFAULT_WHEEL_DEBOUNCE_MS: u64 = 100;
pub const DEFAULT_SWIPE_COOLDOWN_MS: u64 = 500;
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;
pub const DEFAULT_SWIPE_LOCK_DISTANCE: f64 = 10.0;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// How long transient slide styling is kept before cleanup.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "transition_ms")]
    pub transition: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "wheel_debounce_ms")]
    pub wheel_debounce: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "swipe_cooldown_ms")]
    pub swipe_cooldown: Duration,
    /// Minimum horizontal travel (px) for a completed swipe.
    pub swipe_threshold: f64,
    /// Horizontal travel (px) after which a touch is treated as a swipe and
    /// scrolling is suppressed.
    pub swipe_lock_distance: f64,
    pub start_page: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(DEFAULT_TRANSITION_MS),
            wheel_debounce: Duration::from_millis(DEFAULT_WHEEL_DEBOUNCE_MS),
            swipe_cooldown: Duration::from_millis(DEFAULT_SWIPE_COOLDOWN_MS),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            swipe_lock_distance: DEFAULT_SWIPE_LOCK_DISTANCE,
            start_page: 0,
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub parallax_rate: f64,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "entrance_stagger_ms")]
    pub entrance_stagger: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "entrance_settle_ms")]
    pub entrance_settle: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "entrance_duration_ms")]
    pub entrance_duration: Duration,
    pub entrance_offset: f64,
    pub reveal_threshold: f64,
    pub reveal_margin: Insets,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "reveal_duration_ms")]
    pub reveal_duration: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "hover_duration_ms")]
    pub hover_duration: Duration,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            parallax_rate: 0.5,
            entrance_stagger: Duration::from_millis(100),
            entrance_settle: Duration::from_millis(50),
            entrance_duration: Duration::from_millis(600),
            entrance_offset: 30.0,
            reveal_threshold: 0.1,
            reveal_margin: Insets::bottom(-50.0),
            reveal_duration: Duration::from_millis(800),
            hover_duration: Duration::from_millis(400),
        }
    }
}
