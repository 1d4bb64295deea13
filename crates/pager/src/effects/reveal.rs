use crate::config::EffectsConfig;
use crate::geometry::{Insets, Point, Rect};
use crate::style::{Easing, InlineStyle, Transform, Transition};
use std::collections::HashSet;
use std::time::Duration;

/// Fires once per target, the first time enough of it is inside the
/// (margin-adjusted) root viewport.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f64,
    margin: Insets,
    duration: Duration,
    revealed: HashSet<usize>,
}

impl RevealObserver {
    pub fn new(threshold: f64, margin: Insets, duration: Duration) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            margin,
            duration,
            revealed: HashSet::new(),
        }
    }

    pub fn from_config(config: &EffectsConfig) -> Self {
        Self::new(
            config.reveal_threshold,
            config.reveal_margin,
            config.reveal_duration,
        )
    }

    pub fn is_revealed(&self, target: usize) -> bool {
        self.revealed.contains(&target)
    }

    /// Fraction of `target` visible inside `root` after applying the margin.
    pub fn visible_ratio(&self, root: Rect, target: Rect) -> f64 {
        let root = root.expand(self.margin);
        if target.area() == 0.0 {
            return if root.contains(Point::new(target.x, target.y)) {
                1.0
            } else {
                0.0
            };
        }
        root.intersection(&target)
            .map_or(0.0, |hit| hit.area() / target.area())
    }

    /// Returns targets that crossed the threshold for the first time.
    pub fn observe<I>(&mut self, root: Rect, targets: I) -> Vec<usize>
    where
        I: IntoIterator<Item = (usize, Rect)>,
    {
        let mut fresh = Vec::new();
        for (id, rect) in targets {
            if self.revealed.contains(&id) {
                continue;
            }
            let ratio = self.visible_ratio(root, rect);
            if ratio > 0.0 && ratio >= self.threshold {
                self.revealed.insert(id);
                fresh.push(id);
            }
        }
        fresh
    }

    /// The fade-in-up applied to a freshly revealed target.
    pub fn reveal_style(&self) -> InlineStyle {
        InlineStyle::transform(Transform::TranslateYPx(0.0))
            .with_opacity(1.0)
            .with_transition(Transition::all(self.duration, Easing::EaseOut))
    }
}
