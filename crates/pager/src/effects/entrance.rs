//! Staggered fade-up of cards after the deck is shown.
//!
//! Card `i` is hidden at `start + i * stagger`, then released to its resting
//! position `settle` later; the transition set in the hidden step animates it.

use crate::config::EffectsConfig;
use crate::style::{Easing, InlineStyle, Transform, Transition};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Hide,
    Show,
}

#[derive(Debug, Clone)]
pub struct EntranceSequence {
    hidden: InlineStyle,
    shown: InlineStyle,
    queue: Vec<(Instant, usize, Step)>,
}

impl EntranceSequence {
    pub fn new(count: usize, config: &EffectsConfig, start: Instant) -> Self {
        let hidden = InlineStyle::transform(Transform::TranslateYPx(config.entrance_offset))
            .with_opacity(0.0)
            .with_transition(Transition::all(config.entrance_duration, Easing::EaseOut));
        let shown = InlineStyle::transform(Transform::TranslateYPx(0.0)).with_opacity(1.0);

        let mut queue = Vec::with_capacity(count * 2);
        for i in 0..count {
            let at = start + config.entrance_stagger * i as u32;
            queue.push((at, i, Step::Hide));
            queue.push((at + config.entrance_settle, i, Step::Show));
        }
        queue.sort_by_key(|(at, i, step)| (*at, *step == Step::Show, *i));

        Self {
            hidden,
            shown,
            queue,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.first().map(|(at, _, _)| *at)
    }

    /// Styles to apply at `now`, in schedule order.
    pub fn poll(&mut self, now: Instant) -> Vec<(usize, InlineStyle)> {
        let due = self.queue.partition_point(|(at, _, _)| *at <= now);
        self.queue
            .drain(..due)
            .map(|(_, i, step)| match step {
                Step::Hide => (i, self.hidden),
                Step::Show => (i, self.shown),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn cards_are_staggered_then_settled() {
        let t0 = Instant::now();
        let cfg = EffectsConfig::default();
        let mut seq = EntranceSequence::new(3, &cfg, t0);

        let first = seq.poll(t0);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].0, 0);
        assert_eq!(first[0].1.opacity, Some(0.0));
        assert_eq!(first[0].1.transform, Some(Transform::TranslateYPx(30.0)));

        assert_eq!(seq.next_deadline(), Some(t0 + ms(50)));
        let settled = seq.poll(t0 + ms(50));
        assert_eq!(settled, vec![(0, InlineStyle::transform(Transform::TranslateYPx(0.0)).with_opacity(1.0))]);

        let rest = seq.poll(t0 + ms(250));
        let order: Vec<_> = rest.iter().map(|(i, s)| (*i, s.opacity)).collect();
        assert_eq!(
            order,
            vec![(1, Some(0.0)), (1, Some(1.0)), (2, Some(0.0)), (2, Some(1.0))]
        );
        assert!(seq.is_finished());
        assert_eq!(seq.next_deadline(), None);
    }

    #[test]
    fn hidden_step_carries_transition() {
        let t0 = Instant::now();
        let mut seq = EntranceSequence::new(1, &EffectsConfig::default(), t0);
        let (_, hidden) = seq.poll(t0)[0];
        assert_eq!(
            hidden.transition,
            Some(Transition::all(ms(600), Easing::EaseOut))
        );
    }

    #[test]
    fn empty_sequence_is_finished() {
        let seq = EntranceSequence::new(0, &EffectsConfig::default(), Instant::now());
        assert!(seq.is_finished());
        assert_eq!(seq.next_deadline(), None);
    }
}
