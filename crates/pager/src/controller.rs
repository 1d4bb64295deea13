use crate::error::PagerError;
use crate::style::{InlineStyle, Transform};
use crate::surface::{HandleKind, Surface};
use derive_more::{Display, From, Into};
use std::time::{Duration, Instant};

/// Monotonic tag handed to every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, From, Into)]
pub struct Generation(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    OutOfRange(i64),
    AlreadyCurrent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Moved {
        from: usize,
        to: usize,
        direction: Direction,
    },
    Ignored(IgnoreReason),
}

impl NavOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Moved { from, to, .. } => format!("{} -> {}", from, to),
            Self::Ignored(IgnoreReason::OutOfRange(t)) => format!("ignored target {}", t),
            Self::Ignored(IgnoreReason::AlreadyCurrent) => "already current".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Cleanup {
    due: Instant,
    generation: Generation,
    outgoing: usize,
    incoming: usize,
}

/// Owns the current page index and keeps pages and indicators in step with it.
pub struct PageController<S: Surface> {
    surface: S,
    current: usize,
    total: usize,
    transition: Duration,
    generation: Generation,
    /// Generation that last put transient styling on each page.
    style_owner: Vec<Option<Generation>>,
    cleanups: Vec<Cleanup>,
}

impl<S: Surface> PageController<S> {
    pub fn new(surface: S, start: usize, transition: Duration) -> Result<Self, PagerError> {
        let (pages, indicators) = (surface.page_count(), surface.indicator_count());
        if pages == 0 {
            return Err(PagerError::NoPages);
        }
        if pages != indicators {
            return Err(PagerError::CountMismatch { pages, indicators });
        }
        if start >= pages {
            return Err(PagerError::StartOutOfRange {
                start,
                total: pages,
            });
        }

        Ok(Self {
            surface,
            current: start,
            total: pages,
            transition,
            generation: Generation::default(),
            style_owner: vec![None; pages],
            cleanups: Vec::new(),
        })
    }

    /// Marks the starting page and its indicator active, everything else inactive.
    pub fn initialize(&mut self) {
        for i in 0..self.total {
            let on = i == self.current;
            self.surface.set_active(HandleKind::Page, i, on);
            self.surface.set_active(HandleKind::Indicator, i, on);
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn set_transition(&mut self, transition: Duration) {
        self.transition = transition;
    }

    pub fn go_to_page(&mut self, target: i64, now: Instant) -> NavOutcome {
        let Some(target) = usize::try_from(target).ok().filter(|&t| t < self.total) else {
            log::debug!("Ignoring navigation to page {} of {}", target, self.total);
            return NavOutcome::Ignored(IgnoreReason::OutOfRange(target));
        };
        if target == self.current {
            return NavOutcome::Ignored(IgnoreReason::AlreadyCurrent);
        }

        let from = self.current;
        self.generation = Generation(self.generation.0 + 1);
        let generation = self.generation;

        self.surface.set_active(HandleKind::Page, from, false);
        self.surface.set_active(HandleKind::Indicator, from, false);

        let direction = if target > from {
            self.surface.set_outgoing(from, true);
            self.surface.set_style(
                target,
                &InlineStyle::transform(Transform::TranslateXPercent(100.0)),
            );
            Direction::Forward
        } else {
            // Both panels start from the leading edge when going back.
            let offset = InlineStyle::transform(Transform::TranslateXPercent(-100.0));
            self.surface.set_style(from, &offset);
            self.surface.set_style(target, &offset);
            Direction::Backward
        };
        self.style_owner[from] = Some(generation);
        self.style_owner[target] = Some(generation);

        self.current = target;

        self.surface.flush_layout(target);

        self.surface.set_active(HandleKind::Page, target, true);
        self.surface.set_style(
            target,
            &InlineStyle::transform(Transform::TranslateXPercent(0.0)),
        );
        self.surface.set_active(HandleKind::Indicator, target, true);

        self.cleanups.push(Cleanup {
            due: now + self.transition,
            generation,
            outgoing: from,
            incoming: target,
        });

        log::debug!("Page {} -> {} ({:?}, gen {})", from, target, direction, generation);
        NavOutcome::Moved {
            from,
            to: target,
            direction,
        }
    }

    pub fn next_page(&mut self, now: Instant) -> NavOutcome {
        if self.current + 1 >= self.total {
            return NavOutcome::Ignored(IgnoreReason::OutOfRange(self.current as i64 + 1));
        }
        self.go_to_page(self.current as i64 + 1, now)
    }

    pub fn prev_page(&mut self, now: Instant) -> NavOutcome {
        if self.current == 0 {
            return NavOutcome::Ignored(IgnoreReason::OutOfRange(-1));
        }
        self.go_to_page(self.current as i64 - 1, now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.cleanups.iter().map(|c| c.due).min()
    }

    /// Runs every cleanup due at `now`. Returns how many fired.
    pub fn poll(&mut self, now: Instant) -> usize {
        let (due, pending): (Vec<_>, Vec<_>) =
            self.cleanups.drain(..).partition(|c| c.due <= now);
        self.cleanups = pending;

        for cleanup in &due {
            self.run_cleanup(cleanup);
        }
        due.len()
    }

    fn run_cleanup(&mut self, cleanup: &Cleanup) {
        for page in [cleanup.outgoing, cleanup.incoming] {
            if self.style_owner[page] != Some(cleanup.generation) {
                continue;
            }
            // A quick reversal makes the old outgoing page the new incoming one.
            self.surface.set_outgoing(page, false);
            self.surface.clear_style(page);
            self.style_owner[page] = None;
        }
    }
}
