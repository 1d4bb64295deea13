use super::model::IndicatorStrip;
use super::{DOT_ACTIVE_SCALE, DOT_HIT_RADIUS, DOT_RADIUS, DOT_SPACING};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use pager::Point;
use palette::Srgba;
use std::f64::consts::PI;

/// Positions of the indicator dots, centred horizontally in the strip.
#[derive(Debug, Clone, Copy)]
pub struct DotLayout {
    count: usize,
    origin_x: f64,
    center_y: f64,
}

impl DotLayout {
    pub fn new(count: usize, width: f64, height: f64) -> Self {
        let span = DOT_SPACING * count.saturating_sub(1) as f64;
        Self {
            count,
            origin_x: (width - span) / 2.0,
            center_y: height / 2.0,
        }
    }

    pub fn center(&self, index: usize) -> Point {
        Point::new(self.origin_x + DOT_SPACING * index as f64, self.center_y)
    }

    /// Index of the dot under `p`, if any.
    pub fn hit(&self, p: Point) -> Option<usize> {
        (0..self.count).find(|&i| {
            let (dx, dy) = p.delta_from(self.center(i));
            dx.hypot(dy) <= DOT_HIT_RADIUS
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DotState {
    Active,
    Idle,
}

impl DotState {
    fn resolve(active: bool) -> Self {
        if active { Self::Active } else { Self::Idle }
    }

    fn color(&self, colors: &ThemeColors) -> Srgba<f64> {
        match self {
            Self::Active => colors.active,
            Self::Idle => colors.idle,
        }
    }

    fn radius(&self) -> f64 {
        match self {
            Self::Active => DOT_RADIUS * DOT_ACTIVE_SCALE,
            Self::Idle => DOT_RADIUS,
        }
    }
}

pub fn draw(
    cr: &Context,
    strip: &IndicatorStrip,
    width: f64,
    height: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let layout = DotLayout::new(strip.len(), width, height);

    for i in 0..strip.len() {
        let state = DotState::resolve(strip.is_active(i));
        let center = layout.center(i);

        let (r, g, b, a) = state.color(colors).into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.arc(center.x, center.y, state.radius(), 0.0, 2.0 * PI);
        cr.fill_preserve()?;

        let (r, g, b, a) = colors.outline.into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.set_line_width(1.0);
        cr.stroke()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_are_centred() {
        let layout = DotLayout::new(5, 400.0, 50.0);
        assert_eq!(layout.center(2), Point::new(200.0, 25.0));
        assert_eq!(layout.center(0).x, 200.0 - 2.0 * DOT_SPACING);
    }

    #[test]
    fn hit_maps_clicks_to_dots() {
        let layout = DotLayout::new(3, 300.0, 40.0);
        let c1 = layout.center(1);
        assert_eq!(layout.hit(c1), Some(1));
        assert_eq!(layout.hit(Point::new(c1.x + 8.0, c1.y - 3.0)), Some(1));
        assert_eq!(layout.hit(Point::new(5.0, 5.0)), None);
    }
}
