//! Transient inline style applied on top of an element's stylesheet rules.
//!
//! Percent translations are kept symbolic until rendered, because the host
//! styling engine only understands absolute lengths.

use std::fmt::Write;
use std::time::Duration;
use strum::Display as StrumDisplay;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    None,
    /// Horizontal offset as a percentage of the element's own width.
    TranslateXPercent(f64),
    TranslateYPx(f64),
}

impl Transform {
    pub fn to_css(self, width: f64) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::TranslateXPercent(pct) => format!("translate({}px, 0)", width * pct / 100.0),
            Self::TranslateYPx(px) => format!("translate(0, {}px)", px),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum TransitionProperty {
    All,
    Transform,
    Opacity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Material "standard" curve used for hover and slide transitions.
    pub const STANDARD: Self = Self::CubicBezier(0.4, 0.0, 0.2, 1.0);

    fn to_css(self) -> String {
        match self {
            Self::EaseOut => "ease-out".to_string(),
            Self::CubicBezier(a, b, c, d) => format!("cubic-bezier({a}, {b}, {c}, {d})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub property: TransitionProperty,
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn all(duration: Duration, easing: Easing) -> Self {
        Self {
            property: TransitionProperty::All,
            duration,
            easing,
        }
    }

    fn to_css(self) -> String {
        format!(
            "{} {}ms {}",
            self.property,
            self.duration.as_millis(),
            self.easing.to_css()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InlineStyle {
    pub transform: Option<Transform>,
    pub opacity: Option<f64>,
    pub transition: Option<Transition>,
}

impl InlineStyle {
    pub fn transform(transform: Transform) -> Self {
        Self {
            transform: Some(transform),
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.transform.is_none() && self.opacity.is_none() && self.transition.is_none()
    }

    /// Overlays every field set in `other`, leaving the rest untouched.
    pub fn merge(&mut self, other: &InlineStyle) {
        if other.transform.is_some() {
            self.transform = other.transform;
        }
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if other.transition.is_some() {
            self.transition = other.transition;
        }
    }

    /// Renders the declarations as a CSS block body. `width` resolves percent offsets.
    pub fn to_css(&self, width: f64) -> String {
        let mut css = String::new();
        if let Some(t) = self.transform {
            let _ = write!(css, "transform: {}; ", t.to_css(width));
        }
        if let Some(o) = self.opacity {
            let _ = write!(css, "opacity: {}; ", o.clamp(0.0, 1.0));
        }
        if let Some(t) = self.transition {
            let _ = write!(css, "transition: {}; ", t.to_css());
        }
        css.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_offset_resolves_against_width() {
        let style = InlineStyle::transform(Transform::TranslateXPercent(-100.0));
        assert_eq!(style.to_css(1280.0), "transform: translate(-1280px, 0);");
    }

    #[test]
    fn merge_keeps_unset_fields() {
        let mut base = InlineStyle::transform(Transform::TranslateYPx(30.0)).with_opacity(0.0);
        base.merge(&InlineStyle::default().with_opacity(1.0));
        assert_eq!(base.transform, Some(Transform::TranslateYPx(30.0)));
        assert_eq!(base.opacity, Some(1.0));
    }

    #[test]
    fn renders_full_declaration_block() {
        let style = InlineStyle::transform(Transform::None)
            .with_opacity(1.0)
            .with_transition(Transition::all(Duration::from_millis(400), Easing::STANDARD));
        assert_eq!(
            style.to_css(0.0),
            "transform: none; opacity: 1; transition: all 400ms cubic-bezier(0.4, 0, 0.2, 1);"
        );
    }

    #[test]
    fn empty_style_renders_nothing() {
        assert!(InlineStyle::default().is_empty());
        assert_eq!(InlineStyle::default().to_css(100.0), "");
    }
}
