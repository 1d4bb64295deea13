use crate::style::{Easing, InlineStyle, Transition};
use std::time::Duration;

/// Style merged onto a card when the pointer enters it.
pub fn hover_style(duration: Duration) -> InlineStyle {
    InlineStyle::default().with_transition(Transition::all(duration, Easing::STANDARD))
}
