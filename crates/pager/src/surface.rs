//! The rendering collaborator the controller drives.

use crate::style::InlineStyle;

/// Which of the two parallel handle sequences an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Page,
    Indicator,
}

/// Externally owned page panels and indicator dots.
///
/// Indices are always in `0..page_count()`; the controller never calls
/// with anything else.
pub trait Surface {
    fn page_count(&self) -> usize;

    fn indicator_count(&self) -> usize;

    fn set_active(&mut self, kind: HandleKind, index: usize, active: bool);

    /// Transient marker on the page that is sliding out forwards.
    fn set_outgoing(&mut self, page: usize, outgoing: bool);

    fn set_style(&mut self, page: usize, style: &InlineStyle);

    fn clear_style(&mut self, page: usize);

    /// Forces pending style changes on `page` to be resolved, so the next
    /// change animates instead of jumping.
    fn flush_layout(&mut self, page: usize);
}
