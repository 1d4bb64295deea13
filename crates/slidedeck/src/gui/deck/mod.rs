pub mod model;
pub mod view;

pub use model::{CardHandle, GtkSurface, IndicatorStrip, SlidePanel, build_slides};
pub use view::{DotLayout, draw};

pub const DOT_RADIUS: f64 = 5.0;
pub const DOT_ACTIVE_SCALE: f64 = 1.5;
pub const DOT_SPACING: f64 = 26.0; // center to center
pub const DOT_HIT_RADIUS: f64 = 12.0; // click tolerance
pub const DOT_STRIP_HEIGHT: i32 = 56;
pub const CONTENT_MARGIN: i32 = 64;
