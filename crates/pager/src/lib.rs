//! Slide paging core: the page controller, its input adapters and the
//! decorative effects, independent of any toolkit.

pub mod config;
pub mod controller;
pub mod deck;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod input;
pub mod style;
pub mod surface;
pub mod timing;

pub use config::{EffectsConfig, NavigationConfig};
pub use controller::{Direction, NavOutcome, PageController};
pub use deck::{Deck, Input, Response};
pub use error::PagerError;
pub use geometry::{Point, Rect};
pub use input::{KeyMap, NavAction, NavKey};
pub use surface::{HandleKind, Surface};
