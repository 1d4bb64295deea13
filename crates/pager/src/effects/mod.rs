//! Decorative effects. None of these touch navigation state.

pub mod entrance;
pub mod hover;
pub mod parallax;
pub mod reveal;

pub use entrance::EntranceSequence;
pub use hover::hover_style;
pub use parallax::Parallax;
pub use reveal::RevealObserver;
