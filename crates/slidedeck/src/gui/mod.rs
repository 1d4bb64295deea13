pub mod app;
pub mod deck;
pub mod keys;
pub mod theme;
pub mod window;
