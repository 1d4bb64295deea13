use thiserror::Error;

/// Construction-time violations of the deck invariants. Navigation itself
/// never fails; bad targets are ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagerError {
    #[error("A deck needs at least one page")]
    NoPages,
    #[error("Page count ({pages}) and indicator count ({indicators}) differ")]
    CountMismatch { pages: usize, indicators: usize },
    #[error("Start page {start} is outside 0..{total}")]
    StartOutOfRange { start: usize, total: usize },
}
