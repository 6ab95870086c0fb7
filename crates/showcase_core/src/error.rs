use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel roster must not be empty")]
    EmptyRoster,
    #[error("carousel page size must be at least 1")]
    InvalidPageSize,
    #[error("page {page} is outside 0..{page_count}")]
    PageOutOfRange { page: usize, page_count: usize },
    #[error("carousel has been disposed")]
    Disposed,
}
