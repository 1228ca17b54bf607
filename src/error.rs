use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
    #[error("No observations recorded yet")]
    Uninitialized,
}
