use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("min_run must be positive, got {0}")]
    InvalidMinRun(usize),
    #[error("unknown sorting algorithm: {0:?}")]
    UnknownAlgorithm(String),
}
