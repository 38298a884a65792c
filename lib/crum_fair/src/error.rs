use thiserror::Error;

pub type Result<T> = std::result::Result<T, FairError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FairError {
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("empty range: min {min} must be below max {max}")]
    EmptyRange { min: i64, max: i64 },

    #[error("range [{min}, {max}) is wider than the 63-bit sampler")]
    RangeTooWide { min: i64, max: i64 },

    #[error("commitment mismatch: shown {expected}, recomputed {actual}")]
    CommitmentMismatch { expected: String, actual: String },

    #[error("revealed number {number} is outside the announced range [{lower}, {range})")]
    OutOfRange { number: i64, lower: i64, range: i64 },
}
