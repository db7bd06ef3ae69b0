use thiserror::Error;

/// Convenience alias for construction results.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Construction-time failures. A signal either comes back fully valid or not
/// at all; no operation after construction returns an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignalError {
    #[error("invalid domain: n_min {n_min} exceeds n_max {n_max}")]
    InvalidDomain { n_min: i64, n_max: i64 },

    #[error("domain bounds need exactly 2 elements, got {len}")]
    BoundsArity { len: usize },

    #[error("cannot infer a domain from an empty sample sequence")]
    EmptySamples,
}
