use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AxisError {
    #[error("invalid axis designator: `{0}` (expected `x` or `y`)")]
    InvalidAxis(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Existing ticks are not evenly spaced, so no single gap can be inferred.
    #[error("unable to determine tick gap: found {distinct} distinct gaps")]
    AmbiguousTickGap { distinct: usize },
}
