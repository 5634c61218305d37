use thiserror::Error;

/// Errors returned by mapping configuration and the checked mapping
/// operations.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("scale is too low, check that scale >= -10")]
    ScaleTooLow,
    #[error("scale is too high, check that scale <= 20")]
    ScaleTooHigh,
    #[error("the value must be positive and finite")]
    InvalidValue,
    #[error("the bucket boundary is too small to be represented")]
    Underflow,
    #[error("the bucket boundary is too large to be represented")]
    Overflow,
}
