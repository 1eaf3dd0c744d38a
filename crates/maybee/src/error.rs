//! Error conditions raised by `Maybe` construction, access and casting.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaybeError {
    /// A present value was requested from a null representation.
    #[error("cannot build a present maybe from a null value")]
    NullValue,
    /// Direct access on an absent value.
    #[error("maybe value is empty")]
    Empty,
    #[error("maybe value is not of type `{expected}`")]
    TypeMismatch { expected: &'static str },
}

/// Returned when a serialization format name is not recognised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown maybe serialization format `{0}` (expected `nullable` or `array`)")]
pub struct ParseFormatError(pub String);
