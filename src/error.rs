//! # Error types
//!
//! Every failure is reported synchronously at the call that violates a precondition; none are
//! recoverable internally.
use std::error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Ways in which constructing or combining big integers can fail.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A string could not be read as a decimal integer.
    ///
    /// The payload describes the rule that was violated.
    InvalidFormat(String),
    /// The divisor of a division or modulus was zero.
    DivisionByZero,
    /// The exponent was negative.
    NegativeExponent,
    /// A value's digit storage was empty.
    ///
    /// Unreachable as long as the normalization invariant holds.
    EmptyState,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFormat(reason) => write!(f, "Invalid decimal integer: {}", reason),
            Error::DivisionByZero => f.write_str("Division or modulus by zero"),
            Error::NegativeExponent => f.write_str("Negative exponent"),
            Error::EmptyState => f.write_str("Digit storage is empty"),
        }
    }
}

impl error::Error for Error {}
