//! # Rust Exact Big Integers
//!
//! Arbitrary precision signed integer arithmetic over a decimal digit representation.
//!
//! The [`BigInt`] type owns a sign and a sequence of decimal digits, least significant digit
//! first. Values are constructed from native integers or decimal strings and combined through
//! the usual arithmetic and comparison operators; exponentiation is provided by [`pow`].
pub use error::Error;
pub use integer::BigInt;
pub use integer::pow;
pub use sign::Sign;

pub mod error;
pub mod integer;
pub mod sign;
