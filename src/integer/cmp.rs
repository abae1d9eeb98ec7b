//! # Comparison
//!
//! A total order over sign and magnitude. Equality and every comparison operator derive from
//! the single digit scan in [`Ord::cmp`].
use std::cmp::Ordering;

use crate::integer::{magnitude, BigInt};
use crate::sign::Sign;

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        // Comparing effective signs keeps two representations of zero equal even if a negative
        // zero were to slip past normalization.
        match (self.sign(), other.sign()) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => magnitude::cmp(&self.digits, &other.digits),
            (Sign::Negative, Sign::Negative) => {
                // More digits means a larger magnitude, which is smaller below zero.
                magnitude::cmp(&self.digits, &other.digits).reverse()
            },
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}
