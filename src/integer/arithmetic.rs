//! # Arithmetic
//!
//! Compound assignment with a borrowed right hand side carries the algorithms; every other
//! operator shape copies and delegates to it. Addition and subtraction share a single sign
//! dispatch over unsigned magnitudes, so the carry and borrow loops exist only once.
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use num::{One, Zero};
use smallvec::SmallVec;

use crate::error::Error;
use crate::integer::{magnitude, BigInt, Digit, DigitVec};
use crate::sign::Sign;

impl BigInt {
    /// Add or subtract magnitudes, with the result sign decided by the dominant operand.
    ///
    /// Addition passes the right hand side's sign as is; subtraction passes it negated. Same
    /// signs add magnitudes; differing signs subtract the smaller magnitude from the larger one,
    /// and the result takes the sign of whichever operand had the greater magnitude.
    fn combine(&mut self, rhs_sign: Sign, rhs_digits: &[Digit]) {
        if self.sign == rhs_sign {
            magnitude::add(&mut self.digits, rhs_digits);
        } else {
            match magnitude::cmp(&self.digits, rhs_digits) {
                Ordering::Equal => self.set_zero(),
                Ordering::Greater => magnitude::sub(&mut self.digits, rhs_digits),
                Ordering::Less => {
                    // The subtrahend exceeds the minuend: subtract in swapped order and flip.
                    let mut swapped: DigitVec = SmallVec::from_slice(rhs_digits);
                    magnitude::sub(&mut swapped, &self.digits);
                    self.digits = swapped;
                    self.sign = rhs_sign;
                }
            }
        }

        self.normalize();
    }

    /// Quotient and remainder of truncating division, in one pass.
    ///
    /// The quotient is rounded towards zero and carries the sign product; the sign of a nonzero
    /// remainder matches the dividend, so `a == (a / b) * b + a % b` for every nonzero `b`.
    ///
    /// # Errors
    ///
    /// When `rhs` is zero.
    pub fn try_div_rem(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (quotient_digits, remainder_digits) = magnitude::div_rem(&self.digits, &rhs.digits);
        let mut quotient = Self {
            digits: quotient_digits,
            sign: self.sign * rhs.sign,
        };
        let mut remainder = Self {
            digits: remainder_digits,
            sign: self.sign,
        };
        quotient.normalize();
        remainder.normalize();

        Ok((quotient, remainder))
    }

    /// Truncating division.
    ///
    /// # Errors
    ///
    /// When `rhs` is zero.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, Error> {
        self.try_div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Remainder of truncating division; its sign follows the dividend.
    ///
    /// # Errors
    ///
    /// When `rhs` is zero.
    pub fn try_rem(&self, rhs: &Self) -> Result<Self, Error> {
        self.try_div_rem(rhs).map(|(_, remainder)| remainder)
    }

    /// Add one to the value.
    pub fn increment(&mut self) {
        *self += &BigInt::one();
    }

    /// Subtract one from the value.
    pub fn decrement(&mut self) {
        *self -= &BigInt::one();
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        self.combine(rhs.sign, &rhs.digits);
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: BigInt) {
        self.combine(rhs.sign, &rhs.digits);
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        // Subtraction is addition of the negated right hand side.
        self.combine(-rhs.sign, &rhs.digits);
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: BigInt) {
        self.combine(-rhs.sign, &rhs.digits);
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        self.digits = magnitude::mul(&self.digits, &rhs.digits);
        self.sign = self.sign * rhs.sign;
        self.normalize();
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: BigInt) {
        *self *= &rhs;
    }
}

impl DivAssign<&BigInt> for BigInt {
    /// # Panics
    ///
    /// When `rhs` is zero; use [`BigInt::try_div`] to handle that case as a value.
    fn div_assign(&mut self, rhs: &BigInt) {
        match self.try_div(rhs) {
            Ok(quotient) => *self = quotient,
            Err(error) => panic!("{}", error),
        }
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: BigInt) {
        *self /= &rhs;
    }
}

impl RemAssign<&BigInt> for BigInt {
    /// # Panics
    ///
    /// When `rhs` is zero; use [`BigInt::try_rem`] to handle that case as a value.
    fn rem_assign(&mut self, rhs: &BigInt) {
        match self.try_rem(rhs) {
            Ok(remainder) => *self = remainder,
            Err(error) => panic!("{}", error),
        }
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: BigInt) {
        *self %= &rhs;
    }
}

/// The binary operators copy and compound-assign; the assignment with a borrowed right hand
/// side carries the algorithm.
macro_rules! forward_binary_operators {
    ($operation:ident, $method:ident, $assign_method:ident) => {
        impl $operation<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: &BigInt) -> Self::Output {
                self.$assign_method(rhs);
                self
            }
        }

        impl $operation for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: BigInt) -> Self::Output {
                self.$assign_method(&rhs);
                self
            }
        }

        impl $operation<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                let mut value = self.clone();
                value.$assign_method(rhs);
                value
            }
        }

        impl $operation<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                let mut value = self.clone();
                value.$assign_method(&rhs);
                value
            }
        }
    };
}

forward_binary_operators!(Add, add, add_assign);
forward_binary_operators!(Sub, sub, sub_assign);
forward_binary_operators!(Mul, mul, mul_assign);
forward_binary_operators!(Div, div, div_assign);
forward_binary_operators!(Rem, rem, rem_assign);

/// A plain 64-bit integer can stand on the right hand side of every operator.
macro_rules! integer_operand {
    ($operation:ident, $method:ident, $assign_operation:ident, $assign_method:ident) => {
        impl $assign_operation<i64> for BigInt {
            fn $assign_method(&mut self, rhs: i64) {
                self.$assign_method(&BigInt::from(rhs));
            }
        }

        impl $operation<i64> for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: i64) -> Self::Output {
                self.$assign_method(&BigInt::from(rhs));
                self
            }
        }

        impl $operation<i64> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: i64) -> Self::Output {
                let mut value = self.clone();
                value.$assign_method(&BigInt::from(rhs));
                value
            }
        }
    };
}

integer_operand!(Add, add, AddAssign, add_assign);
integer_operand!(Sub, sub, SubAssign, sub_assign);
integer_operand!(Mul, mul, MulAssign, mul_assign);
integer_operand!(Div, div, DivAssign, div_assign);
integer_operand!(Rem, rem, RemAssign, rem_assign);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        // Negating zero must not create a negative zero.
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

/// Raise a base to a non negative integer power.
///
/// Binary exponentiation: the running power is squared for every halving of the exponent and
/// multiplied into the result whenever the exponent is odd, so the number of multiplications is
/// logarithmic in the exponent. An exponent of zero yields one, for a zero base as well.
///
/// # Errors
///
/// When the exponent is negative.
pub fn pow(base: &BigInt, exponent: &BigInt) -> Result<BigInt, Error> {
    if exponent.sign() == Sign::Negative {
        return Err(Error::NegativeExponent);
    }
    if exponent.is_zero() {
        return Ok(BigInt::one());
    }
    if base.is_zero() {
        return Ok(BigInt::zero());
    }

    let mut result = BigInt::one();
    let mut power = base.clone();
    let mut remaining = exponent.digits.clone();
    while !magnitude::is_zero(&remaining) {
        if !magnitude::is_even(&remaining) {
            result *= &power;
        }
        power = &power * &power;
        magnitude::halve(&mut remaining);
    }

    Ok(result)
}
