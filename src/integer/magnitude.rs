//! # Digit vector arithmetic
//!
//! Operations on unsigned magnitudes represented as slices of decimal digits, least significant
//! digit first. Sign resolution lives with the callers; every routine here treats its operands
//! as non negative. All carry and borrow propagation in the crate happens in this module.
use std::cmp::Ordering;

use itertools::Itertools;
use smallvec::{smallvec, SmallVec};

use crate::integer::{Digit, DigitVec};

/// Strip trailing zero digits while more than one digit remains.
pub(crate) fn trim(digits: &mut DigitVec) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
}

pub(crate) fn is_zero(digits: &[Digit]) -> bool {
    digits.iter().all(|&digit| digit == 0)
}

/// Whether the represented value is even.
pub(crate) fn is_even(digits: &[Digit]) -> bool {
    digits.first().map_or(true, |&digit| digit % 2 == 0)
}

/// Compare two magnitudes.
///
/// More digits always means a larger magnitude; equal lengths are decided by the most
/// significant differing digit.
pub(crate) fn cmp(a: &[Digit], b: &[Digit]) -> Ordering {
    debug_assert!(a.len() == 1 || a.last() != Some(&0));
    debug_assert!(b.len() == 1 || b.last() != Some(&0));

    match Ord::cmp(&a.len(), &b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}

/// Add `rhs` into `lhs`, digit by digit with carry propagation.
pub(crate) fn add(lhs: &mut DigitVec, rhs: &[Digit]) {
    if lhs.len() < rhs.len() {
        lhs.resize(rhs.len(), 0);
    }

    let mut carry = 0;
    for (position, digit) in lhs.iter_mut().enumerate() {
        let sum = *digit + carry + rhs.get(position).copied().unwrap_or(0);
        *digit = sum % 10;
        carry = sum / 10;
    }
    if carry > 0 {
        lhs.push(carry);
    }
}

/// Subtract `rhs` from `lhs`, digit by digit with borrow propagation.
///
/// `lhs` must be at least as large as `rhs`.
pub(crate) fn sub(lhs: &mut DigitVec, rhs: &[Digit]) {
    debug_assert!(cmp(lhs, rhs) != Ordering::Less);

    let mut borrow = 0;
    for (position, digit) in lhs.iter_mut().enumerate() {
        let subtrahend = borrow + rhs.get(position).copied().unwrap_or(0);
        if *digit < subtrahend {
            // Long-hand subtraction: add ten to the minuend digit, borrow from the next.
            *digit = 10 + *digit - subtrahend;
            borrow = 1;
        } else {
            *digit -= subtrahend;
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0);

    trim(lhs);
}

/// Multiply two magnitudes with the schoolbook method.
///
/// Entry `i + j` of a wide accumulator collects all `a[i] * b[j]` products without intermediate
/// carrying; a single carry pass then reduces every entry to one digit. An entry accumulates at
/// most `81 * min(m, n)` before that pass, far below the accumulator width.
pub(crate) fn mul(a: &[Digit], b: &[Digit]) -> DigitVec {
    let mut accumulator: SmallVec<[u64; 20]> = smallvec![0; a.len() + b.len()];
    for ((i, &left), (j, &right)) in a.iter().enumerate().cartesian_product(b.iter().enumerate()) {
        accumulator[i + j] += u64::from(left) * u64::from(right);
    }

    let mut digits = DigitVec::with_capacity(accumulator.len());
    let mut carry = 0;
    for entry in accumulator {
        let value = entry + carry;
        digits.push((value % 10) as Digit);
        carry = value / 10;
    }
    while carry > 0 {
        digits.push((carry % 10) as Digit);
        carry /= 10;
    }

    trim(&mut digits);
    digits
}

/// Divide one magnitude by another, yielding quotient and remainder.
///
/// Long division driven by comparison and subtraction: the divisor is scaled by powers of ten
/// for as long as it fits into what remains of the dividend, and every subtraction at scale `k`
/// adds `10^k` to the quotient. The scale resets to zero when the shifted divisor no longer
/// fits; the loop ends once the remainder is below the unscaled divisor.
// TODO(PERFORMANCE): Estimate quotient digits instead of subtracting repeatedly.
pub(crate) fn div_rem(dividend: &[Digit], divisor: &[Digit]) -> (DigitVec, DigitVec) {
    debug_assert!(!is_zero(divisor));

    match cmp(dividend, divisor) {
        // A dividend smaller than the divisor is consumed whole by the remainder.
        Ordering::Less => return (smallvec![0], SmallVec::from_slice(dividend)),
        Ordering::Equal => return (smallvec![1], smallvec![0]),
        Ordering::Greater => {}
    }

    let mut remaining: DigitVec = SmallVec::from_slice(dividend);
    let mut quotient: DigitVec = smallvec![0];
    // Invariant: shifted == divisor * 10^scale.
    let mut shifted: DigitVec = SmallVec::from_slice(divisor);
    let mut scale = 0;

    loop {
        if cmp(&remaining, &shifted) != Ordering::Less {
            sub(&mut remaining, &shifted);
            add_power_of_ten(&mut quotient, scale);
            shifted.insert(0, 0);
            scale += 1;
        } else {
            shifted.clear();
            shifted.extend_from_slice(divisor);
            scale = 0;
            if cmp(&remaining, divisor) == Ordering::Less {
                break;
            }
        }
    }

    trim(&mut quotient);
    (quotient, remaining)
}

/// Add `10^power` to the magnitude.
fn add_power_of_ten(digits: &mut DigitVec, power: usize) {
    if digits.len() <= power {
        digits.resize(power + 1, 0);
    }

    let mut position = power;
    loop {
        digits[position] += 1;
        if digits[position] < 10 {
            break;
        }
        digits[position] = 0;
        position += 1;
        if position == digits.len() {
            digits.push(0);
        }
    }
}

/// Halve the magnitude in place, rounding towards zero.
pub(crate) fn halve(digits: &mut DigitVec) {
    // An odd digit passes half of ten on to its less significant neighbour.
    let mut from_higher = 0;
    for digit in digits.iter_mut().rev() {
        let halved = from_higher * 5 + *digit / 2;
        from_higher = *digit % 2;
        *digit = halved;
    }

    trim(digits);
}
