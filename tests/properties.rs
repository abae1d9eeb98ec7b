//! # Algebraic laws
//!
//! Exercises the public interface over a fixed cross product of operands covering both signs
//! and a range of magnitudes.
use num::Zero;

use rebi::{pow, BigInt, Error, BI};

fn operands() -> Vec<BigInt> {
    [
        "0", "1", "-1", "2", "-3", "10", "-10", "97", "-99", "1024",
        "123456789", "-987654321", "9999999999", "10000000000",
        "1111111111111111", "-314159265358979323846",
    ]
    .iter()
    .map(|text| text.parse().unwrap())
    .collect()
}

#[test]
fn round_trip() {
    for value in operands() {
        let reparsed: BigInt = value.to_string().parse().unwrap();
        assert_eq!(reparsed, value);
    }

    // The canonical form strips redundant leading zeros and normalizes the zero sign.
    assert_eq!("007".parse::<BigInt>().unwrap().to_string(), "7");
    assert_eq!("-0".parse::<BigInt>().unwrap().to_string(), "0");
}

#[test]
fn addition_commutes() {
    for a in operands() {
        for b in operands() {
            assert_eq!(&a + &b, &b + &a);
        }
    }
}

#[test]
fn multiplication_commutes() {
    for a in operands() {
        for b in operands() {
            assert_eq!(&a * &b, &b * &a);
        }
    }
}

#[test]
fn subtraction_inverts_addition() {
    for a in operands() {
        for b in operands() {
            assert_eq!((&a + &b) - &b, a);
        }
    }
}

#[test]
fn multiplication_distributes_over_addition() {
    for a in operands() {
        for b in operands() {
            for c in operands() {
                assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
            }
        }
    }
}

#[test]
fn division_inverts_multiplication() {
    for a in operands() {
        for b in operands() {
            if b.is_zero() {
                continue;
            }
            assert_eq!((&a * &b) / &b, a);
        }
    }
}

#[test]
fn quotient_remainder_identity() {
    for a in operands() {
        for b in operands() {
            if b.is_zero() {
                continue;
            }
            let (quotient, remainder) = a.try_div_rem(&b).unwrap();
            assert_eq!(&quotient * &b + &remainder, a);
            // The sign of a nonzero remainder follows the dividend.
            assert!(remainder.is_zero() || remainder.is_negative() == a.is_negative());
        }
    }
}

#[test]
fn zero_laws() {
    for a in operands() {
        assert_eq!(&a + &BigInt::zero(), a);
        assert_eq!(&a * &BigInt::zero(), BigInt::zero());
    }

    // A magnitude-smaller dividend yields a zero quotient.
    assert_eq!(BI!(1) / BI!(11111111), BigInt::zero());
    assert_eq!(BI!(-1) / BI!(11111111), BigInt::zero());
}

#[test]
fn sign_laws() {
    for a in operands() {
        assert_eq!(-(-a.clone()), a);
    }

    assert_eq!(pow(&BI!(0), &BI!(0)).unwrap(), BI!(1));
    assert_eq!(pow(&BI!(0), &BI!(12)).unwrap(), BI!(0));
    for a in operands() {
        assert_eq!(pow(&a, &BI!(0)).unwrap(), BI!(1));
        assert_eq!(pow(&a, &BI!(1)).unwrap(), a);
    }
    assert_eq!(pow(&BI!(2), &BI!(10)).unwrap(), BI!(1024));
}

#[test]
fn error_cases() {
    assert!(matches!("".parse::<BigInt>(), Err(Error::InvalidFormat(_))));
    assert!(matches!("-".parse::<BigInt>(), Err(Error::InvalidFormat(_))));

    for a in operands() {
        assert_eq!(a.try_div(&BigInt::zero()), Err(Error::DivisionByZero));
        assert_eq!(a.try_rem(&BigInt::zero()), Err(Error::DivisionByZero));
    }

    assert_eq!(pow(&BI!(3), &BI!(-2)), Err(Error::NegativeExponent));
}
