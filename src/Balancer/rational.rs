//! Exact arithmetic used by the balancer.
//!
//! Numbers are `num_rational::BigRational`: arbitrary-precision numerator/denominator pairs,
//! always kept in lowest terms with a positive denominator. Row reduction never overflows and
//! never rounds, so the coefficients obtained after scaling conserve atoms exactly.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// integer matrix -> matrix of exact rationals
pub fn to_rational_matrix(rows: &[Vec<i64>]) -> Vec<Vec<BigRational>> {
    rows.iter()
        .map(|row| row.iter().map(|&x| from_integer(x)).collect())
        .collect()
}

pub fn from_integer(x: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(x))
}

/// least common multiple of the denominators; 1 for an empty slice
pub fn lcm_of_denominators(values: &[BigRational]) -> BigInt {
    values
        .iter()
        .fold(BigInt::one(), |acc, value| acc.lcm(value.denom()))
}

/// Greatest common divisor of the integers, always non-negative.
/// 0 when every value is zero (or the slice is empty)
pub fn gcd_of_integers(values: &[BigInt]) -> BigInt {
    values
        .iter()
        .fold(BigInt::zero(), |acc, value| acc.gcd(value))
}

/// Multiplies every value by the lcm of the denominators. The result is integral by construction
pub fn scale_to_integers(values: &[BigRational]) -> Vec<BigInt> {
    let lcm = lcm_of_denominators(values);
    values
        .iter()
        .map(|value| (value.numer() * (&lcm / value.denom())))
        .collect()
}

/// divides every integer by the gcd of all of them, so the gcd of the result is 1
pub fn reduce_by_gcd(values: &[BigInt]) -> Vec<BigInt> {
    let gcd = gcd_of_integers(values);
    if gcd.is_zero() || gcd.is_one() {
        return values.to_vec();
    }
    values.iter().map(|value| value / &gcd).collect()
}

pub fn is_positive(value: &BigInt) -> bool {
    value.is_positive()
}

pub fn to_i64(value: &BigInt) -> Option<i64> {
    value.to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    fn ints(v: &[i64]) -> Vec<BigInt> {
        v.iter().map(|&x| BigInt::from(x)).collect()
    }

    #[test]
    fn test_rationals_are_kept_in_lowest_terms() {
        let x = r(4, -6);
        assert_eq!(x.numer(), &BigInt::from(-2));
        assert_eq!(x.denom(), &BigInt::from(3));
        assert_eq!(r(1, 3) + r(1, 6), r(1, 2));
        assert_eq!(r(2, 3) * r(3, 4), r(1, 2));
        assert_eq!(r(1, 2) - r(1, 2), BigRational::zero());
    }

    #[test]
    fn test_lcm_of_denominators() {
        assert_eq!(
            lcm_of_denominators(&[r(1, 2), r(5, 3), r(1, 1), r(-7, 4)]),
            BigInt::from(12)
        );
        assert_eq!(lcm_of_denominators(&[]), BigInt::one());
    }

    #[test]
    fn test_gcd_of_integers() {
        assert_eq!(gcd_of_integers(&ints(&[4, -6, 10])), BigInt::from(2));
        assert_eq!(gcd_of_integers(&ints(&[3, 5])), BigInt::one());
        assert_eq!(gcd_of_integers(&ints(&[0, 0])), BigInt::zero());
    }

    #[test]
    fn test_scale_to_integers() {
        // 1, 1/2, 1 -> 2, 1, 2
        assert_eq!(
            scale_to_integers(&[r(1, 1), r(1, 2), r(1, 1)]),
            ints(&[2, 1, 2])
        );
        assert_eq!(
            scale_to_integers(&[r(-1, 3), r(1, 6), r(2, 1)]),
            ints(&[-2, 1, 12])
        );
    }

    #[test]
    fn test_scaling_by_lcm_alone_is_not_minimal() {
        // all entries are integers already, lcm is 1 and a common factor 2 survives
        let scaled = scale_to_integers(&[r(2, 1), r(4, 1), r(6, 1)]);
        assert_eq!(scaled, ints(&[2, 4, 6]));
        assert_eq!(reduce_by_gcd(&scaled), ints(&[1, 2, 3]));
    }

    #[test]
    fn test_conversion_to_i64() {
        assert_eq!(to_i64(&BigInt::from(42)), Some(42));
        let huge = BigInt::from(i64::MAX) * BigInt::from(10);
        assert_eq!(to_i64(&huge), None);
        assert!(is_positive(&BigInt::from(1)));
        assert!(!is_positive(&BigInt::zero()));
    }
}
