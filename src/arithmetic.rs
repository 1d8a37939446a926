//! Modular arithmetic over arbitrary-precision integers.
//!
//! Every operation reduces its result into the canonical range `[0, m)`.
//! Multiplicative inverses are computed with the iterative [extended
//! Euclidean algorithm], which yields the Bézout coefficients of its
//! arguments alongside their gcd.
//!
//! [extended Euclidean algorithm]: https://en.wikipedia.org/wiki/Extended_Euclidean_algorithm

use core::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// The element has no multiplicative inverse for the given modulus.
///
/// For a prime modulus `p` this occurs exactly when the element is
/// congruent to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NonInvertible;

impl fmt::Display for NonInvertible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("element is not invertible for this modulus")
    }
}

impl core::error::Error for NonInvertible {}

/// Returns `x mod m`, mapped into `[0, m)`.
///
/// Unlike the `%` operator on signed integers, the result of a negative
/// `x` is the canonical non-negative representative.
pub fn reduce(x: &BigInt, m: &BigUint) -> BigUint {
    let m = BigInt::from(m.clone());
    let mut r = x % &m;
    if r.sign() == Sign::Minus {
        r += &m;
    }
    // The remainder has been shifted into `[0, m)`.
    r.to_biguint().expect("remainder is non-negative")
}

/// Returns `(x * y) mod m`.
pub fn mul_mod(x: &BigUint, y: &BigUint, m: &BigUint) -> BigUint {
    (x * y) % m
}

/// Returns the multiplicative inverse of `x` modulo the prime `p`,
/// normalized into `[0, p)`.
///
/// Runs the extended Euclidean algorithm on `(p, x)`, iteratively tracking
/// the Bézout coefficient of `x`; once the remainder reaches the gcd, that
/// coefficient is the inverse.
///
/// # Errors
///
/// Returns [`NonInvertible`] if `x ≡ 0 (mod p)`. For any other `x` and
/// prime `p` the inverse exists; a composite modulus (a violated caller
/// obligation) can additionally surface [`NonInvertible`] for elements
/// sharing a factor with it, rather than returning a wrong result.
pub fn inverse(x: &BigUint, p: &BigUint) -> Result<BigUint, NonInvertible> {
    let x = x % p;
    if x.is_zero() {
        return Err(NonInvertible);
    }

    let mut r0 = BigInt::from(p.clone());
    let mut r1 = BigInt::from(x);
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();

    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        let t2 = &t0 - &q * &t1;
        r0 = r1;
        r1 = r2;
        t0 = t1;
        t1 = t2;
    }

    // `r0` is now `gcd(p, x)` and `t0` its Bézout coefficient for `x`.
    if !r0.is_one() {
        return Err(NonInvertible);
    }
    Ok(reduce(&t0, p))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn uint(n: u32) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn reduce_maps_negatives_into_range() {
        let m = uint(7);

        assert_eq!(reduce(&BigInt::from(-1), &m), uint(6));
        assert_eq!(reduce(&BigInt::from(-7), &m), uint(0));
        assert_eq!(reduce(&BigInt::from(-8), &m), uint(6));
        assert_eq!(reduce(&BigInt::from(-22), &m), uint(6));
    }

    #[test]
    fn reduce_is_identity_on_canonical_values() {
        let m = uint(11);

        for v in 0..11 {
            assert_eq!(reduce(&BigInt::from(v), &m), uint(v as u32));
        }
        assert_eq!(reduce(&BigInt::from(11), &m), uint(0));
        assert_eq!(reduce(&BigInt::from(25), &m), uint(3));
    }

    #[test]
    fn mul_mod_wraps() {
        let m = uint(13);

        assert_eq!(mul_mod(&uint(5), &uint(8), &m), uint(1));
        assert_eq!(mul_mod(&uint(0), &uint(12), &m), uint(0));
        assert_eq!(mul_mod(&uint(12), &uint(12), &m), uint(1));
    }

    #[test]
    fn inverse_of_zero_fails() {
        let p = uint(13);

        assert_eq!(inverse(&uint(0), &p), Err(NonInvertible));
        // Multiples of the modulus are congruent to zero.
        assert_eq!(inverse(&uint(13), &p), Err(NonInvertible));
        assert_eq!(inverse(&uint(26), &p), Err(NonInvertible));
    }

    #[test]
    fn inverse_known_values() {
        assert_eq!(inverse(&uint(2), &uint(5)), Ok(uint(3)));
        assert_eq!(inverse(&uint(4), &uint(5)), Ok(uint(4)));
        assert_eq!(inverse(&uint(7), &uint(11)), Ok(uint(8)));
        assert_eq!(inverse(&uint(1), &uint(11)), Ok(uint(1)));
    }

    #[test]
    fn inverse_with_composite_modulus_reports_shared_factors() {
        // gcd(4, 12) != 1, so no inverse exists.
        assert_eq!(inverse(&uint(4), &uint(12)), Err(NonInvertible));
        // 5 is coprime with 12 and invertible even though 12 is composite.
        assert_eq!(inverse(&uint(5), &uint(12)), Ok(uint(5)));
    }

    proptest! {
        #[test]
        fn inverse_round_trips(x in 1u32..30677) {
            let p = uint(30677);
            let x = uint(x);

            let inv = inverse(&x, &p).unwrap();
            prop_assert!(inv < p);
            prop_assert_eq!(mul_mod(&x, &inv, &p), uint(1));
        }
    }
}
