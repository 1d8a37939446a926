//! This module contains operations for the [Short Weierstrass model] of the
//! curve.
//!
//! In this model, the curve equation is `y² = x³ + a * x + b`, for constants
//! `a` and `b` over a prime field `F_p`. [`SwCurve`] bundles those
//! parameters into an immutable context that every group operation is a
//! method of; distinct curves are distinct contexts, and points must only
//! be combined through the context that produced them.
//!
//! [Short Weierstrass model]: https://www.hyperelliptic.org/EFD/g1p/auto-shortw.html

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

mod affine;
pub use affine::Affine;

pub mod instance;

use crate::{
    arithmetic::{inverse, mul_mod, reduce},
    bits::BitIteratorBE,
};

/// Parameters that collectively define the [Short Weierstrass model] of a
/// curve: the coefficients `a` and `b` and the prime field modulus `p`.
///
/// The context is read-only after construction; operations take their
/// operands explicitly and return new [`Affine`] values. `p` being prime is
/// a caller obligation throughout.
///
/// [Short Weierstrass model]: https://www.hyperelliptic.org/EFD/g1p/auto-shortw.html
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwCurve {
    a: BigUint,
    b: BigUint,
    p: BigUint,
}

impl SwCurve {
    /// Constructs the curve `y² = x³ + a * x + b` over `F_p`.
    ///
    /// # Panics
    ///
    /// Panics if the curve is singular, i.e. `4a³ + 27b² ≡ 0 (mod p)`.
    pub fn new(a: BigUint, b: BigUint, p: BigUint) -> Self {
        let curve = Self::new_unchecked(a, b, p);
        assert!(
            !curve.discriminant_factor_is_zero(),
            "curve must be non-singular"
        );
        curve
    }

    /// Constructs a curve without the non-singularity check.
    pub const fn new_unchecked(a: BigUint, b: BigUint, p: BigUint) -> Self {
        SwCurve { a, b, p }
    }

    /// Coefficient `a` of the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` of the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// The prime field modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// `4a³ + 27b² ≡ 0 (mod p)`, the degenerate-discriminant condition.
    fn discriminant_factor_is_zero(&self) -> bool {
        let a3 = mul_mod(&mul_mod(&self.a, &self.a, &self.p), &self.a, &self.p);
        let b2 = mul_mod(&self.b, &self.b, &self.p);
        ((4u32 * a3 + 27u32 * b2) % &self.p).is_zero()
    }

    /// Checks if `point` is a valid point on the curve.
    ///
    /// The identity is on every curve.
    pub fn is_on_curve(&self, point: &Affine) -> bool {
        match point.xy() {
            None => true,
            Some((x, y)) => {
                let x3axb = (x * x * x + &self.a * x + &self.b) % &self.p;
                (y * y) % &self.p == x3axb
            }
        }
    }

    /// Constructs a point from x and y coordinates, reduced into `[0, p)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates do not satisfy the curve equation.
    pub fn point(&self, x: BigUint, y: BigUint) -> Affine {
        let point = Affine::new_unchecked(x % &self.p, y % &self.p);
        assert!(self.is_on_curve(&point), "point must lie on the curve");
        point
    }

    /// Returns the additive inverse of `point`.
    ///
    /// The identity maps to itself; `(x, y)` maps to `(x, p - y mod p)`.
    pub fn neg(&self, point: &Affine) -> Affine {
        match point.xy() {
            None => Affine::Infinity,
            Some((x, y)) => Affine::Point {
                x: x.clone(),
                y: (&self.p - y) % &self.p,
            },
        }
    }

    /// Adds `p1` and `p2` under the curve's group law.
    ///
    /// Case analysis, in order: an identity operand short-circuits; a pair
    /// of mutual inverses sums to the identity (this also covers a point of
    /// order 2, where `y = 0`, being doubled); the remaining points take
    /// the secant slope when distinct or the tangent slope when equal, and
    /// the line's third intersection with the curve is mirrored into the
    /// sum. The inverse-pair check must run before the doubling branch so
    /// that no slope denominator is ever zero.
    pub fn add(&self, p1: &Affine, p2: &Affine) -> Affine {
        let (Some((x1, y1)), Some((x2, y2))) = (p1.xy(), p2.xy()) else {
            return if p1.is_zero() { p2.clone() } else { p1.clone() };
        };

        if *p1 == self.neg(p2) {
            return Affine::Infinity;
        }

        let p = &self.p;
        let (num, den) = if p1 == p2 {
            // Tangent line: `alpha = (3x₁² + a) / 2y₁`.
            ((x1 * x1) * 3u32 + &self.a, y1 * 2u32)
        } else {
            // Secant line: `alpha = (y₁ - y₂) / (x₁ - x₂)`.
            (
                reduce(&(BigInt::from(y1.clone()) - BigInt::from(y2.clone())), p),
                reduce(&(BigInt::from(x1.clone()) - BigInt::from(x2.clone())), p),
            )
        };
        // The inverse-pair check above rules out a zero denominator.
        let den_inv = inverse(&den, p).expect("slope denominator is nonzero");
        let alpha = BigInt::from(mul_mod(&(num % p), &den_inv, p));

        // `x₃ = α² - x₁ - x₂` and `y₃ = α(x₁ - x₃) - y₁`.
        let x1 = BigInt::from(x1.clone());
        let x2 = BigInt::from(x2.clone());
        let y1 = BigInt::from(y1.clone());
        let x3 = reduce(&(&alpha * &alpha - &x1 - &x2), p);
        let y3 = reduce(&(&alpha * (&x1 - BigInt::from(x3.clone())) - &y1), p);

        Affine::Point { x: x3, y: y3 }
    }

    /// Multiplies `base` by `d` with `d` successive group additions.
    ///
    /// Reference implementation: `O(d)` group operations, kept for
    /// validating [`Self::mul_bigint`] against. A zero scalar yields the
    /// identity.
    pub fn mul_repeated_add(&self, base: &Affine, d: &BigUint) -> Affine {
        let mut res = Affine::Infinity;
        let mut i = BigUint::zero();
        while &i < d {
            res = self.add(&res, base);
            i += 1u32;
        }
        res
    }

    /// Standard double-and-add method for multiplication by a scalar.
    ///
    /// Processes the scalar's bits from the most significant set bit down,
    /// doubling the accumulator at every step and adding `base` on set
    /// bits: `O(log d)` group operations. A zero scalar yields the
    /// identity. Agrees with [`Self::mul_repeated_add`] on every input.
    pub fn mul_bigint(
        &self,
        base: &Affine,
        scalar: impl BitIteratorBE,
    ) -> Affine {
        let mut res = Affine::Infinity;
        for b in scalar.bit_be_trimmed_iter() {
            res = self.add(&res, &res);
            if b {
                res = self.add(&res, base);
            }
        }
        res
    }

    /// Returns the order of the cyclic subgroup generated by `point`: the
    /// smallest positive `o` such that `o · point` is the identity.
    ///
    /// Computed by exhaustive repeated addition, so the cost is
    /// `O(order(point))` group operations. That is acceptable for small,
    /// pedagogical groups only; this is not a subgroup-order algorithm for
    /// cryptographic-scale curves, where the order is astronomically
    /// large.
    ///
    /// `point` must lie on the curve, which guarantees the generated
    /// subgroup is finite.
    pub fn subgroup_order(&self, point: &Affine) -> BigUint {
        let mut order = BigUint::one();
        let mut sum = point.clone();
        while !sum.is_zero() {
            sum = self.add(&sum, point);
            order += 1u32;
        }
        order
    }
}

#[cfg(test)]
mod test {
    use num_traits::One;
    use proptest::prelude::*;

    use super::*;

    fn from_hex(digits: &str) -> BigUint {
        BigUint::parse_bytes(digits.as_bytes(), 16).unwrap()
    }

    /// `y² = x³ + x + 1` over `F₅`: eight affine points plus the identity,
    /// cyclic of order 9.
    fn tiny_curve() -> SwCurve {
        SwCurve::new(1u32.into(), 1u32.into(), 5u32.into())
    }

    fn tiny_curve_points(curve: &SwCurve) -> Vec<Affine> {
        let mut points = vec![Affine::Infinity];
        for x in 0u32..5 {
            for y in 0u32..5 {
                let point = Affine::new_unchecked(x.into(), y.into());
                if curve.is_on_curve(&point) {
                    points.push(point);
                }
            }
        }
        points
    }

    /// `y² = x³ + x + 1` over `F₃₀₆₇₇`, with a known member point.
    fn regression_curve() -> SwCurve {
        SwCurve::new(1u32.into(), 1u32.into(), 30677u32.into())
    }

    fn regression_point() -> Affine {
        Affine::new_unchecked(1090u32.into(), 18593u32.into())
    }

    #[test]
    fn known_point_is_on_regression_curve() {
        let curve = regression_curve();

        assert!(curve.is_on_curve(&regression_point()));
        assert!(!curve
            .is_on_curve(&Affine::new_unchecked(1090u32.into(), 18594u32.into())));
    }

    #[test]
    #[should_panic(expected = "non-singular")]
    fn singular_curve_is_rejected() {
        // `4·0³ + 27·0² = 0`.
        let _ = SwCurve::new(0u32.into(), 0u32.into(), 5u32.into());
    }

    #[test]
    #[should_panic(expected = "lie on the curve")]
    fn off_curve_point_is_rejected() {
        let _ = tiny_curve().point(1u32.into(), 1u32.into());
    }

    #[test]
    fn identity_law() {
        let curve = tiny_curve();

        for point in tiny_curve_points(&curve) {
            assert_eq!(curve.add(&point, &Affine::Infinity), point);
            assert_eq!(curve.add(&Affine::Infinity, &point), point);
        }
    }

    #[test]
    fn inverse_law() {
        let curve = tiny_curve();

        assert_eq!(curve.neg(&Affine::Infinity), Affine::Infinity);
        for point in tiny_curve_points(&curve) {
            let neg = curve.neg(&point);
            assert!(curve.is_on_curve(&neg));
            assert!(curve.add(&point, &neg).is_zero());
        }
    }

    #[test]
    fn addition_is_commutative() {
        let curve = tiny_curve();
        let points = tiny_curve_points(&curve);

        for p1 in &points {
            for p2 in &points {
                assert_eq!(curve.add(p1, p2), curve.add(p2, p1));
            }
        }
    }

    #[test]
    fn addition_is_associative() {
        let curve = tiny_curve();
        let points = tiny_curve_points(&curve);

        for p1 in &points {
            for p2 in &points {
                for p3 in &points {
                    assert_eq!(
                        curve.add(&curve.add(p1, p2), p3),
                        curve.add(p1, &curve.add(p2, p3))
                    );
                }
            }
        }
    }

    #[test]
    fn doubling_a_point_of_order_two_gives_identity() {
        // `y² = x³ + 2x` over `F₅` has `(0, 0)`, where the tangent is
        // vertical.
        let curve = SwCurve::new(2u32.into(), 0u32.into(), 5u32.into());
        let point = curve.point(0u32.into(), 0u32.into());

        assert_eq!(curve.neg(&point), point);
        assert!(curve.add(&point, &point).is_zero());
        assert_eq!(curve.subgroup_order(&point), 2u32.into());
    }

    #[test]
    fn tiny_curve_orders_match_brute_force() {
        let curve = tiny_curve();
        let points = tiny_curve_points(&curve);
        assert_eq!(points.len(), 9);
        let group_order = BigUint::from(points.len());

        for point in &points {
            let order = curve.subgroup_order(point);

            // Smallest: no earlier multiple reaches the identity.
            let mut m = BigUint::one();
            while m < order {
                assert!(!curve.mul_repeated_add(point, &m).is_zero());
                m += 1u32;
            }
            assert!(curve.mul_repeated_add(point, &order).is_zero());
            assert!(curve.mul_bigint(point, &order).is_zero());

            // Lagrange: element orders divide the group order.
            assert!((&group_order % &order).is_zero());
        }
    }

    #[test]
    fn tiny_curve_has_a_generator() {
        let curve = tiny_curve();
        let generator = curve.point(0u32.into(), 1u32.into());

        assert_eq!(curve.subgroup_order(&generator), 9u32.into());
        assert_eq!(
            curve.mul_bigint(&generator, 2u32),
            curve.point(4u32.into(), 2u32.into())
        );
        assert_eq!(
            curve.mul_bigint(&generator, 8u32),
            curve.neg(&generator)
        );
    }

    #[test]
    fn zero_scalar_yields_identity() {
        let curve = regression_curve();

        assert!(curve.mul_bigint(&regression_point(), 0u32).is_zero());
        assert!(curve
            .mul_bigint(&regression_point(), &BigUint::zero())
            .is_zero());
        assert!(curve
            .mul_repeated_add(&regression_point(), &BigUint::zero())
            .is_zero());
    }

    #[test]
    fn scalar_mul_accepts_primitive_and_big_scalars() {
        let curve = regression_curve();
        let point = regression_point();

        assert_eq!(
            curve.mul_bigint(&point, 41u32),
            curve.mul_bigint(&point, &BigUint::from(41u32))
        );
    }

    proptest! {
        #[test]
        fn double_and_add_matches_repeated_addition(d in 0u32..400) {
            let curve = regression_curve();
            let point = regression_point();
            let d = BigUint::from(d);

            prop_assert_eq!(
                curve.mul_bigint(&point, &d),
                curve.mul_repeated_add(&point, &d)
            );
        }
    }

    #[test]
    fn secp256k1_scalar_mul_known_answers() {
        let curve = instance::secp256k1::curve();
        let g = instance::secp256k1::generator();
        assert!(curve.is_on_curve(&g));

        let g2 = Affine::new_unchecked(
            from_hex("C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5"),
            from_hex("1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A"),
        );
        let g5 = Affine::new_unchecked(
            from_hex("2F8BDE4D1A07209355B4A7250A5C5128E88B84BDDC619AB7CBA8D569B240EFE4"),
            from_hex("D8AC222636E5E3D6D4DBA9DDA6C9C426F788271BAB0D6840DCA87D3AA6AC62D6"),
        );

        assert_eq!(curve.add(&g, &g), g2);
        assert_eq!(curve.mul_bigint(&g, 2u32), g2);
        assert_eq!(curve.mul_bigint(&g, 5u32), g5);

        // `2G + (-G) = G`.
        assert_eq!(curve.add(&g2, &curve.neg(&g)), g);
    }
}
