//! This module contains the [secp256k1] curve parameters.
//!
//! [secp256k1]: <https://www.secg.org/sec2-v2.pdf>

use num_bigint::BigUint;
use num_traits::Zero;

use super::from_num;
use crate::curve::sw::{Affine, SwCurve};

const FIELD_MODULUS: &str = "115792089237316195423570985008687907853269984665640564039457584007908834671663";

const SUBGROUP_ORDER: &str = "115792089237316195423570985008687907852837564279074904382605163141518161494337";

const G_GENERATOR_X: &str = "55066263022277343669578718895168534326250603453777594175500187360389116729240";

const G_GENERATOR_Y: &str = "32670510020758816978083085130507043184471273380659243275938904335757337482424";

/// Returns the secp256k1 curve, `y² = x³ + 7`.
pub fn curve() -> SwCurve {
    SwCurve::new_unchecked(
        BigUint::zero(),
        BigUint::from(7u32),
        from_num(FIELD_MODULUS),
    )
}

/// Returns the generator of secp256k1's prime-order subgroup.
pub fn generator() -> Affine {
    Affine::new_unchecked(from_num(G_GENERATOR_X), from_num(G_GENERATOR_Y))
}

/// Returns the order of the subgroup generated by [`generator`].
pub fn subgroup_order() -> BigUint {
    from_num(SUBGROUP_ORDER)
}
