//! This module contains the [NIST P-256] curve parameters, also known as
//! secp256r1 or prime256v1.
//!
//! [NIST P-256]: <https://csrc.nist.gov/publications/detail/sp/800-186/final>

use num_bigint::BigUint;

use super::from_num;
use crate::curve::sw::{Affine, SwCurve};

const FIELD_MODULUS: &str = "115792089210356248762697446949407573530086143415290314195533631308867097853951";

const SUBGROUP_ORDER: &str = "115792089210356248762697446949407573529996955224135760342422259061068512044369";

/// `a ≡ -3 (mod p)`.
const EQUATION_A: &str = "115792089210356248762697446949407573530086143415290314195533631308867097853948";

const EQUATION_B: &str = "41058363725152142129326129780047268409114441015993725554835256314039467401291";

const G_GENERATOR_X: &str = "48439561293906451759052585252797914202762949526041747995844080717082404635286";

const G_GENERATOR_Y: &str = "36134250956749795798585127919587881956611106672985015071877198253568414405109";

/// Returns the NIST P-256 curve.
pub fn curve() -> SwCurve {
    SwCurve::new_unchecked(
        from_num(EQUATION_A),
        from_num(EQUATION_B),
        from_num(FIELD_MODULUS),
    )
}

/// Returns the generator of P-256's prime-order subgroup.
pub fn generator() -> Affine {
    Affine::new_unchecked(from_num(G_GENERATOR_X), from_num(G_GENERATOR_Y))
}

/// Returns the order of the subgroup generated by [`generator`].
pub fn subgroup_order() -> BigUint {
    from_num(SUBGROUP_ORDER)
}
