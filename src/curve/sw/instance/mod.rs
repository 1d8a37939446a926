//! Instantiations of concrete named curves.
//!
//! Each instance exposes its curve parameters, subgroup generator, and
//! subgroup order as runtime values, ready to feed group arithmetic or an
//! [`Ecdsa`][crate::ecdsa::Ecdsa] scheme.

use num_bigint::BigUint;

pub mod p256;
pub mod secp256k1;

/// Parses a decimal literal into an unsigned integer.
pub(crate) fn from_num(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .expect("literal is a valid decimal number")
}
