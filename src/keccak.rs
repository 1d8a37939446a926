//! An interface to the Keccak-256 hashing algorithm.

use num_bigint::BigUint;
use tiny_keccak::{Hasher as TinyHasher, Keccak};

use crate::hash::MessageHasher;

/// Keccak-256, with the 32-byte digest interpreted as a big-endian integer.
///
/// The underlying implementation is guaranteed to match that of the
/// `keccak256` algorithm, commonly used in Ethereum.
pub struct Keccak256;

impl MessageHasher for Keccak256 {
    fn digest(&self, message: &[u8]) -> BigUint {
        let mut hasher = Keccak::v256();
        hasher.update(message);

        let mut buffer = [0u8; 32];
        hasher.finalize(&mut buffer);
        BigUint::from_bytes_be(&buffer)
    }
}
