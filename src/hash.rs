//! Generic hashing support.
//!
//! This module provides a generic way to compute the [hash] of a message as
//! an unsigned integer. It is intended as the seam between the signature
//! scheme, which consumes digests as integers, and digest algorithms, which
//! produce bytes: any [`MessageHasher`] can be injected into
//! [`Ecdsa`][crate::ecdsa::Ecdsa].
//!
//! [hash]: https://en.wikipedia.org/wiki/Hash_function

use num_bigint::BigUint;
use sha2::Digest;

/// A hash capability mapping an arbitrary message to an integer digest.
///
/// Implementations are expected to be pure: the same message always
/// digests to the same integer, with no side effects.
pub trait MessageHasher {
    /// Digests `message` into an unsigned integer.
    fn digest(&self, message: &[u8]) -> BigUint;
}

/// Adapter turning any pure function from bytes to an integer (a closure
/// or a plain `fn`) into a [`MessageHasher`].
pub struct HasherFn<F>(pub F);

impl<F> MessageHasher for HasherFn<F>
where
    F: Fn(&[u8]) -> BigUint,
{
    fn digest(&self, message: &[u8]) -> BigUint {
        (self.0)(message)
    }
}

/// [SHA-256], with the 32-byte digest interpreted as a big-endian integer.
///
/// [SHA-256]: https://en.wikipedia.org/wiki/SHA-2
pub struct Sha256;

impl MessageHasher for Sha256 {
    fn digest(&self, message: &[u8]) -> BigUint {
        BigUint::from_bytes_be(&sha2::Sha256::digest(message))
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn sha256_known_digest() {
        let expected = BigUint::from_bytes_be(&hex!(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        ));

        assert_eq!(Sha256.digest(b"abc"), expected);
    }

    #[test]
    fn sha256_is_deterministic() {
        assert_eq!(Sha256.digest(b"message"), Sha256.digest(b"message"));
        assert_ne!(Sha256.digest(b"message"), Sha256.digest(b"messagf"));
    }

    #[test]
    fn closures_are_hashers() {
        let length_hasher = HasherFn(|message: &[u8]| BigUint::from(message.len()));

        assert_eq!(length_hasher.digest(b"abcd"), BigUint::from(4u32));
        assert_eq!(length_hasher.digest(b""), BigUint::from(0u32));
    }
}
