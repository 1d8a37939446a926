//! This module contains an ECDSA-style signing and verification scheme
//! ([ECDSA]) composed from the curve group law, scalar multiplication, and
//! modular arithmetic, plus an externally supplied hash capability.
//!
//! The scheme is bound at runtime by [`Ecdsa`]: a curve, an agreed
//! generator `G`, and the order `n` of the subgroup `G` generates. Signing
//! additionally consumes an ephemeral scalar `k`, chosen fresh by the
//! caller for every signature and never reused; the scheme only validates
//! the outcome, reporting [`InvalidEphemeral`] so the caller can retry
//! with a new `k`:
//!
//! ```rust
//! use num_bigint::BigUint;
//! use primecurve::{
//!     curve::sw::instance::secp256k1, ecdsa::Ecdsa, hash::Sha256,
//! };
//!
//! let scheme = Ecdsa::new(
//!     secp256k1::curve(),
//!     secp256k1::generator(),
//!     secp256k1::subgroup_order(),
//! );
//! let key = scheme.keypair(BigUint::from(12345u32)).unwrap();
//!
//! let signature = loop {
//!     let k = next_ephemeral();
//!     match scheme.sign(&key, &k, &Sha256, b"message") {
//!         Ok(signature) => break signature,
//!         // Pick a fresh `k` and retry.
//!         Err(_) => continue,
//!     }
//! };
//! assert!(scheme.verify(&signature, &Sha256, b"message", key.public()));
//! # fn next_ephemeral() -> BigUint { BigUint::from(54321u32) }
//! ```
//!
//! This is a pedagogical implementation: scalar multiplication is
//! variable-time and the scheme does not defend against side channels.
//!
//! [ECDSA]: https://en.wikipedia.org/wiki/Elliptic_Curve_Digital_Signature_Algorithm

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroize;

use crate::{
    arithmetic::{inverse, mul_mod},
    curve::sw::{Affine, SwCurve},
    hash::MessageHasher,
};

/// Signing produced a zero `r` or `s`: the chosen ephemeral scalar is
/// unusable with this message and key.
///
/// Recoverable: choose a fresh ephemeral scalar and sign again. Retry
/// policy belongs to the caller, never to this module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidEphemeral;

impl fmt::Display for InvalidEphemeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ephemeral scalar produced a degenerate signature; retry with a fresh one")
    }
}

impl core::error::Error for InvalidEphemeral {}

/// An ECDSA signature.
///
/// Both components lie in `[1, n-1]` for the subgroup order `n` of the
/// producing scheme; [`Ecdsa::verify`] rejects anything outside that
/// range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The x-coordinate of the ephemeral point, reduced modulo `n`.
    pub r: BigUint,
    /// The signature proof value.
    pub s: BigUint,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.s)
    }
}

/// Key material for an [`Ecdsa`] scheme: the secret scalar `d` and its
/// public point `Q = d · G`.
///
/// The secret scalar is cleared when the pair is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    secret: BigUint,
    public: Affine,
}

impl KeyPair {
    /// The secret scalar `d`.
    pub fn secret(&self) -> &BigUint {
        &self.secret
    }

    /// The public point `Q = d · G`.
    pub fn public(&self) -> &Affine {
        &self.public
    }
}

impl Zeroize for KeyPair {
    fn zeroize(&mut self) {
        self.secret.set_zero();
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for KeyPair {
    /// Renders the public half only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPair({:?})", self.public)
    }
}

/// ECDSA scheme parameters: a curve, the generator `G` of the signing
/// subgroup, and that subgroup's order `n`.
///
/// Read-only after construction; `n` being prime and `G` generating a
/// subgroup of that order are caller obligations.
#[derive(Clone, Debug)]
pub struct Ecdsa {
    curve: SwCurve,
    generator: Affine,
    order: BigUint,
}

impl Ecdsa {
    /// Binds a signing scheme to `curve` with generator `G` and subgroup
    /// order `n`.
    ///
    /// # Panics
    ///
    /// Panics if `generator` does not lie on `curve`.
    pub fn new(curve: SwCurve, generator: Affine, order: BigUint) -> Self {
        assert!(
            curve.is_on_curve(&generator),
            "generator must lie on the curve"
        );
        Ecdsa { curve, generator, order }
    }

    /// The underlying curve.
    pub fn curve(&self) -> &SwCurve {
        &self.curve
    }

    /// The generator `G` of the signing subgroup.
    pub fn generator(&self) -> &Affine {
        &self.generator
    }

    /// The order `n` of the signing subgroup.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Derives the key pair for the secret scalar `d`.
    ///
    /// Returns `None` if the derived public point is the identity, i.e.
    /// `d ≡ 0 (mod n)`.
    pub fn keypair(&self, secret: BigUint) -> Option<KeyPair> {
        let public = self.curve.mul_bigint(&self.generator, &secret);
        if public.is_zero() {
            return None;
        }
        Some(KeyPair { secret, public })
    }

    /// Signs `message` with `key` and the ephemeral scalar `k`.
    ///
    /// Computes `r = (k · G).x mod n` and
    /// `s = k⁻¹ (H(message) + d·r) mod n`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEphemeral`] when `r` or `s` comes out zero, or
    /// when `k` itself is a multiple of `n` (which makes `k · G` the
    /// identity). The caller chooses a fresh `k` and retries.
    pub fn sign<H: MessageHasher>(
        &self,
        key: &KeyPair,
        k: &BigUint,
        hasher: &H,
        message: &[u8],
    ) -> Result<Signature, InvalidEphemeral> {
        let n = &self.order;

        let ephemeral_point = self.curve.mul_bigint(&self.generator, k);
        let r = match ephemeral_point.xy() {
            None => return Err(InvalidEphemeral),
            Some((x, _)) => x % n,
        };
        if r.is_zero() {
            return Err(InvalidEphemeral);
        }

        let k_inv = inverse(k, n).map_err(|_| InvalidEphemeral)?;
        let digest = hasher.digest(message);
        let s = mul_mod(&k_inv, &(digest + mul_mod(&key.secret, &r, n)), n);
        if s.is_zero() {
            return Err(InvalidEphemeral);
        }

        Ok(Signature { r, s })
    }

    /// Verifies `signature` over `message` against `public_key`.
    ///
    /// Total: every well-typed input produces a definitive boolean, and a
    /// malformed signature (a component outside `[1, n-1]`) is an invalid
    /// one, not an error. Accepts iff
    /// `(u₁ · G + u₂ · Q).x ≡ r (mod n)` for `u₁ = H(message) · s⁻¹` and
    /// `u₂ = r · s⁻¹`.
    pub fn verify<H: MessageHasher>(
        &self,
        signature: &Signature,
        hasher: &H,
        message: &[u8],
        public_key: &Affine,
    ) -> bool {
        let n = &self.order;

        let in_range = |v: &BigUint| !v.is_zero() && v < n;
        if !in_range(&signature.r) || !in_range(&signature.s) {
            return false;
        }

        // `s` is in `[1, n-1]` and `n` is prime, so the inverse exists;
        // a composite `n` surfaces here as a rejected signature.
        let Ok(w) = inverse(&signature.s, n) else {
            return false;
        };
        let digest = hasher.digest(message);
        let u1 = mul_mod(&digest, &w, n);
        let u2 = mul_mod(&signature.r, &w, n);

        let sum = self.curve.add(
            &self.curve.mul_bigint(&self.generator, &u1),
            &self.curve.mul_bigint(public_key, &u2),
        );
        match sum.xy() {
            None => false,
            Some((x, _)) => x % n == signature.r,
        }
    }
}
