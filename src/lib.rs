/*!
Elliptic-curve group arithmetic over prime fields, for curves in short
Weierstrass form (`y² = x³ + ax + b mod p`), together with a minimal
ECDSA-style signing and verification scheme built on that group.

Field elements and scalars are arbitrary-precision
([`num_bigint::BigUint`]), and curve parameters are plain runtime values
bound once into a [`curve::sw::SwCurve`] context, so one build works with
any curve and several curves can be used concurrently. Every operation is a
pure function over immutable values.

This crate favors clarity over speed and is **not** a hardened
cryptographic library: arithmetic is affine and variable-time, and nothing
here resists side channels or supplies secure randomness.

## Group arithmetic

```rust
use num_bigint::BigUint;
use primecurve::curve::sw::SwCurve;

// y² = x³ + x + 1 over F₅.
let curve = SwCurve::new(
    BigUint::from(1u32),
    BigUint::from(1u32),
    BigUint::from(5u32),
);

let p = curve.point(BigUint::from(0u32), BigUint::from(1u32));
let twice = curve.add(&p, &p);

assert!(curve.is_on_curve(&twice));
assert_eq!(curve.subgroup_order(&p), BigUint::from(9u32));
```

Signing and verification live in [`ecdsa`], with hash capabilities in
[`hash`] and [`keccak`] and ready-made curve parameters in
[`curve::sw::instance`].
*/

#![cfg_attr(not(feature = "std"), no_std)]

pub mod arithmetic;
pub mod bits;
pub mod curve;
pub mod ecdsa;
pub mod hash;
pub mod keccak;

pub use keccak::Keccak256;
