//! Bit manipulation utilities.
//!
//! Scalars enter double-and-add as a stream of bits, most significant
//! first; [`BitIteratorBE`] is that interface, implemented for the
//! primitive unsigned integers and for [`BigUint`].

use num_bigint::BigUint;

/// Iterates over bits in big-endian order.
pub trait BitIteratorBE {
    /// Returns an iterator over the bits of the integer, starting from the
    /// most significant bit.
    fn bit_be_iter(&self) -> impl Iterator<Item = bool>;

    /// Returns an iterator over the bits of the integer, starting from the
    /// most significant bit, and without leading zeroes.
    fn bit_be_trimmed_iter(&self) -> impl Iterator<Item = bool> {
        self.bit_be_iter().skip_while(|&b| !b)
    }
}

macro_rules! impl_bit_iter_be {
    ($int:ty, $bits:expr) => {
        impl BitIteratorBE for $int {
            fn bit_be_iter(&self) -> impl Iterator<Item = bool> {
                (0..$bits).rev().map(move |i| self & (1 << i) != 0)
            }
        }
    };
}

impl_bit_iter_be!(u8, 8);
impl_bit_iter_be!(u16, 16);
impl_bit_iter_be!(u32, 32);
impl_bit_iter_be!(u64, 64);
impl_bit_iter_be!(u128, 128);

// `BigUint::bits` counts up to the highest set bit, so the untrimmed and
// trimmed iterators coincide and a zero value yields no bits at all.
impl BitIteratorBE for BigUint {
    fn bit_be_iter(&self) -> impl Iterator<Item = bool> {
        (0..self.bits()).rev().map(move |i| self.bit(i))
    }
}

impl BitIteratorBE for &BigUint {
    fn bit_be_iter(&self) -> impl Iterator<Item = bool> {
        (0..self.bits()).rev().map(move |i| self.bit(i))
    }
}
