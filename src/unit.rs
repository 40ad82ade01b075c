//! Storage units backing a [`Bits`](crate::Bits) vector.

use alloc::vec::Vec;
use core::{
    fmt,
    hash::Hash,
    ops::{BitAnd, BitOr, BitXor, Not},
};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned machine integer used as the storage element of a bit vector.
///
/// Implemented for [`u8`] (byte granularity) and [`u64`] (word granularity).
/// The trait is sealed: the shift, carry and byte-order algorithms of the
/// crate assume a plain unsigned integer without padding.
pub trait Unit:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Number of bits in one unit.
    const BITS: u32;
    /// All bits clear.
    const ZERO: Self;
    /// All bits set.
    const ONES: Self;

    /// Returns a unit with only the low `bits` bits set.
    fn low_mask(bits: u32) -> Self;

    /// Returns whether bit `offset` (0 = least significant) is set.
    fn bit(self, offset: u32) -> bool;

    /// Sets or clears bit `offset`.
    fn with_bit(self, offset: u32, value: bool) -> Self;

    /// Logical left shift; yields zero when `n >= Self::BITS`.
    fn shl(self, n: u32) -> Self;

    /// Logical right shift; yields zero when `n >= Self::BITS`.
    fn shr(self, n: u32) -> Self;

    /// `self + rhs + carry`, returning the wrapped sum and the carry out.
    fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool);

    /// `self - rhs - borrow`, returning the wrapped difference and the borrow
    /// out.
    fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// Truncates a `u64` to this unit.
    fn from_u64(value: u64) -> Self;

    /// Zero-extends this unit to a `u64`. Only lossless for units of at most
    /// 64 bits, which covers every implementor.
    fn to_u64(self) -> u64;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Appends the big-endian bytes of this unit.
    fn extend_be_bytes(self, out: &mut Vec<u8>);
}

macro_rules! impl_unit {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl Unit for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;
            const ONES: Self = <$ty>::MAX;

            #[inline]
            fn low_mask(bits: u32) -> Self {
                if bits >= Self::BITS {
                    Self::ONES
                } else {
                    !(Self::ONES << bits)
                }
            }

            #[inline]
            fn bit(self, offset: u32) -> bool {
                (self >> offset) & 1 != 0
            }

            #[inline]
            fn with_bit(self, offset: u32, value: bool) -> Self {
                let mask: Self = 1 << offset;
                if value { self | mask } else { self & !mask }
            }

            #[inline]
            fn shl(self, n: u32) -> Self {
                self.checked_shl(n).unwrap_or(0)
            }

            #[inline]
            fn shr(self, n: u32) -> Self {
                self.checked_shr(n).unwrap_or(0)
            }

            #[inline]
            fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
                let (sum, c1) = self.overflowing_add(rhs);
                let (sum, c2) = sum.overflowing_add(Self::from(carry));
                (sum, c1 | c2)
            }

            #[inline]
            fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
                let (diff, b1) = self.overflowing_sub(rhs);
                let (diff, b2) = diff.overflowing_sub(Self::from(borrow));
                (diff, b1 | b2)
            }

            #[inline]
            fn from_u64(value: u64) -> Self {
                value as Self
            }

            #[inline]
            fn to_u64(self) -> u64 {
                u64::from(self)
            }

            #[inline]
            fn count_ones(self) -> u32 {
                <$ty>::count_ones(self)
            }

            #[inline]
            fn extend_be_bytes(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_be_bytes());
            }
        }
    )*};
}

impl_unit!(u8, u64);
