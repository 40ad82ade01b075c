//! Internal storage helpers and the incremental [`BitsBuilder`].
//!
//! Storage is a boxed slice of units in big-endian order: index 0 holds the
//! most-significant unit. Arithmetic and shifts walk from the
//! least-significant end, so most helpers here address units "from the
//! right".

use alloc::{boxed::Box, vec, vec::Vec};

use crate::{Bits, unit::Unit};

/// Number of `U` units needed for `bits` bits.
#[inline(always)]
pub(crate) const fn unit_count(bits: usize, unit_bits: u32) -> usize {
    bits.div_ceil(unit_bits as usize)
}

/// Reads unit `i` counted from the least-significant end, zero-extending past
/// the most-significant unit.
#[inline(always)]
pub(crate) fn le_unit<U: Unit>(units: &[U], i: usize) -> U {
    match units.len().checked_sub(i + 1) {
        Some(idx) => units[idx],
        None => U::ZERO,
    }
}

/// Normalizes `units` to exactly `len` units aligned at the least-significant
/// end.
///
/// Shorter inputs are zero-extended on the most-significant side. Units of a
/// longer input that fall beyond `len` are dropped, which reduces the
/// magnitude modulo `2^(len * U::BITS)`.
pub(crate) fn normalize<U: Unit>(units: &[U], len: usize) -> Box<[U]> {
    let mut out = vec![U::ZERO; len];
    for (dst, &src) in out.iter_mut().rev().zip(units.iter().rev()) {
        *dst = src;
    }
    out.into_boxed_slice()
}

/// Splits a `u64` into `len` big-endian units, discarding bits that do not
/// fit.
pub(crate) fn units_from_u64<U: Unit>(value: u64, len: usize) -> Box<[U]> {
    let mut out = vec![U::ZERO; len];
    for (i, dst) in out.iter_mut().rev().enumerate() {
        let shift = (i as u64).saturating_mul(u64::from(U::BITS));
        if shift >= 64 {
            break;
        }
        *dst = U::from_u64(value >> shift);
    }
    out.into_boxed_slice()
}

/// Packs big-endian bytes into units. `bytes.len()` must be a multiple of the
/// unit size in bytes.
pub(crate) fn units_from_be_bytes<U: Unit>(bytes: &[u8]) -> Box<[U]> {
    let size = U::BITS as usize / 8;
    debug_assert_eq!(bytes.len() % size, 0);
    bytes
        .chunks_exact(size)
        .map(|chunk| U::from_u64(chunk.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))))
        .collect()
}

/// Masks the most-significant unit down to `bit_width` bits.
///
/// Returns `true` when set bits were discarded.
#[inline]
pub(crate) fn cut<U: Unit>(units: &mut [U], bit_width: usize) -> bool {
    let rem = (bit_width % U::BITS as usize) as u32;
    match units.first_mut() {
        Some(hi) if rem != 0 => {
            let masked = *hi & U::low_mask(rem);
            let dropped = masked != *hi;
            *hi = masked;
            dropped
        }
        _ => false,
    }
}

/// A builder for constructing a [`Bits`] vector one bit at a time, starting
/// from the least-significant bit.
///
/// The declared width of the finished vector is the number of bits pushed.
///
/// # Examples
///
/// ```
/// use fixbits::{BitsBuilder, ByteBits};
///
/// let mut builder = BitsBuilder::<u8>::new();
/// builder.push(true); // bit 0
/// builder.push(false); // bit 1
/// builder.push(true); // bit 2
/// let bits: ByteBits = builder.finalize();
///
/// assert_eq!(bits.bit_width(), 3);
/// assert_eq!(bits.to_number(), Ok(0b101));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BitsBuilder<U: Unit> {
    // Completed units, least-significant first.
    full: Vec<U>,
    partial: U,
    len: usize,
}

impl<U: Unit> BitsBuilder<U> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            full: Vec::new(),
            partial: U::ZERO,
            len: 0,
        }
    }

    /// Creates an empty builder with room for `bits` bits.
    #[must_use]
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            full: Vec::with_capacity(unit_count(bits, U::BITS)),
            partial: U::ZERO,
            len: 0,
        }
    }

    /// Number of bits pushed so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no bits have been pushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a bit above every bit pushed so far.
    pub fn push(&mut self, bit: bool) {
        let offset = (self.len % U::BITS as usize) as u32;
        self.partial = self.partial.with_bit(offset, bit);
        self.len += 1;
        if offset + 1 == U::BITS {
            self.full.push(core::mem::take(&mut self.partial));
        }
    }

    /// Consumes the builder and returns the vector.
    #[must_use]
    pub fn finalize(self) -> Bits<U> {
        let Self {
            mut full,
            partial,
            len,
        } = self;
        if len % U::BITS as usize != 0 {
            full.push(partial);
        }
        full.reverse();
        Bits::from_raw_parts(full.into_boxed_slice(), len)
    }
}

impl<U: Unit> Extend<bool> for BitsBuilder<U> {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl<U: Unit> From<BitsBuilder<U>> for Bits<U> {
    fn from(builder: BitsBuilder<U>) -> Self {
        builder.finalize()
    }
}
