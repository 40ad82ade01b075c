//! `Bits` struct and core implementation.

use alloc::{boxed::Box, vec, vec::Vec};

use crate::{
    iter::BitIter,
    macros::{trace_event, unitpos},
    storage::{self, le_unit, unit_count, units_from_be_bytes, units_from_u64},
    traits::BitsError,
    unit::Unit,
};

/// A fixed-width bit vector stored as big-endian units.
///
/// # Overview
///
/// `Bits<U>` holds exactly [`bit_width`](Self::bit_width) bits in
/// `ceil(bit_width / U::BITS)` units of type `U`. The vector never grows or
/// shrinks: arithmetic wraps, shifts drop bits off the edge, and every
/// mutating method finishes by clearing the bits above the declared width.
///
/// Use [`ByteBits`](crate::ByteBits) for byte storage and
/// [`WordBits`](crate::WordBits) for 64-bit word storage. Both behave
/// identically at the bit level.
///
/// # Storage Layout
///
/// - Units are ordered most-significant first, so `as_units()[0]` holds the
///   top bits. For byte storage this is network byte order.
/// - Bit 0 is the least-significant bit of the last unit.
/// - When the width is not a multiple of `U::BITS`, the unused high bits of
///   the first unit are always zero.
///
/// # Examples
///
/// ```
/// use fixbits::ByteBits;
///
/// let mut bits = ByteBits::from(255u16);
/// bits.increment(1);
///
/// assert_eq!(bits.to_number(), Ok(256));
/// assert_eq!(bits.bit_width(), 16);
/// assert_eq!(bits.as_bytes(), &[0x01, 0x00]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bits<U: Unit> {
    pub(crate) units: Box<[U]>,
    pub(crate) bit_width: usize,
}

impl<U: Unit> Bits<U> {
    /// Creates a zeroed vector of `bit_width` bits.
    ///
    /// A zero width is allowed and produces an empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::ByteBits;
    /// let bits = ByteBits::new(9);
    /// assert_eq!(bits.bit_width(), 9);
    /// assert_eq!(bits.unit_count(), 2);
    /// assert!(bits.is_zero());
    /// ```
    #[must_use]
    pub fn new(bit_width: usize) -> Self {
        Self {
            units: vec![U::ZERO; unit_count(bit_width, U::BITS)].into_boxed_slice(),
            bit_width,
        }
    }

    /// Wraps `units` without checking their count, then cuts to `bit_width`.
    pub(crate) fn from_raw_parts(units: Box<[U]>, bit_width: usize) -> Self {
        debug_assert_eq!(units.len(), unit_count(bit_width, U::BITS));
        let mut bits = Self { units, bit_width };
        bits.cut();
        bits
    }

    /// Creates a vector from a native integer value of a runtime-chosen
    /// width.
    ///
    /// `bit_width` must be the width of a native integer type: 8, 16, 32 or
    /// 64. The value is truncated to that width, so the two's-complement bit
    /// pattern of a sign-extended negative number is stored as-is.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::UnsupportedWidth`] for any other width.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::{BitsError, WordBits};
    /// let bits = WordBits::from_value(0x1FF, 8)?;
    /// assert_eq!(bits.to_number(), Ok(0xFF));
    ///
    /// assert_eq!(
    ///     WordBits::from_value(1, 12),
    ///     Err(BitsError::UnsupportedWidth { bits: 12 })
    /// );
    /// # Ok::<(), BitsError>(())
    /// ```
    pub fn from_value(value: u64, bit_width: u32) -> Result<Self, BitsError> {
        if !matches!(bit_width, 8 | 16 | 32 | 64) {
            trace_event!(bit_width, "rejected native width");
            return Err(BitsError::UnsupportedWidth { bits: bit_width });
        }
        let bit_width = bit_width as usize;
        let units = units_from_u64(value, unit_count(bit_width, U::BITS));
        Ok(Self::from_raw_parts(units, bit_width))
    }

    /// Creates a vector from big-endian storage units.
    ///
    /// `units` must hold exactly `ceil(bit_width / U::BITS)` units. Bits of
    /// the first unit above the declared width are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::LengthMismatch`] if the unit count is wrong.
    pub fn from_units(bit_width: usize, units: &[U]) -> Result<Self, BitsError> {
        let expected = unit_count(bit_width, U::BITS);
        if units.len() != expected {
            return Err(BitsError::LengthMismatch {
                expected,
                actual: units.len(),
            });
        }
        Ok(Self::from_raw_parts(units.into(), bit_width))
    }

    /// Creates a vector from big-endian bytes.
    ///
    /// `bytes` must hold exactly `unit_count * U::BITS / 8` bytes, the length
    /// [`to_be_bytes`](Self::to_be_bytes) produces for the same width.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::LengthMismatch`] if the byte count is wrong.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::{BitsError, WordBits};
    /// let bytes = [0, 0, 0, 0, 0, 0, 0x12, 0x34];
    /// let bits = WordBits::from_be_bytes(16, &bytes)?;
    /// assert_eq!(bits.to_number(), Ok(0x1234));
    /// # Ok::<(), BitsError>(())
    /// ```
    pub fn from_be_bytes(bit_width: usize, bytes: &[u8]) -> Result<Self, BitsError> {
        let expected = Self::byte_len(bit_width);
        if bytes.len() != expected {
            return Err(BitsError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self::from_raw_parts(units_from_be_bytes(bytes), bit_width))
    }

    #[inline]
    const fn byte_len(bit_width: usize) -> usize {
        unit_count(bit_width, U::BITS) * (U::BITS as usize / 8)
    }

    /// Returns the declared number of bits.
    #[must_use]
    #[inline]
    pub const fn bit_width(&self) -> usize {
        self.bit_width
    }

    /// Returns the number of storage units.
    #[must_use]
    #[inline]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Returns the number of bits the storage can hold, `unit_count() *
    /// U::BITS`. This is the boundary shifts operate within.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.units.len() * U::BITS as usize
    }

    /// Returns the storage, most-significant unit first.
    #[must_use]
    #[inline]
    pub fn as_units(&self) -> &[U] {
        &self.units
    }

    /// Reads the storage back as a native unsigned integer.
    ///
    /// Only storage shapes matching a native width are accepted: the storage
    /// capacity must be exactly 8, 16, 32 or 64 bits. For byte vectors that
    /// means 1, 2, 4 or 8 units; for word vectors a single unit.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::UnsupportedShape`] for any other storage shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::{BitsError, ByteBits};
    /// let mut bits = ByteBits::new(9);
    /// bits.reset(true);
    /// assert_eq!(bits.to_number(), Ok(0b1_1111_1111));
    ///
    /// let odd = ByteBits::new(17); // three bytes
    /// assert_eq!(
    ///     odd.to_number(),
    ///     Err(BitsError::UnsupportedShape { units: 3, unit_bits: 8 })
    /// );
    /// ```
    pub fn to_number(&self) -> Result<u64, BitsError> {
        if !matches!(self.capacity(), 8 | 16 | 32 | 64) {
            trace_event!(
                units = self.units.len(),
                unit_bits = U::BITS,
                "storage shape has no native readback"
            );
            return Err(BitsError::UnsupportedShape {
                units: self.units.len(),
                unit_bits: U::BITS,
            });
        }
        Ok(self.units.iter().fold(0u64, |acc, &unit| {
            acc.checked_shl(U::BITS).unwrap_or(0) | unit.to_u64()
        }))
    }

    /// Returns the declared bits, most-significant first.
    ///
    /// The sequence has exactly [`bit_width`](Self::bit_width) entries and is
    /// the same for byte and word storage of the same value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::ByteBits;
    /// let bits: ByteBits = "101".parse()?;
    /// assert_eq!(bits.to_bit_sequence(), vec![true, false, true]);
    /// # Ok::<(), fixbits::ParseBitsError>(())
    /// ```
    #[must_use]
    pub fn to_bit_sequence(&self) -> Vec<bool> {
        self.iter().collect()
    }

    /// Returns an iterator over the declared bits, most-significant first.
    #[must_use]
    pub fn iter(&self) -> BitIter<'_, U> {
        BitIter::new(self)
    }

    /// Returns the storage as big-endian bytes.
    ///
    /// The result has `unit_count() * U::BITS / 8` bytes.
    #[must_use]
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::byte_len(self.bit_width));
        for &unit in self.units.iter() {
            unit.extend_be_bytes(&mut out);
        }
        out
    }

    /// Converts to another storage granularity, keeping width and value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::{ByteBits, WordBits};
    /// let bytes = ByteBits::from(0xBEEFu16);
    /// let words: WordBits = bytes.regranulate();
    /// assert_eq!(words.bit_width(), 16);
    /// assert_eq!(words.as_words(), &[0xBEEF]);
    /// ```
    #[must_use]
    pub fn regranulate<V: Unit>(&self) -> Bits<V> {
        let bytes = self.to_be_bytes();
        let bytes = storage::normalize(&bytes, Bits::<V>::byte_len(self.bit_width));
        Bits::from_raw_parts(units_from_be_bytes(&bytes), self.bit_width)
    }

    /// Sets every declared bit to `ones`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::WordBits;
    /// let mut bits = WordBits::new(70);
    /// bits.reset(true);
    /// assert_eq!(bits.as_words(), &[0x3F, u64::MAX]);
    /// assert_eq!(bits.count_ones(), 70);
    /// ```
    pub fn reset(&mut self, ones: bool) {
        self.units.fill(if ones { U::ONES } else { U::ZERO });
        self.cut();
    }

    /// Clears every storage bit above the declared width.
    ///
    /// Returns `true` if set bits were discarded.
    #[inline]
    pub(crate) fn cut(&mut self) -> bool {
        storage::cut(&mut self.units, self.bit_width)
    }

    /// Returns the bit at `index`, counting from the least-significant bit.
    ///
    /// Indices at or past the declared width read as `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::ByteBits;
    /// let bits = ByteBits::from(0b1010_1010u16);
    /// assert!(!bits.get_bit(0));
    /// assert!(bits.get_bit(1));
    /// assert!(bits.get_bit(7));
    /// assert!(!bits.get_bit(1000));
    /// ```
    #[must_use]
    pub fn get_bit(&self, index: usize) -> bool {
        if index >= self.bit_width {
            return false;
        }
        let (ui, off) = unitpos!(index, U::BITS);
        le_unit(&self.units, ui).bit(off as u32)
    }

    /// Writes the bit at `index`, counting from the least-significant bit.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::IndexOutOfRange`] if `index` is not below the
    /// declared width. The vector is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::{BitsError, ByteBits};
    /// let mut bits = ByteBits::from(0b10101u16);
    /// bits.set_bit(15, true)?;
    /// assert_eq!(bits.to_number(), Ok(0b1000_0000_0001_0101));
    ///
    /// assert_eq!(
    ///     bits.set_bit(16, true),
    ///     Err(BitsError::IndexOutOfRange { index: 16, bit_width: 16 })
    /// );
    /// # Ok::<(), BitsError>(())
    /// ```
    pub fn set_bit(&mut self, index: usize, value: bool) -> Result<(), BitsError> {
        if index >= self.bit_width {
            trace_event!(index, bit_width = self.bit_width, "set_bit out of range");
            return Err(BitsError::IndexOutOfRange {
                index,
                bit_width: self.bit_width,
            });
        }
        let (ui, off) = unitpos!(index, U::BITS);
        let idx = self.units.len() - 1 - ui;
        self.units[idx] = self.units[idx].with_bit(off as u32, value);
        self.cut();
        Ok(())
    }

    /// Returns the number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.units.iter().map(|u| u.count_ones() as usize).sum()
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.units.iter().all(|&u| u == U::ZERO)
    }

    // ========================================================================
    // Shift Operations
    // ========================================================================

    /// Shifts the bits towards the most-significant end by `n` positions.
    ///
    /// The shift happens within the full storage capacity. Bits pushed past
    /// the storage are lost and bits pushed past the declared width are
    /// cleared. A negative `n` shifts right instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::ByteBits;
    /// let mut bits = ByteBits::from(0b101u16);
    /// bits.shift_left(9);
    /// assert_eq!(bits.to_number(), Ok(0b101 << 9));
    ///
    /// bits.shift_left(-9);
    /// assert_eq!(bits.to_number(), Ok(0b101));
    /// ```
    pub fn shift_left(&mut self, n: isize) {
        if n >= 0 {
            self.shl_bits(n.unsigned_abs());
        } else {
            self.shr_bits(n.unsigned_abs());
        }
    }

    /// Shifts the bits towards the least-significant end by `n` positions,
    /// filling with zeros. A negative `n` shifts left instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::WordBits;
    /// let mut bits = WordBits::from(0b10100u64);
    /// bits.shift_right(2);
    /// assert_eq!(bits.to_number(), Ok(0b101));
    /// ```
    pub fn shift_right(&mut self, n: isize) {
        if n >= 0 {
            self.shr_bits(n.unsigned_abs());
        } else {
            self.shl_bits(n.unsigned_abs());
        }
    }

    pub(crate) fn shl_bits(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let len = self.units.len();
        let (ws, bs) = unitpos!(n, U::BITS);
        if ws >= len {
            self.units.fill(U::ZERO);
            return;
        }
        let bs = bs as u32;
        // Destination d reads sources d + ws and d + ws + 1, both at or after
        // d, so an ascending walk never reads a unit it already wrote.
        for d in 0..len {
            let hi = self.units.get(d + ws).copied().unwrap_or(U::ZERO);
            let lo = self.units.get(d + ws + 1).copied().unwrap_or(U::ZERO);
            self.units[d] = hi.shl(bs) | lo.shr(U::BITS - bs);
        }
        self.cut();
    }

    pub(crate) fn shr_bits(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let len = self.units.len();
        let (ws, bs) = unitpos!(n, U::BITS);
        if ws >= len {
            self.units.fill(U::ZERO);
            return;
        }
        let bs = bs as u32;
        for d in (0..len).rev() {
            let lo = d.checked_sub(ws).map_or(U::ZERO, |i| self.units[i]);
            let hi = d.checked_sub(ws + 1).map_or(U::ZERO, |i| self.units[i]);
            self.units[d] = lo.shr(bs) | hi.shl(U::BITS - bs);
        }
        self.cut();
    }
}
