//! Bitwise logic and magnitude comparison for `Bits`.

use core::cmp::Ordering;

use crate::{
    Bits,
    storage::{le_unit, unit_count},
    unit::Unit,
};

impl<U: Unit> Bits<U> {
    /// Combines two vectors unit by unit from the least-significant end,
    /// zero-extending the shorter one, into a new vector of `bit_width` bits.
    fn zip_units(&self, other: &Self, bit_width: usize, f: impl Fn(U, U) -> U) -> Self {
        let len = unit_count(bit_width, U::BITS);
        let units = (0..len)
            .rev()
            .map(|i| f(le_unit(&self.units, i), le_unit(&other.units, i)))
            .collect();
        Self::from_raw_parts(units, bit_width)
    }

    /// Returns the bitwise AND of two vectors.
    ///
    /// The result narrows to the smaller operand: its width is the smaller of
    /// the two declared widths. Nothing is lost, since the wider operand's
    /// extra bits meet implicit zeros.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::ByteBits;
    /// let a = ByteBits::from(0b101u16);
    /// let b = ByteBits::from(0b110u8);
    ///
    /// let c = a.and(&b);
    /// assert_eq!(c.bit_width(), 8);
    /// assert_eq!(c.to_number(), Ok(0b100));
    /// ```
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        let bit_width = self.bit_width.min(other.bit_width);
        self.zip_units(other, bit_width, |a, b| a & b)
    }

    /// Returns the bitwise OR of two vectors.
    ///
    /// The result widens to the larger operand's declared width; missing
    /// units of the shorter operand read as zero.
    ///
    /// Time complexity: O(n) where n is the larger unit count.
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        let bit_width = self.bit_width.max(other.bit_width);
        self.zip_units(other, bit_width, |a, b| a | b)
    }

    /// Returns the bitwise XOR of two vectors, widened like [`or`](Self::or).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::WordBits;
    /// let a = WordBits::from(0b101u16);
    /// let b = WordBits::from(0b110u16);
    /// assert_eq!(a.xor(&b).to_number(), Ok(0b011));
    /// ```
    #[must_use]
    pub fn xor(&self, other: &Self) -> Self {
        let bit_width = self.bit_width.max(other.bit_width);
        self.zip_units(other, bit_width, |a, b| a ^ b)
    }

    /// Returns the bitwise complement within the declared width.
    ///
    /// Also available as the `!` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::ByteBits;
    /// let bits = ByteBits::from_units(12, &[0x0A, 0x0F]).unwrap();
    /// let inv = bits.inverse();
    /// assert_eq!(inv.as_bytes(), &[0x05, 0xF0]);
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Self {
        let units = self.units.iter().map(|&u| !u).collect();
        Self::from_raw_parts(units, self.bit_width)
    }

    /// ANDs `other` into `self`, keeping `self`'s width.
    pub fn and_with(&mut self, other: &Self) {
        for (i, dst) in self.units.iter_mut().rev().enumerate() {
            *dst = *dst & le_unit(&other.units, i);
        }
    }

    /// ORs `other` into `self`, keeping `self`'s width. Bits of `other`
    /// above that width are discarded.
    pub fn or_with(&mut self, other: &Self) {
        for (i, dst) in self.units.iter_mut().rev().enumerate() {
            *dst = *dst | le_unit(&other.units, i);
        }
        self.cut();
    }

    /// XORs `other` into `self`, keeping `self`'s width. Bits of `other`
    /// above that width are discarded.
    pub fn xor_with(&mut self, other: &Self) {
        for (i, dst) in self.units.iter_mut().rev().enumerate() {
            *dst = *dst ^ le_unit(&other.units, i);
        }
        self.cut();
    }

    /// Compares the unsigned magnitudes of two vectors.
    ///
    /// Units are compared most-significant first, with the shorter vector
    /// zero-extended, so vectors of different widths compare by value alone.
    /// Returns [`Ordering::Less`] when `self < other`. Use `as i8` for a
    /// `-1 / 0 / 1` result.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// # use fixbits::ByteBits;
    ///
    /// let small = ByteBits::from(200u8);
    /// let large = ByteBits::from(300u16);
    ///
    /// assert_eq!(small.compare(&large), Ordering::Less);
    /// assert_eq!(large.compare(&small) as i8, 1);
    /// assert_eq!(small.compare(&ByteBits::from(200u32)), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        let len = self.units.len().max(other.units.len());
        (0..len)
            .rev()
            .map(|i| le_unit(&self.units, i).cmp(&le_unit(&other.units, i)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}
