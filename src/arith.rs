//! Wrapping arithmetic for `Bits`.
//!
//! The vector is read as an unsigned big-endian magnitude. Carries and borrows
//! ripple from the least-significant unit upwards and whatever leaves the
//! declared width is dropped, so every operation here is arithmetic modulo
//! `2^bit_width`.
//!
//! Operands are normalized to the target's unit count before the walk:
//! shorter operands are zero-extended on the most-significant side and units
//! of a longer operand past the target's storage are discarded.

use core::{
    cmp::Ordering,
    ops::{AddAssign, SubAssign},
};

use crate::{
    Bits,
    macros::trace_event,
    storage::{normalize, units_from_u64},
    unit::Unit,
};

impl<U: Unit> Bits<U> {
    /// Adds `delta` to the magnitude, wrapping within the declared width.
    ///
    /// A negative `delta` subtracts its absolute value. Overflow and
    /// underflow wrap silently; see
    /// [`overflowing_increment`](Self::overflowing_increment) to observe
    /// them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::ByteBits;
    /// let mut bits = ByteBits::from(0b101u16);
    /// bits.increment(-1);
    /// assert_eq!(bits.to_number(), Ok(0b100));
    ///
    /// let mut bits = ByteBits::new(4);
    /// bits.increment(-1);
    /// assert_eq!(bits.to_number(), Ok(0b1111));
    /// ```
    pub fn increment(&mut self, delta: i64) {
        if self.overflowing_increment(delta) {
            trace_event!(
                bit_width = self.bit_width,
                delta,
                "increment wrapped past declared width"
            );
        }
    }

    /// Same as [`increment`](Self::increment), returning `true` when the
    /// exact result did not fit in the declared width.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::WordBits;
    /// let mut bits = WordBits::new(3);
    /// bits.reset(true);
    /// assert!(bits.overflowing_increment(1));
    /// assert!(bits.is_zero());
    /// assert!(!bits.overflowing_increment(7));
    /// assert!(bits.overflowing_increment(-8));
    /// assert_eq!(bits.to_number(), Ok(7));
    /// ```
    pub fn overflowing_increment(&mut self, delta: i64) -> bool {
        match delta.cmp(&0) {
            Ordering::Equal => false,
            Ordering::Greater => self.step(delta.unsigned_abs(), false),
            Ordering::Less => self.step(delta.unsigned_abs(), true),
        }
    }

    /// Adds or subtracts `magnitude`, returning whether the result wrapped.
    pub(crate) fn step(&mut self, magnitude: u64, subtract: bool) -> bool {
        let capacity = self.capacity();
        // Bits of the magnitude beyond the storage cannot be represented;
        // dropping them is the same reduction modulo 2^bit_width.
        let truncated = capacity < 64 && magnitude >> capacity != 0;
        let rhs = units_from_u64::<U>(magnitude, self.units.len());
        let wrapped = if subtract {
            self.sub_units(&rhs)
        } else {
            self.add_units(&rhs)
        };
        wrapped | truncated
    }

    /// Ripple-carry addition of a same-length operand, then cut.
    fn add_units(&mut self, rhs: &[U]) -> bool {
        debug_assert_eq!(rhs.len(), self.units.len());
        let mut carry = false;
        for (dst, &src) in self.units.iter_mut().rev().zip(rhs.iter().rev()) {
            (*dst, carry) = dst.carrying_add(src, carry);
        }
        // Cut after the walk so the reported bit is evaluated in full.
        let dropped = self.cut();
        carry | dropped
    }

    /// Ripple-borrow subtraction of a same-length operand, then cut.
    fn sub_units(&mut self, rhs: &[U]) -> bool {
        debug_assert_eq!(rhs.len(), self.units.len());
        let mut borrow = false;
        for (dst, &src) in self.units.iter_mut().rev().zip(rhs.iter().rev()) {
            (*dst, borrow) = dst.borrowing_sub(src, borrow);
        }
        self.cut();
        borrow
    }
}

impl<U: Unit> AddAssign<i64> for Bits<U> {
    /// `bits += n` is [`Bits::increment`].
    #[inline]
    fn add_assign(&mut self, rhs: i64) {
        self.increment(rhs);
    }
}

impl<U: Unit> SubAssign<i64> for Bits<U> {
    /// `bits -= n` subtracts `n`, wrapping. `i64::MIN` is handled without
    /// negation overflow.
    #[inline]
    fn sub_assign(&mut self, rhs: i64) {
        self.step(rhs.unsigned_abs(), rhs > 0);
    }
}

impl<U: Unit> AddAssign<&Self> for Bits<U> {
    /// Adds another vector's magnitude, wrapping within `self`'s width.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixbits::ByteBits;
    /// let mut a = ByteBits::from(0xFFu8);
    /// a += &ByteBits::from(0x0102u16);
    /// assert_eq!(a.to_number(), Ok(0x01));
    /// ```
    fn add_assign(&mut self, rhs: &Self) {
        let rhs = normalize(&rhs.units, self.units.len());
        self.add_units(&rhs);
    }
}

impl<U: Unit> SubAssign<&Self> for Bits<U> {
    /// Subtracts another vector's magnitude, wrapping within `self`'s width.
    fn sub_assign(&mut self, rhs: &Self) {
        let rhs = normalize(&rhs.units, self.units.len());
        self.sub_units(&rhs);
    }
}
