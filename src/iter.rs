//! Iterator implementations for `Bits`.

use core::iter::{FromIterator, FusedIterator};

use crate::{Bits, storage::BitsBuilder, unit::Unit};

/// An iterator over the declared bits of a [`Bits`] vector.
///
/// Yields `bool`s from the most-significant declared bit down to bit 0. It is
/// created by [`Bits::iter`] and by iterating over `&Bits`.
///
/// # Examples
///
/// ```
/// use fixbits::ByteBits;
///
/// let bits = ByteBits::from(0b1000_0001u8);
/// let msb_first: Vec<bool> = bits.iter().collect();
/// assert_eq!(msb_first.first(), Some(&true));
/// assert_eq!(msb_first.len(), 8);
///
/// // Reversed iteration walks from bit 0 upwards.
/// let lsb_first: Vec<bool> = bits.iter().rev().take(2).collect();
/// assert_eq!(lsb_first, vec![true, false]);
/// ```
#[derive(Clone)]
pub struct BitIter<'a, U: Unit> {
    bits: &'a Bits<U>,
    // Remaining positions are `back..front`; `front` is one past the next bit
    // yielded by `next`.
    front: usize,
    back: usize,
}

impl<'a, U: Unit> BitIter<'a, U> {
    /// Creates an iterator over all declared bits of `bits`.
    #[must_use]
    pub fn new(bits: &'a Bits<U>) -> Self {
        Self {
            bits,
            front: bits.bit_width(),
            back: 0,
        }
    }
}

impl<U: Unit> Iterator for BitIter<'_, U> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.front -= 1;
        Some(self.bits.get_bit(self.front))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.front - self.back;
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_sub(n).max(self.back);
        self.next()
    }
}

impl<U: Unit> DoubleEndedIterator for BitIter<'_, U> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let bit = self.bits.get_bit(self.back);
        self.back += 1;
        Some(bit)
    }
}

impl<U: Unit> ExactSizeIterator for BitIter<'_, U> {}

impl<U: Unit> FusedIterator for BitIter<'_, U> {}

impl<'a, U: Unit> IntoIterator for &'a Bits<U> {
    type Item = bool;
    type IntoIter = BitIter<'a, U>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<U: Unit> FromIterator<bool> for Bits<U> {
    /// Collects bits given most-significant first; the width is the number of
    /// items.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixbits::WordBits;
    ///
    /// let bits: WordBits = [true, true, false].into_iter().collect();
    /// assert_eq!(bits.bit_width(), 3);
    /// assert_eq!(bits.to_number(), Ok(0b110));
    /// ```
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let msb_first: alloc::vec::Vec<bool> = iter.into_iter().collect();
        let mut builder = BitsBuilder::with_capacity(msb_first.len());
        builder.extend(msb_first.into_iter().rev());
        builder.finalize()
    }
}
