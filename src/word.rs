//! Word-granular bit vectors.

use crate::Bits;

/// A fixed-width bit vector stored as big-endian 64-bit words.
///
/// An `N`-bit vector occupies `ceil(N / 64)` words. Every operation produces
/// the same bits as [`ByteBits`](crate::ByteBits) does; only the storage
/// granularity differs, which makes carries and shifts on wide vectors
/// cheaper.
///
/// # Examples
///
/// ```
/// use fixbits::WordBits;
///
/// let mut bits = WordBits::new(65);
/// bits.reset(true);
/// bits.increment(1);
/// assert!(bits.is_zero());
/// assert_eq!(bits.as_words(), &[0, 0]);
/// ```
pub type WordBits = Bits<u64>;

impl Bits<u64> {
    /// Returns the storage words, most-significant first.
    #[must_use]
    #[inline]
    pub fn as_words(&self) -> &[u64] {
        &self.units
    }
}
