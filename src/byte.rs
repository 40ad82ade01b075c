//! Byte-granular bit vectors.

use crate::Bits;

/// A fixed-width bit vector stored as big-endian bytes.
///
/// An `N`-bit vector occupies `ceil(N / 8)` bytes, so the storage is exactly
/// the network-byte-order encoding of the value and can be handed to byte
/// streams through [`as_bytes`](Bits::as_bytes).
///
/// # Examples
///
/// ```
/// use fixbits::ByteBits;
///
/// let mut bits = ByteBits::new(12);
/// bits.increment(0xABC);
/// assert_eq!(bits.as_bytes(), &[0x0A, 0xBC]);
///
/// // Readback is only defined for native-shaped storage.
/// assert_eq!(bits.to_number(), Ok(0xABC));
/// ```
pub type ByteBits = Bits<u8>;

impl Bits<u8> {
    /// Returns the storage bytes, most-significant first.
    #[must_use]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.units
    }
}
