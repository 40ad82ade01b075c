//! Trait implementations and error types for `Bits`.

use core::{
    fmt,
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Not, ShlAssign,
        ShrAssign,
    },
    str::FromStr,
};

use crate::{
    Bits,
    storage::{BitsBuilder, unit_count, units_from_u64},
    unit::Unit,
};

/// Errors reported by [`Bits`] constructors, readback and bit writes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BitsError {
    /// A native-integer constructor was given a width other than 8, 16, 32
    /// or 64 bits.
    UnsupportedWidth {
        /// The rejected width
        bits: u32,
    },

    /// A bit write addressed a position at or past the declared width.
    IndexOutOfRange {
        /// The requested bit index
        index: usize,
        /// The declared width of the vector
        bit_width: usize,
    },

    /// The storage does not have the shape of a native integer, so it cannot
    /// be read back as a number.
    UnsupportedShape {
        /// Number of storage units
        units: usize,
        /// Bits per storage unit
        unit_bits: u32,
    },

    /// Raw storage of the wrong length was supplied.
    LengthMismatch {
        /// Number of units or bytes the width requires
        expected: usize,
        /// Number supplied
        actual: usize,
    },
}

impl fmt::Display for BitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedWidth { bits } => {
                write!(f, "unsupported native integer width of {bits} bits")
            }
            Self::IndexOutOfRange { index, bit_width } => {
                write!(
                    f,
                    "bit index {index} is out of range for a {bit_width}-bit vector"
                )
            }
            Self::UnsupportedShape { units, unit_bits } => {
                write!(
                    f,
                    "{units} units of {unit_bits} bits do not form a native integer"
                )
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} storage elements, got {actual}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitsError {}

/// Errors that can occur when parsing a binary string into a [`Bits`] vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBitsError {
    /// Invalid character found in the binary string.
    InvalidChar {
        /// The invalid character found
        ch: char,
        /// The position of the invalid character
        pos: usize,
    },

    /// No binary digits were provided.
    Empty,
}

impl fmt::Display for ParseBitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { ch: char, pos } => {
                write!(
                    f,
                    "invalid character '{char}' at position {pos} in binary string"
                )
            }
            Self::Empty => write!(f, "cannot parse bits from a string without digits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBitsError {}

// ============================================================================
// Formatting and Parsing
// ============================================================================

impl<U: Unit> fmt::Display for Bits<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self, f)
    }
}

impl<U: Unit> fmt::Binary for Bits<U> {
    /// Formats exactly `bit_width` binary digits, most-significant first.
    ///
    /// Leading zeros are kept since they are part of the declared width. The
    /// alternate flag adds a `0b` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixbits::ByteBits;
    ///
    /// let mut bits = ByteBits::new(6);
    /// bits.set_bit(0, true)?;
    /// bits.set_bit(3, true)?;
    ///
    /// assert_eq!(format!("{bits}"), "001001");
    /// assert_eq!(format!("{bits:#b}"), "0b001001");
    /// # Ok::<(), fixbits::BitsError>(())
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        if f.alternate() {
            f.write_str("0b")?;
        }
        for bit in self {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl<U: Unit> fmt::Debug for Bits<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bits")
            .field("bit_width", &self.bit_width)
            .field("bits", &format_args!("{self:#b}"))
            .finish()
    }
}

impl<U: Unit> FromStr for Bits<U> {
    type Err = ParseBitsError;

    /// Parses a binary string into a vector as wide as the number of digits.
    ///
    /// The input may start with `0b` and may use `_` as a separator. The
    /// leftmost digit is the most-significant bit.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseBitsError`] if the string contains invalid characters
    /// or no digits at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixbits::WordBits;
    ///
    /// let bits: WordBits = "0b0001_0101".parse()?;
    /// assert_eq!(bits.bit_width(), 8);
    /// assert_eq!(bits.to_number(), Ok(0b10101));
    ///
    /// # Ok::<(), fixbits::ParseBitsError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0b").unwrap_or(s);
        let offset = s.len() - digits.len();

        // Walk from the right so the first digit pushed is bit 0.
        let mut builder = BitsBuilder::with_capacity(digits.len());
        for (pos, ch) in digits.char_indices().rev() {
            let bit = match ch {
                '1' => true,
                '0' => false,
                '_' => continue,
                _ => {
                    return Err(ParseBitsError::InvalidChar {
                        ch,
                        pos: pos + offset,
                    });
                }
            };
            builder.push(bit);
        }
        if builder.is_empty() {
            return Err(ParseBitsError::Empty);
        }
        Ok(builder.finalize())
    }
}

// ============================================================================
// Index Trait Implementation
// ============================================================================

impl<U: Unit> Index<usize> for Bits<U> {
    type Output = bool;

    /// Returns a reference to a static bool matching [`Bits::get_bit`].
    ///
    /// Indices past the declared width read as `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixbits::ByteBits;
    ///
    /// let bits = ByteBits::from(0b100u8);
    /// assert!(bits[2]);
    /// assert!(!bits[0]);
    /// assert!(!bits[1000]);
    /// ```
    fn index(&self, index: usize) -> &Self::Output {
        if self.get_bit(index) { &true } else { &false }
    }
}

// ============================================================================
// Bitwise Operator Implementations
// ============================================================================

impl<U: Unit> BitAnd for Bits<U> {
    type Output = Self;

    /// Same as [`Bits::and`].
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bits::and(&self, &rhs)
    }
}

impl<U: Unit> BitAnd for &Bits<U> {
    type Output = Bits<U>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bits::and(self, rhs)
    }
}

impl<U: Unit> BitAndAssign<&Self> for Bits<U> {
    /// Same as [`Bits::and_with`]; the width of the left operand is kept.
    #[inline]
    fn bitand_assign(&mut self, rhs: &Self) {
        self.and_with(rhs);
    }
}

impl<U: Unit> BitOr for Bits<U> {
    type Output = Self;

    /// Same as [`Bits::or`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixbits::ByteBits;
    ///
    /// let a = ByteBits::from(0b101u8);
    /// let b = ByteBits::from(0b110u8);
    /// assert_eq!((a | b).to_number(), Ok(0b111));
    /// ```
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bits::or(&self, &rhs)
    }
}

impl<U: Unit> BitOr for &Bits<U> {
    type Output = Bits<U>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bits::or(self, rhs)
    }
}

impl<U: Unit> BitOrAssign<&Self> for Bits<U> {
    /// Same as [`Bits::or_with`]; the width of the left operand is kept.
    #[inline]
    fn bitor_assign(&mut self, rhs: &Self) {
        self.or_with(rhs);
    }
}

impl<U: Unit> BitXor for Bits<U> {
    type Output = Self;

    /// Same as [`Bits::xor`].
    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bits::xor(&self, &rhs)
    }
}

impl<U: Unit> BitXor for &Bits<U> {
    type Output = Bits<U>;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bits::xor(self, rhs)
    }
}

impl<U: Unit> BitXorAssign<&Self> for Bits<U> {
    /// Same as [`Bits::xor_with`]; the width of the left operand is kept.
    #[inline]
    fn bitxor_assign(&mut self, rhs: &Self) {
        self.xor_with(rhs);
    }
}

impl<U: Unit> Not for Bits<U> {
    type Output = Self;

    /// Returns the complement within the declared width.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixbits::WordBits;
    ///
    /// let a = WordBits::from(0b101u8);
    /// assert_eq!((!a).to_number(), Ok(0b1111_1010));
    /// ```
    #[inline]
    fn not(mut self) -> Self::Output {
        for unit in self.units.iter_mut() {
            *unit = !*unit;
        }
        self.cut();
        self
    }
}

impl<U: Unit> Not for &Bits<U> {
    type Output = Bits<U>;

    #[inline]
    fn not(self) -> Self::Output {
        self.inverse()
    }
}

impl<U: Unit> ShlAssign<usize> for Bits<U> {
    /// Same as [`Bits::shift_left`] with a non-negative amount.
    #[inline]
    fn shl_assign(&mut self, rhs: usize) {
        self.shl_bits(rhs);
    }
}

impl<U: Unit> ShrAssign<usize> for Bits<U> {
    /// Same as [`Bits::shift_right`] with a non-negative amount.
    #[inline]
    fn shr_assign(&mut self, rhs: usize) {
        self.shr_bits(rhs);
    }
}

// ============================================================================
// From Primitive Integer Implementations
// ============================================================================

macro_rules! impl_from_native {
    ($($ty:ty),*) => {$(
        impl<U: Unit> From<$ty> for Bits<U> {
            #[doc = concat!(
                "Creates a vector as wide as `", stringify!($ty),
                "` holding the value's bit pattern."
            )]
            #[inline]
            fn from(value: $ty) -> Self {
                let bit_width = <$ty>::BITS as usize;
                let units = units_from_u64(value as u64, unit_count(bit_width, U::BITS));
                Self::from_raw_parts(units, bit_width)
            }
        }
    )*};
}

impl_from_native!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, string::ToString};

    #[test]
    fn test_signed_values_keep_bit_pattern() {
        let bits = Bits::<u8>::from(-1i16);
        assert_eq!(bits.as_units(), &[0xFF, 0xFF]);
        let bits = Bits::<u64>::from(-2i8);
        assert_eq!(bits.as_units(), &[0xFE]);
        assert_eq!(Bits::<u8>::from(1isize).bit_width(), isize::BITS as usize);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Bits<u8>>(), Err(ParseBitsError::Empty));
        assert_eq!("0b".parse::<Bits<u8>>(), Err(ParseBitsError::Empty));
        assert_eq!("__".parse::<Bits<u8>>(), Err(ParseBitsError::Empty));
        assert_eq!(
            "0b10x1".parse::<Bits<u64>>(),
            Err(ParseBitsError::InvalidChar { ch: 'x', pos: 4 })
        );
        assert_eq!(
            "1é".parse::<Bits<u64>>(),
            Err(ParseBitsError::InvalidChar { ch: 'é', pos: 1 })
        );
    }

    #[test]
    fn test_display_keeps_leading_zeros() {
        let bits = Bits::<u64>::from(5u8);
        assert_eq!(bits.to_string(), "00000101");
        assert_eq!(Bits::<u8>::new(0).to_string(), "");
        let parsed: Bits<u64> = bits.to_string().parse().unwrap();
        assert_eq!(parsed, bits);
    }

    #[test]
    fn test_debug_format() {
        let bits = Bits::<u8>::from_units(3, &[0b101]).unwrap();
        assert_eq!(format!("{bits:?}"), "Bits { bit_width: 3, bits: 0b101 }");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BitsError::IndexOutOfRange {
                index: 9,
                bit_width: 8
            }
            .to_string(),
            "bit index 9 is out of range for a 8-bit vector"
        );
        assert_eq!(
            BitsError::UnsupportedWidth { bits: 128 }.to_string(),
            "unsupported native integer width of 128 bits"
        );
    }

    #[test]
    fn test_assign_operators() {
        let mut bits = Bits::<u8>::from(0b0110u8);
        bits |= &Bits::from(0b1000_0001u16);
        assert_eq!(bits.as_units(), &[0b1000_0111]);
        bits &= &Bits::from(0b0000_0011u8);
        assert_eq!(bits.as_units(), &[0b11]);
        bits ^= &Bits::from(0b01u8);
        assert_eq!(bits.as_units(), &[0b10]);
        bits <<= 7;
        assert_eq!(bits.as_units(), &[0]);
    }
}
