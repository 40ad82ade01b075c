//! Fixed-width bit vectors with big-endian storage.
//!
//! This crate provides [`Bits`], a vector of exactly `N` bits for widths that
//! native integers do not cover (a 9-bit counter, a 37-bit packed field, a
//! 200-bit flag set). The width is fixed at construction; arithmetic wraps,
//! shifts drop bits at the edge, and bits above the declared width are kept
//! at zero after every mutation.
//!
//! Two storage granularities share one implementation and produce identical
//! bits:
//!
//! - [`ByteBits`] stores `ceil(N / 8)` bytes, most-significant first. The
//!   storage is the big-endian encoding of the value.
//! - [`WordBits`] stores `ceil(N / 64)` 64-bit words, most-significant first.
//!
//! # Features
//!
//! - **Native conversions** from every 8/16/32/64-bit integer type and
//!   readback for native-shaped storage
//! - **Wrapping arithmetic** with ripple carry/borrow across units
//! - **Bitwise logic** (`&`, `|`, `^`, `!`) and logical shifts
//! - **Unsigned comparison** across vectors of different widths
//! - **Binary text format** via `Display`/`FromStr`
//! - **Serialization support** via serde (optional)
//! - **Diagnostics** via tracing (optional)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use fixbits::{ByteBits, WordBits};
//!
//! // A 16-bit vector from a native integer
//! let mut bits = ByteBits::from(0b10101u16);
//! bits.set_bit(15, true)?;
//! assert_eq!(bits.to_number(), Ok(0b1000_0000_0001_0101));
//!
//! // Arithmetic wraps within the declared width
//! let mut counter = WordBits::new(9);
//! counter.increment(-1);
//! assert_eq!(counter.to_number(), Ok(511));
//!
//! // Logic allocates a new vector
//! let a = ByteBits::from(0b101u8);
//! let b = ByteBits::from(0b110u8);
//! assert_eq!((&a & &b).to_number(), Ok(0b100));
//! assert_eq!(a.xor(&b).to_string(), "00000011");
//! # Ok::<(), fixbits::BitsError>(())
//! ```
//!
//! # Errors
//!
//! Nothing in the crate panics on caller input. Out-of-range writes,
//! unsupported native widths and readback from non-native storage shapes
//! are reported through [`BitsError`].

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod arith;
mod bits;
mod byte;
mod iter;
mod logic;
mod macros;
mod storage;
mod traits;
pub mod unit;
mod word;

#[cfg(feature = "serde")]
pub mod serde;

// Re-exports
pub use bits::Bits;
pub use byte::ByteBits;
pub use iter::BitIter;
pub use storage::BitsBuilder;
pub use traits::{BitsError, ParseBitsError};
pub use unit::Unit;
pub use word::WordBits;
