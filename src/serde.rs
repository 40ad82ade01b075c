//! Serde implementations for `Bits`.
//!
//! By default a vector serializes as its binary string, one digit per
//! declared bit, most-significant first. The width is the digit count, so no
//! extra framing is needed. The [`bools`] module offers a sequence-of-bool
//! encoding for formats without convenient strings.

use core::{fmt, marker::PhantomData};

use alloc::vec::Vec;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::{Bits, storage::BitsBuilder, unit::Unit};

impl<U: Unit> Serialize for Bits<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, U: Unit> Deserialize<'de> for Bits<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BitsVisitor<U>(PhantomData<U>);

        impl<U: Unit> Visitor<'_> for BitsVisitor<U> {
            type Value = Bits<U>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string of binary digits")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BitsVisitor(PhantomData))
    }
}

/// Serde implementation serializing a vector as a sequence of bools,
/// most-significant bit first.
///
/// Use with `#[serde(with = "fixbits::serde::bools")]`.
pub mod bools {
    use super::*;

    /// Serialize the declared bits as a sequence of bools.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails to serialize the sequence.
    pub fn serialize<S, U>(b: &Bits<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        U: Unit,
    {
        let mut seq = serializer.serialize_seq(Some(b.bit_width()))?;
        for bit in b {
            seq.serialize_element(&bit)?;
        }
        seq.end()
    }

    /// Deserialize a vector from a sequence of bools; the width is the
    /// sequence length.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a sequence of bools.
    pub fn deserialize<'de, D, U>(deserializer: D) -> Result<Bits<U>, D::Error>
    where
        D: Deserializer<'de>,
        U: Unit,
    {
        struct BoolsVisitor<U>(PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for BoolsVisitor<U> {
            type Value = Bits<U>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of bools")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut msb_first = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(bit) = seq.next_element::<bool>()? {
                    msb_first.push(bit);
                }
                let mut builder = BitsBuilder::with_capacity(msb_first.len());
                builder.extend(msb_first.into_iter().rev());
                Ok(builder.finalize())
            }
        }

        deserializer.deserialize_seq(BoolsVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ByteBits, WordBits};
    use alloc::string::String;

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct BoolsWrapper {
        #[serde(with = "bools")]
        bits: WordBits,
    }

    #[test]
    fn test_string_round_trip() {
        let bits = ByteBits::from(0x05u8);
        let json = serde_json::to_string(&bits).unwrap();
        assert_eq!(json, "\"00000101\"");
        let back: ByteBits = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bits);
    }

    #[test]
    fn test_string_rejects_garbage() {
        let err = serde_json::from_str::<ByteBits>("\"0102\"").unwrap_err();
        let msg: String = err.to_string();
        assert!(msg.contains("invalid character '2'"), "{msg}");
    }

    #[test]
    fn test_bools_wrapper() {
        let wrapper = BoolsWrapper {
            bits: "1001".parse().unwrap(),
        };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"bits":[true,false,false,true]}"#);
        let back: BoolsWrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wrapper);
    }
}
