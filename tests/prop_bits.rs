use core::cmp::Ordering;

use fixbits::{ByteBits, WordBits};
use proptest::prelude::*;

fn mask(width: usize) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

// Strategy for vectors of arbitrary width with scattered set bits
prop_compose! {
    fn arb_bits(max_width: usize)
        (width in 0..=max_width)
        (bits in prop::collection::vec(any::<bool>(), width))
        -> ByteBits
    {
        bits.into_iter().collect()
    }
}

// Strategy for a native-width vector together with its value
prop_compose! {
    fn native_bits()
        (width in prop::sample::select(vec![8u32, 16, 32, 64]), value in any::<u64>())
        -> (ByteBits, u64, u32)
    {
        let bits = ByteBits::from_value(value, width).unwrap();
        (bits, value & mask(width as usize), width)
    }
}

proptest! {
    #[test]
    fn test_from_value_round_trip((bits, value, width) in native_bits()) {
        prop_assert_eq!(bits.bit_width(), width as usize);
        prop_assert_eq!(bits.to_number(), Ok(value));

        let words = WordBits::from_value(value, width).unwrap();
        prop_assert_eq!(words.to_number(), Ok(value));
    }

    #[test]
    fn test_set_then_get(
        bits in arb_bits(200),
        index in 0usize..200,
        value in any::<bool>()
    ) {
        let mut bits = bits;
        let before = bits.clone();
        if index < bits.bit_width() {
            prop_assert!(bits.set_bit(index, value).is_ok());
            prop_assert_eq!(bits.get_bit(index), value);
            // No other bit moved
            for i in (0..bits.bit_width()).filter(|&i| i != index) {
                prop_assert_eq!(bits.get_bit(i), before.get_bit(i));
            }
        } else {
            prop_assert!(bits.set_bit(index, value).is_err());
            prop_assert_eq!(&bits, &before);
        }
    }

    #[test]
    fn test_logic_commutes(a in arb_bits(150), b in arb_bits(150)) {
        prop_assert_eq!(a.and(&b), b.and(&a));
        prop_assert_eq!(a.or(&b), b.or(&a));
        prop_assert_eq!(a.xor(&b), b.xor(&a));
    }

    #[test]
    fn test_logic_per_bit(a in arb_bits(150), b in arb_bits(150)) {
        let and = a.and(&b);
        let or = a.or(&b);
        let xor = a.xor(&b);
        prop_assert_eq!(and.bit_width(), a.bit_width().min(b.bit_width()));
        prop_assert_eq!(or.bit_width(), a.bit_width().max(b.bit_width()));
        for i in 0..or.bit_width() {
            let (x, y) = (a.get_bit(i), b.get_bit(i));
            prop_assert_eq!(and.get_bit(i), x && y);
            prop_assert_eq!(or.get_bit(i), x || y);
            prop_assert_eq!(xor.get_bit(i), x ^ y);
        }
    }

    #[test]
    fn test_double_inverse(bits in arb_bits(200)) {
        let inv = bits.inverse();
        prop_assert_eq!(inv.count_ones(), bits.bit_width() - bits.count_ones());
        prop_assert_eq!(inv.inverse(), bits);
    }

    #[test]
    fn test_compare_order(a in arb_bits(130), b in arb_bits(130)) {
        prop_assert_eq!(a.compare(&a), Ordering::Equal);
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());

        // Same ordering as the MSB-first digit strings once padded
        let width = a.bit_width().max(b.bit_width());
        let pad = |s: String| format!("{s:0>width$}");
        prop_assert_eq!(
            a.compare(&b),
            pad(a.to_string()).cmp(&pad(b.to_string()))
        );
    }

    #[test]
    fn test_no_bits_past_width(
        bits in arb_bits(130),
        delta in any::<i64>(),
        shift in -140isize..140,
        other in arb_bits(130)
    ) {
        let check = |b: &ByteBits| -> Result<(), TestCaseError> {
            for i in b.bit_width()..b.capacity() {
                let unit = b.as_bytes()[b.unit_count() - 1 - i / 8];
                prop_assert_eq!(unit >> (i % 8) & 1, 0, "bit {} set past width", i);
            }
            Ok(())
        };

        let mut bits = bits;
        bits.reset(true);
        check(&bits)?;
        bits.increment(delta);
        check(&bits)?;
        bits.shift_left(shift);
        check(&bits)?;
        bits |= &other;
        check(&bits)?;
        bits ^= &other.inverse();
        check(&bits)?;
        bits += &other;
        check(&bits)?;
        check(&bits.inverse())?;
    }

    #[test]
    fn test_shift_matches_native(value in any::<u64>(), n in 0usize..70) {
        let mut left = ByteBits::from(value);
        left.shift_left(n as isize);
        prop_assert_eq!(left.to_number(), Ok(value.checked_shl(n as u32).unwrap_or(0)));

        let mut right = WordBits::from(value);
        right.shift_right(n as isize);
        prop_assert_eq!(right.to_number(), Ok(value.checked_shr(n as u32).unwrap_or(0)));
    }

    #[test]
    fn test_shift_moves_bits(bits in arb_bits(100), n in 0usize..100) {
        let mut shifted = bits.clone();
        shifted.shift_left(n as isize);
        for i in 0..bits.bit_width() {
            let expected = i >= n && bits.get_bit(i - n);
            prop_assert_eq!(shifted.get_bit(i), expected, "bit {}", i);
        }

        let mut shifted = bits.clone();
        shifted.shift_right(n as isize);
        for i in 0..bits.bit_width() {
            prop_assert_eq!(shifted.get_bit(i), bits.get_bit(i + n), "bit {}", i);
        }

        // Back again: the low n bits are gone
        shifted.shift_left(n as isize);
        for i in 0..bits.bit_width() {
            prop_assert_eq!(shifted.get_bit(i), i >= n && bits.get_bit(i), "bit {}", i);
        }
    }

    #[test]
    fn test_increment_matches_wrapping(
        width in 1usize..=64,
        value in any::<u64>(),
        delta in any::<i64>()
    ) {
        let start = value & mask(width);
        let mut bits = WordBits::new(width);
        bits.increment(start as i64);
        bits.increment(delta);

        let expected = start.wrapping_add(delta as u64) & mask(width);
        let got = bits.as_words()[0];
        prop_assert_eq!(got, expected);

        let mut bytes = ByteBits::new(width);
        bytes.increment(start as i64);
        bytes.increment(delta);
        prop_assert_eq!(bytes.regranulate::<u64>(), bits);
    }

    #[test]
    fn test_byte_and_word_agree(
        a in arb_bits(200),
        b in arb_bits(200),
        delta in any::<i64>(),
        shift in -210isize..210
    ) {
        let (wa, wb): (WordBits, WordBits) = (a.regranulate(), b.regranulate());
        prop_assert_eq!(a.to_bit_sequence(), wa.to_bit_sequence());

        let same = |x: &ByteBits, y: &WordBits| x.to_bit_sequence() == y.to_bit_sequence();
        prop_assert!(same(&a.and(&b), &wa.and(&wb)));
        prop_assert!(same(&a.or(&b), &wa.or(&wb)));
        prop_assert!(same(&a.xor(&b), &wa.xor(&wb)));
        prop_assert!(same(&a.inverse(), &wa.inverse()));
        prop_assert_eq!(a.compare(&b), wa.compare(&wb));

        let (mut x, mut y) = (a.clone(), wa.clone());
        x.increment(delta);
        y.increment(delta);
        prop_assert!(same(&x, &y));

        let (mut x, mut y) = (a.clone(), wa.clone());
        x += &b;
        y += &wb;
        prop_assert!(same(&x, &y));

        // Capacities differ, but padding is always zero so shifts agree
        let (mut x, mut y) = (a, wa);
        x.shift_left(shift);
        y.shift_left(shift);
        prop_assert!(same(&x, &y));
    }

    #[test]
    fn test_display_parse_round_trip(bits in arb_bits(200)) {
        prop_assume!(bits.bit_width() > 0);
        let text = bits.to_string();
        prop_assert_eq!(text.len(), bits.bit_width());
        prop_assert_eq!(text.parse::<ByteBits>(), Ok(bits.clone()));
        prop_assert_eq!(
            text.parse::<WordBits>().map(|w| w.regranulate::<u8>()),
            Ok(bits)
        );
    }
}
