use fixbits::{ByteBits, WordBits};

#[test]
fn test_increment_wraps_at_width() {
    let mut bits = ByteBits::new(9);
    bits.reset(true);
    bits.increment(1);
    assert!(bits.is_zero());
    bits.increment(-1);
    assert_eq!(bits.to_number(), Ok(0x1FF));

    let mut words = WordBits::new(9);
    words.increment(512 + 5);
    assert_eq!(words.to_number(), Ok(5));
}

#[test]
fn test_overflowing_increment_reports_wrap() {
    let mut bits = ByteBits::from(250u8);
    assert!(!bits.overflowing_increment(5));
    assert!(bits.overflowing_increment(1));
    assert_eq!(bits.to_number(), Ok(0));
    assert!(bits.overflowing_increment(-1));
    assert_eq!(bits.to_number(), Ok(255));
    assert!(!bits.overflowing_increment(0));

    // A delta wider than the storage wraps too
    let mut narrow = ByteBits::new(4);
    assert!(narrow.overflowing_increment(0x100));
    assert!(narrow.is_zero());
}

#[test]
fn test_carry_ripples_across_words() {
    let mut bits = WordBits::new(130);
    bits.increment(-1);
    assert_eq!(bits.as_words(), &[0b11, u64::MAX, u64::MAX]);
    bits.increment(1);
    assert_eq!(bits.as_words(), &[0, 0, 0]);

    let mut bits = ByteBits::new(40);
    bits.increment(0xFF_FFFF);
    bits.increment(1);
    assert_eq!(bits.as_bytes(), &[0, 0x01, 0, 0, 0]);
    bits.increment(-1);
    assert_eq!(bits.as_bytes(), &[0, 0, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn test_extreme_deltas() {
    let mut bits = WordBits::new(64);
    bits.increment(i64::MIN);
    assert_eq!(bits.to_number(), Ok(1 << 63));
    bits -= i64::MIN;
    assert!(bits.is_zero());

    bits += i64::MAX;
    bits += 1;
    assert_eq!(bits.to_number(), Ok(1 << 63));
}

#[test]
fn test_add_assign_vectors() {
    let mut acc = ByteBits::new(12);
    let step = ByteBits::from(0xFFu8);
    for _ in 0..17 {
        acc += &step;
    }
    assert_eq!(acc.bit_width(), 12);
    assert_eq!(acc.as_bytes(), &[0x0, 0xEF]);

    // Wider operands reduce modulo the target's storage first
    let wide = WordBits::from_units(128, &[1, 3]).unwrap();
    let mut narrow = WordBits::from(5u8);
    narrow += &wide;
    assert_eq!(narrow.to_number(), Ok(8));

    narrow -= &WordBits::from(9u64);
    assert_eq!(narrow.to_number(), Ok(0xFF));
}

#[test]
fn test_sub_assign_vectors() {
    let mut a = ByteBits::from(0x0100u16);
    a -= &ByteBits::from(1u8);
    assert_eq!(a.to_number(), Ok(0x00FF));

    let mut b = WordBits::new(3);
    b -= &WordBits::from(1u8);
    assert_eq!(b.to_number(), Ok(0b111));
}
