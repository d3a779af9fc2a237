//! Property tests for the buffer codec.
//!
//! Verifies import/export identity, typed round-trips under both byte
//! orders, wraparound narrowing, string framing and slice semantics.

use dynbuf::{BitStore, ByteStore, Cursor, DynamicBuffer, Endian, Error, STRING_PREFIX_SIZE};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_payload() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=4096)
}

fn arb_endian() -> impl Strategy<Value = Endian> {
    prop_oneof![Just(Endian::Little), Just(Endian::Big)]
}

fn arb_bits() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..=512)
}

// ============================================================================
// Store identities
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Importing then exporting yields the original bytes.
    #[test]
    fn import_export_is_identity(data in arb_payload()) {
        let mut buf = DynamicBuffer::new();
        buf.import(&data);
        prop_assert_eq!(buf.export(), data.clone());
        prop_assert_eq!(buf.len(), data.len());
    }

    /// Slicing matches plain range copying once both ends are clamped,
    /// and inverted ranges always fail.
    #[test]
    fn slice_matches_clamped_range(data in arb_payload(), a in 0usize..=5000, b in 0usize..=5000) {
        let store = ByteStore::from_bytes(&data);
        let result = store.slice(a, b);

        if a > b {
            prop_assert_eq!(result, Err(Error::InvalidRange));
        } else {
            let start = a.min(data.len());
            let end = b.min(data.len());
            prop_assert_eq!(result.unwrap().export(), data[start..end].to_vec());
        }
    }

    /// Single-cell reads agree with the exported image, with zero fill
    /// past the end.
    #[test]
    fn cell_reads_agree_with_export(data in arb_payload(), pos in 0usize..=5000) {
        let store = ByteStore::from_bytes(&data);
        let expected = data.get(pos).copied().unwrap_or(0);
        prop_assert_eq!(store.get(pos), expected);
    }
}

// ============================================================================
// Typed round-trips
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// u16 values survive a write/read cycle under either byte order.
    #[test]
    fn u16_round_trips(value in any::<u16>(), endian in arb_endian()) {
        let mut buf = DynamicBuffer::with_endian(endian);
        buf.put_u16(value, None);
        buf.rewind();
        prop_assert_eq!(buf.get_u16(None), value);
    }

    /// u32 values survive a write/read cycle under either byte order.
    #[test]
    fn u32_round_trips(value in any::<u32>(), endian in arb_endian()) {
        let mut buf = DynamicBuffer::with_endian(endian);
        buf.put_u32(value, None);
        buf.rewind();
        prop_assert_eq!(buf.get_u32(None), value);
    }

    /// u64 values survive a write/read cycle under either byte order.
    #[test]
    fn u64_round_trips(value in any::<u64>(), endian in arb_endian()) {
        let mut buf = DynamicBuffer::with_endian(endian);
        buf.put_u64(value, None);
        buf.rewind();
        prop_assert_eq!(buf.get_u64(None), value);
    }

    /// Signed values round-trip through the same two's-complement cells.
    #[test]
    fn i64_round_trips(value in any::<i64>(), endian in arb_endian()) {
        let mut buf = DynamicBuffer::with_endian(endian);
        buf.put_i64(value, None);
        buf.rewind();
        prop_assert_eq!(buf.get_i64(None), value);
    }

    /// Every f64 bit pattern survives, NaN payloads included.
    #[test]
    fn f64_round_trips_bit_for_bit(bits in any::<u64>(), endian in arb_endian()) {
        let mut buf = DynamicBuffer::with_endian(endian);
        buf.put_f64(f64::from_bits(bits), None);
        buf.rewind();
        prop_assert_eq!(buf.get_f64(None).to_bits(), bits);
    }

    /// Narrowing a wider value keeps exactly the low bits.
    #[test]
    fn narrowing_keeps_low_bits(value in any::<i64>()) {
        let mut buf = DynamicBuffer::new();
        buf.put_u16(value as u16, None);
        buf.rewind();
        prop_assert_eq!(buf.get_u16(None) as i64, value & 0xFFFF);
    }
}

// ============================================================================
// Strings and cursors
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any UTF-8 string round-trips and advances the cursor by exactly
    /// prefix + byte length.
    #[test]
    fn string_round_trips(text in any::<String>(), endian in arb_endian()) {
        let mut buf = DynamicBuffer::with_endian(endian);
        buf.put_str(&text, None);
        prop_assert_eq!(buf.position(), STRING_PREFIX_SIZE + text.len());

        buf.rewind();
        prop_assert_eq!(buf.get_string(None), text.clone());
        prop_assert_eq!(buf.position(), STRING_PREFIX_SIZE + text.len());
    }

    /// Writing through an explicit cursor lays out the same bytes as the
    /// default cursor.
    #[test]
    fn explicit_cursor_writes_same_bytes(values in prop::collection::vec(any::<u32>(), 0..=64)) {
        let mut by_default = DynamicBuffer::new();
        for &v in &values {
            by_default.put_u32(v, None);
        }

        let mut by_cursor = DynamicBuffer::new();
        let mut cur = Cursor::new();
        for &v in &values {
            by_cursor.put_u32(v, Some(&mut cur));
        }

        prop_assert_eq!(by_default.export(), by_cursor.export());
        prop_assert_eq!(cur.offset, by_default.position());
    }

    /// Bit sequences round-trip through the packed store.
    #[test]
    fn bit_sequences_round_trip(pattern in arb_bits()) {
        let mut bits = BitStore::new();
        for &bit in &pattern {
            bits.put_bit(bit, None);
        }
        prop_assert_eq!(bits.len(), pattern.len());

        bits.rewind();
        for &expected in &pattern {
            prop_assert_eq!(bits.get_bit(None), expected);
        }
    }
}
