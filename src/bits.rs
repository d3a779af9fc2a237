//! Bit-level packing with the same grow-on-write contract as the byte
//! store
//!
//! [`BitStore`] keeps individual booleans as single bits, packed
//! LSB-first within each byte. Positions are measured in bits and the
//! optional-cursor rule matches [`DynamicBuffer`](crate::DynamicBuffer):
//! `Some` advances the caller's cursor, `None` advances the store's own.

use alloc::vec::Vec;

use crate::cursor::Cursor;

/// Growable sequence of bits, packed LSB-first per byte.
///
/// Reads past the logical end yield `false`; writes past the end grow
/// the packing and zero-fill the gap. Bits at or beyond the logical
/// length are always zero, so [`export`](Self::export) pads the final
/// partial byte with zero bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStore {
    data: Vec<u8>,
    len: usize,
    cursor: Cursor,
}

impl BitStore {
    /// Create an empty bit store
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            len: 0,
            cursor: Cursor::new(),
        }
    }

    /// Create a store holding the bits of `data`, 8 per byte, cursor
    /// at 0
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            len: data.len() * 8,
            cursor: Cursor::new(),
        }
    }

    /// Replace the contents with the bits of `data` and rewind the
    /// default cursor.
    ///
    /// The bit length becomes `8 * data.len()`.
    #[inline]
    pub fn import(&mut self, data: &[u8]) {
        self.data.clear();
        self.data.extend_from_slice(data);
        self.len = data.len() * 8;
        self.cursor.rewind();
    }

    /// Copy the packed bits into a fresh `Vec<u8>`, the bit length
    /// rounded up to whole bytes with zero padding.
    ///
    /// Round-trips with [`import`](Self::import) when the length is a
    /// byte multiple.
    #[inline]
    pub fn export(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Write one bit at the resolved cursor, growing the packing if
    /// needed
    pub fn put_bit(&mut self, value: bool, cursor: Option<&mut Cursor>) {
        let pos = self.step(cursor);
        let byte = pos / 8;
        if byte >= self.data.len() {
            self.data.resize(byte + 1, 0);
        }
        let mask = 1u8 << (pos % 8);
        if value {
            self.data[byte] |= mask;
        } else {
            self.data[byte] &= !mask;
        }
        if pos >= self.len {
            self.len = pos + 1;
        }
    }

    /// Read one bit at the resolved cursor (`false` at or past the end)
    pub fn get_bit(&mut self, cursor: Option<&mut Cursor>) -> bool {
        let pos = self.step(cursor);
        match self.data.get(pos / 8) {
            Some(byte) => (byte >> (pos % 8)) & 1 != 0,
            None => false,
        }
    }

    /// Logical length in bits
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Packed length in bytes (bit length rounded up)
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.len.div_ceil(8)
    }

    /// Check whether the store holds no bits
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of the default cursor, in bits
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.offset
    }

    /// Move the default cursor to the given bit offset
    #[inline]
    pub fn set_position(&mut self, offset: usize) {
        self.cursor.offset = offset;
    }

    /// Move the default cursor back to bit 0
    #[inline]
    pub fn rewind(&mut self) {
        self.cursor.rewind();
    }

    #[inline]
    fn step(&mut self, cursor: Option<&mut Cursor>) -> usize {
        match cursor {
            Some(cur) => cur.advance(1),
            None => self.cursor.advance(1),
        }
    }
}
