//! Typed encode/decode over a growable byte store
//!
//! [`DynamicBuffer`] pairs a [`ByteStore`] with a default [`Cursor`] and a
//! byte-order flag, exposing `put_*`/`get_*` pairs for booleans, integers,
//! floats, raw bytes and length-prefixed strings. Writes grow the store on
//! demand; reads past the end see zero bytes. The only fallible operation
//! in the crate lives on the store ([`ByteStore::slice`]); everything here
//! is total.

use alloc::string::String;
use alloc::vec::Vec;

use crate::cursor::Cursor;
use crate::store::ByteStore;
use crate::STRING_PREFIX_SIZE;

/// Byte order used for multi-byte values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Least-significant byte first
    Little,
    /// Most-significant byte first
    Big,
}

impl Default for Endian {
    fn default() -> Self {
        Endian::Little
    }
}

/// Typed reader/writer over a growable byte store.
///
/// Every typed operation takes a trailing `cursor: Option<&mut Cursor>`.
/// `Some` uses and advances the caller's cursor; `None` uses and advances
/// the buffer's own default cursor. Either way the cursor moves by exactly
/// the bytes the operation consumes, and no cursor ever touches another.
///
/// Multi-byte values follow the buffer's [`Endian`] flag. Overflow is
/// never an error: narrowing conversions at call sites keep the low bits,
/// so an out-of-range value simply round-trips as a different number.
///
/// # Examples
///
/// ```
/// use dynbuf::{Cursor, DynamicBuffer};
///
/// let mut buf = DynamicBuffer::new();
/// buf.put_u16(513, None);
/// buf.put_str("hi", None);
///
/// buf.rewind();
/// assert_eq!(buf.get_u16(None), 513);
/// assert_eq!(buf.get_string(None), "hi");
///
/// // An explicit cursor walks the same bytes independently
/// let mut cur = Cursor::new();
/// assert_eq!(buf.get_u16(Some(&mut cur)), 513);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DynamicBuffer {
    store: ByteStore,
    cursor: Cursor,
    endian: Endian,
}

impl DynamicBuffer {
    /// Create an empty little-endian buffer
    #[inline]
    pub const fn new() -> Self {
        Self {
            store: ByteStore::new(),
            cursor: Cursor::new(),
            endian: Endian::Little,
        }
    }

    /// Create an empty buffer with the given byte order
    #[inline]
    pub const fn with_endian(endian: Endian) -> Self {
        Self {
            store: ByteStore::new(),
            cursor: Cursor::new(),
            endian,
        }
    }

    /// Create a little-endian buffer seeded with a copy of `data`,
    /// default cursor at 0
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            store: ByteStore::from_bytes(data),
            cursor: Cursor::new(),
            endian: Endian::Little,
        }
    }

    /// Replace the contents with a copy of `data` and rewind the default
    /// cursor.
    ///
    /// The byte-order flag is left as is.
    #[inline]
    pub fn import(&mut self, data: &[u8]) {
        self.store.import(data);
        self.cursor.rewind();
    }

    /// Copy the logical contents into a fresh `Vec<u8>`
    #[inline]
    pub fn export(&self) -> Vec<u8> {
        self.store.export()
    }

    /// Borrowed view of the logical contents
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.store.as_slice()
    }

    /// Current byte order
    #[inline]
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Switch the byte order for subsequent operations.
    ///
    /// Already-written bytes are not rewritten.
    #[inline]
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Shared access to the underlying store
    #[inline]
    pub fn store(&self) -> &ByteStore {
        &self.store
    }

    /// Mutable access to the underlying store.
    ///
    /// Direct store writes do not move any cursor.
    #[inline]
    pub fn store_mut(&mut self) -> &mut ByteStore {
        &mut self.store
    }

    /// Logical length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check whether the buffer holds no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Position of the default cursor
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.offset
    }

    /// Move the default cursor to `offset`
    #[inline]
    pub fn set_position(&mut self, offset: usize) {
        self.cursor.offset = offset;
    }

    /// Move the default cursor back to 0
    #[inline]
    pub fn rewind(&mut self) {
        self.cursor.rewind();
    }

    /// Advance the resolved cursor by `n` bytes without reading or
    /// writing
    #[inline]
    pub fn skip(&mut self, n: usize, cursor: Option<&mut Cursor>) {
        self.step(cursor, n);
    }

    /// Bytes between the default cursor and the logical end (0 when the
    /// cursor sits at or past the end)
    #[inline]
    pub fn remaining(&self) -> usize {
        self.store.len().saturating_sub(self.cursor.offset)
    }

    /// Check whether the default cursor sits at or past the logical end
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor.offset >= self.store.len()
    }

    /// Read `len` bytes at the default cursor without advancing it.
    ///
    /// Bytes past the end read as 0.
    #[inline]
    pub fn peek_bytes(&self, len: usize) -> Vec<u8> {
        self.store.get_bytes(self.cursor.offset, len)
    }

    /// Resolve the cursor for one operation: advance it by `n` and return
    /// the position the operation happens at.
    #[inline]
    fn step(&mut self, cursor: Option<&mut Cursor>, n: usize) -> usize {
        match cursor {
            Some(cur) => cur.advance(n),
            None => self.cursor.advance(n),
        }
    }

    /// Write raw bytes at the resolved cursor
    #[inline]
    pub fn put_bytes(&mut self, data: &[u8], cursor: Option<&mut Cursor>) {
        let at = self.step(cursor, data.len());
        self.store.set_bytes(at, data);
    }

    /// Read `len` raw bytes at the resolved cursor
    #[inline]
    pub fn get_bytes(&mut self, len: usize, cursor: Option<&mut Cursor>) -> Vec<u8> {
        let at = self.step(cursor, len);
        self.store.get_bytes(at, len)
    }

    /// Write a bool as one byte (1 for true, 0 for false)
    #[inline]
    pub fn put_bool(&mut self, value: bool, cursor: Option<&mut Cursor>) {
        self.put_u8(value as u8, cursor);
    }

    /// Read one byte as a bool (true iff non-zero)
    #[inline]
    pub fn get_bool(&mut self, cursor: Option<&mut Cursor>) -> bool {
        self.get_u8(cursor) != 0
    }

    /// Write a u8 value
    #[inline]
    pub fn put_u8(&mut self, value: u8, cursor: Option<&mut Cursor>) {
        let at = self.step(cursor, 1);
        self.store.set(at, value);
    }

    /// Read a u8 value
    #[inline]
    pub fn get_u8(&mut self, cursor: Option<&mut Cursor>) -> u8 {
        let at = self.step(cursor, 1);
        self.store.get(at)
    }

    /// Write an i8 value (two's-complement byte)
    #[inline]
    pub fn put_i8(&mut self, value: i8, cursor: Option<&mut Cursor>) {
        self.put_u8(value as u8, cursor);
    }

    /// Read an i8 value
    #[inline]
    pub fn get_i8(&mut self, cursor: Option<&mut Cursor>) -> i8 {
        self.get_u8(cursor) as i8
    }

    /// Write a u16 value in the buffer's byte order
    #[inline]
    pub fn put_u16(&mut self, value: u16, cursor: Option<&mut Cursor>) {
        let at = self.step(cursor, 2);
        self.put_u16_at(at, value);
    }

    /// Read a u16 value in the buffer's byte order
    #[inline]
    pub fn get_u16(&mut self, cursor: Option<&mut Cursor>) -> u16 {
        let at = self.step(cursor, 2);
        self.get_u16_at(at)
    }

    /// Write an i16 value in the buffer's byte order
    #[inline]
    pub fn put_i16(&mut self, value: i16, cursor: Option<&mut Cursor>) {
        self.put_u16(value as u16, cursor);
    }

    /// Read an i16 value in the buffer's byte order
    #[inline]
    pub fn get_i16(&mut self, cursor: Option<&mut Cursor>) -> i16 {
        self.get_u16(cursor) as i16
    }

    /// Write a u32 value in the buffer's byte order
    #[inline]
    pub fn put_u32(&mut self, value: u32, cursor: Option<&mut Cursor>) {
        let at = self.step(cursor, 4);
        self.put_u32_at(at, value);
    }

    /// Read a u32 value in the buffer's byte order
    #[inline]
    pub fn get_u32(&mut self, cursor: Option<&mut Cursor>) -> u32 {
        let at = self.step(cursor, 4);
        self.get_u32_at(at)
    }

    /// Write an i32 value in the buffer's byte order
    #[inline]
    pub fn put_i32(&mut self, value: i32, cursor: Option<&mut Cursor>) {
        self.put_u32(value as u32, cursor);
    }

    /// Read an i32 value in the buffer's byte order
    #[inline]
    pub fn get_i32(&mut self, cursor: Option<&mut Cursor>) -> i32 {
        self.get_u32(cursor) as i32
    }

    /// Write a u64 value in the buffer's byte order
    #[inline]
    pub fn put_u64(&mut self, value: u64, cursor: Option<&mut Cursor>) {
        let at = self.step(cursor, 8);
        self.put_u64_at(at, value);
    }

    /// Read a u64 value in the buffer's byte order
    #[inline]
    pub fn get_u64(&mut self, cursor: Option<&mut Cursor>) -> u64 {
        let at = self.step(cursor, 8);
        self.get_u64_at(at)
    }

    /// Write an i64 value in the buffer's byte order
    #[inline]
    pub fn put_i64(&mut self, value: i64, cursor: Option<&mut Cursor>) {
        self.put_u64(value as u64, cursor);
    }

    /// Read an i64 value in the buffer's byte order
    #[inline]
    pub fn get_i64(&mut self, cursor: Option<&mut Cursor>) -> i64 {
        self.get_u64(cursor) as i64
    }

    /// Write an f32 bit-for-bit (4 bytes, order-aware)
    #[inline]
    pub fn put_f32(&mut self, value: f32, cursor: Option<&mut Cursor>) {
        self.put_u32(value.to_bits(), cursor);
    }

    /// Read an f32 bit-for-bit
    #[inline]
    pub fn get_f32(&mut self, cursor: Option<&mut Cursor>) -> f32 {
        f32::from_bits(self.get_u32(cursor))
    }

    /// Write an f64 bit-for-bit (8 bytes, whole-word order-aware)
    #[inline]
    pub fn put_f64(&mut self, value: f64, cursor: Option<&mut Cursor>) {
        self.put_u64(value.to_bits(), cursor);
    }

    /// Read an f64 bit-for-bit
    #[inline]
    pub fn get_f64(&mut self, cursor: Option<&mut Cursor>) -> f64 {
        f64::from_bits(self.get_u64(cursor))
    }

    /// Write a length-prefixed UTF-8 string.
    ///
    /// Layout is a 4-byte unsigned byte length in the buffer's byte
    /// order, then the raw UTF-8 bytes. The cursor advances by
    /// `4 + byte length`.
    pub fn put_str(&mut self, value: &str, mut cursor: Option<&mut Cursor>) {
        let data = value.as_bytes();
        let at = self.step(cursor.as_deref_mut(), STRING_PREFIX_SIZE);
        self.put_u32_at(at, data.len() as u32);
        let at = self.step(cursor, data.len());
        self.store.set_bytes(at, data);
    }

    /// Read a length-prefixed UTF-8 string.
    ///
    /// Invalid UTF-8 sequences decode to U+FFFD rather than failing.
    /// Bytes past the end read as 0.
    pub fn get_string(&mut self, mut cursor: Option<&mut Cursor>) -> String {
        let at = self.step(cursor.as_deref_mut(), STRING_PREFIX_SIZE);
        let len = self.get_u32_at(at) as usize;
        let at = self.step(cursor, len);
        let data = self.store.get_bytes(at, len);
        String::from_utf8_lossy(&data).into_owned()
    }

    #[inline]
    fn put_u16_at(&mut self, at: usize, value: u16) {
        let bytes = match self.endian {
            Endian::Little => value.to_le_bytes(),
            Endian::Big => value.to_be_bytes(),
        };
        self.store.set_bytes(at, &bytes);
    }

    #[inline]
    fn get_u16_at(&self, at: usize) -> u16 {
        let bytes = self.store.get_array::<2>(at);
        match self.endian {
            Endian::Little => u16::from_le_bytes(bytes),
            Endian::Big => u16::from_be_bytes(bytes),
        }
    }

    #[inline]
    fn put_u32_at(&mut self, at: usize, value: u32) {
        let bytes = match self.endian {
            Endian::Little => value.to_le_bytes(),
            Endian::Big => value.to_be_bytes(),
        };
        self.store.set_bytes(at, &bytes);
    }

    #[inline]
    fn get_u32_at(&self, at: usize) -> u32 {
        let bytes = self.store.get_array::<4>(at);
        match self.endian {
            Endian::Little => u32::from_le_bytes(bytes),
            Endian::Big => u32::from_be_bytes(bytes),
        }
    }

    #[inline]
    fn put_u64_at(&mut self, at: usize, value: u64) {
        let bytes = match self.endian {
            Endian::Little => value.to_le_bytes(),
            Endian::Big => value.to_be_bytes(),
        };
        self.store.set_bytes(at, &bytes);
    }

    #[inline]
    fn get_u64_at(&self, at: usize) -> u64 {
        let bytes = self.store.get_array::<8>(at);
        match self.endian {
            Endian::Little => u64::from_le_bytes(bytes),
            Endian::Big => u64::from_be_bytes(bytes),
        }
    }
}
