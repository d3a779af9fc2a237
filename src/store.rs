//! Growable byte storage with zero-fill semantics
//!
//! [`ByteStore`] is an ordered sequence of 8-bit cells that grows on
//! write. Reads never fail: positions at or past the logical end yield 0,
//! and writing past the end zero-fills the gap. The backing storage is a
//! contiguous `Vec<u8>`, so access is O(1) and bulk moves are memcpy.

use alloc::vec::Vec;

use crate::error::{Error, Result};

/// Ordered, growable sequence of byte cells.
///
/// Logical length is one past the highest index ever written. Cells
/// below that length that were never explicitly set read as 0, as do
/// cells at or beyond it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteStore {
    cells: Vec<u8>,
}

impl ByteStore {
    /// Create an empty store
    #[inline]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Create an empty store with preallocated capacity
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Create a store seeded with a copy of `data`
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            cells: data.to_vec(),
        }
    }

    /// Replace the entire contents with a copy of `data`.
    ///
    /// The logical length becomes `data.len()`.
    #[inline]
    pub fn import(&mut self, data: &[u8]) {
        self.cells.clear();
        self.cells.extend_from_slice(data);
    }

    /// Copy the logical contents into a fresh `Vec<u8>`.
    ///
    /// Round-trips with [`import`](Self::import).
    #[inline]
    pub fn export(&self) -> Vec<u8> {
        self.cells.clone()
    }

    /// Borrowed view of the logical contents
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Read the cell at `pos`, or 0 at or past the end
    #[inline]
    pub fn get(&self, pos: usize) -> u8 {
        self.cells.get(pos).copied().unwrap_or(0)
    }

    /// Write `value` at `pos`, growing the store if needed.
    ///
    /// A write past the end zero-fills the gap and the logical length
    /// becomes `pos + 1`.
    #[inline]
    pub fn set(&mut self, pos: usize, value: u8) {
        if pos >= self.cells.len() {
            self.cells.resize(pos + 1, 0);
        }
        self.cells[pos] = value;
    }

    /// Read `N` consecutive cells starting at `pos` into a fixed array.
    ///
    /// Cells past the end read as 0.
    #[inline]
    pub fn get_array<const N: usize>(&self, pos: usize) -> [u8; N] {
        let mut out = [0u8; N];
        let have = self.cells.len().saturating_sub(pos).min(N);
        if have > 0 {
            out[..have].copy_from_slice(&self.cells[pos..pos + have]);
        }
        out
    }

    /// Read `len` consecutive cells starting at `pos`.
    ///
    /// Cells past the end read as 0, so the result always has exactly
    /// `len` bytes.
    #[inline]
    pub fn get_bytes(&self, pos: usize, len: usize) -> Vec<u8> {
        let mut out = alloc::vec![0u8; len];
        let have = self.cells.len().saturating_sub(pos).min(len);
        if have > 0 {
            out[..have].copy_from_slice(&self.cells[pos..pos + have]);
        }
        out
    }

    /// Write `data` as consecutive cells starting at `pos`, growing the
    /// store if needed.
    ///
    /// A zero-length write touches nothing, including the length.
    #[inline]
    pub fn set_bytes(&mut self, pos: usize, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        let end = pos + data.len();
        if end > self.cells.len() {
            self.cells.resize(end, 0);
        }
        self.cells[pos..end].copy_from_slice(data);
    }

    /// Copy the cells in `[start, end)` into an independent store.
    ///
    /// Both bounds are clamped to the logical length. Fails with
    /// [`Error::InvalidRange`] iff `start > end`, checked before any
    /// clamping. Mutating either store afterwards never affects the
    /// other.
    pub fn slice(&self, start: usize, end: usize) -> Result<ByteStore> {
        if start > end {
            return Err(Error::InvalidRange);
        }
        let start = start.min(self.cells.len());
        let end = end.min(self.cells.len());
        Ok(ByteStore::from_bytes(&self.cells[start..end]))
    }

    /// Logical length in cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether the store holds no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
