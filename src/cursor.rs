//! Position tracking for sequential buffer access
//!
//! A [`Cursor`] is a bare offset counter. It carries no reference to any
//! buffer, so the same cursor type works for byte-addressed and
//! bit-addressed stores alike, and several cursors can walk one buffer
//! independently.

/// Tracks a read/write position within a buffer.
///
/// The unit of the offset is defined by the store the cursor is used
/// with: bytes for [`DynamicBuffer`](crate::DynamicBuffer), bits for
/// [`BitStore`](crate::BitStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Current position
    pub offset: usize,
}

impl Cursor {
    /// Create a cursor at position zero
    #[inline]
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    /// Create a cursor at the given position
    #[inline]
    pub const fn at(offset: usize) -> Self {
        Self { offset }
    }

    /// Advance the cursor by `n` units and return the position it held
    /// before advancing.
    ///
    /// This is the primitive every sequential operation is built on: the
    /// returned position is where the operation happens, while the cursor
    /// already points past it for the next call.
    #[inline]
    pub fn advance(&mut self, n: usize) -> usize {
        let at = self.offset;
        self.offset += n;
        at
    }

    /// Reset the cursor to position zero
    #[inline]
    pub fn rewind(&mut self) {
        self.offset = 0;
    }
}
