//! dynbuf: Growable binary buffer with typed, cursor-based access
//!
//! This crate provides a zero-filled, grow-on-write byte store with typed
//! encode/decode operations, per-buffer endianness and interchangeable
//! read/write cursors.
//!
//! # String Format
//!
//! Strings are the one composite layout the crate defines:
//!
//! ```text
//! +----------------------------+---------------------------+
//! | Len u32 (byte-order flag)  | UTF-8 payload (Len bytes) |
//! +----------------------------+---------------------------+
//! ```
//!
//! # Features
//!
//! - Grow-on-write storage with implicit zero-fill, reads never fail
//! - Typed `put_*`/`get_*` pairs for bools, integers, floats and strings
//! - Little- or big-endian layout selected per buffer
//! - Default cursor plus any number of caller-owned cursors
//! - Out-of-range integers wrap silently instead of erroring
//! - Bit-level packing via [`BitStore`]
//! - `no_std` support with `alloc`
//!
//! # Example
//!
//! ```rust
//! use dynbuf::{Cursor, DynamicBuffer};
//!
//! // Write a mixed sequence at the default cursor
//! let mut buf = DynamicBuffer::new();
//! buf.put_u32(1850, None);
//! buf.put_bool(true, None);
//! buf.put_str("AAPL", None);
//!
//! // Read it back from the start
//! buf.rewind();
//! assert_eq!(buf.get_u32(None), 1850);
//! assert!(buf.get_bool(None));
//! assert_eq!(buf.get_string(None), "AAPL");
//!
//! // Or walk the same bytes with a caller-owned cursor
//! let mut cur = Cursor::new();
//! assert_eq!(buf.get_u32(Some(&mut cur)), 1850);
//! assert_eq!(cur.offset, 4);
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod bits;
pub mod codec;
pub mod cursor;
pub mod error;
pub mod store;

#[cfg(all(feature = "std", test))]
pub mod bench;

// Re-export main types
pub use bits::BitStore;
pub use codec::{DynamicBuffer, Endian};
pub use cursor::Cursor;
pub use error::Error;
pub use store::ByteStore;

/// Size in bytes of the unsigned length prefix written before each string
pub const STRING_PREFIX_SIZE: usize = 4;
