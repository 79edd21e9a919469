// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity byte buffer with a tracked valid length.
//!
//! A [`BoundedBuffer`] owns one backing [`Region`] of exactly `capacity` bytes
//! and a `valid_len` cursor in `[0, capacity]`. Only the first `valid_len`
//! bytes are ever exposed as content.
//!
//! # Regions
//!
//! Backing memory is obtained through the [`Allocator`] seam:
//!
//! - **HeapAllocator**: fallible heap reservation, available everywhere.
//! - **PageAllocator** (Unix only): anonymous `mmap`, rounded up to the page
//!   size, optionally `mlock`ed.
//!
//! Every region is zero-filled on allocation and wiped on release, so buffer
//! content never outlives the buffer.
//!
//! # Access Semantics
//!
//! - `store` overwrites from offset 0 and silently truncates to capacity.
//! - `slice` returns at most `valid_len - start` bytes; an offset at or past
//!   the end yields an empty slice (end-of-data, not an error).
//! - `whole_content` returns everything or nothing: a request shorter than
//!   `valid_len` yields an empty slice.
//!
//! # Example
//!
//! ```rust
//! use slotbuf_buffer::{BoundedBuffer, BufferError, HeapAllocator};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut buffer = BoundedBuffer::allocate(&HeapAllocator::new(), 4)?;
//!
//!     // Truncated to capacity, no error
//!     assert_eq!(buffer.store(b"abcdef", 6), 4);
//!     assert_eq!(buffer.slice(0, 10), b"abcd");
//!
//!     // All-or-nothing
//!     assert!(buffer.whole_content(3).is_empty());
//!     assert_eq!(buffer.whole_content(4), b"abcd");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

#[cfg(unix)]
mod page;

mod bounded;
mod error;
mod heap;
mod traits;

#[cfg(unix)]
pub use page::{PageAllocator, PageRegion};

pub use bounded::BoundedBuffer;
pub use error::BufferError;
pub use heap::{HeapAllocator, HeapRegion};
pub use traits::{Allocator, Region};

#[cfg(any(test, feature = "test_utils"))]
pub use heap::AllocatorBehaviour;
