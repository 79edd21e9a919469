// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use crate::error::BufferError;
use crate::heap::HeapRegion;
use crate::traits::{Allocator, Region};

/// A fixed-capacity byte buffer with a tracked valid length.
///
/// Invariant: `valid_len() <= capacity()`. Bytes past `valid_len()` are never
/// exposed as content.
///
/// # Example
///
/// ```rust
/// use slotbuf_buffer::{BoundedBuffer, HeapAllocator};
///
/// let mut buffer = BoundedBuffer::allocate(&HeapAllocator::new(), 256).unwrap();
///
/// assert_eq!(buffer.store(b"hello world", 11), 11);
/// assert_eq!(buffer.slice(0, 5), b"hello");
/// assert_eq!(buffer.slice(5, 100), b" world");
/// assert!(buffer.slice(11, 10).is_empty());
/// ```
pub struct BoundedBuffer<R: Region = HeapRegion> {
    region: R,
    valid_len: usize,
}

impl<R: Region> core::fmt::Debug for BoundedBuffer<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoundedBuffer")
            .field("data", &"REDACTED")
            .field("valid_len", &self.valid_len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<R: Region> BoundedBuffer<R> {
    /// Wraps an already obtained region. The buffer starts empty.
    pub fn new(region: R) -> Self {
        Self {
            region,
            valid_len: 0,
        }
    }

    /// Obtains a region of `capacity` bytes from `allocator` and wraps it.
    pub fn allocate<A>(allocator: &A, capacity: usize) -> Result<Self, BufferError>
    where
        A: Allocator<Region = R>,
    {
        let region = allocator.allocate(capacity)?;

        Ok(Self::new(region))
    }

    /// Returns the fixed capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.region.capacity()
    }

    /// Returns the number of bytes currently considered content.
    #[inline]
    pub fn valid_len(&self) -> usize {
        self.valid_len
    }

    /// Returns `true` if no content is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.valid_len == 0
    }

    /// Replaces the content with the first `requested_len` bytes of `source`.
    ///
    /// The stored length is clamped to `min(requested_len, capacity,
    /// source.len())`; excess input is silently dropped. Prior content is
    /// overwritten entirely and any stale tail from it is wiped.
    ///
    /// Returns the number of bytes stored.
    pub fn store(&mut self, source: &[u8], requested_len: usize) -> usize {
        let stored = requested_len.min(self.capacity()).min(source.len());
        let previous = self.valid_len;
        let data = self.region.as_mut_slice();

        data[..stored].copy_from_slice(&source[..stored]);

        if previous > stored {
            data[stored..previous].zeroize();
        }

        self.valid_len = stored;

        stored
    }

    /// Returns up to `requested_len` content bytes starting at `start`.
    ///
    /// An empty slice means end-of-data: `start >= valid_len()` or
    /// `requested_len == 0`.
    pub fn slice(&self, start: usize, requested_len: usize) -> &[u8] {
        if start >= self.valid_len {
            return &[];
        }

        let count = requested_len.min(self.valid_len - start);

        &self.region.as_slice()[start..start + count]
    }

    /// Returns the whole content, or nothing if `requested_len < valid_len()`.
    ///
    /// This never returns a partial read.
    pub fn whole_content(&self, requested_len: usize) -> &[u8] {
        if requested_len < self.valid_len {
            return &[];
        }

        &self.region.as_slice()[..self.valid_len]
    }

    /// Wipes the content and resets `valid_len` to 0.
    pub fn clear(&mut self) {
        self.region.as_mut_slice().zeroize();
        self.valid_len = 0;
    }

    /// Returns the backing region, including bytes past `valid_len()`.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn raw_region(&self) -> &[u8] {
        self.region.as_slice()
    }
}
