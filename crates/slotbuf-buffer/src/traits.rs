// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::BufferError;

/// A fixed-capacity, exclusively owned byte region.
///
/// Implementations must expose exactly `capacity()` bytes, start zero-filled,
/// and wipe their contents when dropped.
pub trait Region: Send + Sync + core::fmt::Debug {
    /// Returns the region contents for read-only access.
    fn as_slice(&self) -> &[u8];

    /// Returns the region contents for mutable access.
    fn as_mut_slice(&mut self) -> &mut [u8];

    /// Returns the size of the region in bytes.
    fn capacity(&self) -> usize;
}

/// Source of backing regions for bounded buffers.
pub trait Allocator {
    /// Region type handed out by this allocator.
    type Region: Region;

    /// Obtains a zero-filled region of exactly `capacity` bytes.
    ///
    /// Fails with [`BufferError::ZeroCapacity`] when `capacity == 0` and with
    /// [`BufferError::AllocationFailure`] when the memory cannot be obtained.
    fn allocate(&self, capacity: usize) -> Result<Self::Region, BufferError>;
}
