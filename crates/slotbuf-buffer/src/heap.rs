// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HeapRegion - Standard allocation region
//!
//! Works everywhere, no special memory protection.
//! Reservation is fallible so an exhausted heap surfaces as an error
//! instead of aborting the process.

use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::error::BufferError;
use crate::traits::{Allocator, Region};

/// Test behaviour for injecting failures in `HeapAllocator`.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use slotbuf_buffer::{Allocator, AllocatorBehaviour, BufferError, HeapAllocator};
///
///     #[test]
///     fn test_handles_allocation_failure() {
///         let mut allocator = HeapAllocator::new();
///         allocator.change_behaviour(AllocatorBehaviour::FailAtAllocate);
///
///         assert!(matches!(
///             allocator.allocate(16),
///             Err(BufferError::AllocationFailure(_))
///         ));
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AllocatorBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every `allocate()` call fails with `AllocationFailure`.
    FailAtAllocate,
}

/// Allocator handing out heap-backed regions.
#[derive(Debug, Clone, Default)]
pub struct HeapAllocator {
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: AllocatorBehaviour,
}

impl HeapAllocator {
    /// Creates a new heap allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the test behaviour for this allocator.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: AllocatorBehaviour) {
        self.behaviour = behaviour;
    }
}

impl Allocator for HeapAllocator {
    type Region = HeapRegion;

    fn allocate(&self, capacity: usize) -> Result<HeapRegion, BufferError> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, AllocatorBehaviour::FailAtAllocate) {
            return Err(BufferError::AllocationFailure("injected allocation failure"));
        }

        HeapRegion::try_new(capacity)
    }
}

/// Heap-backed region, wiped on drop.
pub struct HeapRegion {
    inner: Vec<u8>,
}

impl HeapRegion {
    fn try_new(capacity: usize) -> Result<Self, BufferError> {
        let mut inner = Vec::new();
        inner
            .try_reserve_exact(capacity)
            .map_err(|_| BufferError::AllocationFailure("heap reservation failed"))?;

        // Within reserved capacity, no reallocation
        inner.resize(capacity, 0);

        Ok(Self { inner })
    }
}

impl Drop for HeapRegion {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl core::fmt::Debug for HeapRegion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeapRegion")
            .field("data", &"REDACTED")
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl Region for HeapRegion {
    fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.inner
    }

    fn capacity(&self) -> usize {
        self.inner.len()
    }
}
