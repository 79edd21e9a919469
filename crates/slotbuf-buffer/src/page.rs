// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PageRegion - mmap'd region with optional mlock.
//!
//! The mapping is rounded up to whole pages; only the first `capacity`
//! bytes are exposed. On drop the whole mapping is wiped, unlocked
//! and unmapped.

use core::ptr;

use zeroize::Zeroize;

use crate::error::BufferError;
use crate::traits::{Allocator, Region};

const FALLBACK_PAGE_SIZE: usize = 4096;

fn page_size() -> usize {
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };

    if size <= 0 {
        return FALLBACK_PAGE_SIZE;
    }

    size as usize
}

/// Allocator handing out page-backed regions.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PageAllocator {
    lock: bool,
}

impl PageAllocator {
    /// Creates an allocator whose regions may be swapped.
    pub fn new() -> Self {
        Self { lock: false }
    }

    /// Creates an allocator whose regions are locked in RAM.
    pub fn locked() -> Self {
        Self { lock: true }
    }

    /// Returns true if regions are `mlock`ed.
    pub fn is_locking(&self) -> bool {
        self.lock
    }
}

impl Allocator for PageAllocator {
    type Region = PageRegion;

    fn allocate(&self, capacity: usize) -> Result<PageRegion, BufferError> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }

        PageRegion::map(capacity, self.lock)
    }
}

/// A region backed by anonymous pages.
#[derive(Debug)]
pub struct PageRegion {
    ptr: *mut u8,
    mapped: usize,
    capacity: usize,
    locked: bool,
}

// Safety: PageRegion exclusively owns its mapping; mutation requires &mut
unsafe impl Send for PageRegion {}
unsafe impl Sync for PageRegion {}

impl PageRegion {
    fn map(capacity: usize, lock: bool) -> Result<Self, BufferError> {
        let mapped = capacity
            .checked_next_multiple_of(page_size())
            .ok_or(BufferError::AllocationFailure("capacity overflows page rounding"))?;

        let ptr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                mapped,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(BufferError::AllocationFailure("mmap failed"));
        }

        let mut region = Self {
            ptr: ptr as *mut u8,
            mapped,
            capacity,
            locked: false,
        };

        if lock {
            // On failure `region` is dropped here, which unmaps it
            let failed = unsafe { libc::mlock(region.ptr as *const _, region.mapped) } != 0;

            if failed {
                return Err(BufferError::AllocationFailure("mlock failed"));
            }

            region.locked = true;
        }

        Ok(region)
    }

    /// Returns true if the mapping is locked in RAM.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns the size of the underlying mapping (a whole number of pages).
    pub fn mapped_len(&self) -> usize {
        self.mapped
    }

    fn mapping_mut(&mut self) -> &mut [u8] {
        unsafe { core::slice::from_raw_parts_mut(self.ptr, self.mapped) }
    }
}

impl Drop for PageRegion {
    fn drop(&mut self) {
        self.mapping_mut().zeroize();

        if self.locked {
            unsafe { libc::munlock(self.ptr as *const _, self.mapped) };
        }

        unsafe { libc::munmap(self.ptr as *mut libc::c_void, self.mapped) };
    }
}

impl Region for PageRegion {
    fn as_slice(&self) -> &[u8] {
        unsafe { core::slice::from_raw_parts(self.ptr, self.capacity) }
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { core::slice::from_raw_parts_mut(self.ptr, self.capacity) }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
