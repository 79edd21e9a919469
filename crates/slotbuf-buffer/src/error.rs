// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for slotbuf-buffer.
use thiserror::Error;

/// Errors that can occur when obtaining a buffer's backing region.
///
/// Out-of-range offsets and oversized stores are not errors: they produce
/// empty slices and truncated stores respectively.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The backing region could not be obtained.
    #[error("allocation failure: {0}")]
    AllocationFailure(&'static str),

    /// A buffer must hold at least one byte.
    #[error("capacity must be positive")]
    ZeroCapacity,
}
