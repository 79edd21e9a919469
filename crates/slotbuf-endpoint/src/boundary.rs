// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Caller boundary - where bytes leave and enter the endpoint.
//!
//! A sink receives read results, a source supplies write input. Each side
//! reports the length the caller asked for and performs the copy, which may
//! fail (e.g. the caller's memory became unreachable).

use crate::error::CopyError;

/// Destination of a read.
pub trait CallerSink {
    /// Maximum number of bytes the caller asked for.
    fn requested_len(&self) -> usize;

    /// Delivers `bytes` to the caller.
    ///
    /// `bytes.len()` never exceeds `requested_len()`.
    fn copy_to_caller(&mut self, bytes: &[u8]) -> Result<(), CopyError>;
}

/// Origin of a write.
pub trait CallerSource {
    /// Number of bytes the caller asked to write.
    fn requested_len(&self) -> usize;

    /// Fills `dst` with the first `dst.len()` bytes of the caller's input.
    ///
    /// `dst.len()` never exceeds `requested_len()`.
    fn copy_from_caller(&self, dst: &mut [u8]) -> Result<(), CopyError>;
}

impl CallerSink for [u8] {
    fn requested_len(&self) -> usize {
        self.len()
    }

    fn copy_to_caller(&mut self, bytes: &[u8]) -> Result<(), CopyError> {
        self.get_mut(..bytes.len())
            .ok_or(CopyError::ToCaller)?
            .copy_from_slice(bytes);

        Ok(())
    }
}

/// Appends into the vector's spare capacity; never reallocates.
impl CallerSink for Vec<u8> {
    fn requested_len(&self) -> usize {
        self.capacity() - self.len()
    }

    fn copy_to_caller(&mut self, bytes: &[u8]) -> Result<(), CopyError> {
        if bytes.len() > CallerSink::requested_len(self) {
            return Err(CopyError::ToCaller);
        }

        self.extend_from_slice(bytes);

        Ok(())
    }
}

impl CallerSource for [u8] {
    fn requested_len(&self) -> usize {
        self.len()
    }

    fn copy_from_caller(&self, dst: &mut [u8]) -> Result<(), CopyError> {
        let src = self.get(..dst.len()).ok_or(CopyError::FromCaller)?;
        dst.copy_from_slice(src);

        Ok(())
    }
}

/// Caller whose memory is unreachable: every copy fails.
///
/// Only available with the `test_utils` feature.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FaultyCaller {
    requested_len: usize,
}

#[cfg(any(test, feature = "test_utils"))]
impl FaultyCaller {
    /// Creates a caller that claims `requested_len` bytes but never copies.
    pub fn new(requested_len: usize) -> Self {
        Self { requested_len }
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl CallerSink for FaultyCaller {
    fn requested_len(&self) -> usize {
        self.requested_len
    }

    fn copy_to_caller(&mut self, _bytes: &[u8]) -> Result<(), CopyError> {
        Err(CopyError::ToCaller)
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl CallerSource for FaultyCaller {
    fn requested_len(&self) -> usize {
        self.requested_len
    }

    fn copy_from_caller(&self, _dst: &mut [u8]) -> Result<(), CopyError> {
        Err(CopyError::FromCaller)
    }
}
