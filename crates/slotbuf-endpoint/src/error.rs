// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for slotbuf-endpoint.
use thiserror::Error;

use slotbuf_buffer::BufferError;

/// Failure to move bytes across the caller boundary.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum CopyError {
    /// Bytes could not be delivered to the caller.
    #[error("copy to caller failed")]
    ToCaller,

    /// Bytes could not be fetched from the caller.
    #[error("copy from caller failed")]
    FromCaller,
}

/// Errors reported by a naming/registration service.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum RegistrationError {
    /// Endpoint names must be non-empty and free of `/`.
    #[error("invalid endpoint name")]
    InvalidName,

    /// Another endpoint is already registered under this name.
    #[error("name already registered: {0}")]
    NameTaken(String),

    /// The handle does not refer to a live registration.
    #[error("unknown registration handle: {0}")]
    UnknownHandle(u64),

    /// The service refused the registration.
    #[error("registration rejected: {0}")]
    Rejected(&'static str),
}

/// Errors that can occur when creating or operating an endpoint.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The backing buffer could not be obtained.
    #[error("BufferError: {0}")]
    Allocation(#[from] BufferError),

    /// A read or write could not move bytes across the caller boundary.
    #[error("CopyError: {0}")]
    Copy(#[from] CopyError),

    /// The naming service failed.
    #[error("RegistrationError: {0}")]
    Registration(#[from] RegistrationError),

    /// The endpoint configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    /// The endpoint's access mode forbids the operation.
    #[error("access denied: {0} not permitted")]
    AccessDenied(&'static str),

    /// The endpoint has been destroyed.
    #[error("endpoint has been retired")]
    Retired,

    /// A mutex was poisoned.
    #[error("mutex poisoned")]
    MutexPoisoned,
}
