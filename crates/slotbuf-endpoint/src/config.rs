// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Endpoint configuration and the two stock presets.

use crate::error::EndpointError;
use crate::policy::AccessPolicy;
use crate::registry::AccessMode;

/// Capacity of the pseudo-file preset.
pub const PROC_ENTRY_CAPACITY: usize = 128;
/// Capacity of the device-file preset.
pub const CHAR_DEVICE_CAPACITY: usize = 256;

/// Name of the pseudo-file preset.
pub const PROC_ENTRY_NAME: &str = "example_proc";
/// Name of the device-file preset.
pub const CHAR_DEVICE_NAME: &str = "chardev_example";

/// Everything needed to create and publish one endpoint.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EndpointConfig {
    name: String,
    capacity: usize,
    policy: AccessPolicy,
    access_mode: AccessMode,
}

impl EndpointConfig {
    /// Creates a config with the default access mode (`0o666`).
    pub fn new(name: impl Into<String>, capacity: usize, policy: AccessPolicy) -> Self {
        Self {
            name: name.into(),
            capacity,
            policy,
            access_mode: AccessMode::default(),
        }
    }

    /// Pseudo-file preset: 128 bytes, whole-or-nothing reads.
    pub fn proc_entry() -> Self {
        Self::new(
            PROC_ENTRY_NAME,
            PROC_ENTRY_CAPACITY,
            AccessPolicy::WholeOrNothing,
        )
    }

    /// Device-file preset: 256 bytes, offset-partial reads.
    pub fn char_device() -> Self {
        Self::new(
            CHAR_DEVICE_NAME,
            CHAR_DEVICE_CAPACITY,
            AccessPolicy::OffsetPartial,
        )
    }

    /// Sets the published name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the buffer capacity in bytes.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the read policy.
    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the published permission bits.
    pub fn with_access_mode(mut self, access_mode: AccessMode) -> Self {
        self.access_mode = access_mode;
        self
    }

    /// Returns the published name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the read policy.
    pub fn policy(&self) -> AccessPolicy {
        self.policy
    }

    /// Returns the published permission bits.
    pub fn access_mode(&self) -> AccessMode {
        self.access_mode
    }

    /// Rejects an empty name or a zero capacity.
    pub fn validate(&self) -> Result<(), EndpointError> {
        if self.name.is_empty() {
            return Err(EndpointError::InvalidConfig("name must not be empty"));
        }

        if self.capacity == 0 {
            return Err(EndpointError::InvalidConfig("capacity must be positive"));
        }

        Ok(())
    }
}
