// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::config::{CHAR_DEVICE_CAPACITY, EndpointConfig, PROC_ENTRY_CAPACITY};
use crate::error::EndpointError;
use crate::policy::AccessPolicy;
use crate::registry::AccessMode;

#[test]
fn test_proc_entry_preset() {
    let config = EndpointConfig::proc_entry();

    assert_eq!(config.name(), "example_proc");
    assert_eq!(config.capacity(), PROC_ENTRY_CAPACITY);
    assert_eq!(config.capacity(), 128);
    assert_eq!(config.policy(), AccessPolicy::WholeOrNothing);
    assert_eq!(config.access_mode(), AccessMode::new(0o666));
}

#[test]
fn test_char_device_preset() {
    let config = EndpointConfig::char_device();

    assert_eq!(config.name(), "chardev_example");
    assert_eq!(config.capacity(), CHAR_DEVICE_CAPACITY);
    assert_eq!(config.capacity(), 256);
    assert_eq!(config.policy(), AccessPolicy::OffsetPartial);
    assert!(config.policy().uses_cursor());
}

#[test]
fn test_builder_overrides() {
    let config = EndpointConfig::proc_entry()
        .with_name("ctl")
        .with_capacity(16)
        .with_policy(AccessPolicy::OffsetPartial)
        .with_access_mode(AccessMode::READ_ALL);

    assert_eq!(
        config,
        EndpointConfig::new("ctl", 16, AccessPolicy::OffsetPartial)
            .with_access_mode(AccessMode::READ_ALL)
    );
}

#[test]
fn test_validate() {
    assert!(EndpointConfig::proc_entry().validate().is_ok());

    assert!(matches!(
        EndpointConfig::proc_entry().with_name("").validate(),
        Err(EndpointError::InvalidConfig(_))
    ));
    assert!(matches!(
        EndpointConfig::char_device().with_capacity(0).validate(),
        Err(EndpointError::InvalidConfig(_))
    ));
}

#[test]
fn test_policy_display() {
    assert_eq!(AccessPolicy::WholeOrNothing.to_string(), "whole-or-nothing");
    assert_eq!(AccessPolicy::OffsetPartial.to_string(), "offset-partial");
}
