// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Endpoints backed by mmap'd regions.
#![cfg(unix)]

use serial_test::serial;

use slotbuf::buffer::PageRegion;
use slotbuf::prelude::*;

#[test]
fn page_backed_device_round_trip() {
    let mut registrar = MemoryRegistrar::<ExchangeEndpoint<PageRegion>>::new();

    let mut device = EndpointLifecycle::create(
        &EndpointConfig::char_device(),
        &PageAllocator::new(),
        &mut registrar,
    )
    .expect("Failed to create(..)");

    let endpoint = device.endpoint();
    let mut session = endpoint.open().expect("Failed to open()");
    endpoint
        .write(&session, &b"mapped"[..])
        .expect("Failed to write(..)");

    let mut out = [0u8; 3];
    assert_eq!(
        endpoint
            .read(&mut session, &mut out[..])
            .expect("Failed to read(..)"),
        3
    );
    assert_eq!(&out, b"map");
    assert_eq!(
        endpoint
            .read(&mut session, &mut out[..])
            .expect("Failed to read(..)"),
        3
    );
    assert_eq!(&out, b"ped");
    endpoint.close(session);

    EndpointLifecycle::destroy(&mut device, &mut registrar).expect("Failed to destroy(..)");
}

#[test]
#[serial(page)]
fn locked_pages_back_proc_entry() {
    let mut registrar = MemoryRegistrar::<ExchangeEndpoint<PageRegion>>::new();

    let mut proc_entry = EndpointLifecycle::create(
        &EndpointConfig::proc_entry(),
        &PageAllocator::locked(),
        &mut registrar,
    )
    .expect("Failed to create(..)");

    let endpoint = proc_entry.endpoint();
    let mut session = endpoint.open().expect("Failed to open()");
    endpoint
        .write(&session, &b"locked"[..])
        .expect("Failed to write(..)");

    let mut out = [0u8; 128];
    assert_eq!(
        endpoint
            .read(&mut session, &mut out[..])
            .expect("Failed to read(..)"),
        6
    );
    endpoint.close(session);

    EndpointLifecycle::destroy(&mut proc_entry, &mut registrar).expect("Failed to destroy(..)");
}
