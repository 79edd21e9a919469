// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod config;

use slotbuf_buffer::HeapAllocator;

use crate::endpoint::ExchangeEndpoint;
use crate::policy::AccessPolicy;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn endpoint(capacity: usize, policy: AccessPolicy) -> ExchangeEndpoint {
    init_logger();

    ExchangeEndpoint::allocate(&HeapAllocator::new(), capacity, policy)
        .expect("Failed to allocate(..)")
}
