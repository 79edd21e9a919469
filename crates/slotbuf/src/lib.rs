// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-slot bounded byte exchange.
//!
//! One fixed-capacity buffer, exposed through an open/read/write/close
//! surface with one of two read policies:
//!
//! - **Pseudo-file** ([`EndpointConfig::proc_entry`], 128 bytes): the whole
//!   content is handed out once, and only to a read large enough to hold it.
//! - **Device-file** ([`EndpointConfig::char_device`], 256 bytes): reads
//!   stream through the content from a cursor.
//!
//! Writes replace the content and silently truncate to capacity.
//!
//! # Quick Start
//!
//! ```rust
//! use slotbuf::prelude::*;
//!
//! fn main() -> Result<(), EndpointError> {
//!     let mut registrar = MemoryRegistrar::<ExchangeEndpoint>::new();
//!     let mut proc_entry = EndpointLifecycle::create(
//!         &EndpointConfig::proc_entry(),
//!         &HeapAllocator::new(),
//!         &mut registrar,
//!     )?;
//!
//!     let endpoint = proc_entry.endpoint();
//!     let mut session = endpoint.open()?;
//!     endpoint.write(&session, &b"hello"[..])?;
//!
//!     let mut out = [0u8; 10];
//!     assert_eq!(endpoint.read(&mut session, &mut out[..])?, 5);
//!     assert_eq!(endpoint.read(&mut session, &mut out[..])?, 0);
//!     endpoint.close(session);
//!
//!     EndpointLifecycle::destroy(&mut proc_entry, &mut registrar)?;
//!     Ok(())
//! }
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

/// Bounded buffer and backing regions.
pub mod buffer {
    pub use slotbuf_buffer::*;
}

/// Exchange endpoint, sessions, registration and lifecycle.
pub mod endpoint {
    pub use slotbuf_endpoint::*;
}

/// Everything needed to create, use and destroy an endpoint.
pub mod prelude {
    pub use slotbuf_buffer::{Allocator, BoundedBuffer, BufferError, HeapAllocator, Region};
    #[cfg(unix)]
    pub use slotbuf_buffer::PageAllocator;
    pub use slotbuf_endpoint::{
        AccessMode, AccessPolicy, CallerSink, CallerSource, EndpointConfig, EndpointError,
        EndpointLifecycle, EndpointState, ExchangeEndpoint, MemoryRegistrar, Registrar,
        RegisteredEndpoint, Session,
    };
}

pub use slotbuf_endpoint::{EndpointConfig, EndpointError, EndpointLifecycle, ExchangeEndpoint};
