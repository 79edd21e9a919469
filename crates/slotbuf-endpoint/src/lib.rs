// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-slot byte exchange endpoint.
//!
//! An [`ExchangeEndpoint`] exposes one bounded buffer through an
//! open/read/write/close surface. Every call is synchronous and runs as one
//! critical section; there is no per-caller state on the endpoint beyond the
//! shared buffer.
//!
//! # Read Policies
//!
//! - **WholeOrNothing**: a read at position 0 that asks for at least
//!   `valid_len` bytes returns the whole content and moves the position
//!   marker to the end. Any other read returns 0 (end-of-data). Suited to
//!   small atomic control messages.
//! - **OffsetPartial**: a read returns up to the requested number of bytes
//!   from the cursor; the caller advances the cursor. Suited to streaming
//!   larger payloads.
//!
//! Writes always replace the whole content from offset 0 and silently
//! truncate to capacity. End-of-data and truncation are successes, never
//! errors.
//!
//! # Lifecycle
//!
//! [`EndpointLifecycle`] allocates before it registers and deregisters
//! before it releases. Registration goes through the [`Registrar`] trait;
//! [`MemoryRegistrar`] is an in-process naming table.
//!
//! # Example
//!
//! ```rust
//! use slotbuf_buffer::HeapAllocator;
//! use slotbuf_endpoint::{
//!     EndpointConfig, EndpointError, EndpointLifecycle, ExchangeEndpoint, MemoryRegistrar,
//! };
//!
//! fn example() -> Result<(), EndpointError> {
//!     let mut registrar = MemoryRegistrar::<ExchangeEndpoint>::new();
//!     let mut device = EndpointLifecycle::create(
//!         &EndpointConfig::char_device(),
//!         &HeapAllocator::new(),
//!         &mut registrar,
//!     )?;
//!
//!     let endpoint = device.endpoint();
//!     let mut session = endpoint.open()?;
//!     endpoint.write(&session, &b"hello world"[..])?;
//!
//!     let mut chunk = [0u8; 5];
//!     assert_eq!(endpoint.read(&mut session, &mut chunk[..])?, 5);
//!     assert_eq!(&chunk, b"hello");
//!     endpoint.close(session);
//!
//!     EndpointLifecycle::destroy(&mut device, &mut registrar)?;
//!     assert!(registrar.is_empty());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod boundary;
mod config;
mod endpoint;
mod error;
mod lifecycle;
mod policy;
mod registry;
mod session;

pub use boundary::{CallerSink, CallerSource};
pub use config::{
    CHAR_DEVICE_CAPACITY, CHAR_DEVICE_NAME, EndpointConfig, PROC_ENTRY_CAPACITY, PROC_ENTRY_NAME,
};
pub use endpoint::{EndpointState, ExchangeEndpoint};
pub use error::{CopyError, EndpointError, RegistrationError};
pub use lifecycle::{EndpointLifecycle, RegisteredEndpoint};
pub use policy::AccessPolicy;
pub use registry::{AccessMode, MemoryRegistrar, Registrar, RegistrationHandle};
pub use session::Session;

#[cfg(any(test, feature = "test_utils"))]
pub use boundary::FaultyCaller;
#[cfg(any(test, feature = "test_utils"))]
pub use registry::RegistrarBehaviour;
