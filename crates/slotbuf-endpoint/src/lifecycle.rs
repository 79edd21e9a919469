// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! EndpointLifecycle - create/destroy with strict ordering.
//!
//! - create: validate, allocate, then register. A failed registration
//!   releases the freshly allocated buffer; nothing stays published.
//! - destroy: deregister, then release. A failed deregistration keeps
//!   the endpoint intact so the call can be retried.

use std::sync::Arc;

use log::{info, warn};

use slotbuf_buffer::{Allocator, HeapRegion, Region};

use crate::config::EndpointConfig;
use crate::endpoint::ExchangeEndpoint;
use crate::error::EndpointError;
use crate::registry::{Registrar, RegistrationHandle};

/// An endpoint together with its registration.
#[derive(Debug)]
pub struct RegisteredEndpoint<R: Region = HeapRegion> {
    name: String,
    endpoint: Arc<ExchangeEndpoint<R>>,
    handle: Option<RegistrationHandle>,
}

impl<R: Region> RegisteredEndpoint<R> {
    /// Returns the published name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the endpoint.
    pub fn endpoint(&self) -> &Arc<ExchangeEndpoint<R>> {
        &self.endpoint
    }

    /// Returns the live registration handle, if any.
    pub fn handle(&self) -> Option<&RegistrationHandle> {
        self.handle.as_ref()
    }

    /// Returns true until `destroy` has succeeded.
    pub fn is_registered(&self) -> bool {
        self.handle.is_some()
    }
}

/// Creates and destroys published endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointLifecycle;

impl EndpointLifecycle {
    /// Allocates an endpoint per `config` and publishes it via `registrar`.
    pub fn create<A, G>(
        config: &EndpointConfig,
        allocator: &A,
        registrar: &mut G,
    ) -> Result<RegisteredEndpoint<A::Region>, EndpointError>
    where
        A: Allocator,
        G: Registrar<ExchangeEndpoint<A::Region>> + ?Sized,
    {
        config.validate()?;

        let endpoint = ExchangeEndpoint::allocate(allocator, config.capacity(), config.policy())
            .map_err(|error| {
                warn!("{}: allocation failed: {error}", config.name());
                error
            })?
            .with_access_mode(config.access_mode());
        let endpoint = Arc::new(endpoint);

        let handle = registrar
            .register(config.name(), config.access_mode(), Arc::clone(&endpoint))
            .map_err(|error| {
                warn!("{}: registration failed: {error}", config.name());
                endpoint.retire();
                EndpointError::from(error)
            })?;

        info!(
            "{}: endpoint loaded ({} bytes, {} policy, mode {})",
            config.name(),
            config.capacity(),
            config.policy(),
            config.access_mode()
        );

        Ok(RegisteredEndpoint {
            name: config.name().to_owned(),
            endpoint,
            handle: Some(handle),
        })
    }

    /// Withdraws the registration, then wipes and retires the endpoint.
    ///
    /// Calling it again after success is a no-op.
    pub fn destroy<R, G>(
        registered: &mut RegisteredEndpoint<R>,
        registrar: &mut G,
    ) -> Result<(), EndpointError>
    where
        R: Region,
        G: Registrar<ExchangeEndpoint<R>> + ?Sized,
    {
        let Some(handle) = registered.handle.as_ref() else {
            return Ok(());
        };

        registrar.deregister(handle).map_err(|error| {
            warn!("{}: deregistration failed: {error}", registered.name);
            EndpointError::from(error)
        })?;

        registered.handle = None;
        registered.endpoint.retire();

        info!("{}: endpoint unloaded", registered.name);

        Ok(())
    }
}
