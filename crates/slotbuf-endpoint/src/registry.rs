// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Naming/registration contract and an in-process implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::RegistrationError;

/// Permission bits an endpoint is published with (`0o666` style).
///
/// The registrar records the mode; the endpoint enforces it, refusing reads
/// without a read bit and writes without a write bit.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct AccessMode(u16);

impl AccessMode {
    /// Readable and writable by everyone.
    pub const READ_WRITE_ALL: Self = Self(0o666);
    /// Readable by everyone, writable by nobody.
    pub const READ_ALL: Self = Self(0o444);

    /// Creates a mode from permission bits; bits above `0o777` are dropped.
    pub const fn new(bits: u16) -> Self {
        Self(bits & 0o777)
    }

    /// Returns the permission bits.
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Returns true if any class may read.
    pub fn allows_read(&self) -> bool {
        self.0 & 0o444 != 0
    }

    /// Returns true if any class may write.
    pub fn allows_write(&self) -> bool {
        self.0 & 0o222 != 0
    }
}

impl Default for AccessMode {
    fn default() -> Self {
        Self::READ_WRITE_ALL
    }
}

impl core::fmt::Debug for AccessMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "AccessMode({:#o})", self.0)
    }
}

impl core::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

/// Proof of a registration, presented to `deregister`.
#[derive(Debug, PartialEq, Eq)]
pub struct RegistrationHandle {
    id: u64,
    name: String,
}

impl RegistrationHandle {
    /// Creates a handle. Intended for `Registrar` implementations.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the registrar-assigned id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the name the endpoint was published under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Naming service endpoints are published through.
pub trait Registrar<E: ?Sized> {
    /// Publishes `endpoint` under `name` with `mode`.
    fn register(
        &mut self,
        name: &str,
        mode: AccessMode,
        endpoint: Arc<E>,
    ) -> Result<RegistrationHandle, RegistrationError>;

    /// Withdraws a registration. On error the registration is still live.
    fn deregister(&mut self, handle: &RegistrationHandle) -> Result<(), RegistrationError>;
}

/// Test behaviour for injecting failures in `MemoryRegistrar`.
///
/// The behaviour is sticky - once set, it remains active until changed.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegistrarBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every `register()` call is rejected.
    FailAtRegister,
    /// Every `deregister()` call is rejected (the entry is kept).
    FailAtDeregister,
}

struct Registration<E: ?Sized> {
    id: u64,
    mode: AccessMode,
    endpoint: Arc<E>,
}

/// In-process naming table.
pub struct MemoryRegistrar<E: ?Sized> {
    entries: BTreeMap<String, Registration<E>>,
    next_id: u64,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: RegistrarBehaviour,
}

impl<E: ?Sized> Default for MemoryRegistrar<E> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: RegistrarBehaviour::None,
        }
    }
}

impl<E: ?Sized> core::fmt::Debug for MemoryRegistrar<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryRegistrar")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl<E: ?Sized> MemoryRegistrar<E> {
    /// Creates an empty registrar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the test behaviour for this registrar.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: RegistrarBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the endpoint registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<E>> {
        self.entries
            .get(name)
            .map(|entry| Arc::clone(&entry.endpoint))
    }

    /// Returns the mode `name` was registered with.
    pub fn access_mode(&self, name: &str) -> Option<AccessMode> {
        self.entries.get(name).map(|entry| entry.mode)
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of live registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates registered names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<E: ?Sized> Registrar<E> for MemoryRegistrar<E> {
    fn register(
        &mut self,
        name: &str,
        mode: AccessMode,
        endpoint: Arc<E>,
    ) -> Result<RegistrationHandle, RegistrationError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, RegistrarBehaviour::FailAtRegister) {
            return Err(RegistrationError::Rejected("injected register failure"));
        }

        if name.is_empty() || name.contains('/') {
            return Err(RegistrationError::InvalidName);
        }

        if self.entries.contains_key(name) {
            return Err(RegistrationError::NameTaken(name.to_owned()));
        }

        let id = self.next_id;
        self.next_id += 1;

        self.entries
            .insert(name.to_owned(), Registration { id, mode, endpoint });

        Ok(RegistrationHandle::new(id, name))
    }

    fn deregister(&mut self, handle: &RegistrationHandle) -> Result<(), RegistrationError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, RegistrarBehaviour::FailAtDeregister) {
            return Err(RegistrationError::Rejected("injected deregister failure"));
        }

        match self.entries.get(handle.name()) {
            Some(entry) if entry.id == handle.id() => {
                self.entries.remove(handle.name());
                Ok(())
            }
            _ => Err(RegistrationError::UnknownHandle(handle.id())),
        }
    }
}
