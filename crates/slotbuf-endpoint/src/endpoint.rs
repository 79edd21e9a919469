// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ExchangeEndpoint - bounded buffer behind an open/read/write/close surface.
//!
//! All buffer access happens inside one critical section per call. Writes
//! are staged: bytes are fetched from the caller into a scratch region of
//! the same capacity and only committed once the copy succeeded, so a
//! failed copy leaves both content and `valid_len` untouched.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, warn};
use zeroize::Zeroize;

use slotbuf_buffer::{Allocator, BoundedBuffer, HeapRegion, Region};

use crate::boundary::{CallerSink, CallerSource};
use crate::error::EndpointError;
use crate::policy::AccessPolicy;
use crate::registry::AccessMode;
use crate::session::Session;

/// Observable state of an endpoint.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndpointState {
    /// No content stored (`valid_len == 0`).
    Empty,
    /// Some content stored (`valid_len > 0`).
    Populated,
}

static NEXT_ENDPOINT_ID: AtomicU64 = AtomicU64::new(1);

struct Exchange<R: Region> {
    buffer: BoundedBuffer<R>,
    staging: R,
    generation: u64,
    retired: bool,
}

/// A single-slot byte exchange point.
///
/// # Example
///
/// ```rust
/// use slotbuf_buffer::HeapAllocator;
/// use slotbuf_endpoint::{AccessPolicy, EndpointError, ExchangeEndpoint};
///
/// fn example() -> Result<(), EndpointError> {
///     let endpoint =
///         ExchangeEndpoint::allocate(&HeapAllocator::new(), 128, AccessPolicy::WholeOrNothing)?;
///
///     let mut session = endpoint.open()?;
///     assert_eq!(endpoint.write(&session, &b"hello"[..])?, 5);
///
///     let mut out = [0u8; 10];
///     assert_eq!(endpoint.read(&mut session, &mut out[..])?, 5);
///     assert_eq!(&out[..5], b"hello");
///
///     // Already read: end-of-data
///     assert_eq!(endpoint.read(&mut session, &mut out[..])?, 0);
///
///     endpoint.close(session);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct ExchangeEndpoint<R: Region = HeapRegion> {
    id: u64,
    policy: AccessPolicy,
    capacity: usize,
    access_mode: AccessMode,
    exchange: Mutex<Exchange<R>>,
    next_session: AtomicU64,
    open_sessions: AtomicUsize,
}

impl<R: Region> core::fmt::Debug for ExchangeEndpoint<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExchangeEndpoint")
            .field("policy", &self.policy)
            .field("capacity", &self.capacity)
            .field("access_mode", &self.access_mode)
            .field("open_sessions", &self.open_sessions())
            .finish_non_exhaustive()
    }
}

impl<R: Region> ExchangeEndpoint<R> {
    /// Allocates the content buffer and its staging region from `allocator`.
    ///
    /// If the staging region cannot be obtained, the already obtained content
    /// buffer is released before returning the error.
    pub fn allocate<A>(
        allocator: &A,
        capacity: usize,
        policy: AccessPolicy,
    ) -> Result<Self, EndpointError>
    where
        A: Allocator<Region = R>,
    {
        let buffer = BoundedBuffer::allocate(allocator, capacity)?;
        let staging = allocator.allocate(capacity)?;

        Ok(Self {
            id: NEXT_ENDPOINT_ID.fetch_add(1, Ordering::Relaxed),
            policy,
            capacity,
            access_mode: AccessMode::default(),
            exchange: Mutex::new(Exchange {
                buffer,
                staging,
                generation: 0,
                retired: false,
            }),
            next_session: AtomicU64::new(1),
            open_sessions: AtomicUsize::new(0),
        })
    }

    /// Restricts the operations callers may perform.
    ///
    /// Reads require a readable mode, writes a writable one. Defaults to
    /// [`AccessMode::READ_WRITE_ALL`].
    pub fn with_access_mode(mut self, access_mode: AccessMode) -> Self {
        self.access_mode = access_mode;
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, Exchange<R>>, EndpointError> {
        let guard = self
            .exchange
            .lock()
            .map_err(|_| EndpointError::MutexPoisoned)?;

        if guard.retired {
            return Err(EndpointError::Retired);
        }

        Ok(guard)
    }

    /// Returns the read policy.
    pub fn policy(&self) -> AccessPolicy {
        self.policy
    }

    /// Returns the buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the permission bits enforced on read and write.
    pub fn access_mode(&self) -> AccessMode {
        self.access_mode
    }

    /// Returns the number of sessions opened and not yet closed.
    pub fn open_sessions(&self) -> usize {
        self.open_sessions.load(Ordering::Relaxed)
    }

    /// Returns the number of content bytes currently stored.
    pub fn valid_len(&self) -> Result<usize, EndpointError> {
        Ok(self.lock()?.buffer.valid_len())
    }

    /// Returns whether the endpoint currently holds content.
    pub fn state(&self) -> Result<EndpointState, EndpointError> {
        if self.lock()?.buffer.is_empty() {
            Ok(EndpointState::Empty)
        } else {
            Ok(EndpointState::Populated)
        }
    }

    /// Returns true once the endpoint has been destroyed.
    pub fn is_retired(&self) -> bool {
        self.exchange
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retired
    }

    /// Opens a session positioned at the start of the current content.
    pub fn open(&self) -> Result<Session, EndpointError> {
        let generation = self.lock()?.generation;
        let id = self.next_session.fetch_add(1, Ordering::Relaxed);
        self.open_sessions.fetch_add(1, Ordering::Relaxed);

        debug!("session {id} opened ({} policy)", self.policy);

        Ok(Session::new(self.id, id, generation))
    }

    /// Closes a session.
    ///
    /// A session opened on another endpoint is dropped without touching this
    /// endpoint's count.
    pub fn close(&self, session: Session) {
        if session.endpoint() != self.id {
            warn!("session {} does not belong to this endpoint", session.id());
            return;
        }

        self.open_sessions.fetch_sub(1, Ordering::Relaxed);

        debug!("session {} closed", session.id());
    }

    /// Reads at the session's position marker and advances it.
    ///
    /// Under `WholeOrNothing` the marker is reset whenever the content has
    /// been replaced since the session last looked at it. A return value of
    /// 0 is end-of-data. On a failed copy the marker is left unchanged.
    pub fn read<S>(&self, session: &mut Session, sink: &mut S) -> Result<usize, EndpointError>
    where
        S: CallerSink + ?Sized,
    {
        self.check_access("read", self.access_mode.allows_read())?;
        let exchange = self.lock()?;

        if self.policy == AccessPolicy::WholeOrNothing && session.generation() != exchange.generation
        {
            session.resync(exchange.generation);
        }

        let bytes = self.select(&exchange.buffer, session.position(), sink.requested_len());
        deliver(session.id(), bytes, sink)?;
        session.advance(bytes.len());

        debug!(
            "session {}: read {} bytes, position {}",
            session.id(),
            bytes.len(),
            session.position()
        );

        Ok(bytes.len())
    }

    /// Reads at a caller-supplied cursor without touching any session.
    ///
    /// The caller advances `cursor` by the returned count. Under
    /// `WholeOrNothing` a non-zero cursor means the content was already
    /// consumed and reads as end-of-data.
    pub fn read_at<S>(&self, cursor: usize, sink: &mut S) -> Result<usize, EndpointError>
    where
        S: CallerSink + ?Sized,
    {
        self.check_access("read", self.access_mode.allows_read())?;
        let exchange = self.lock()?;

        let bytes = self.select(&exchange.buffer, cursor, sink.requested_len());
        deliver(0, bytes, sink)?;

        Ok(bytes.len())
    }

    /// Replaces the content with the caller's input, truncated to capacity.
    ///
    /// Returns the number of bytes stored. Never fails on oversized input.
    pub fn write<S>(&self, session: &Session, source: &S) -> Result<usize, EndpointError>
    where
        S: CallerSource + ?Sized,
    {
        self.check_access("write", self.access_mode.allows_write())?;
        let mut guard = self.lock()?;
        let exchange = &mut *guard;

        let count = source.requested_len().min(self.capacity);
        let staging = &mut exchange.staging.as_mut_slice()[..count];

        if let Err(error) = source.copy_from_caller(staging) {
            staging.zeroize();
            warn!("session {}: write of {count} bytes failed: {error}", session.id());

            return Err(error.into());
        }

        let stored = exchange.buffer.store(staging, count);
        staging.zeroize();
        exchange.generation = exchange.generation.wrapping_add(1);

        debug!("session {}: wrote {stored} bytes", session.id());

        Ok(stored)
    }

    /// Wipes all content and refuses further I/O.
    pub(crate) fn retire(&self) {
        let mut exchange = self
            .exchange
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        exchange.buffer.clear();
        exchange.staging.as_mut_slice().zeroize();
        exchange.retired = true;
    }

    fn check_access(&self, operation: &'static str, allowed: bool) -> Result<(), EndpointError> {
        if allowed {
            return Ok(());
        }

        warn!("{operation} refused by access mode {}", self.access_mode);

        Err(EndpointError::AccessDenied(operation))
    }

    fn select<'a>(
        &self,
        buffer: &'a BoundedBuffer<R>,
        position: usize,
        requested_len: usize,
    ) -> &'a [u8] {
        match self.policy {
            AccessPolicy::WholeOrNothing if position > 0 => &[],
            AccessPolicy::WholeOrNothing => buffer.whole_content(requested_len),
            AccessPolicy::OffsetPartial => buffer.slice(position, requested_len),
        }
    }
}

fn deliver<S>(session_id: u64, bytes: &[u8], sink: &mut S) -> Result<(), EndpointError>
where
    S: CallerSink + ?Sized,
{
    // End-of-data: nothing crosses the boundary
    if bytes.is_empty() {
        return Ok(());
    }

    sink.copy_to_caller(bytes).map_err(|error| {
        warn!(
            "session {session_id}: read of {} bytes failed: {error}",
            bytes.len()
        );

        EndpointError::from(error)
    })
}
