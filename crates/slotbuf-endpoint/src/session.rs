// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Caller-side handle returned by `open()`.
///
/// Holds the position marker the endpoint advances on `read()`. The endpoint
/// itself keeps no per-session state.
#[derive(Debug, PartialEq, Eq)]
pub struct Session {
    endpoint: u64,
    id: u64,
    position: usize,
    generation: u64,
}

impl Session {
    pub(crate) fn new(endpoint: u64, id: u64, generation: u64) -> Self {
        Self {
            endpoint,
            id,
            position: 0,
            generation,
        }
    }

    /// Returns the session id, unique per endpoint.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the current position marker.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Resets the position marker to the start of the content.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub(crate) fn endpoint(&self) -> u64 {
        self.endpoint
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn advance(&mut self, count: usize) {
        self.position = self.position.saturating_add(count);
    }

    pub(crate) fn resync(&mut self, generation: u64) {
        self.generation = generation;
        self.position = 0;
    }
}
