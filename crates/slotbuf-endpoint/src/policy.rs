// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Read semantics of an endpoint, fixed at construction.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AccessPolicy {
    /// The whole content is returned once per content generation, and only
    /// if the caller asks for at least `valid_len` bytes. Anything else reads
    /// as end-of-data.
    WholeOrNothing,
    /// Reads return `min(requested, valid_len - cursor)` bytes from the
    /// cursor; a cursor at or past the end reads as end-of-data.
    OffsetPartial,
}

impl AccessPolicy {
    /// Returns true if reads honour a caller-supplied cursor.
    pub fn uses_cursor(&self) -> bool {
        matches!(self, Self::OffsetPartial)
    }
}

impl core::fmt::Display for AccessPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WholeOrNothing => f.write_str("whole-or-nothing"),
            Self::OffsetPartial => f.write_str("offset-partial"),
        }
    }
}
