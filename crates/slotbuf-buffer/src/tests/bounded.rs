// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for BoundedBuffer.

use proptest::prelude::*;

use crate::bounded::BoundedBuffer;
use crate::error::BufferError;
use crate::heap::{AllocatorBehaviour, HeapAllocator, HeapRegion};

fn buffer(capacity: usize) -> BoundedBuffer<HeapRegion> {
    BoundedBuffer::allocate(&HeapAllocator::new(), capacity).expect("Failed to allocate(..)")
}

// =============================================================================
// allocate()
// =============================================================================

#[test]
fn test_allocate_starts_empty() {
    let buf = buffer(128);

    assert_eq!(buf.capacity(), 128);
    assert_eq!(buf.valid_len(), 0);
    assert!(buf.is_empty());
}

#[test]
fn test_allocate_propagates_allocation_failure() {
    let mut allocator = HeapAllocator::new();
    allocator.change_behaviour(AllocatorBehaviour::FailAtAllocate);

    let result = BoundedBuffer::allocate(&allocator, 128);

    assert!(matches!(result, Err(BufferError::AllocationFailure(_))));
}

// =============================================================================
// store()
// =============================================================================

#[test]
fn test_store_within_capacity() {
    let mut buf = buffer(128);

    assert_eq!(buf.store(b"hello", 5), 5);
    assert_eq!(buf.valid_len(), 5);
    assert!(!buf.is_empty());
}

#[test]
fn test_store_truncates_to_capacity() {
    let mut buf = buffer(4);

    assert_eq!(buf.store(b"abcdef", 6), 4);
    assert_eq!(buf.valid_len(), 4);
    assert_eq!(buf.slice(0, 10), b"abcd");
}

#[test]
fn test_store_honours_requested_len_shorter_than_source() {
    let mut buf = buffer(16);

    assert_eq!(buf.store(b"hello world", 5), 5);
    assert_eq!(buf.whole_content(16), b"hello");
}

#[test]
fn test_store_clamps_requested_len_to_source() {
    let mut buf = buffer(16);

    assert_eq!(buf.store(b"abc", 10), 3);
    assert_eq!(buf.valid_len(), 3);
}

#[test]
fn test_store_overwrites_instead_of_appending() {
    let mut buf = buffer(16);

    buf.store(b"first", 5);
    buf.store(b"xy", 2);

    assert_eq!(buf.valid_len(), 2);
    assert_eq!(buf.whole_content(16), b"xy");
}

#[test]
fn test_store_wipes_stale_tail() {
    let mut buf = buffer(8);

    buf.store(b"abcdefgh", 8);
    buf.store(b"xy", 2);

    assert_eq!(&buf.raw_region()[..2], b"xy");
    assert!(buf.raw_region()[2..].iter().all(|b| *b == 0));
}

#[test]
fn test_store_empty_source_empties_buffer() {
    let mut buf = buffer(8);

    buf.store(b"abc", 3);
    assert_eq!(buf.store(&[], 0), 0);

    assert!(buf.is_empty());
}

// =============================================================================
// slice()
// =============================================================================

#[test]
fn test_slice_partial_reads() {
    let mut buf = buffer(256);
    assert_eq!(buf.store(b"hello world", 11), 11);

    assert_eq!(buf.slice(0, 5), b"hello");
    assert_eq!(buf.slice(5, 100), b" world");
    assert!(buf.slice(11, 10).is_empty());
}

#[test]
fn test_slice_past_end_is_empty() {
    let mut buf = buffer(16);
    buf.store(b"abc", 3);

    assert!(buf.slice(3, 1).is_empty());
    assert!(buf.slice(100, 1).is_empty());
    assert!(buf.slice(usize::MAX, usize::MAX).is_empty());
}

#[test]
fn test_slice_zero_request_is_empty() {
    let mut buf = buffer(16);
    buf.store(b"abc", 3);

    assert!(buf.slice(0, 0).is_empty());
}

#[test]
fn test_slice_never_exposes_bytes_past_valid_len() {
    let mut buf = buffer(16);
    buf.store(b"0123456789", 10);
    buf.store(b"ab", 2);

    assert_eq!(buf.slice(0, 16), b"ab");
    assert!(buf.slice(2, 16).is_empty());
}

// =============================================================================
// whole_content()
// =============================================================================

#[test]
fn test_whole_content_returns_everything() {
    let mut buf = buffer(128);
    buf.store(b"hello", 5);

    assert_eq!(buf.whole_content(10), b"hello");
    assert_eq!(buf.whole_content(5), b"hello");
}

#[test]
fn test_whole_content_rejects_short_request() {
    let mut buf = buffer(128);
    buf.store(b"hello", 5);

    assert!(buf.whole_content(3).is_empty());
    assert!(buf.whole_content(0).is_empty());
}

#[test]
fn test_whole_content_of_empty_buffer() {
    let buf = buffer(128);

    assert!(buf.whole_content(0).is_empty());
    assert!(buf.whole_content(128).is_empty());
}

// =============================================================================
// clear()
// =============================================================================

#[test]
fn test_clear_wipes_region() {
    let mut buf = buffer(8);
    buf.store(b"secret!!", 8);

    buf.clear();

    assert!(buf.is_empty());
    assert!(buf.raw_region().iter().all(|b| *b == 0));

    // Still usable
    assert_eq!(buf.store(b"ok", 2), 2);
    assert_eq!(buf.whole_content(2), b"ok");
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_debug_redacts_content() {
    let mut buf = buffer(8);
    buf.store(b"hello", 5);

    let rendered = format!("{:?}", buf);

    assert!(rendered.contains("REDACTED"));
    assert!(rendered.contains("valid_len: 5"));
    assert!(!rendered.contains("hello"));
}

// =============================================================================
// properties
// =============================================================================

proptest! {
    #[test]
    fn prop_store_then_whole_content_within_capacity(
        (capacity, data) in (1..=256usize).prop_flat_map(|capacity| {
            (Just(capacity), proptest::collection::vec(any::<u8>(), 0..=capacity))
        })
    ) {
        let mut buf = buffer(capacity);

        let stored = buf.store(&data, data.len());

        prop_assert_eq!(stored, data.len());
        prop_assert_eq!(buf.whole_content(data.len()), &data[..]);
    }

    #[test]
    fn prop_store_truncates_beyond_capacity(
        capacity in 1..=64usize,
        extra in 1..=64usize,
        seed in any::<u8>()
    ) {
        let data: Vec<u8> = (0..capacity + extra).map(|i| seed.wrapping_add(i as u8)).collect();
        let mut buf = buffer(capacity);

        let stored = buf.store(&data, data.len());

        prop_assert_eq!(stored, capacity);
        prop_assert_eq!(buf.valid_len(), capacity);
        prop_assert_eq!(buf.slice(0, usize::MAX), &data[..capacity]);
    }

    #[test]
    fn prop_slice_returns_min_of_request_and_remaining(
        (data, cursor) in proptest::collection::vec(any::<u8>(), 0..=128)
            .prop_flat_map(|data| {
                let len = data.len();
                (Just(data), 0..=len)
            }),
        requested in 0..=160usize
    ) {
        let mut buf = buffer(128);
        buf.store(&data, data.len());

        let bytes = buf.slice(cursor, requested);
        let expected = requested.min(data.len() - cursor);

        prop_assert_eq!(bytes.len(), expected);
        prop_assert_eq!(bytes, &data[cursor..cursor + expected]);
    }
}
