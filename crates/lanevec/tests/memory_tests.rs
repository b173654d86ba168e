//! Tests for the aligned memory containers.
//!
//! These tests verify the container contract:
//! - Base addresses satisfy the aligned-access precondition
//! - Zeroing, scalar indexing, and slice interop
//! - Bounds-checked vector slot access, including the scalar-only tail
//! - The stack container works without touching the allocator
//!
//! ## Test Organization
//!
//! 1. **Alignment** - base pointers of both containers
//! 2. **AlignedBuffer** - construction, zeroing, slots, tail, errors
//! 3. **AlignedArray** - construction, slots, slice view
//! 4. **Interop** - slices into containers feed the store entry points

use lanevec::prelude::*;

// ============================================================================
// Alignment Tests
// ============================================================================

#[test]
fn test_buffer_base_is_aligned() {
    let buf = AlignedBuffer::<f32, 8>::new(3); // deliberately under one vector
    assert_eq!(buf.as_ptr() as usize % f32x8::ALIGN, 0);

    let buf = AlignedBuffer::<f64, 2>::new(64);
    assert_eq!(buf.as_ptr() as usize % f64x2::ALIGN, 0);

    let buf = AlignedBuffer::<u16, 16>::new(64);
    assert_eq!(buf.as_ptr() as usize % u16x16::ALIGN, 0);
}

#[test]
fn test_array_base_is_aligned() {
    let arr = AlignedArray::<f32, 8, 4>::new();
    assert_eq!(arr.as_ptr() as usize % f32x8::ALIGN, 0);

    let arr = AlignedArray::<i16, 16, 2>::new();
    assert_eq!(arr.as_ptr() as usize % i16x16::ALIGN, 0);
}

/// Offsets that are a multiple of the lane count stay aligned; the aligned
/// loads at each slot rely on it.
#[test]
fn test_vector_slot_offsets_stay_aligned() {
    let buf = AlignedBuffer::<i32, 8>::new(80);
    for slot in 0..buf.vector_count() {
        let addr = unsafe { buf.as_ptr().add(slot * 8) } as usize;
        assert_eq!(addr % i32x8::ALIGN, 0);
    }
}

// ============================================================================
// AlignedBuffer Tests
// ============================================================================

#[test]
fn test_buffer_starts_zeroed() {
    let buf = AlignedBuffer::<i32, 8>::new(100);
    assert!(buf.iter().all(|&x| x == 0));
}

#[test]
fn test_buffer_set_zero_clears_everything() {
    let mut buf = AlignedBuffer::<u32, 8>::new(24);
    buf.fill(0xdead);
    buf.set_zero();
    assert!(buf.iter().all(|&x| x == 0));
}

#[test]
fn test_buffer_counts() {
    let buf = AlignedBuffer::<i32, 8>::new(20);
    assert_eq!(buf.len(), 20);
    assert!(!buf.is_empty());
    // Count need not be a multiple of the lane count; the tail is
    // scalar-only.
    assert_eq!(buf.vector_count(), 2);

    let empty = AlignedBuffer::<i32, 8>::new(0);
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
    assert_eq!(empty.vector_count(), 0);
}

#[test]
fn test_buffer_vector_slots_round_trip() {
    let mut buf = AlignedBuffer::<i32, 8>::new(24);
    let v = i32x8::indexes() + 100;

    buf.set_vector(1, v);
    assert_eq!(buf.vector(1), v);
    assert_eq!(buf[8], 100);
    assert_eq!(buf[15], 107);

    // Neighboring slots untouched.
    assert_eq!(buf.vector(0), i32x8::zero());
    assert_eq!(buf.vector(2), i32x8::zero());
}

#[test]
fn test_buffer_scalar_tail_access() {
    let mut buf = AlignedBuffer::<i32, 8>::new(20);
    buf[17] = -3;
    buf[19] = 9;
    assert_eq!(buf[17], -3);
    assert_eq!(buf[19], 9);

    // The tail is reachable through unaligned vector loads from earlier
    // offsets, never through a whole-vector slot.
    let tail = i32x8::load(&buf[12..], UNALIGNED);
    assert_eq!(tail[5], -3);
}

#[test]
#[should_panic]
fn test_buffer_vector_slot_past_end_faults() {
    let buf = AlignedBuffer::<i32, 8>::new(20);
    let _ = buf.vector(2); // would need elements 16..24
}

#[test]
fn test_buffer_slice_iteration() {
    let mut buf = AlignedBuffer::<u16, 16>::new(32);
    for (i, x) in buf.iter_mut().enumerate() {
        *x = i as u16;
    }
    let total: u32 = buf.iter().map(|&x| x as u32).sum();
    assert_eq!(total, (0..32).sum::<u32>());
}

#[test]
fn test_buffer_zero_count_allocates_nothing() {
    let buf = AlignedBuffer::<f64, 2>::new(0);
    assert!(buf.as_slice().is_empty());
    drop(buf);
}

// ============================================================================
// AlignedArray Tests
// ============================================================================

#[test]
fn test_array_starts_zeroed_and_counts() {
    let arr = AlignedArray::<f32, 8, 4>::new();
    assert_eq!(arr.len(), 32);
    assert_eq!(arr.vector_count(), 4);
    assert!(!arr.is_empty());
    assert!(arr.iter().all(|&x| x == 0.0));

    let arr = AlignedArray::<f32, 8, 0>::new();
    assert!(arr.is_empty());
}

#[test]
fn test_array_vector_slots_round_trip() {
    let mut arr = AlignedArray::<u32, 8, 3>::new();
    let v = u32x8::indexes() * 2;

    arr.set_vector(2, v);
    assert_eq!(arr.vector(2), v);
    assert_eq!(arr[16], 0);
    assert_eq!(arr[17], 2);
    assert_eq!(arr.vector(0), u32x8::zero());
}

#[test]
fn test_array_scalar_view_matches_slots() {
    let mut arr = AlignedArray::<i16, 16, 2>::new();
    arr.set_vector(0, i16x16::indexes());
    arr.set_vector(1, i16x16::splat(-1));

    for i in 0..16 {
        assert_eq!(arr[i], i as i16);
    }
    for i in 16..32 {
        assert_eq!(arr[i], -1);
    }

    arr[5] = 99;
    assert_eq!(arr.vector(0)[5], 99);
}

#[test]
fn test_array_set_zero() {
    let mut arr = AlignedArray::<u32, 8, 2>::new();
    arr.set_vector(0, u32x8::splat(7));
    arr.set_zero();
    assert!(arr.iter().all(|&x| x == 0));
}

#[test]
#[should_panic]
fn test_array_slot_out_of_range_faults() {
    let arr = AlignedArray::<u32, 8, 2>::new();
    let _ = arr.vector(2);
}

// ============================================================================
// Interop Tests
// ============================================================================

/// Container slices feed the store/load entry points directly.
#[test]
fn test_containers_feed_store_entry_points() {
    let mut buf = AlignedBuffer::<f32, 8>::new(16);
    let mut arr = AlignedArray::<f32, 8, 2>::new();

    let v = f32x8::splat(2.5);
    v.store(&mut buf[8..], ALIGNED);
    v.store(&mut arr[8..], ALIGNED);

    assert_eq!(f32x8::load(&buf[8..], ALIGNED), v);
    assert_eq!(f32x8::load(&arr[8..], ALIGNED), v);
}

#[test]
fn test_try_new_zero_and_normal() {
    assert!(AlignedBuffer::<f32, 8>::try_new(0).is_ok());
    assert!(AlignedBuffer::<f32, 8>::try_new(1024).is_ok());
}

#[test]
fn test_try_new_capacity_overflow() {
    let err = AlignedBuffer::<u32, 8>::try_new(usize::MAX).unwrap_err();
    assert_eq!(
        err,
        LaneError::CapacityOverflow {
            entries: usize::MAX
        }
    );
}
