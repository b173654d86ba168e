//! Layer 5: Memory
//!
//! ## Purpose
//!
//! Owned, aligned buffers that present themselves as ordinary scalar
//! slices while remaining directly usable as the source and target of
//! vectorized loads and stores.
//!
//! ## Design notes
//!
//! * **Alignment at the base**: each container guarantees its starting
//!   address satisfies the aligned-access precondition of its vector
//!   type. Any element offset that is a multiple of the lane count stays
//!   on an aligned boundary; arbitrary offsets must use the unaligned
//!   access forms. The container guarantees only its own base alignment —
//!   offset selection is the caller's job.
//! * **Two lifetimes of count**: [`AlignedBuffer`] takes its element
//!   count at construction time and owns a heap allocation;
//!   [`AlignedArray`] fixes its count at compile time and lives on the
//!   stack (no allocator needed at all).
//! * **Slice ergonomics**: both deref to `[T]`, so scalar indexing,
//!   iteration, and subslicing come from the standard slice type, and
//!   `&mut buf[k..]` feeds the store entry points directly.
//! * **Single writer per region**: concurrent reads are safe; the
//!   containers do not synchronize overlapping writes.
//!
//! ## Invariants
//!
//! * The base address is a multiple of the element type's `ALIGN`.
//! * [`AlignedBuffer`]'s count need not be a multiple of the lane count;
//!   the bounds-checked vector accessors refuse slots that would run past
//!   the end, and the scalar tail stays reachable through the slice view.
//! * Buffers release their allocation deterministically on drop.
//!
//! ## Non-goals
//!
//! * No growth, no shrinking, no shared ownership.
//! * No arbitrary-length array math; this layer stores values, the
//!   vector layer computes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::alloc::{alloc_zeroed, dealloc, handle_alloc_error};
#[cfg(feature = "std")]
use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error};

// External dependencies
use core::alloc::Layout;
use core::fmt;
use core::mem::size_of;
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;
use core::slice;

// Internal dependencies
use crate::backend::SimdElement;
use crate::primitives::errors::LaneError;
use crate::primitives::tags::ALIGNED;
use crate::vector::Vector;

// ============================================================================
// AlignedBuffer — heap, runtime count
// ============================================================================

/// Heap buffer of `count` elements, zero-initialized, aligned for
/// `Vector<T, N>`.
///
/// # Example
///
/// ```
/// use lanevec::prelude::*;
///
/// let mut buf = AlignedBuffer::<i32, 8>::new(20);
/// assert_eq!(buf.len(), 20);
/// assert_eq!(buf.vector_count(), 2); // the 4-element tail is scalar-only
///
/// buf.set_vector(1, i32x8::splat(7));
/// assert_eq!(buf[8], 7);
/// buf[17] = -1; // tail access through the slice view
/// ```
pub struct AlignedBuffer<T: SimdElement<N>, const N: usize> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T: SimdElement<N>, const N: usize> AlignedBuffer<T, N> {
    /// Allocate a zeroed buffer of `count` elements.
    ///
    /// Panics if the byte size overflows; use [`AlignedBuffer::try_new`]
    /// to handle that case.
    pub fn new(count: usize) -> Self {
        match Self::try_new(count) {
            Ok(buf) => buf,
            Err(e) => panic!("AlignedBuffer::new: {e}"),
        }
    }

    /// Fallible [`AlignedBuffer::new`].
    pub fn try_new(count: usize) -> Result<Self, LaneError> {
        if count == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
            });
        }
        let bytes = count
            .checked_mul(size_of::<T>())
            .ok_or(LaneError::CapacityOverflow { entries: count })?;
        let layout = Layout::from_size_align(bytes, T::ALIGN)
            .map_err(|_| LaneError::CapacityOverflow { entries: count })?;
        // SAFETY: layout has non-zero size (count > 0, T is a numeric type).
        let raw = unsafe { alloc_zeroed(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            handle_alloc_error(layout);
        };
        Ok(Self { ptr, len: count })
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of whole vectors the buffer holds. Elements past
    /// `vector_count() * N` form a scalar-only tail.
    #[inline]
    pub fn vector_count(&self) -> usize {
        self.len / N
    }

    /// Clear every element to zero.
    pub fn set_zero(&mut self) {
        self.as_mut_slice().fill(T::zero());
    }

    /// View as a scalar slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: ptr is valid for len elements for the buffer's lifetime
        // (dangling only when len == 0, which yields an empty slice).
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// View as a mutable scalar slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, plus &mut self guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Raw base pointer, for the unchecked load entry points.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Raw mutable base pointer, for the unchecked store entry points.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Aligned load of vector slot `slot` (elements `slot * N ..` ).
    ///
    /// Panics if the slot runs past the end of the buffer.
    #[inline]
    pub fn vector(&self, slot: usize) -> Vector<T, N> {
        let offset = slot * N;
        assert!(
            offset + N <= self.len,
            "vector: slot {slot} runs past {} elements",
            self.len
        );
        // SAFETY: bounds checked above; base is ALIGN-aligned and a
        // slot offset is a whole number of vectors.
        unsafe { Vector::load_ptr(self.ptr.as_ptr().add(offset), ALIGNED) }
    }

    /// Aligned store of `v` into vector slot `slot`.
    ///
    /// Panics if the slot runs past the end of the buffer.
    #[inline]
    pub fn set_vector(&mut self, slot: usize, v: Vector<T, N>) {
        let offset = slot * N;
        assert!(
            offset + N <= self.len,
            "set_vector: slot {slot} runs past {} elements",
            self.len
        );
        // SAFETY: as in `vector`.
        unsafe { v.store_ptr(self.ptr.as_ptr().add(offset), ALIGNED) }
    }
}

impl<T: SimdElement<N>, const N: usize> Deref for AlignedBuffer<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: SimdElement<N>, const N: usize> DerefMut for AlignedBuffer<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: SimdElement<N>, const N: usize> Drop for AlignedBuffer<T, N> {
    fn drop(&mut self) {
        if self.len != 0 {
            // SAFETY: the allocation was made with exactly this layout.
            unsafe {
                let layout = Layout::from_size_align_unchecked(self.len * size_of::<T>(), T::ALIGN);
                dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
            }
        }
    }
}

impl<T: SimdElement<N>, const N: usize> fmt::Debug for AlignedBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice().iter()).finish()
    }
}

// SAFETY: the buffer owns its allocation; sharing follows the element
// type. Concurrent writes to overlapping regions are the caller's
// responsibility, same as for `&mut [T]`.
unsafe impl<T: SimdElement<N> + Send, const N: usize> Send for AlignedBuffer<T, N> {}
unsafe impl<T: SimdElement<N> + Sync, const N: usize> Sync for AlignedBuffer<T, N> {}

// ============================================================================
// AlignedArray — stack, compile-time count
// ============================================================================

/// Stack buffer of `VECS` vectors (`VECS * N` elements), zero-initialized,
/// aligned by construction.
///
/// The count is a whole number of vectors; a static count that is not a
/// multiple of the lane width has no aligned tail to give out, so the
/// type rounds the request up front rather than at every access.
///
/// # Example
///
/// ```
/// use lanevec::prelude::*;
///
/// let mut arr = AlignedArray::<f32, 8, 4>::new();
/// assert_eq!(arr.len(), 32);
/// arr.set_vector(2, f32x8::splat(0.5));
/// assert_eq!(arr[16], 0.5);
/// ```
pub struct AlignedArray<T: SimdElement<N>, const N: usize, const VECS: usize> {
    slots: [T::Repr; VECS],
}

impl<T: SimdElement<N>, const N: usize, const VECS: usize> AlignedArray<T, N, VECS> {
    /// A zeroed array.
    pub fn new() -> Self {
        // The slice view below relies on the register image being exactly
        // N lanes with no padding.
        debug_assert_eq!(size_of::<T::Repr>(), N * size_of::<T>());
        Self {
            slots: [T::splat(T::zero()); VECS],
        }
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        VECS * N
    }

    /// True when the array holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        VECS == 0
    }

    /// Number of vectors.
    #[inline]
    pub const fn vector_count(&self) -> usize {
        VECS
    }

    /// Clear every element to zero.
    pub fn set_zero(&mut self) {
        self.as_mut_slice().fill(T::zero());
    }

    /// View as a scalar slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots is a contiguous array of padding-free N-lane
        // images, so it is exactly VECS * N elements of T.
        unsafe { slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), VECS * N) }
    }

    /// View as a mutable scalar slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`.
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), VECS * N) }
    }

    /// Raw base pointer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast::<T>()
    }

    /// Raw mutable base pointer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast::<T>()
    }

    /// Read vector slot `slot`.
    #[inline]
    pub fn vector(&self, slot: usize) -> Vector<T, N> {
        assert!(slot < VECS, "vector: slot {slot} out of range for {VECS} slots");
        Vector::from_repr(self.slots[slot])
    }

    /// Write vector slot `slot`.
    #[inline]
    pub fn set_vector(&mut self, slot: usize, v: Vector<T, N>) {
        assert!(
            slot < VECS,
            "set_vector: slot {slot} out of range for {VECS} slots"
        );
        self.slots[slot] = v.into_repr();
    }
}

impl<T: SimdElement<N>, const N: usize, const VECS: usize> Default for AlignedArray<T, N, VECS> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SimdElement<N>, const N: usize, const VECS: usize> Deref for AlignedArray<T, N, VECS> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: SimdElement<N>, const N: usize, const VECS: usize> DerefMut for AlignedArray<T, N, VECS> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: SimdElement<N>, const N: usize, const VECS: usize> fmt::Debug
    for AlignedArray<T, N, VECS>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice().iter()).finish()
    }
}
