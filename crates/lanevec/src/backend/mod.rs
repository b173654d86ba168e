//! Layer 2: Backend
//!
//! ## Purpose
//!
//! This layer defines the per-element-type operation contract every backend
//! must satisfy, and implements the portable profile that satisfies it on
//! any target. The generic layers above are written only against the
//! contract and never assume a specific lane count.
//!
//! ## Design notes
//!
//! * **One contract, many lowerings**: [`SimdElement`] carries the register
//!   image type, the required alignment, and the arithmetic kernels that
//!   differ by type family. Everything structural (splat, lane access,
//!   comparisons, loads and stores) is a provided method written once, so a
//!   backend only supplies the kernels it can actually accelerate.
//! * **Compile-time selection**: each element type implements the contract
//!   exactly once, pinning its lane count. There is no runtime dispatch
//!   anywhere in the crate.
//! * **Exact comparisons**: comparison methods are lane loops over
//!   `PartialOrd`, which gives exact native semantics for floats (NaN
//!   compares false to everything, `!=` true) on every backend. Only
//!   arithmetic kernels are routed through vector instructions.
//! * **Sealed**: the contract is an implementation detail of the active
//!   profile; downstream crates cannot add element types.
//!
//! ## Key concepts
//!
//! * [`SimdElement`]: the base contract (arithmetic, comparisons, memory).
//! * [`SimdInt`]: integer-only surface (bitwise, shifts). Instantiating it
//!   for a floating type is a compile-time error, not a runtime one.
//! * [`SimdFloat`]: float-only surface (abs, NaN queries).
//! * [`LaneRepr`]: the register image, an aligned fixed-size array newtype.
//!
//! ## Invariants
//!
//! * `Repr` holds exactly `N` lanes, contiguously, with no padding, at the
//!   alignment the aligned load/store forms require.
//! * Unsigned arithmetic wraps modulo `2^width`; signed arithmetic wraps
//!   two's-complement in this profile; float arithmetic is native IEEE.
//! * Masked stores touch only the selected lanes, under every access hint.
//!
//! ## Non-goals
//!
//! * No runtime CPU feature detection.
//! * No saturating arithmetic (a wrap is never silently "fixed").

// External dependencies
use core::fmt::Debug;
use num_traits::{NumCast, One, PrimInt, ToPrimitive, WrappingShl, WrappingShr, Zero};

// Internal dependencies
use crate::primitives::tags::AccessHint;

// Portable lanewise kernels shared by the profile impls.
mod scalar;

// Aligned register images for the active profile.
mod repr;

// Profile impls: integers as wrapping lane loops.
mod int;

// Profile impls: f32/f64 with `wide` arithmetic kernels.
mod float;

pub use repr::{F32Lanes, F64Lanes, I16Lanes, I32Lanes, U16Lanes, U32Lanes};

// Build a register image from lanes without spelling the qualified
// associated-type path at every call site.
#[inline(always)]
pub(crate) fn repr_from_lanes<T: SimdElement<N>, const N: usize>(lanes: [T; N]) -> T::Repr {
    <T::Repr as LaneRepr<T, N>>::from_lanes(lanes)
}

mod sealed {
    /// Restricts the backend contract to the element types of the active
    /// profile.
    pub trait Sealed {}

    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

// ============================================================================
// Register Image Contract
// ============================================================================

/// A register image: `N` lanes of `T`, contiguous, suitably aligned.
///
/// Implementors are `#[repr(C)]` newtypes over `[T; N]` whose size equals
/// `N * size_of::<T>()`; the memory layer relies on this when it
/// reinterprets arrays of images as scalar slices.
pub trait LaneRepr<T: Copy, const N: usize>: Copy + Debug + PartialEq {
    /// Build an image from individual lanes.
    fn from_lanes(lanes: [T; N]) -> Self;

    /// Borrow the lanes.
    fn as_lanes(&self) -> &[T; N];

    /// Borrow the lanes mutably.
    fn as_lanes_mut(&mut self) -> &mut [T; N];

    /// Extract the lanes by value.
    #[inline]
    fn to_lanes(self) -> [T; N] {
        *self.as_lanes()
    }
}

// ============================================================================
// Element Contract
// ============================================================================

/// The backend contract for one element type at its native lane count.
///
/// Implemented exactly once per element type; the single impl pins the
/// lane count `N` the active backend gives that type, so an unsupported
/// width fails to compile rather than falling back at runtime.
pub trait SimdElement<const N: usize>:
    sealed::Sealed + Copy + PartialEq + PartialOrd + Debug + Zero + One + NumCast + 'static
{
    /// Register image for this element type.
    type Repr: LaneRepr<Self, N>;

    /// Byte alignment required by the aligned load/store forms.
    const ALIGN: usize;

    // ------------------------------------------------------------------
    // Required arithmetic kernels
    // ------------------------------------------------------------------

    /// Elementwise addition (wrapping for integers, IEEE for floats).
    fn lane_add(a: Self::Repr, b: Self::Repr) -> Self::Repr;

    /// Elementwise subtraction.
    fn lane_sub(a: Self::Repr, b: Self::Repr) -> Self::Repr;

    /// Elementwise multiplication.
    fn lane_mul(a: Self::Repr, b: Self::Repr) -> Self::Repr;

    /// Elementwise division. Integer division by zero panics.
    fn lane_div(a: Self::Repr, b: Self::Repr) -> Self::Repr;

    /// Elementwise negation (two's-complement wrap for integers).
    fn lane_neg(a: Self::Repr) -> Self::Repr;

    /// Fused `a * b + c`. For floats a backend may use a hardware FMA with
    /// a single rounding, so the result matches the unfused expression
    /// within tolerance, not bit-exactly.
    fn lane_mul_add(a: Self::Repr, b: Self::Repr, c: Self::Repr) -> Self::Repr;

    /// Fused `a * b - c`, same tolerance contract as [`Self::lane_mul_add`].
    fn lane_mul_sub(a: Self::Repr, b: Self::Repr, c: Self::Repr) -> Self::Repr;

    /// Elementwise minimum. For floats this is `f32::min`/`f64::min`
    /// semantics: a single NaN operand yields the other operand.
    fn lane_min(a: Self::Repr, b: Self::Repr) -> Self::Repr;

    /// Elementwise maximum, same NaN contract as [`Self::lane_min`].
    fn lane_max(a: Self::Repr, b: Self::Repr) -> Self::Repr;

    /// Horizontal sum of all lanes (wrapping for integers).
    fn reduce_add(a: Self::Repr) -> Self;

    /// Horizontal minimum of all lanes.
    fn reduce_min(a: Self::Repr) -> Self;

    /// Horizontal maximum of all lanes.
    fn reduce_max(a: Self::Repr) -> Self;

    // ------------------------------------------------------------------
    // Provided structure-only operations
    // ------------------------------------------------------------------

    /// Broadcast one scalar to every lane.
    #[inline]
    fn splat(value: Self) -> Self::Repr {
        repr_from_lanes([value; N])
    }

    /// Lane `i` holds the value `i`.
    #[inline]
    fn ascending() -> Self::Repr {
        repr_from_lanes(core::array::from_fn(|i| {
            <Self as NumCast>::from(i).unwrap()
        }))
    }

    /// Borrow lane `lane`. Out-of-range lanes are a programming error.
    #[inline]
    fn lane(a: &Self::Repr, lane: usize) -> &Self {
        debug_assert!(lane < N, "lane: index {lane} out of range for {N} lanes");
        &a.as_lanes()[lane]
    }

    /// Borrow lane `lane` mutably.
    #[inline]
    fn lane_mut(a: &mut Self::Repr, lane: usize) -> &mut Self {
        debug_assert!(lane < N, "lane_mut: index {lane} out of range for {N} lanes");
        &mut a.as_lanes_mut()[lane]
    }

    /// Elementwise `==`.
    #[inline]
    fn cmp_eq(a: Self::Repr, b: Self::Repr) -> [bool; N] {
        let (av, bv) = (a.as_lanes(), b.as_lanes());
        core::array::from_fn(|i| av[i] == bv[i])
    }

    /// Elementwise `!=`. True for a NaN lane compared to anything.
    #[inline]
    fn cmp_ne(a: Self::Repr, b: Self::Repr) -> [bool; N] {
        let (av, bv) = (a.as_lanes(), b.as_lanes());
        core::array::from_fn(|i| av[i] != bv[i])
    }

    /// Elementwise `<`. False for any NaN lane.
    #[inline]
    fn cmp_lt(a: Self::Repr, b: Self::Repr) -> [bool; N] {
        let (av, bv) = (a.as_lanes(), b.as_lanes());
        core::array::from_fn(|i| av[i] < bv[i])
    }

    /// Elementwise `<=`.
    #[inline]
    fn cmp_le(a: Self::Repr, b: Self::Repr) -> [bool; N] {
        let (av, bv) = (a.as_lanes(), b.as_lanes());
        core::array::from_fn(|i| av[i] <= bv[i])
    }

    /// Elementwise `>`.
    #[inline]
    fn cmp_gt(a: Self::Repr, b: Self::Repr) -> [bool; N] {
        let (av, bv) = (a.as_lanes(), b.as_lanes());
        core::array::from_fn(|i| av[i] > bv[i])
    }

    /// Elementwise `>=`.
    #[inline]
    fn cmp_ge(a: Self::Repr, b: Self::Repr) -> [bool; N] {
        let (av, bv) = (a.as_lanes(), b.as_lanes());
        core::array::from_fn(|i| av[i] >= bv[i])
    }

    /// Load `N` lanes from memory.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of `N` elements. If `hint` asserts
    /// alignment, `src` must be a multiple of [`Self::ALIGN`]; this is
    /// checked in debug builds only, and a backend honoring the hint with
    /// aligned instructions may fault on violation in release builds.
    #[inline]
    unsafe fn load(src: *const Self, hint: AccessHint) -> Self::Repr {
        debug_assert!(
            !hint.is_aligned() || src as usize % Self::ALIGN == 0,
            "load: aligned access at misaligned address {:#x}",
            src as usize
        );
        let mut lanes = [Self::zero(); N];
        core::ptr::copy_nonoverlapping(src, lanes.as_mut_ptr(), N);
        repr_from_lanes(lanes)
    }

    /// Store `N` lanes to memory.
    ///
    /// The streaming bit of `hint` is advisory; this portable lowering
    /// writes through the cache. A backend override may emit non-temporal
    /// stores instead.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writes of `N` elements; same alignment
    /// contract as [`Self::load`].
    #[inline]
    unsafe fn store(a: Self::Repr, dst: *mut Self, hint: AccessHint) {
        debug_assert!(
            !hint.is_aligned() || dst as usize % Self::ALIGN == 0,
            "store: aligned access at misaligned address {:#x}",
            dst as usize
        );
        core::ptr::copy_nonoverlapping(a.as_lanes().as_ptr(), dst, N);
    }

    /// Store only the lanes whose mask lane is true.
    ///
    /// Unselected lanes retain their prior memory contents bit-for-bit,
    /// under every hint combination; the lowering is a lane loop precisely
    /// so this holds.
    ///
    /// # Safety
    ///
    /// Same contract as [`Self::store`].
    #[inline]
    unsafe fn store_masked(a: Self::Repr, dst: *mut Self, mask: &[bool; N], hint: AccessHint) {
        debug_assert!(
            !hint.is_aligned() || dst as usize % Self::ALIGN == 0,
            "store_masked: aligned access at misaligned address {:#x}",
            dst as usize
        );
        let lanes = a.as_lanes();
        for i in 0..N {
            if mask[i] {
                *dst.add(i) = lanes[i];
            }
        }
    }
}

// ============================================================================
// Integer Contract
// ============================================================================

/// Integer-only operations: bitwise logic and shifts.
///
/// Every method is provided, so a profile impl is a single empty block.
/// The bound is what rejects bitwise/shift use on floating element types
/// at compile time.
pub trait SimdInt<const N: usize>:
    SimdElement<N> + PrimInt + WrappingShl + WrappingShr + Eq + Ord
{
    /// Element width in bits.
    const BITS: u32 = (core::mem::size_of::<Self>() * 8) as u32;

    /// Elementwise bitwise AND.
    #[inline]
    fn lane_and(a: Self::Repr, b: Self::Repr) -> Self::Repr {
        let (av, bv) = (a.as_lanes(), b.as_lanes());
        repr_from_lanes(core::array::from_fn(|i| av[i] & bv[i]))
    }

    /// Elementwise bitwise OR.
    #[inline]
    fn lane_or(a: Self::Repr, b: Self::Repr) -> Self::Repr {
        let (av, bv) = (a.as_lanes(), b.as_lanes());
        repr_from_lanes(core::array::from_fn(|i| av[i] | bv[i]))
    }

    /// Elementwise bitwise XOR.
    #[inline]
    fn lane_xor(a: Self::Repr, b: Self::Repr) -> Self::Repr {
        let (av, bv) = (a.as_lanes(), b.as_lanes());
        repr_from_lanes(core::array::from_fn(|i| av[i] ^ bv[i]))
    }

    /// Elementwise bitwise NOT.
    #[inline]
    fn lane_not(a: Self::Repr) -> Self::Repr {
        let av = a.as_lanes();
        repr_from_lanes(core::array::from_fn(|i| !av[i]))
    }

    /// Shift every lane left by the same amount.
    ///
    /// An amount at or above [`Self::BITS`] is a contract violation:
    /// debug builds fault, release builds produce an unspecified value in
    /// every lane (the lowering wraps the amount) without touching memory
    /// outside the vector.
    #[inline]
    fn lane_shl(a: Self::Repr, amount: u32) -> Self::Repr {
        debug_assert!(
            amount < Self::BITS,
            "lane_shl: shift amount {amount} exceeds element width"
        );
        let av = a.as_lanes();
        repr_from_lanes(core::array::from_fn(|i| av[i].wrapping_shl(amount)))
    }

    /// Shift every lane right by the same amount (arithmetic for signed
    /// types, logical for unsigned), same amount contract as
    /// [`Self::lane_shl`].
    #[inline]
    fn lane_shr(a: Self::Repr, amount: u32) -> Self::Repr {
        debug_assert!(
            amount < Self::BITS,
            "lane_shr: shift amount {amount} exceeds element width"
        );
        let av = a.as_lanes();
        repr_from_lanes(core::array::from_fn(|i| av[i].wrapping_shr(amount)))
    }

    /// Shift lane `i` left by the amount in lane `i` of `amounts`,
    /// per-lane amount contract as in [`Self::lane_shl`].
    #[inline]
    fn lane_shl_vec(a: Self::Repr, amounts: Self::Repr) -> Self::Repr {
        let (av, nv) = (a.as_lanes(), amounts.as_lanes());
        repr_from_lanes(core::array::from_fn(|i| {
            let n = nv[i].to_u32().unwrap_or(Self::BITS);
            debug_assert!(
                n < Self::BITS,
                "lane_shl_vec: shift amount {n} exceeds element width"
            );
            av[i].wrapping_shl(n)
        }))
    }

    /// Per-lane right shift, contract as in [`Self::lane_shl_vec`].
    #[inline]
    fn lane_shr_vec(a: Self::Repr, amounts: Self::Repr) -> Self::Repr {
        let (av, nv) = (a.as_lanes(), amounts.as_lanes());
        repr_from_lanes(core::array::from_fn(|i| {
            let n = nv[i].to_u32().unwrap_or(Self::BITS);
            debug_assert!(
                n < Self::BITS,
                "lane_shr_vec: shift amount {n} exceeds element width"
            );
            av[i].wrapping_shr(n)
        }))
    }
}

// ============================================================================
// Float Contract
// ============================================================================

/// Float-only operations.
pub trait SimdFloat<const N: usize>: SimdElement<N> + num_traits::Float {
    /// Elementwise absolute value.
    #[inline]
    fn lane_abs(a: Self::Repr) -> Self::Repr {
        let av = a.as_lanes();
        repr_from_lanes(core::array::from_fn(|i| num_traits::Float::abs(av[i])))
    }

    /// True in every lane holding a NaN.
    #[inline]
    fn lane_is_nan(a: Self::Repr) -> [bool; N] {
        let av = a.as_lanes();
        core::array::from_fn(|i| num_traits::Float::is_nan(av[i]))
    }
}
