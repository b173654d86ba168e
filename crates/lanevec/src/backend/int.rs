//! Integer profile impls: wrapping lane loops.
//!
//! All four integer types share the same shape: arithmetic is the
//! element's `wrapping_*` form so unsigned lanes wrap modulo `2^width`
//! and signed lanes wrap two's-complement, exactly and portably. The
//! bitwise/shift surface comes entirely from the provided [`SimdInt`]
//! methods, so each type's `SimdInt` impl is an empty block.

// Internal dependencies
use super::repr::{I16Lanes, I32Lanes, U16Lanes, U32Lanes};
use super::scalar::{fold, map, map2, map3};
use super::{SimdElement, SimdInt};

// ============================================================================
// i32 — 8 lanes
// ============================================================================

impl SimdElement<8> for i32 {
    type Repr = I32Lanes;

    const ALIGN: usize = 32;

    #[inline(always)]
    fn lane_add(a: I32Lanes, b: I32Lanes) -> I32Lanes {
        I32Lanes(map2(a.0, b.0, i32::wrapping_add))
    }

    #[inline(always)]
    fn lane_sub(a: I32Lanes, b: I32Lanes) -> I32Lanes {
        I32Lanes(map2(a.0, b.0, i32::wrapping_sub))
    }

    #[inline(always)]
    fn lane_mul(a: I32Lanes, b: I32Lanes) -> I32Lanes {
        I32Lanes(map2(a.0, b.0, i32::wrapping_mul))
    }

    #[inline(always)]
    fn lane_div(a: I32Lanes, b: I32Lanes) -> I32Lanes {
        I32Lanes(map2(a.0, b.0, |x, y| x / y))
    }

    #[inline(always)]
    fn lane_neg(a: I32Lanes) -> I32Lanes {
        I32Lanes(map(a.0, i32::wrapping_neg))
    }

    #[inline(always)]
    fn lane_mul_add(a: I32Lanes, b: I32Lanes, c: I32Lanes) -> I32Lanes {
        I32Lanes(map3(a.0, b.0, c.0, |x, y, z| x.wrapping_mul(y).wrapping_add(z)))
    }

    #[inline(always)]
    fn lane_mul_sub(a: I32Lanes, b: I32Lanes, c: I32Lanes) -> I32Lanes {
        I32Lanes(map3(a.0, b.0, c.0, |x, y, z| x.wrapping_mul(y).wrapping_sub(z)))
    }

    #[inline(always)]
    fn lane_min(a: I32Lanes, b: I32Lanes) -> I32Lanes {
        I32Lanes(map2(a.0, b.0, i32::min))
    }

    #[inline(always)]
    fn lane_max(a: I32Lanes, b: I32Lanes) -> I32Lanes {
        I32Lanes(map2(a.0, b.0, i32::max))
    }

    #[inline(always)]
    fn reduce_add(a: I32Lanes) -> i32 {
        fold(a.0, i32::wrapping_add)
    }

    #[inline(always)]
    fn reduce_min(a: I32Lanes) -> i32 {
        fold(a.0, i32::min)
    }

    #[inline(always)]
    fn reduce_max(a: I32Lanes) -> i32 {
        fold(a.0, i32::max)
    }
}

impl SimdInt<8> for i32 {}

// ============================================================================
// u32 — 8 lanes
// ============================================================================

impl SimdElement<8> for u32 {
    type Repr = U32Lanes;

    const ALIGN: usize = 32;

    #[inline(always)]
    fn lane_add(a: U32Lanes, b: U32Lanes) -> U32Lanes {
        U32Lanes(map2(a.0, b.0, u32::wrapping_add))
    }

    #[inline(always)]
    fn lane_sub(a: U32Lanes, b: U32Lanes) -> U32Lanes {
        U32Lanes(map2(a.0, b.0, u32::wrapping_sub))
    }

    #[inline(always)]
    fn lane_mul(a: U32Lanes, b: U32Lanes) -> U32Lanes {
        U32Lanes(map2(a.0, b.0, u32::wrapping_mul))
    }

    #[inline(always)]
    fn lane_div(a: U32Lanes, b: U32Lanes) -> U32Lanes {
        U32Lanes(map2(a.0, b.0, |x, y| x / y))
    }

    #[inline(always)]
    fn lane_neg(a: U32Lanes) -> U32Lanes {
        U32Lanes(map(a.0, u32::wrapping_neg))
    }

    #[inline(always)]
    fn lane_mul_add(a: U32Lanes, b: U32Lanes, c: U32Lanes) -> U32Lanes {
        U32Lanes(map3(a.0, b.0, c.0, |x, y, z| x.wrapping_mul(y).wrapping_add(z)))
    }

    #[inline(always)]
    fn lane_mul_sub(a: U32Lanes, b: U32Lanes, c: U32Lanes) -> U32Lanes {
        U32Lanes(map3(a.0, b.0, c.0, |x, y, z| x.wrapping_mul(y).wrapping_sub(z)))
    }

    #[inline(always)]
    fn lane_min(a: U32Lanes, b: U32Lanes) -> U32Lanes {
        U32Lanes(map2(a.0, b.0, u32::min))
    }

    #[inline(always)]
    fn lane_max(a: U32Lanes, b: U32Lanes) -> U32Lanes {
        U32Lanes(map2(a.0, b.0, u32::max))
    }

    #[inline(always)]
    fn reduce_add(a: U32Lanes) -> u32 {
        fold(a.0, u32::wrapping_add)
    }

    #[inline(always)]
    fn reduce_min(a: U32Lanes) -> u32 {
        fold(a.0, u32::min)
    }

    #[inline(always)]
    fn reduce_max(a: U32Lanes) -> u32 {
        fold(a.0, u32::max)
    }
}

impl SimdInt<8> for u32 {}

// ============================================================================
// i16 — 16 lanes
// ============================================================================

impl SimdElement<16> for i16 {
    type Repr = I16Lanes;

    const ALIGN: usize = 32;

    #[inline(always)]
    fn lane_add(a: I16Lanes, b: I16Lanes) -> I16Lanes {
        I16Lanes(map2(a.0, b.0, i16::wrapping_add))
    }

    #[inline(always)]
    fn lane_sub(a: I16Lanes, b: I16Lanes) -> I16Lanes {
        I16Lanes(map2(a.0, b.0, i16::wrapping_sub))
    }

    #[inline(always)]
    fn lane_mul(a: I16Lanes, b: I16Lanes) -> I16Lanes {
        I16Lanes(map2(a.0, b.0, i16::wrapping_mul))
    }

    #[inline(always)]
    fn lane_div(a: I16Lanes, b: I16Lanes) -> I16Lanes {
        I16Lanes(map2(a.0, b.0, |x, y| x / y))
    }

    #[inline(always)]
    fn lane_neg(a: I16Lanes) -> I16Lanes {
        I16Lanes(map(a.0, i16::wrapping_neg))
    }

    #[inline(always)]
    fn lane_mul_add(a: I16Lanes, b: I16Lanes, c: I16Lanes) -> I16Lanes {
        I16Lanes(map3(a.0, b.0, c.0, |x, y, z| x.wrapping_mul(y).wrapping_add(z)))
    }

    #[inline(always)]
    fn lane_mul_sub(a: I16Lanes, b: I16Lanes, c: I16Lanes) -> I16Lanes {
        I16Lanes(map3(a.0, b.0, c.0, |x, y, z| x.wrapping_mul(y).wrapping_sub(z)))
    }

    #[inline(always)]
    fn lane_min(a: I16Lanes, b: I16Lanes) -> I16Lanes {
        I16Lanes(map2(a.0, b.0, i16::min))
    }

    #[inline(always)]
    fn lane_max(a: I16Lanes, b: I16Lanes) -> I16Lanes {
        I16Lanes(map2(a.0, b.0, i16::max))
    }

    #[inline(always)]
    fn reduce_add(a: I16Lanes) -> i16 {
        fold(a.0, i16::wrapping_add)
    }

    #[inline(always)]
    fn reduce_min(a: I16Lanes) -> i16 {
        fold(a.0, i16::min)
    }

    #[inline(always)]
    fn reduce_max(a: I16Lanes) -> i16 {
        fold(a.0, i16::max)
    }
}

impl SimdInt<16> for i16 {}

// ============================================================================
// u16 — 16 lanes
// ============================================================================

impl SimdElement<16> for u16 {
    type Repr = U16Lanes;

    const ALIGN: usize = 32;

    #[inline(always)]
    fn lane_add(a: U16Lanes, b: U16Lanes) -> U16Lanes {
        U16Lanes(map2(a.0, b.0, u16::wrapping_add))
    }

    #[inline(always)]
    fn lane_sub(a: U16Lanes, b: U16Lanes) -> U16Lanes {
        U16Lanes(map2(a.0, b.0, u16::wrapping_sub))
    }

    #[inline(always)]
    fn lane_mul(a: U16Lanes, b: U16Lanes) -> U16Lanes {
        U16Lanes(map2(a.0, b.0, u16::wrapping_mul))
    }

    #[inline(always)]
    fn lane_div(a: U16Lanes, b: U16Lanes) -> U16Lanes {
        U16Lanes(map2(a.0, b.0, |x, y| x / y))
    }

    #[inline(always)]
    fn lane_neg(a: U16Lanes) -> U16Lanes {
        U16Lanes(map(a.0, u16::wrapping_neg))
    }

    #[inline(always)]
    fn lane_mul_add(a: U16Lanes, b: U16Lanes, c: U16Lanes) -> U16Lanes {
        U16Lanes(map3(a.0, b.0, c.0, |x, y, z| x.wrapping_mul(y).wrapping_add(z)))
    }

    #[inline(always)]
    fn lane_mul_sub(a: U16Lanes, b: U16Lanes, c: U16Lanes) -> U16Lanes {
        U16Lanes(map3(a.0, b.0, c.0, |x, y, z| x.wrapping_mul(y).wrapping_sub(z)))
    }

    #[inline(always)]
    fn lane_min(a: U16Lanes, b: U16Lanes) -> U16Lanes {
        U16Lanes(map2(a.0, b.0, u16::min))
    }

    #[inline(always)]
    fn lane_max(a: U16Lanes, b: U16Lanes) -> U16Lanes {
        U16Lanes(map2(a.0, b.0, u16::max))
    }

    #[inline(always)]
    fn reduce_add(a: U16Lanes) -> u16 {
        fold(a.0, u16::wrapping_add)
    }

    #[inline(always)]
    fn reduce_min(a: U16Lanes) -> u16 {
        fold(a.0, u16::min)
    }

    #[inline(always)]
    fn reduce_max(a: U16Lanes) -> u16 {
        fold(a.0, u16::max)
    }
}

impl SimdInt<16> for u16 {}
