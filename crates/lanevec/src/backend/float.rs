//! Float profile impls: `wide`-backed arithmetic kernels.
//!
//! f32 and f64 route their arithmetic through `wide::f32x8` and
//! `wide::f64x2`, which lower to the target's vector instructions
//! (including a hardware FMA for `lane_mul_add` where available — the
//! reason the fused forms carry a tolerance contract rather than a
//! bit-exactness one). min/max stay lane loops to pin the documented
//! `f32::min`/`f64::min` NaN behavior regardless of what the vector ISA's
//! min instruction does with NaN operands.

// External dependencies
use wide::{f32x8, f64x2};

// Internal dependencies
use super::repr::{F32Lanes, F64Lanes};
use super::scalar::{fold, map, map2};
use super::{SimdElement, SimdFloat};

// ============================================================================
// f32 — 8 lanes
// ============================================================================

impl SimdElement<8> for f32 {
    type Repr = F32Lanes;

    const ALIGN: usize = 32;

    #[inline(always)]
    fn lane_add(a: F32Lanes, b: F32Lanes) -> F32Lanes {
        F32Lanes((f32x8::new(a.0) + f32x8::new(b.0)).to_array())
    }

    #[inline(always)]
    fn lane_sub(a: F32Lanes, b: F32Lanes) -> F32Lanes {
        F32Lanes((f32x8::new(a.0) - f32x8::new(b.0)).to_array())
    }

    #[inline(always)]
    fn lane_mul(a: F32Lanes, b: F32Lanes) -> F32Lanes {
        F32Lanes((f32x8::new(a.0) * f32x8::new(b.0)).to_array())
    }

    #[inline(always)]
    fn lane_div(a: F32Lanes, b: F32Lanes) -> F32Lanes {
        F32Lanes((f32x8::new(a.0) / f32x8::new(b.0)).to_array())
    }

    #[inline(always)]
    fn lane_neg(a: F32Lanes) -> F32Lanes {
        F32Lanes(map(a.0, |x| -x))
    }

    #[inline(always)]
    fn lane_mul_add(a: F32Lanes, b: F32Lanes, c: F32Lanes) -> F32Lanes {
        F32Lanes(f32x8::new(a.0).mul_add(f32x8::new(b.0), f32x8::new(c.0)).to_array())
    }

    #[inline(always)]
    fn lane_mul_sub(a: F32Lanes, b: F32Lanes, c: F32Lanes) -> F32Lanes {
        Self::lane_mul_add(a, b, Self::lane_neg(c))
    }

    #[inline(always)]
    fn lane_min(a: F32Lanes, b: F32Lanes) -> F32Lanes {
        F32Lanes(map2(a.0, b.0, f32::min))
    }

    #[inline(always)]
    fn lane_max(a: F32Lanes, b: F32Lanes) -> F32Lanes {
        F32Lanes(map2(a.0, b.0, f32::max))
    }

    #[inline(always)]
    fn reduce_add(a: F32Lanes) -> f32 {
        f32x8::new(a.0).reduce_add()
    }

    #[inline(always)]
    fn reduce_min(a: F32Lanes) -> f32 {
        fold(a.0, f32::min)
    }

    #[inline(always)]
    fn reduce_max(a: F32Lanes) -> f32 {
        fold(a.0, f32::max)
    }
}

impl SimdFloat<8> for f32 {}

// ============================================================================
// f64 — 2 lanes
// ============================================================================

impl SimdElement<2> for f64 {
    type Repr = F64Lanes;

    const ALIGN: usize = 16;

    #[inline(always)]
    fn lane_add(a: F64Lanes, b: F64Lanes) -> F64Lanes {
        F64Lanes((f64x2::new(a.0) + f64x2::new(b.0)).to_array())
    }

    #[inline(always)]
    fn lane_sub(a: F64Lanes, b: F64Lanes) -> F64Lanes {
        F64Lanes((f64x2::new(a.0) - f64x2::new(b.0)).to_array())
    }

    #[inline(always)]
    fn lane_mul(a: F64Lanes, b: F64Lanes) -> F64Lanes {
        F64Lanes((f64x2::new(a.0) * f64x2::new(b.0)).to_array())
    }

    #[inline(always)]
    fn lane_div(a: F64Lanes, b: F64Lanes) -> F64Lanes {
        F64Lanes((f64x2::new(a.0) / f64x2::new(b.0)).to_array())
    }

    #[inline(always)]
    fn lane_neg(a: F64Lanes) -> F64Lanes {
        F64Lanes(map(a.0, |x| -x))
    }

    #[inline(always)]
    fn lane_mul_add(a: F64Lanes, b: F64Lanes, c: F64Lanes) -> F64Lanes {
        F64Lanes(f64x2::new(a.0).mul_add(f64x2::new(b.0), f64x2::new(c.0)).to_array())
    }

    #[inline(always)]
    fn lane_mul_sub(a: F64Lanes, b: F64Lanes, c: F64Lanes) -> F64Lanes {
        Self::lane_mul_add(a, b, Self::lane_neg(c))
    }

    #[inline(always)]
    fn lane_min(a: F64Lanes, b: F64Lanes) -> F64Lanes {
        F64Lanes(map2(a.0, b.0, f64::min))
    }

    #[inline(always)]
    fn lane_max(a: F64Lanes, b: F64Lanes) -> F64Lanes {
        F64Lanes(map2(a.0, b.0, f64::max))
    }

    #[inline(always)]
    fn reduce_add(a: F64Lanes) -> f64 {
        f64x2::new(a.0).reduce_add()
    }

    #[inline(always)]
    fn reduce_min(a: F64Lanes) -> f64 {
        fold(a.0, f64::min)
    }

    #[inline(always)]
    fn reduce_max(a: F64Lanes) -> f64 {
        fold(a.0, f64::max)
    }
}

impl SimdFloat<2> for f64 {}
