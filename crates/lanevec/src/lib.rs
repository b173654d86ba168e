//! # lanevec — portable fixed-width lane vectors for Rust
//!
//! A data-parallel vector abstraction: write elementwise arithmetic,
//! comparison, and bitwise code once against a fixed-width [`Vector`] type,
//! and let the active backend profile decide how many lanes each element
//! type gets and how the kernels are lowered. When no vector unit is
//! available, everything degrades to scalar lane loops with identical
//! results.
//!
//! ## Quick Start
//!
//! ```rust
//! use lanevec::prelude::*;
//!
//! // Broadcast, index, and elementwise arithmetic.
//! let x = f32x8::splat(2.0);
//! let i = f32x8::indexes();          // lanes 0.0, 1.0, .., 7.0
//! let y = x * i + 1.0;               // lanes 1.0, 3.0, 5.0, ..
//!
//! assert_eq!(y[3], 7.0);
//!
//! // Comparisons produce masks; reductions to bool are explicit.
//! let hot = y.simd_gt(f32x8::splat(7.0));
//! assert!(!hot.is_full());
//! assert!(!hot.is_empty());
//! assert_eq!(hot.count_true(), 4);
//!
//! // Masks gate conditional values and partial stores.
//! let clamped = hot.select(f32x8::splat(7.0), y);
//! assert_eq!(clamped[7], 7.0);
//! assert_eq!(clamped[2], 5.0);
//! ```
//!
//! ## Memory and alignment
//!
//! Vectorized loads and stores come in every combination of an alignment
//! hint (`ALIGNED` / `UNALIGNED`) and a caching hint (`STREAMING` for
//! non-temporal traffic), composed with `|`. The [`AlignedBuffer`] and
//! [`AlignedArray`] containers guarantee the base alignment the `ALIGNED`
//! forms require; any offset that is a multiple of the lane count stays
//! aligned.
//!
//! ```rust
//! use lanevec::prelude::*;
//!
//! let mut buf = AlignedBuffer::<f32, 8>::new(64);
//! let v = f32x8::splat(1.5);
//!
//! for slot in 0..buf.vector_count() {
//!     buf.set_vector(slot, v);
//! }
//! assert_eq!(buf[63], 1.5);
//!
//! // Masked stores write only the selected lanes.
//! buf.set_zero();
//! let high = f32x8::indexes().simd_gt(f32x8::splat(3.0));
//! v.store_masked(&mut buf[..8], high, ALIGNED);
//! assert_eq!(buf[2], 0.0);
//! assert_eq!(buf[5], 1.5);
//! ```
//!
//! ## Semantics
//!
//! The arithmetic contract is bit-exact and platform-independent for
//! integers: unsigned lanes wrap modulo `2^width`, signed lanes wrap
//! two's-complement in this profile (do not rely on a specific wrap value
//! across backends). Floating lanes follow native IEEE semantics including
//! NaN propagation; the fused [`Vector::mul_add`] / [`Vector::mul_sub`]
//! match the unfused expressions within rounding tolerance, not bit-exactly,
//! because a backend may use a hardware FMA with a single rounding.
//!
//! Shifting a lane by an amount at or above the element width is a
//! contract violation: debug builds fault on it, release builds produce an
//! unspecified value in the affected lane without corrupting other lanes.
//!
//! ## no_std
//!
//! The crate is `no_std`-compatible (it uses `alloc` for the heap
//! container). Disable default features to drop the standard library:
//!
//! ```toml
//! [dependencies]
//! lanevec = { version = "0.1", default-features = false }
//! ```
//!
//! [`AlignedArray`] needs no allocator at all, so fixed-size kernels work
//! on bare-metal targets.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - access hints and error types.
mod primitives;

// Layer 2: Backend - the per-element-type operation contract and the
// portable backend profile implementing it.
mod backend;

// Layer 3: Mask - boolean lane masks produced by comparisons.
mod mask;

// Layer 4: Vector - the lane vector value type.
mod vector;

// Layer 5: Memory - aligned containers usable as load/store targets.
mod memory;

// Layer 6: API - concrete type aliases for the active profile.
mod api;

// Standard lanevec prelude.
pub mod prelude {
    pub use crate::api::{f32x8, f64x2, i16x16, i32x8, mask16, mask2, mask8, u16x16, u32x8};
    pub use crate::backend::{SimdElement, SimdFloat, SimdInt};
    pub use crate::mask::Mask;
    pub use crate::memory::{AlignedArray, AlignedBuffer};
    pub use crate::primitives::errors::LaneError;
    pub use crate::primitives::tags::{AccessHint, ALIGNED, STREAMING, UNALIGNED};
    pub use crate::vector::Vector;
}

pub use prelude::*;

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod backend {
        pub use crate::backend::*;
    }
    pub mod mask {
        pub use crate::mask::*;
    }
    pub mod vector {
        pub use crate::vector::*;
    }
    pub mod memory {
        pub use crate::memory::*;
    }
}
