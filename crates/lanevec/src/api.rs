//! Layer 6: API
//!
//! Concrete aliases for the active backend profile. The lane count of
//! each alias is the one the profile pins for that element type; generic
//! code stays on [`Vector<T, N>`](crate::vector::Vector) and never names
//! these widths.

// Internal dependencies
use crate::mask::Mask;
use crate::vector::Vector;

/// 8 lanes of `f32`.
#[allow(non_camel_case_types)]
pub type f32x8 = Vector<f32, 8>;

/// 2 lanes of `f64`.
#[allow(non_camel_case_types)]
pub type f64x2 = Vector<f64, 2>;

/// 8 lanes of `i32`.
#[allow(non_camel_case_types)]
pub type i32x8 = Vector<i32, 8>;

/// 8 lanes of `u32`.
#[allow(non_camel_case_types)]
pub type u32x8 = Vector<u32, 8>;

/// 16 lanes of `i16`.
#[allow(non_camel_case_types)]
pub type i16x16 = Vector<i16, 16>;

/// 16 lanes of `u16`.
#[allow(non_camel_case_types)]
pub type u16x16 = Vector<u16, 16>;

/// Mask for 2-lane vectors (`f64x2`).
#[allow(non_camel_case_types)]
pub type mask2 = Mask<2>;

/// Mask for 8-lane vectors (`f32x8`, `i32x8`, `u32x8`).
#[allow(non_camel_case_types)]
pub type mask8 = Mask<8>;

/// Mask for 16-lane vectors (`i16x16`, `u16x16`).
#[allow(non_camel_case_types)]
pub type mask16 = Mask<16>;
