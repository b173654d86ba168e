//! Access hint tags for vectorized loads and stores.
//!
//! ## Purpose
//!
//! This module defines the [`AccessHint`] tag consumed by every load/store
//! entry point. Two orthogonal axes combine: alignment (`ALIGNED` vs
//! `UNALIGNED`) and caching behavior (`STREAMING`, a non-temporal hint that
//! asks the backend to bypass the cache, vs default caching).
//!
//! ## Design notes
//!
//! * **Composable**: hints combine with `|`, so call sites read as
//!   `ALIGNED | STREAMING` rather than as boolean soup.
//! * **Dominant bits**: `ALIGNED | UNALIGNED` resolves to aligned; the
//!   aligned bit is dominant. `UNALIGNED` exists so the default can be
//!   named at call sites.
//! * **Advisory caching**: `STREAMING` is a hint. The portable profile
//!   lowers it to a regular store; a backend with non-temporal instructions
//!   may honor it. Correctness is identical either way.
//!
//! ## Invariants
//!
//! * All four {alignment} x {caching} combinations are accepted by every
//!   load/store entry point.
//! * The aligned forms require the address to be a multiple of the element
//!   type's [`SimdElement::ALIGN`](crate::backend::SimdElement::ALIGN);
//!   this is checked by `debug_assert` only.
//!
//! ## Non-goals
//!
//! * This module does not perform any memory access itself.

// External dependencies
use core::ops::BitOr;

// ============================================================================
// AccessHint
// ============================================================================

/// Alignment and caching hint for a vectorized load or store.
///
/// # Example
///
/// ```
/// use lanevec::prelude::*;
///
/// let hint = ALIGNED | STREAMING;
/// assert!(hint.is_aligned());
/// assert!(hint.is_streaming());
/// assert!(!UNALIGNED.is_aligned());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessHint(u8);

/// Default hint: no alignment guarantee, default caching.
pub const UNALIGNED: AccessHint = AccessHint(0b00);

/// The address is a multiple of the element type's required alignment.
pub const ALIGNED: AccessHint = AccessHint(0b01);

/// Non-temporal hint: the written memory should bypass the cache.
pub const STREAMING: AccessHint = AccessHint(0b10);

impl AccessHint {
    /// True when the aligned-access precondition is asserted.
    #[inline]
    pub const fn is_aligned(self) -> bool {
        self.0 & 0b01 != 0
    }

    /// True when the non-temporal caching hint is present.
    #[inline]
    pub const fn is_streaming(self) -> bool {
        self.0 & 0b10 != 0
    }
}

impl Default for AccessHint {
    #[inline]
    fn default() -> Self {
        UNALIGNED
    }
}

impl BitOr for AccessHint {
    type Output = AccessHint;

    #[inline]
    fn bitor(self, rhs: AccessHint) -> AccessHint {
        AccessHint(self.0 | rhs.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations_compose() {
        assert!(!(UNALIGNED).is_aligned());
        assert!(!(UNALIGNED).is_streaming());
        assert!((ALIGNED | STREAMING).is_aligned());
        assert!((ALIGNED | STREAMING).is_streaming());
        assert!((STREAMING | UNALIGNED).is_streaming());
        assert!(!(STREAMING | UNALIGNED).is_aligned());
    }

    #[test]
    fn aligned_bit_is_dominant() {
        assert!((ALIGNED | UNALIGNED).is_aligned());
    }

    #[test]
    fn default_is_unaligned() {
        assert_eq!(AccessHint::default(), UNALIGNED);
    }
}
