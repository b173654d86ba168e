//! Error types for lane-vector operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by the fallible entry
//! points (`try_load`, `try_store`, `AlignedBuffer::try_new`). The hot
//! paths never construct these: contract violations on unchecked paths are
//! `debug_assert` faults instead.
//!
//! ## Design notes
//!
//! * **Contextual**: errors carry the relevant values (actual vs. required
//!   lengths, the offending address and alignment).
//! * **No-std**: the type is `core`-only; `std::error::Error` is gated.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself.
//! * No recovery or retry strategies; every operation is deterministic.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for fallible lane-vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneError {
    /// A slice was shorter than one full vector.
    LengthMismatch {
        /// Number of elements available.
        got: usize,
        /// Number of elements required.
        need: usize,
    },

    /// An aligned access was requested at a misaligned address.
    Misaligned {
        /// The offending address.
        addr: usize,
        /// The required byte alignment.
        align: usize,
    },

    /// A container size in bytes does not fit in `usize`.
    CapacityOverflow {
        /// The requested element count.
        entries: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LaneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::LengthMismatch { got, need } => {
                write!(f, "Length mismatch: got {got} elements, need at least {need}")
            }
            Self::Misaligned { addr, align } => {
                write!(f, "Misaligned access: address {addr:#x} is not a multiple of {align}")
            }
            Self::CapacityOverflow { entries } => {
                write!(f, "Capacity overflow: {entries} elements exceed addressable memory")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LaneError {}
