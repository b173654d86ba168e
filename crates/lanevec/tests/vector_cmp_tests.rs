//! Tests for lane-vector comparisons.
//!
//! These tests verify the comparison contract:
//! - Comparisons produce masks; `==` on vectors is the all-lanes boolean
//! - Mutual consistency (trichotomy, `>=` as the negation of `<`)
//! - Ordering over representative positive and negative ranges
//! - Native float semantics for NaN lanes
//!
//! ## Test Organization
//!
//! 1. **Equality Surfaces** - vector `==` vs. `simd_eq`
//! 2. **Ordering** - ranges, trichotomy, negation pairs
//! 3. **Float Specials** - NaN comparison rules

use lanevec::prelude::*;

// ============================================================================
// Equality Surface Tests
// ============================================================================

/// Two zero vectors are equal, and their lanewise `!=` mask is empty.
#[test]
fn test_equal_vectors() {
    let a = i32x8::zero();
    let b = i32x8::zero();
    assert_eq!(a, b);
    assert!(a.simd_ne(b).is_empty());
    assert!(a.simd_eq(b).is_full());
}

#[test]
fn test_mixed_lanes_are_not_vector_equal() {
    let a = i32x8::indexes();
    let b = i32x8::zero();
    assert_ne!(a, b);
    // Exactly one lane (lane 0) matches.
    assert_eq!(a.simd_eq(b).count_true(), 1);
}

// ============================================================================
// Ordering Tests
// ============================================================================

#[test]
fn test_basic_ordering() {
    let a = i32x8::zero();
    let b = i32x8::zero();
    let c = i32x8::splat(1);

    assert!(a.simd_lt(c).is_full());
    assert!(c.simd_gt(a).is_full());
    assert!(a.simd_le(b).is_full());
    assert!(a.simd_le(c).is_full());
    assert!(b.simd_ge(a).is_full());
    assert!(c.simd_ge(a).is_full());
}

/// Positive range: zero stays strictly below every positive value.
#[test]
fn test_ordering_over_positive_range() {
    let zero = u32x8::zero();
    let step = u32::MAX / 200;
    let mut j = step;
    for _ in 0..199 {
        let v = u32x8::splat(j);
        assert!(zero.simd_lt(v).is_full());
        assert!(v.simd_gt(zero).is_full());
        assert!(zero.simd_ge(v).is_empty());
        assert!(v.simd_le(zero).is_empty());
        j = j.wrapping_add(step);
    }
}

/// Negative range: every negative value stays strictly below zero.
#[test]
fn test_ordering_over_negative_range() {
    let zero = i16x16::zero();
    let step = i16::MIN / -201;
    let mut j = i16::MIN + 1;
    for _ in 0..199 {
        let v = i16x16::splat(j);
        assert!(v.simd_lt(zero).is_full());
        assert!(zero.simd_gt(v).is_full());
        assert!(zero.simd_le(v).is_empty());
        assert!(v.simd_ge(zero).is_empty());
        j += step;
    }
}

/// Exactly one of `<`, `==`, `>` holds per lane, and `>=` is the lanewise
/// negation of `<`.
#[test]
fn test_trichotomy_and_negation_pairs() {
    let a = i32x8::from_array([-3, 0, 5, 5, 7, -7, 100, 2]);
    let b = i32x8::from_array([-3, 1, 4, 5, -7, 7, 100, 3]);

    let lt = a.simd_lt(b);
    let eq = a.simd_eq(b);
    let gt = a.simd_gt(b);

    for i in 0..8 {
        let holds = [lt.get(i), eq.get(i), gt.get(i)];
        assert_eq!(
            holds.iter().filter(|&&h| h).count(),
            1,
            "lane {i}: expected exactly one of <, ==, >"
        );
    }

    assert_eq!(a.simd_ge(b), !lt);
    assert_eq!(a.simd_le(b), !gt);
    assert_eq!(a.simd_ne(b), !eq);
}

#[test]
fn test_trichotomy_floats_non_nan() {
    let a = f64x2::from_array([1.5, -2.0]);
    let b = f64x2::from_array([1.5, 3.0]);

    let lt = a.simd_lt(b);
    let eq = a.simd_eq(b);
    let gt = a.simd_gt(b);

    for i in 0..2 {
        let holds = [lt.get(i), eq.get(i), gt.get(i)];
        assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
    }
    assert_eq!(a.simd_ge(b), !lt);
}

// ============================================================================
// Float Special Tests
// ============================================================================

/// NaN compares false to everything, including itself, except `!=`.
#[test]
fn test_nan_comparison_rules() {
    let mut a = f32x8::splat(1.0);
    a.set(4, f32::NAN);
    let b = f32x8::splat(1.0);

    assert!(!a.simd_eq(b).get(4));
    assert!(!a.simd_lt(b).get(4));
    assert!(!a.simd_le(b).get(4));
    assert!(!a.simd_gt(b).get(4));
    assert!(!a.simd_ge(b).get(4));
    assert!(a.simd_ne(b).get(4));

    // NaN is not equal to itself.
    assert!(!a.simd_eq(a).get(4));
    assert!(a.simd_ne(a).get(4));

    // The other lanes are unaffected.
    assert_eq!(a.simd_eq(b).count_true(), 7);
}
