//! End-to-end tests for `Vector4` algebra, ordering and conversion.
//!
//! Scenario tests pin the documented examples; the proptest block checks
//! the algebraic properties over random vectors.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use evo_primitives::{convert_vector4, Vector4, NORMALIZE_EPSILON};

// ============================================================================
// Strategies
// ============================================================================

fn int_vec() -> impl Strategy<Value = Vector4<i64>> {
    (-1000i64..1000, -1000i64..1000, -1000i64..1000, -1000i64..1000)
        .prop_map(|(x, y, z, w)| Vector4::new(x, y, z, w))
}

fn float_vec() -> impl Strategy<Value = Vector4<f64>> {
    (-1e3f64..1e3, -1e3f64..1e3, -1e3f64..1e3, -1e3f64..1e3)
        .prop_map(|(x, y, z, w)| Vector4::new(x, y, z, w))
}

fn byte_vec() -> impl Strategy<Value = Vector4<u8>> {
    any::<[u8; 4]>().prop_map(Vector4::from)
}

fn short_vec() -> impl Strategy<Value = Vector4<i16>> {
    any::<[i16; 4]>().prop_map(Vector4::from)
}

// ============================================================================
// 1. Documented scenarios
// ============================================================================

#[test]
fn test_magnitude_then_normalize() {
    let mut v = Vector4::new(1.0, 2.0, 2.0, 0.0);
    assert_eq!(v.magnitude(), 3.0);
    v.normalize();
    assert_eq!(v, Vector4::new(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 0.0));
}

#[test]
fn test_unit_ordering_and_manhattan() {
    let a = Vector4::new(1, 1, 1, 1);
    let b = Vector4::new(2, 2, 2, 2);
    assert!(a < b);
    assert_eq!(a.manhattan_distance(&b), 4);
}

#[test]
fn test_zero_vector_normalize_is_noop() {
    let mut v = Vector4::new(0.0, 0.0, 0.0, 0.0);
    v.normalize();
    assert_eq!(v, Vector4::new(0.0, 0.0, 0.0, 0.0));
}

// ============================================================================
// 2. Ordered containers: substrate coordinates as map keys
// ============================================================================

#[test]
fn test_btreemap_orders_by_w_then_z_then_y_then_x() {
    let mut nodes = BTreeMap::new();
    nodes.insert(Vector4::new(0, 0, 1, 0), "hidden");
    nodes.insert(Vector4::new(0, 0, 0, 1), "output");
    nodes.insert(Vector4::new(1, 0, 0, 0), "input-b");
    nodes.insert(Vector4::new(0, 0, 0, 0), "input-a");

    let order: Vec<_> = nodes.values().copied().collect();
    assert_eq!(order, vec!["input-a", "input-b", "hidden", "output"]);
}

// ============================================================================
// 3. Mixed element types
// ============================================================================

#[test]
fn test_grid_index_to_coordinate_and_back() {
    let cell = Vector4::new(3u16, 7, 0, 1);
    let coord: Vector4<f32> = cell.cast();
    let shifted = coord + Vector4::new(0.25f64, 0.25, 0.25, 0.25);
    assert_eq!(shifted, Vector4::new(3.25, 7.25, 0.25, 1.25));
    assert_eq!(Vector4::<u16>::cast_from(&shifted), cell);
}

#[test]
fn test_distance_between_int_and_float_vectors() {
    let a = Vector4::new(0.0f64, 0.0, 0.0, 0.0);
    let b = Vector4::new(3i8, 4, 0, 0);
    assert_eq!(a.distance(&b), 5.0);
    assert_eq!(a.distance_squared(&b), 25.0);
    assert!(a.lt_promoted(&b));
}

#[test]
fn test_convert_from_foreign_tuple() {
    let raw = (1.5f32, -2.5f32, 0.0f32, 9.0f32);
    let v: Vector4<f64> = convert_vector4(&raw);
    assert_eq!(v, Vector4::new(1.5, -2.5, 0.0, 9.0));
}

#[test]
fn test_grid_cell_offset_by_fractional_step() {
    // Fields are combined before truncation: a negative half step drops
    // to the lower cell, and a doubled step moves a whole cell.
    let cell = Vector4::new(4i32, 4, 0, 0);
    let step = Vector4::new(0.5f64, -0.5, 0.0, 0.0);
    assert_eq!(cell + step, Vector4::new(4, 3, 0, 0));
    assert_eq!(cell + step * 2.0, Vector4::new(5, 3, 0, 0));
    assert_eq!(cell - step, Vector4::new(3, 4, 0, 0));
    assert_eq!(cell.dot(&Vector4::splat(0.25f64)), 2);
    assert_eq!(cell.distance(&Vector4::new(4.5f64, 4.5, 0.5, 0.5)), 1);
}

#[test]
fn test_byte_coordinates_far_apart() {
    let a = Vector4::new(0u8, 0, 0, 0);
    let b = Vector4::new(255u8, 255, 0, 0);
    assert_eq!(a.distance(&b), 255);
    assert_eq!(b.magnitude(), 255);
    assert_eq!(a.distance_squared(&b), u8::MAX);
    assert_eq!(a.manhattan_distance(&b), u8::MAX);
}

// ============================================================================
// 4. Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn ordering_is_strict_weak(a in int_vec(), b in int_vec()) {
        let outcomes = [a < b, b < a, a == b];
        prop_assert_eq!(outcomes.iter().filter(|&&hit| hit).count(), 1);
    }

    #[test]
    fn ordering_tie_breaks_w_z_y_x(a in int_vec(), b in int_vec()) {
        let expected = (a.w, a.z, a.y, a.x) < (b.w, b.z, b.y, b.x);
        prop_assert_eq!(a < b, expected);
    }

    #[test]
    fn distance_is_symmetric(a in float_vec(), b in float_vec()) {
        prop_assert_eq!(a.distance(&b), b.distance(&a));
        prop_assert_eq!(a.distance_squared(&b), b.distance_squared(&a));
    }

    #[test]
    fn manhattan_is_a_metric(a in int_vec(), b in int_vec(), c in int_vec()) {
        prop_assert!(a.manhattan_distance(&b) >= 0);
        prop_assert_eq!(a.manhattan_distance(&a), 0);
        prop_assert!(a.manhattan_distance(&c) <= a.manhattan_distance(&b) + b.manhattan_distance(&c));
    }

    #[test]
    fn normalize_yields_unit_or_leaves_alone(v in float_vec()) {
        let n = v.normalize_copy();
        if v.magnitude() > NORMALIZE_EPSILON {
            prop_assert!((n.magnitude() - 1.0).abs() < 1e-9);
        } else {
            prop_assert_eq!(n, v);
        }
    }

    #[test]
    fn lossless_conversion_round_trips(v in int_vec()) {
        let wide: Vector4<f64> = v.cast();
        prop_assert_eq!(Vector4::<i64>::cast_from(&wide), v);
        prop_assert!(v.eq_promoted(&wide));
    }

    #[test]
    fn add_then_sub_is_identity(a in int_vec(), b in int_vec()) {
        prop_assert_eq!(a + b - b, a);
        let mut c = a;
        c += b;
        c -= b;
        prop_assert_eq!(c, a);
    }

    #[test]
    fn narrow_integer_lengths_never_panic(a in byte_vec(), b in byte_vec(), s in short_vec(), t in short_vec()) {
        let exact = |d: f64| d.sqrt();
        let byte_dist = exact((0..4).map(|i| {
            let d = a.to_array()[i] as f64 - b.to_array()[i] as f64;
            d * d
        }).sum());
        prop_assert_eq!(a.distance(&b), byte_dist as u8);
        prop_assert!(a.magnitude() >= a.x.max(a.y).max(a.z).max(a.w));
        let _ = (a.distance_squared(&b), a.manhattan_distance(&b), a.dot(&b), a + b, a - b);

        let short_dist = exact((0..4).map(|i| {
            let d = s.to_array()[i] as f64 - t.to_array()[i] as f64;
            d * d
        }).sum());
        prop_assert_eq!(s.distance(&t), short_dist as i16);
        prop_assert!(s.magnitude() >= 0);
        let _ = (s.distance_squared(&t), s.manhattan_distance(&t), s.dot(&t), s + t, s - t, -s);
    }

    #[test]
    fn integer_plus_fraction_matches_promoted_sum(v in int_vec(), f in float_vec()) {
        let sum = v + f;
        prop_assert_eq!(sum.x, (v.x as f64 + f.x) as i64);
        prop_assert_eq!(sum.w, (v.w as f64 + f.w) as i64);
        let diff = v - f;
        prop_assert_eq!(diff.y, (v.y as f64 - f.y) as i64);
        prop_assert_eq!(v.dot(&f), (v.x as f64 * f.x + v.y as f64 * f.y + v.z as f64 * f.z + v.w as f64 * f.w) as i64);
    }

    #[test]
    fn negation_flips_dot(a in int_vec(), b in int_vec()) {
        prop_assert_eq!((-a).dot(&b), -(a.dot(&b)));
    }
}
