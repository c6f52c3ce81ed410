// SPDX-License-Identifier: Apache-2.0

//! Property tests for the rotation subsystem: invariants that must hold
//! for arbitrary (non-degenerate) vectors, axes, and angles.

#![allow(missing_docs)]
use core::f32::consts::PI;
use keel_core::math::{Quat, Vec3};
use proptest::prelude::*;

const TOL: f32 = 1e-3;

fn component() -> impl Strategy<Value = f32> {
    -10.0f32..10.0
}

fn vector() -> impl Strategy<Value = Vec3> {
    (component(), component(), component())
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
        .prop_filter("vector too close to zero", |v| v.length() > 1e-2)
}

fn angle() -> impl Strategy<Value = f32> {
    -PI..PI
}

fn unit_quat() -> impl Strategy<Value = Quat> {
    (vector(), angle()).prop_map(|(axis, theta)| Quat::from_axis_angle(&axis, theta))
}

fn assert_close(a: f32, b: f32) {
    let diff = (a - b).abs();
    let tol = TOL.max(TOL * a.abs().max(b.abs()));
    assert!(diff <= tol, "expected {b}, got {a} (diff {diff})");
}

fn assert_close3(a: [f32; 3], b: [f32; 3]) {
    for i in 0..3 {
        assert_close(a[i], b[i]);
    }
}

proptest! {
    #[test]
    fn rotation_preserves_length(q in unit_quat(), v in vector()) {
        let rotated = v.rotate_by(&q);
        assert_close(rotated.length(), v.length());
    }

    #[test]
    fn axis_angle_rotation_is_invertible(axis in vector(), theta in angle(), v in vector()) {
        let back = v.rotate_axis_angle(&axis, theta).rotate_axis_angle(&axis, -theta);
        assert_close3(back.to_array(), v.to_array());
    }

    #[test]
    fn rodrigues_agrees_with_sandwich_product(axis in vector(), theta in angle(), v in vector()) {
        let rodrigues = v.rotate_axis_angle(&axis, theta);
        let sandwich = v.rotate_by(&Quat::from_axis_angle(&axis, theta));
        assert_close3(rodrigues.to_array(), sandwich.to_array());
    }

    #[test]
    fn composition_is_associative(q1 in unit_quat(), q2 in unit_quat(), q3 in unit_quat()) {
        let left = q1.multiply(&q2).multiply(&q3);
        let right = q1.multiply(&q2.multiply(&q3));
        let a = left.to_array();
        let b = right.to_array();
        for i in 0..4 {
            assert_close(a[i], b[i]);
        }
    }

    #[test]
    fn composition_of_unit_quaternions_stays_unit(q1 in unit_quat(), q2 in unit_quat()) {
        assert_close(q1.multiply(&q2).length_squared(), 1.0);
    }

    #[test]
    fn invert_twice_roundtrips(q in unit_quat()) {
        let back = q.invert().invert();
        let a = back.to_array();
        let b = q.to_array();
        for i in 0..4 {
            assert_close(a[i], b[i]);
        }
    }

    #[test]
    fn rotate_toward_aligns_direction_and_preserves_length(v in vector(), target in vector()) {
        let rotated = v.rotate_toward(&target);
        assert_close(rotated.length(), v.length());
        assert_close3(
            rotated.normalize().to_array(),
            target.normalize().to_array(),
        );
    }

    #[test]
    fn rotation_to_carries_source_onto_target(v in vector(), target in vector()) {
        let q = v.rotation_to(&target);
        let rotated = v.rotate_by(&q);
        assert_close3(
            rotated.normalize().to_array(),
            target.normalize().to_array(),
        );
    }
}
