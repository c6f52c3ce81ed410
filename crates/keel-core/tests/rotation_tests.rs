// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]
use core::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};
use keel_core::math::{Quat, Vec3};

fn approx_eq3(a: [f32; 3], b: [f32; 3]) {
    const ABS_TOL: f32 = 1e-5;
    const REL_TOL: f32 = 1e-5;
    for i in 0..3 {
        let diff = (a[i] - b[i]).abs();
        let scale = a[i].abs().max(b[i].abs());
        let tol = ABS_TOL.max(REL_TOL * scale);
        assert!(
            diff <= tol,
            "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol}"
        );
    }
}

fn approx_eq(a: f32, b: f32) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-5, "expected {b}, got {a} (diff {diff})");
}

// Right-handed convention: +X rotated a quarter turn around +Y lands on −Z.
#[test]
fn axis_angle_quarter_turn_about_y_maps_x_to_neg_z() {
    let v = Vec3::UNIT_X.rotate_axis_angle(&Vec3::UNIT_Y, FRAC_PI_2);
    approx_eq3(v.to_array(), [0.0, 0.0, -1.0]);
}

#[test]
fn quaternion_quarter_turn_about_y_maps_x_to_neg_z() {
    let q = Quat::from_axis_angle(&Vec3::UNIT_Y, FRAC_PI_2);
    approx_eq3(Vec3::UNIT_X.rotate_by(&q).to_array(), [0.0, 0.0, -1.0]);
}

#[test]
fn axis_angle_agrees_with_quaternion_path() {
    let axis = Vec3::new(1.0, 2.0, -0.5);
    let angle = 0.7;
    let v = Vec3::new(-3.0, 0.25, 1.5);
    let rodrigues = v.rotate_axis_angle(&axis, angle);
    let sandwich = v.rotate_by(&Quat::from_axis_angle(&axis, angle));
    approx_eq3(rodrigues.to_array(), sandwich.to_array());
}

#[test]
fn axis_angle_rotation_is_invertible() {
    let axis = Vec3::new(0.3, -1.0, 2.0);
    let v = Vec3::new(1.0, 2.0, 3.0);
    let back = v.rotate_axis_angle(&axis, 1.1).rotate_axis_angle(&axis, -1.1);
    approx_eq3(back.to_array(), v.to_array());
}

#[test]
fn axis_angle_does_not_mutate_the_caller_axis() {
    let axis = Vec3::new(0.0, 2.0, 0.0);
    let _ = Vec3::UNIT_X.rotate_axis_angle(&axis, FRAC_PI_2);
    assert_eq!(axis.to_array(), [0.0, 2.0, 0.0]);
}

#[test]
fn degenerate_axis_yields_identity_rotation() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.rotate_axis_angle(&Vec3::ZERO, 1.0).to_array(), v.to_array());
}

#[test]
fn identity_quaternion_rotates_vector_to_itself() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.rotate_by(&Quat::identity()).to_array(), v.to_array());
}

#[test]
fn non_unit_quaternion_still_rotates_correctly() {
    // Scaling a rotation quaternion must not change the rotation when
    // the sandwich product uses the true inverse.
    let q = Quat::from_axis_angle(&Vec3::UNIT_Z, FRAC_PI_2);
    let scaled = Quat::from([
        q.to_array()[0] * 3.0,
        q.to_array()[1] * 3.0,
        q.to_array()[2] * 3.0,
        q.to_array()[3] * 3.0,
    ]);
    approx_eq3(
        Vec3::UNIT_X.rotate_by(&scaled).to_array(),
        [0.0, 1.0, 0.0],
    );
}

#[test]
fn rotate_toward_aligns_with_target_direction() {
    let v = Vec3::new(2.0, 0.0, 0.0);
    let target = Vec3::new(0.0, 3.0, 0.0);
    let rotated = v.rotate_toward(&target);
    // Direction matches the target; length is preserved.
    approx_eq3(rotated.normalize().to_array(), [0.0, 1.0, 0.0]);
    approx_eq(rotated.length(), 2.0);
}

#[test]
fn rotate_toward_same_direction_is_identity() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let rotated = v.rotate_toward(&v.scale(5.0));
    assert_eq!(rotated.to_array(), v.to_array());
}

#[test]
fn rotate_toward_opposite_direction_flips_the_vector() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let rotated = v.rotate_toward(&v.negate());
    assert!(rotated.to_array().iter().all(|c| c.is_finite()));
    approx_eq(rotated.length(), v.length());
    approx_eq3(
        rotated.normalize().to_array(),
        v.negate().normalize().to_array(),
    );
}

#[test]
fn rotation_to_returns_the_alignment_quaternion() {
    let from = Vec3::UNIT_X;
    let to = Vec3::UNIT_Y;
    let q = from.rotation_to(&to);
    approx_eq3(from.rotate_by(&q).to_array(), [0.0, 1.0, 0.0]);
    // The axis is the cross product of the two directions (+Z here);
    // half-angle components of a 90° turn are sin(π/4) = cos(π/4).
    let [x, y, z, w] = q.to_array();
    approx_eq(x, 0.0);
    approx_eq(y, 0.0);
    approx_eq(z, FRAC_1_SQRT_2);
    approx_eq(w, FRAC_1_SQRT_2);
}

#[test]
fn rotation_between_degenerate_input_is_identity() {
    assert_eq!(
        Quat::rotation_between(&Vec3::ZERO, &Vec3::UNIT_X).to_array(),
        Quat::identity().to_array()
    );
}

#[test]
fn rotation_between_antiparallel_uses_a_perpendicular_axis() {
    let q = Quat::rotation_between(&Vec3::UNIT_X, &Vec3::UNIT_X.negate());
    let [x, y, z, _] = q.to_array();
    // The rotation axis must be perpendicular to the input direction.
    approx_eq(Vec3::new(x, y, z).dot(&Vec3::UNIT_X), 0.0);
    approx_eq3(Vec3::UNIT_X.rotate_by(&q).to_array(), [-1.0, 0.0, 0.0]);
}

#[test]
fn quaternion_invert_twice_roundtrips() {
    let q = Quat::from_axis_angle(&Vec3::new(1.0, -1.0, 0.5), 1.3);
    let back = q.invert().invert();
    let a = q.to_array();
    let b = back.to_array();
    for i in 0..4 {
        approx_eq(b[i], a[i]);
    }
}

#[test]
fn invert_of_degenerate_quaternion_is_identity() {
    let q = Quat::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(q.invert().to_array(), Quat::identity().to_array());
}

#[test]
fn rotation_matrix_matches_sandwich_product() {
    let q = Quat::from_axis_angle(&Vec3::new(0.2, 1.0, -0.7), 2.1);
    let m = q.to_rotation_matrix();
    let v = Vec3::new(1.5, -2.0, 0.5);
    let by_matrix = [
        m[0] * v.x() + m[1] * v.y() + m[2] * v.z(),
        m[3] * v.x() + m[4] * v.y() + m[5] * v.z(),
        m[6] * v.x() + m[7] * v.y() + m[8] * v.z(),
    ];
    let by_sandwich = v.rotate_by(&q).to_array();
    for i in 0..3 {
        approx_eq(by_matrix[i], by_sandwich[i]);
    }
}

#[test]
fn rotation_matrix_of_identity_is_the_identity_matrix() {
    let m = Quat::identity().to_rotation_matrix();
    assert_eq!(m, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn half_turn_composes_from_two_quarter_turns() {
    let quarter = Quat::from_axis_angle(&Vec3::UNIT_Z, FRAC_PI_2);
    let half = quarter.multiply(&quarter);
    let expected = Quat::from_axis_angle(&Vec3::UNIT_Z, PI);
    let a = half.to_array();
    let b = expected.to_array();
    for i in 0..4 {
        approx_eq(a[i], b[i]);
    }
}
