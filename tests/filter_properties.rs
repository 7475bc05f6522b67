use mahony_ahrs::{Gains, Mahony, SensorSample};
use nalgebra::{UnitQuaternion, Vector3};
use rand::prelude::*;
use rand_pcg::Pcg64;

const EPSILON: f64 = 1e-6;

fn quaternion_norm(q: &UnitQuaternion<f64>) -> f64 {
    (q.w * q.w + q.i * q.i + q.j * q.j + q.k * q.k).sqrt()
}

/// The estimate must stay unit-norm through a long noisy sample stream.
#[test]
fn test_unit_norm_invariant_under_noisy_stream() {
    let mut rng = Pcg64::seed_from_u64(42);
    let mut ahrs = Mahony::with_gains(Gains::new(1.0, 0.1));

    for _ in 0..2000 {
        let sample = SensorSample::new(
            Vector3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            ),
            Vector3::new(
                rng.random_range(-0.05..0.05),
                rng.random_range(-0.05..0.05),
                1.0 + rng.random_range(-0.05..0.05),
            ),
            Vector3::new(
                21.0 + rng.random_range(-2.0..2.0),
                rng.random_range(-2.0..2.0),
                -28.0 + rng.random_range(-2.0..2.0),
            ),
            0.01,
        );

        let quaternion = ahrs.update(&sample).unwrap();
        assert!(
            (quaternion_norm(&quaternion) - 1.0).abs() < EPSILON,
            "norm invariant violated: {}",
            quaternion_norm(&quaternion)
        );
    }
}

/// Measurements consistent with the identity orientation keep the estimate
/// at the fixed point.
#[test]
fn test_steady_state_fixed_point() {
    let mut ahrs = Mahony::new();
    let sample = SensorSample::new(
        Vector3::zeros(),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 0.0, 0.0),
        0.02,
    );

    let mut previous = ahrs.quaternion();
    for _ in 0..300 {
        let quaternion = ahrs.update(&sample).unwrap();
        assert!((quaternion_norm(&quaternion) - 1.0).abs() < EPSILON);
        assert!(quaternion.angle_to(&previous) < 1e-12);
        previous = quaternion;
    }

    assert!(ahrs.quaternion().angle_to(&UnitQuaternion::identity()) < 1e-12);
}

/// A perturbed estimate fed measurements consistent with identity converges
/// back, with successive quaternion differences shrinking past the initial
/// transient.
#[test]
fn test_convergence_from_perturbed_start() {
    let mut ahrs = Mahony::new();
    ahrs.set_quaternion(UnitQuaternion::from_euler_angles(0.25, -0.15, 0.3));

    let sample = SensorSample::new(
        Vector3::zeros(),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 0.0, 0.0),
        0.02,
    );

    let mut diffs = Vec::new();
    let mut previous = ahrs.quaternion();
    for _ in 0..1000 {
        let quaternion = ahrs.update(&sample).unwrap();
        diffs.push((quaternion.as_ref() - previous.as_ref()).norm());
        previous = quaternion;
    }

    assert!(diffs[100] < diffs[10], "correction should decay");
    assert!(diffs[400] < diffs[100], "correction should keep decaying");
    assert!(
        ahrs.quaternion().angle_to(&UnitQuaternion::identity()) < 1e-3,
        "estimate should converge to identity, residual angle {}",
        ahrs.quaternion().angle_to(&UnitQuaternion::identity())
    );
}

/// With reference measurements exactly consistent with the estimate, one
/// update is a pure gyro rotation by ‖ω‖·dt about ω.
#[test]
fn test_pure_gyro_consistency() {
    let mut ahrs = Mahony::new();
    let gyroscope = Vector3::new(0.5, -0.3, 0.2);
    let delta_time = 0.01;

    let sample = SensorSample::new(
        gyroscope,
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 0.0, 0.0),
        delta_time,
    );

    let prior = ahrs.quaternion();
    let actual = ahrs.update(&sample).unwrap();
    let expected = prior * UnitQuaternion::from_scaled_axis(gyroscope * delta_time);

    assert!(
        actual.angle_to(&expected) < EPSILON,
        "first-order step deviates from the exact rotation by {}",
        actual.angle_to(&expected)
    );
}

/// dt == 0 is legal: the error terms still evaluate, but no rotation delta
/// may be applied.
#[test]
fn test_zero_delta_time_applies_no_rotation() {
    let mut ahrs = Mahony::with_gains(Gains::new(2.0, 0.2));
    ahrs.set_quaternion(UnitQuaternion::from_euler_angles(0.1, 0.2, -0.3));
    let before = ahrs.quaternion();

    // Deliberately inconsistent readings: the error vector is large, but
    // scaled by dt = 0 it must contribute nothing.
    let sample = SensorSample::new(
        Vector3::new(1.0, -2.0, 0.5),
        Vector3::new(0.7, 0.1, 0.7),
        Vector3::new(5.0, 20.0, -10.0),
        0.0,
    );

    let quaternion = ahrs.update(&sample).unwrap();
    assert!(quaternion.angle_to(&before) < 1e-12);
}

/// Identical gains and identical sample sequences produce identical
/// trajectories.
#[test]
fn test_deterministic_trajectories() {
    let gains = Gains::new(1.0, 0.05);
    let mut first = Mahony::with_gains(gains);
    let mut second = Mahony::with_gains(gains);

    for i in 0..500 {
        let t = i as f64;
        let sample = SensorSample::new(
            Vector3::new(
                0.3 * (0.05 * t).sin(),
                0.2 * (0.03 * t).cos(),
                -0.1 * (0.02 * t).sin(),
            ),
            Vector3::new(0.05 * (0.01 * t).sin(), -0.03 * (0.02 * t).cos(), 1.0),
            Vector3::new(21.0 + 0.5 * (0.01 * t).sin(), 0.3 * (0.04 * t).cos(), -28.0),
            0.01,
        );

        let a = first.update(&sample).unwrap();
        let b = second.update(&sample).unwrap();
        assert_eq!(a, b);
    }

    assert_eq!(first.quaternion(), second.quaternion());
    assert_eq!(first.integral_feedback(), second.integral_feedback());
}
