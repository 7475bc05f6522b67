//! Mahony orientation filter implementation

use nalgebra::{Quaternion, UnitQuaternion, Vector3};

use crate::math::Vector3Ext;
use crate::types::{AhrsError, Gains, SensorSample};

/// Mahony AHRS orientation filter
///
/// Owns the quaternion estimate and the integral feedback accumulator and
/// exposes a single [`update`](Mahony::update) operation per sampling
/// cycle. The filter performs no I/O and never blocks; given the same state
/// and the same sample it always produces the same estimate. One instance
/// tracks one rigid body; sharing an instance across threads requires
/// external serialization around `update`.
pub struct Mahony {
    /// Construction-time gain configuration
    gains: Gains,
    /// Doubled proportional gain, the working constant of the error term
    two_kp: f64,
    /// Doubled integral gain
    two_ki: f64,
    /// Current orientation estimate (WXYZ format)
    quaternion: UnitQuaternion<f64>,
    /// Accumulated integral correction of the angular rates
    integral_feedback: Vector3<f64>,
}

impl Mahony {
    /// Create a new filter with default gains
    pub fn new() -> Self {
        Self::with_gains(Gains::default())
    }

    /// Create a new filter with the specified gains
    pub fn with_gains(gains: Gains) -> Self {
        Self {
            gains,
            two_kp: 2.0 * gains.proportional,
            two_ki: 2.0 * gains.integral,
            quaternion: UnitQuaternion::identity(),
            integral_feedback: Vector3::zeros(),
        }
    }

    /// Update the orientation estimate with one cycle of sensor readings
    ///
    /// Normalizes the accelerometer and magnetometer readings, reconstructs
    /// the expected gravity and Earth-field directions from the current
    /// quaternion, and corrects the gyroscope rates with the
    /// proportional-integral feedback of the cross-product error before
    /// integrating the quaternion (first-order, so callers should keep
    /// `delta_time` in the tens-of-milliseconds range).
    ///
    /// A zero-magnitude accelerometer or magnetometer reading (the latter
    /// is the "magnetometer not ready" convention) carries no direction:
    /// the call is a no-op that leaves all state untouched and returns the
    /// previous estimate.
    ///
    /// # Errors
    ///
    /// [`AhrsError::DegenerateQuaternion`] if renormalization after
    /// integration yields a zero or non-finite norm. This cannot happen for
    /// well-formed readings; when it does, the state is left unchanged.
    pub fn update(&mut self, sample: &SensorSample) -> Result<UnitQuaternion<f64>, AhrsError> {
        if sample.accelerometer.magnitude() == 0.0 || sample.magnetometer.magnitude() == 0.0 {
            return Ok(self.quaternion);
        }

        let accelerometer = sample.accelerometer.safe_normalize();
        let magnetometer = sample.magnetometer.safe_normalize();

        // Model-predicted gravity and field directions in the body frame,
        // recomputed from the current quaternion on every cycle.
        let gravity = self.reference_gravity();
        let field = self.reference_field(&magnetometer);

        // Zero exactly when the estimate agrees with both measurements.
        let error = accelerometer.cross(&gravity) + magnetometer.cross(&field);

        let mut rates = sample.gyroscope;
        if self.two_ki > 0.0 {
            self.integral_feedback += error * (self.two_ki * sample.delta_time);
            rates += self.integral_feedback;
        } else {
            self.integral_feedback = Vector3::zeros();
        }
        rates += error * self.two_kp;

        self.quaternion = self.integrate(rates, sample.delta_time)?;
        Ok(self.quaternion)
    }

    /// Get the current orientation quaternion
    pub fn quaternion(&self) -> UnitQuaternion<f64> {
        self.quaternion
    }

    /// Set the orientation quaternion directly
    pub fn set_quaternion(&mut self, quaternion: UnitQuaternion<f64>) {
        self.quaternion = quaternion;
    }

    /// Get the accumulated integral feedback (rad/s)
    pub fn integral_feedback(&self) -> Vector3<f64> {
        self.integral_feedback
    }

    /// Get the gain configuration
    pub fn gains(&self) -> Gains {
        self.gains
    }

    /// Get the model-predicted gravity direction in the body frame
    pub fn gravity(&self) -> Vector3<f64> {
        self.reference_gravity()
    }

    /// Return to the identity orientation and clear the integral feedback
    pub fn reset(&mut self) {
        self.quaternion = UnitQuaternion::identity();
        self.integral_feedback = Vector3::zeros();
    }

    /// Gravity direction the current quaternion predicts in the body frame
    fn reference_gravity(&self) -> Vector3<f64> {
        let q = self.quaternion.as_ref();
        let (qw, qx, qy, qz) = (q.w, q.i, q.j, q.k);

        Vector3::new(
            2.0 * (qx * qz - qw * qy),
            2.0 * (qw * qx + qy * qz),
            qw * qw - qx * qx - qy * qy + qz * qz,
        )
    }

    /// Earth-field direction the current quaternion predicts in the body
    /// frame
    ///
    /// Rotates the measured field into the Earth frame, collapses it to its
    /// horizontal magnitude `bx` and vertical component `bz` (the Earth
    /// field has no east/west component by definition of heading), and
    /// rotates that reference back.
    fn reference_field(&self, magnetometer: &Vector3<f64>) -> Vector3<f64> {
        let q = self.quaternion.as_ref();
        let (qw, qx, qy, qz) = (q.w, q.i, q.j, q.k);
        let (mx, my, mz) = (magnetometer.x, magnetometer.y, magnetometer.z);

        let hx = 2.0
            * (mx * (0.5 - qy * qy - qz * qz) + my * (qx * qy - qw * qz) + mz * (qx * qz + qw * qy));
        let hy = 2.0
            * (mx * (qx * qy + qw * qz) + my * (0.5 - qx * qx - qz * qz) + mz * (qy * qz - qw * qx));
        let bx = (hx * hx + hy * hy).sqrt();
        let bz = 2.0
            * (mx * (qx * qz - qw * qy) + my * (qy * qz + qw * qx) + mz * (0.5 - qx * qx - qy * qy));

        Vector3::new(
            2.0 * (bx * (0.5 - qy * qy - qz * qz) + bz * (qx * qz - qw * qy)),
            2.0 * (bx * (qx * qy - qw * qz) + bz * (qw * qx + qy * qz)),
            2.0 * (bx * (qw * qy + qx * qz) + bz * (0.5 - qx * qx - qy * qy)),
        )
    }

    /// Integrate the corrected angular rates into the quaternion
    fn integrate(
        &self,
        rates: Vector3<f64>,
        delta_time: f64,
    ) -> Result<UnitQuaternion<f64>, AhrsError> {
        // First-order step: q' = q + q * (0, ω · dt / 2)
        let half_rates = rates * (0.5 * delta_time);
        let derivative = self.quaternion.as_ref() * Quaternion::from_parts(0.0, half_rates);
        let integrated = self.quaternion.as_ref() + derivative;

        let norm = integrated.norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(AhrsError::DegenerateQuaternion);
        }

        Ok(UnitQuaternion::new_normalize(integrated))
    }
}

impl Default for Mahony {
    fn default() -> Self {
        Self::new()
    }
}
