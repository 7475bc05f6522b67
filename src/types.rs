//! Configuration, sample, and error types for the Mahony AHRS filter

use nalgebra::Vector3;

/// Filter gain configuration
///
/// Holds the conventional Mahony proportional (Kp) and integral (Ki) gains.
/// The cross-product form of the orientation error carries an implicit
/// factor of two, so the filter derives doubled working constants (2·Kp,
/// 2·Ki) at construction. That doubling is an internal representation
/// detail: supply the gain values as published for the Mahony algorithm,
/// undoubled.
///
/// Both gains must be non-negative. A zero integral gain disables bias
/// accumulation entirely; the filter clears its integral feedback on every
/// update rather than carrying stale state across gain configurations.
///
/// # Example
/// ```
/// use mahony_ahrs::{Gains, Mahony};
///
/// let ahrs = Mahony::with_gains(Gains::new(2.0, 0.1));
/// assert_eq!(ahrs.gains().proportional, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gains {
    /// Proportional gain Kp controlling how strongly accelerometer and
    /// magnetometer evidence pulls the estimate (typically 0.5)
    ///
    /// Higher values track the reference sensors faster but pass more of
    /// their noise into the orientation estimate.
    pub proportional: f64,
    /// Integral gain Ki controlling gyroscope bias compensation
    /// (typically 0.0 to 0.5)
    ///
    /// Zero disables the integral term; the accumulator is then reset to
    /// zero on every update.
    pub integral: f64,
}

impl Gains {
    /// Create a gain configuration from conventional Mahony gain values.
    ///
    /// Both values must be non-negative.
    pub fn new(proportional: f64, integral: f64) -> Self {
        debug_assert!(proportional >= 0.0, "proportional gain must be non-negative");
        debug_assert!(integral >= 0.0, "integral gain must be non-negative");

        Self {
            proportional,
            integral,
        }
    }
}

impl Default for Gains {
    fn default() -> Self {
        Self {
            proportional: 0.5,
            integral: 0.0,
        }
    }
}

/// One cycle of sensor readings with its time step
///
/// Unit conversion from raw counts to physical units is the sensor
/// source's responsibility; the filter only sees well-formed numeric
/// values.
///
/// # Example
/// ```
/// use mahony_ahrs::SensorSample;
/// use nalgebra::Vector3;
///
/// // Magnetometer not ready this cycle: signalled by the zero vector.
/// let sample = SensorSample::new(
///     Vector3::new(0.01, 0.0, 0.0),
///     Vector3::new(0.0, 0.0, 1.0),
///     Vector3::zeros(),
///     0.02,
/// );
/// assert_eq!(sample.magnetometer, Vector3::zeros());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSample {
    /// Angular rates in radians per second
    pub gyroscope: Vector3<f64>,
    /// Specific force in any consistent unit (e.g. g)
    ///
    /// A zero vector is treated as a degenerate reading and skips the
    /// update.
    pub accelerometer: Vector3<f64>,
    /// Magnetic field in any consistent unit (e.g. µT)
    ///
    /// A zero vector means "magnetometer data not available this cycle"
    /// and skips the update.
    pub magnetometer: Vector3<f64>,
    /// Seconds elapsed since the previous sample, from a monotonic clock
    ///
    /// Zero is legal and leaves the orientation numerically unchanged.
    pub delta_time: f64,
}

impl SensorSample {
    /// Bundle one cycle of readings with its time step.
    pub fn new(
        gyroscope: Vector3<f64>,
        accelerometer: Vector3<f64>,
        magnetometer: Vector3<f64>,
        delta_time: f64,
    ) -> Self {
        Self {
            gyroscope,
            accelerometer,
            magnetometer,
            delta_time,
        }
    }
}

/// Errors reported by the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AhrsError {
    /// Renormalization after quaternion integration produced a zero or
    /// non-finite norm
    ///
    /// This cannot occur for well-formed sensor values and indicates a
    /// numeric fault upstream (e.g. non-finite rates). The filter state is
    /// left unchanged so the failure cannot corrupt later updates.
    DegenerateQuaternion,
}

impl core::fmt::Display for AhrsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AhrsError::DegenerateQuaternion => {
                write!(f, "quaternion renormalization produced a degenerate norm")
            }
        }
    }
}

impl core::error::Error for AhrsError {}
