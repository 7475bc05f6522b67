//! Tilt-compensated magnetic heading

use crate::math::{RAD_TO_DEG, Vector3Ext};
use nalgebra::Vector3;

/// Calculate the tilt-compensated magnetic heading
///
/// Uses accelerometer and magnetometer readings to compute a heading angle
/// that is independent of device tilt, in the filter's body frame
/// convention (x north, y west, z up). Cross products construct orthogonal
/// horizontal reference vectors; the heading is their atan2.
///
/// Readings need not be unit length. Degenerate inputs (zero vectors, or
/// accelerometer parallel to magnetometer) yield 0.
///
/// # Arguments
/// * `accelerometer` - Accelerometer reading (gravity vector)
/// * `magnetometer` - Magnetometer reading
///
/// # Returns
/// Heading angle in degrees (range: -180° to +180°, 0° = North)
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use mahony_ahrs::compass::heading;
///
/// let accel = Vector3::new(0.0, 0.0, 1.0); // level device
/// let mag = Vector3::new(21.0, 0.0, -28.0); // pointing North
/// assert!(heading(accel, mag).abs() < 1.0);
/// ```
pub fn heading(accelerometer: Vector3<f64>, magnetometer: Vector3<f64>) -> f64 {
    let west = accelerometer.cross(&magnetometer).safe_normalize();
    let north = west.cross(&accelerometer).safe_normalize();

    west.x.atan2(north.x) * RAD_TO_DEG
}
