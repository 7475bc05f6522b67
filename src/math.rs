//! Mathematical utilities and nalgebra extensions

use nalgebra::{UnitQuaternion, Vector3};

/// Mathematical constants
pub const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// Extension trait for Vector3 operations
pub trait Vector3Ext {
    /// Calculate the magnitude of the vector
    fn magnitude(&self) -> f64;

    /// Scale the vector to unit length.
    ///
    /// A zero-magnitude vector has no direction to preserve, so it is
    /// returned unchanged rather than turned into a fabricated unit vector.
    /// Callers that cannot tolerate a non-unit result must check the
    /// magnitude first.
    fn safe_normalize(&self) -> Vector3<f64>;

    /// Convert degrees to radians
    fn deg_to_rad(&self) -> Vector3<f64>;

    /// Convert radians to degrees
    fn rad_to_deg(&self) -> Vector3<f64>;
}

impl Vector3Ext for Vector3<f64> {
    fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    fn safe_normalize(&self) -> Vector3<f64> {
        let mag = self.magnitude();
        if mag > 0.0 { *self / mag } else { *self }
    }

    fn deg_to_rad(&self) -> Vector3<f64> {
        *self * DEG_TO_RAD
    }

    fn rad_to_deg(&self) -> Vector3<f64> {
        *self * RAD_TO_DEG
    }
}

/// Extension trait for UnitQuaternion operations
pub trait QuaternionExt {
    /// Convert quaternion to Euler angles (roll, pitch, yaw) in radians
    fn to_euler(&self) -> Vector3<f64>;

    /// Convert quaternion to Euler angles in degrees
    fn to_euler_degrees(&self) -> Vector3<f64>;

    /// Create quaternion from Euler angles in radians
    fn from_euler(roll: f64, pitch: f64, yaw: f64) -> UnitQuaternion<f64>;

    /// Create quaternion from Euler angles in degrees
    fn from_euler_degrees(roll: f64, pitch: f64, yaw: f64) -> UnitQuaternion<f64>;
}

impl QuaternionExt for UnitQuaternion<f64> {
    fn to_euler(&self) -> Vector3<f64> {
        let (roll, pitch, yaw) = self.euler_angles();
        Vector3::new(roll, pitch, yaw)
    }

    fn to_euler_degrees(&self) -> Vector3<f64> {
        self.to_euler().rad_to_deg()
    }

    fn from_euler(roll: f64, pitch: f64, yaw: f64) -> UnitQuaternion<f64> {
        UnitQuaternion::from_euler_angles(roll, pitch, yaw)
    }

    fn from_euler_degrees(roll: f64, pitch: f64, yaw: f64) -> UnitQuaternion<f64> {
        let euler_rad = Vector3::new(roll, pitch, yaw).deg_to_rad();
        Self::from_euler(euler_rad.x, euler_rad.y, euler_rad.z)
    }
}
