#![no_std]

//! Mahony AHRS - attitude and heading estimation via complementary filtering
//!
//! This library estimates a rigid body's 3D orientation as a unit
//! quaternion by fusing gyroscope, accelerometer, and magnetometer
//! readings with the Mahony proportional-integral correction scheme. It
//! targets embedded attitude/heading reference use (drones, robotics,
//! handheld IMUs) where a lightweight, numerically-stable, single-pass
//! estimator is wanted instead of a full Kalman filter.
//!
//! # Features
//!
//! - Complementary filter with proportional-integral drift correction
//! - Double-precision arithmetic throughout
//! - Fail-soft handling of degenerate sensor readings (a zero-vector
//!   magnetometer means "not ready this cycle" and skips the update)
//! - Explicit time step per sample, decoupled from any scheduling scheme
//! - Tilt-compensated magnetic heading
//! - `#![no_std]` compatible for embedded systems
//!
//! # Quick Start
//!
//! ```rust
//! use mahony_ahrs::{Mahony, SensorSample};
//! use nalgebra::Vector3;
//!
//! let mut ahrs = Mahony::new();
//!
//! // One cycle of sensor readings, units already applied
//! let sample = SensorSample::new(
//!     Vector3::new(0.0, 0.0, 0.01),   // gyroscope, rad/s
//!     Vector3::new(0.0, 0.0, 1.0),    // accelerometer, g
//!     Vector3::new(21.0, 0.0, -28.0), // magnetometer, µT
//!     0.02,                           // seconds since previous sample
//! );
//!
//! let quaternion = ahrs.update(&sample).expect("well-formed readings");
//!
//! // Convert to Euler angles (roll, pitch, yaw)
//! let (roll, pitch, yaw) = quaternion.euler_angles();
//! ```

pub mod compass;
mod mahony;
mod math;
mod types;

// Re-export all public types and functions
pub use compass::heading;
pub use mahony::Mahony;
pub use math::{DEG_TO_RAD, QuaternionExt, RAD_TO_DEG, Vector3Ext};
pub use types::{AhrsError, Gains, SensorSample};
