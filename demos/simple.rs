use mahony_ahrs::{Mahony, SensorSample};
use nalgebra::Vector3;

const SAMPLE_PERIOD: f64 = 0.05; // 50 ms polling cadence

fn main() {
    let mut ahrs = Mahony::new();

    for _ in 0..10 {
        // this loop should repeat each time new sensor data is available
        let gyroscope = Vector3::new(0.0, 0.0, 0.0); // replace with actual gyroscope data in rad/s
        let accelerometer = Vector3::new(0.0, 0.0, 1.0); // replace with actual accelerometer data in g
        let magnetometer = Vector3::new(21.0, 0.0, -28.0); // replace with actual magnetometer data in µT

        let sample = SensorSample::new(gyroscope, accelerometer, magnetometer, SAMPLE_PERIOD);
        let quaternion = ahrs.update(&sample).expect("well-formed readings");

        println!(
            "Quat: w={:.3}, x={:.3}, y={:.3}, z={:.3}",
            quaternion.w, quaternion.i, quaternion.j, quaternion.k
        );
    }
}
