//! Sensor replay demonstration
//!
//! Replays a recorded sensor capture through the filter, printing Euler
//! angles and tilt-compensated heading, and renders the Euler-angle
//! trajectory to `euler_angles.png`.
//!
//! Run with: `cargo run --example advanced`

use mahony_ahrs::{Gains, Mahony, QuaternionExt, SensorSample, compass};
use nalgebra::Vector3;
use plotters::prelude::*;
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct SensorData {
    #[serde(rename = "Time (s)")]
    time: f64,
    #[serde(rename = "Gyroscope X (rad/s)")]
    gyro_x: f64,
    #[serde(rename = "Gyroscope Y (rad/s)")]
    gyro_y: f64,
    #[serde(rename = "Gyroscope Z (rad/s)")]
    gyro_z: f64,
    #[serde(rename = "Accelerometer X (g)")]
    accel_x: f64,
    #[serde(rename = "Accelerometer Y (g)")]
    accel_y: f64,
    #[serde(rename = "Accelerometer Z (g)")]
    accel_z: f64,
    #[serde(rename = "Magnetometer X (uT)")]
    mag_x: f64,
    #[serde(rename = "Magnetometer Y (uT)")]
    mag_y: f64,
    #[serde(rename = "Magnetometer Z (uT)")]
    mag_z: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Load sensor data from CSV
    let mut reader = csv::Reader::from_path("testdata/sensor_data.csv")?;
    let mut sensor_data = Vec::new();

    for result in reader.deserialize() {
        let record: SensorData = result?;
        sensor_data.push(record);
    }

    let mut ahrs = Mahony::with_gains(Gains::new(0.5, 0.05));

    println!("Processing {} sensor samples...", sensor_data.len());

    let mut euler_angles = Vec::new();
    let mut previous_time = 0.0;

    for data in &sensor_data {
        let delta_time = data.time - previous_time;
        previous_time = data.time;

        let accelerometer = Vector3::new(data.accel_x, data.accel_y, data.accel_z);
        let magnetometer = Vector3::new(data.mag_x, data.mag_y, data.mag_z);

        let sample = SensorSample::new(
            Vector3::new(data.gyro_x, data.gyro_y, data.gyro_z),
            accelerometer,
            magnetometer,
            delta_time,
        );
        let quaternion = ahrs.update(&sample)?;

        let euler = quaternion.to_euler_degrees();
        euler_angles.push((data.time, euler));

        if magnetometer == Vector3::zeros() {
            println!("t={:.2}s magnetometer not ready, estimate held", data.time);
        } else {
            println!(
                "t={:.2}s roll={:.2}° pitch={:.2}° yaw={:.2}° heading={:.1}°",
                data.time,
                euler.x,
                euler.y,
                euler.z,
                compass::heading(accelerometer, magnetometer)
            );
        }
    }

    plot_euler_angles(&euler_angles)?;
    println!("✓ Euler angle plot saved to euler_angles.png");
    Ok(())
}

/// Render roll/pitch/yaw trajectories to a PNG chart
fn plot_euler_angles(euler_angles: &[(f64, Vector3<f64>)]) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new("euler_angles.png", (800, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let end_time = euler_angles.last().map(|(t, _)| *t).unwrap_or(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Euler Angles", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..end_time, -180f64..180f64)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Degrees")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            euler_angles.iter().map(|(t, e)| (*t, e.x)),
            &RED,
        ))?
        .label("Roll")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], RED));

    chart
        .draw_series(LineSeries::new(
            euler_angles.iter().map(|(t, e)| (*t, e.y)),
            &GREEN,
        ))?
        .label("Pitch")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], GREEN));

    chart
        .draw_series(LineSeries::new(
            euler_angles.iter().map(|(t, e)| (*t, e.z)),
            &BLUE,
        ))?
        .label("Yaw")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLUE));

    chart.configure_series_labels().draw()?;
    root.present()?;
    Ok(())
}
