//! Pure trajectory math: period, position, velocity and path sampling.
//!
//! Every function here is a deterministic transform of its explicit inputs.
//! Nothing blocks, allocates shared state or fails; parameter validation is
//! the job of [`super::validation`] and happens before these are called.

use super::elements::OrbitalElements;
use crate::common::vec3d::Vec3D;
use std::f64::consts::TAU;

/// Mean radius of the Earth in km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Earth's standard gravitational parameter in km³/s².
pub const MU_EARTH: f64 = 398_600.441_8;
/// Radius the Earth is rendered at in scene units.
pub const RENDER_EARTH_RADIUS: f64 = 5.0;
/// Uniform km -> scene-unit conversion factor.
pub const RENDER_SCALE: f64 = RENDER_EARTH_RADIUS / EARTH_RADIUS_KM;

/// A point in the scaled rendering coordinate system.
pub type Position = Vec3D<f64>;
/// A velocity vector in the scaled rendering coordinate system.
pub type Velocity = Vec3D<f64>;

/// Computes the orbital period for a circular orbit at the given altitude.
///
/// Uses `2π·sqrt((R+h)³/μ)`. Always computable for any altitude above
/// `-EARTH_RADIUS_KM`; the supported domain (150 km to 35786 km) is gated
/// upstream by [`super::validation::validate`].
///
/// # Arguments
/// * `altitude` - Height above the Earth's surface in km.
///
/// # Returns
/// The orbital period in minutes.
pub fn period_minutes(altitude: f64) -> f64 {
    let semi_major_axis = EARTH_RADIUS_KM + altitude;
    let period_seconds = TAU * (semi_major_axis.powi(3) / MU_EARTH).sqrt();
    period_seconds / 60.0
}

/// Computes the satellite position at `time_seconds` after epoch.
///
/// The true anomaly uses the first-order eccentricity correction
/// `M + 2e·sin(M)` instead of an iterative Kepler solve, and the orbital
/// radius is treated as circular; eccentricity only shifts the anomaly.
/// Both are deliberate accuracy-for-simplicity trades the rendering client
/// depends on.
///
/// # Arguments
/// * `elements` - The orbital elements to evaluate.
/// * `period_min` - The orbital period in minutes.
/// * `time_seconds` - Time offset from epoch in seconds.
///
/// # Returns
/// The position in scaled scene coordinates.
pub fn position(elements: &OrbitalElements, period_min: f64, time_seconds: f64) -> Position {
    let radius = EARTH_RADIUS_KM + elements.altitude();
    let mean_motion = TAU / (period_min * 60.0);
    let mean_anomaly = (mean_motion * time_seconds).rem_euclid(TAU);
    let true_anomaly = mean_anomaly + 2.0 * elements.eccentricity() * mean_anomaly.sin();

    // Position in the orbital plane, then rotate by inclination about x.
    let x = radius * true_anomaly.cos();
    let y = radius * true_anomaly.sin();
    let inclination_rad = elements.inclination().to_radians();
    let z = y * inclination_rad.sin();
    let y_inclined = y * inclination_rad.cos();

    Vec3D::new(x, y_inclined, z) * RENDER_SCALE
}

/// Computes the satellite velocity vector at `time_seconds` after epoch.
///
/// The speed is the circular-orbit speed `sqrt(μ/(R+h))`, ignoring the
/// eccentricity effect on speed. Unlike [`position`], the inclination rotation
/// is not applied here; the vector stays in the equatorial plane. That
/// asymmetry is inherited rendering behavior and kept on purpose.
///
/// # Arguments
/// * `elements` - The orbital elements to evaluate.
/// * `period_min` - The orbital period in minutes.
/// * `time_seconds` - Time offset from epoch in seconds.
///
/// # Returns
/// The velocity in scaled scene coordinates.
pub fn velocity(elements: &OrbitalElements, period_min: f64, time_seconds: f64) -> Velocity {
    let radius = EARTH_RADIUS_KM + elements.altitude();
    let orbital_speed = (MU_EARTH / radius).sqrt();
    let angular_velocity = TAU / (period_min * 60.0);
    let angle = (angular_velocity * time_seconds).rem_euclid(TAU);

    Vec3D::new(
        -orbital_speed * angle.sin() * RENDER_SCALE,
        orbital_speed * angle.cos() * RENDER_SCALE,
        0.0,
    )
}

/// Samples one full revolution of the orbit for path rendering.
///
/// Produces exactly `samples` positions at uniform time steps of
/// `period·60/samples` seconds starting at t = 0, so the first point equals
/// `position(elements, period_min, 0.0)`.
///
/// # Arguments
/// * `elements` - The orbital elements to evaluate.
/// * `period_min` - The orbital period in minutes.
/// * `samples` - Number of path points, bounded to a sane value by the caller.
///
/// # Returns
/// An ordered `Vec` of `samples` positions along the closed orbit.
#[allow(clippy::cast_precision_loss)]
pub fn orbit_path(elements: &OrbitalElements, period_min: f64, samples: usize) -> Vec<Position> {
    let time_step = period_min * 60.0 / samples as f64;
    (0..samples).map(|i| position(elements, period_min, i as f64 * time_step)).collect()
}
